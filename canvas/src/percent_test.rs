use super::*;
use crate::geometry::AspectRatio;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[test]
fn default_image_on_3x4_matches_expected_percentages() {
    let canvas = CanvasSpace::for_aspect(AspectRatio::Portrait3x4);
    let pct = ImagePlaceholder::default().to_percentage(&canvas);
    assert!(approx_eq(round2(pct.x), 38.43));
    assert!(approx_eq(round2(pct.y), 13.89));
    assert!(approx_eq(round2(pct.width), 23.15));
    assert!(approx_eq(round2(pct.height), 17.36));
}

#[test]
fn image_percentage_box_is_not_square_on_portrait_canvas() {
    let canvas = CanvasSpace::for_aspect(AspectRatio::Portrait9x16);
    let pct = ImagePlaceholder::default().to_percentage(&canvas);
    assert!(pct.width > pct.height);
    assert!(approx_eq(pct.width / 100.0 * canvas.width, 250.0));
}

#[test]
fn default_name_on_9x16() {
    let canvas = CanvasSpace::for_aspect(AspectRatio::Portrait9x16);
    let pct = NamePlaceholder::default().to_percentage(&canvas);
    assert!(approx_eq(pct.x, 240.0 / 1080.0 * 100.0));
    assert!(approx_eq(pct.y, 550.0 / 1920.0 * 100.0));
    assert!(approx_eq(pct.width, 600.0 / 1080.0 * 100.0));
    assert!(approx_eq(pct.height, 100.0 / 1920.0 * 100.0));
}

#[test]
fn placeholder_at_far_corner_is_within_hundred() {
    let canvas = CanvasSpace::for_aspect(AspectRatio::Portrait3x4);
    let image = ImagePlaceholder { x: 830.0, y: 1190.0, diameter: 250.0 };
    let pct = image.to_percentage(&canvas);
    assert!(approx_eq(pct.x + pct.width, 100.0));
    assert!(approx_eq(pct.y + pct.height, 100.0));
}

#[test]
fn image_round_trip_reproduces_logical_geometry() {
    for aspect in [AspectRatio::Portrait3x4, AspectRatio::Portrait9x16] {
        let canvas = CanvasSpace::for_aspect(aspect);
        for (x, y, d) in [(0.0, 0.0, 250.0), (415.0, 200.0, 250.0), (830.0, 1190.0, 250.0), (12.345, 678.9, 101.1)] {
            let image = ImagePlaceholder { x, y, diameter: d };
            let back = ImagePlaceholder::from_percentage(&image.to_percentage(&canvas), &canvas);
            assert!(approx_eq(back.x, x));
            assert!(approx_eq(back.y, y));
            assert!(approx_eq(back.diameter, d));
        }
    }
}

#[test]
fn name_round_trip_reproduces_logical_geometry() {
    let canvas = CanvasSpace::for_aspect(AspectRatio::Portrait9x16);
    let name = NamePlaceholder { x: 77.7, y: 1234.5, width: 712.3, height: 100.0 };
    let back = NamePlaceholder::from_percentage(&name.to_percentage(&canvas), &canvas);
    assert!(approx_eq(back.x, name.x));
    assert!(approx_eq(back.y, name.y));
    assert!(approx_eq(back.width, name.width));
    assert!(approx_eq(back.height, name.height));
}

#[test]
fn percentage_serializes_as_plain_fields() {
    let pct = PercentageGeometry { x: 1.5, y: 2.0, width: 3.0, height: 4.0 };
    let json = serde_json::to_value(pct).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": 2.0, "width": 3.0, "height": 4.0 }));
}
