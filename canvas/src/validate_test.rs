use super::*;
use crate::geometry::AspectRatio;

fn ready_inputs() -> TemplateInputs {
    TemplateInputs {
        background: Some(vec![0x89, 0x50, 0x4e, 0x47]),
        occasions: vec!["Birthday".into()],
        languages: vec!["Tamil".into()],
        label: "Priya".into(),
        ..TemplateInputs::default()
    }
}

fn short() -> CanvasSpace {
    CanvasSpace::for_aspect(AspectRatio::Portrait3x4)
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn background_requires_non_empty_bytes() {
    let mut inputs = ready_inputs();
    assert!(has_background_image(&inputs));
    inputs.background = Some(Vec::new());
    assert!(!has_background_image(&inputs));
    inputs.background = None;
    assert!(!has_background_image(&inputs));
}

#[test]
fn tag_selection_needs_both_categories() {
    let some = vec!["x".to_string()];
    assert!(has_required_tag_selections(&some, &some));
    assert!(!has_required_tag_selections(&some, &[]));
    assert!(!has_required_tag_selections(&[], &some));
}

#[test]
fn text_input_rejects_whitespace() {
    assert!(has_required_text_input("Ravi"));
    assert!(!has_required_text_input("   \t"));
    assert!(!has_required_text_input(""));
}

#[test]
fn image_bounds_edges_are_inclusive() {
    let canvas = short();
    assert!(image_in_bounds(&ImagePlaceholder { x: 830.0, y: 1190.0, diameter: 250.0 }, &canvas));
    assert!(image_in_bounds(&ImagePlaceholder { x: 0.0, y: 0.0, diameter: 250.0 }, &canvas));
    assert!(!image_in_bounds(&ImagePlaceholder { x: 830.5, y: 0.0, diameter: 250.0 }, &canvas));
    assert!(!image_in_bounds(&ImagePlaceholder { x: -0.1, y: 0.0, diameter: 250.0 }, &canvas));
}

#[test]
fn name_bounds_use_active_canvas_height() {
    let name = NamePlaceholder { x: 240.0, y: 1500.0, width: 600.0, height: 100.0 };
    assert!(!name_in_bounds(&name, &short()));
    assert!(name_in_bounds(&name, &CanvasSpace::for_aspect(AspectRatio::Portrait9x16)));
}

// =============================================================
// Workflow step
// =============================================================

#[test]
fn workflow_step_progression() {
    let mut inputs = TemplateInputs::default();
    assert_eq!(workflow_step(&inputs), 1);
    inputs.background = Some(vec![1]);
    assert_eq!(workflow_step(&inputs), 2);
    inputs.occasions.push("Diwali".into());
    assert_eq!(workflow_step(&inputs), 2);
    inputs.languages.push("Hindi".into());
    assert_eq!(workflow_step(&inputs), 3);
}

// =============================================================
// Checklist
// =============================================================

#[test]
fn checklist_all_met_for_ready_session() {
    let list = ExportChecklist::evaluate(&ready_inputs(), &PlaceholderSnapshot::default(), &short());
    assert!(list.all_met());
    assert!(list.failing().is_empty());
    assert_eq!(list.iter().count(), Requirement::ALL.len());
}

#[test]
fn checklist_reports_every_failure_in_order() {
    let snapshot = PlaceholderSnapshot {
        image: ImagePlaceholder { x: 900.0, y: 0.0, diameter: 250.0 },
        ..PlaceholderSnapshot::default()
    };
    let list = ExportChecklist::evaluate(&TemplateInputs::default(), &snapshot, &short());
    assert!(!list.all_met());
    assert_eq!(
        list.failing(),
        vec![
            Requirement::BackgroundImage,
            Requirement::OccasionTags,
            Requirement::LanguageTags,
            Requirement::TextLabel,
            Requirement::ImageInBounds,
        ]
    );
}

#[test]
fn requirement_labels_are_distinct() {
    for (i, a) in Requirement::ALL.iter().enumerate() {
        for b in &Requirement::ALL[i + 1..] {
            assert_ne!(a.label(), b.label());
        }
    }
}
