use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold [`env_guard`] so no other test touches the environment.
unsafe fn clear_studio_env() {
    unsafe {
        std::env::remove_var("STUDIO_MAX_DISPLAY_HEIGHT");
        std::env::remove_var("STUDIO_VIEWPORT_FRACTION");
        std::env::remove_var("STUDIO_MIN_NAME_WIDTH");
        std::env::remove_var("STUDIO_MAX_NAME_WIDTH");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_studio_env() };

    let cfg = from_env().unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_studio_env();
        std::env::set_var("STUDIO_MAX_DISPLAY_HEIGHT", "720");
        std::env::set_var("STUDIO_VIEWPORT_FRACTION", " 0.4 ");
        std::env::set_var("STUDIO_MIN_NAME_WIDTH", "150");
        std::env::set_var("STUDIO_MAX_NAME_WIDTH", "900");
    }

    let cfg = from_env().unwrap();
    assert_eq!(cfg.max_display_height(), 720.0);
    assert_eq!(cfg.viewport_fraction(), 0.4);
    assert_eq!(cfg.name_width().min(), 150.0);
    assert_eq!(cfg.name_width().max(), 900.0);

    unsafe { clear_studio_env() };
}

#[test]
fn from_env_ignores_unparsable_values() {
    let _guard = env_guard();
    unsafe {
        clear_studio_env();
        std::env::set_var("STUDIO_MAX_DISPLAY_HEIGHT", "tall");
    }

    let cfg = from_env().unwrap();
    assert_eq!(cfg.max_display_height(), MAX_DISPLAY_HEIGHT_PX);

    unsafe { clear_studio_env() };
}

#[test]
fn from_env_rejects_inverted_width_range() {
    let _guard = env_guard();
    unsafe {
        clear_studio_env();
        std::env::set_var("STUDIO_MIN_NAME_WIDTH", "900");
        std::env::set_var("STUDIO_MAX_NAME_WIDTH", "300");
    }

    let err = from_env().unwrap_err();
    assert_eq!(err, CanvasError::InvalidWidthRange { min: 900.0, max: 300.0 });

    unsafe { clear_studio_env() };
}

#[test]
fn from_env_rejects_zero_fraction() {
    let _guard = env_guard();
    unsafe {
        clear_studio_env();
        std::env::set_var("STUDIO_VIEWPORT_FRACTION", "0");
    }

    assert!(matches!(from_env(), Err(CanvasError::InvalidDisplayLimits { .. })));

    unsafe { clear_studio_env() };
}
