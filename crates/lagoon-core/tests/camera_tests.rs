// Host-side tests for the viewport-width -> field-of-view map and the camera.

use lagoon_core::camera::{fov_for_width, Camera};
use lagoon_core::constants::{FOV_NARROW_DEG, FOV_WIDE_DEG};

#[test]
fn fov_clamps_at_narrow_widths() {
    for w in [0.0_f32, 120.0, 320.0, 359.9, 360.0] {
        assert_eq!(fov_for_width(w), FOV_NARROW_DEG, "width {w}");
    }
}

#[test]
fn fov_clamps_at_wide_widths() {
    for w in [1920.0_f32, 1921.0, 2560.0, 3840.0] {
        assert_eq!(fov_for_width(w), FOV_WIDE_DEG, "width {w}");
    }
}

#[test]
fn fov_boundary_values_are_exact() {
    assert_eq!(fov_for_width(360.0), 104.0);
    assert_eq!(fov_for_width(1920.0), 45.0);
}

#[test]
fn fov_is_monotonically_non_increasing() {
    let mut prev = fov_for_width(300.0);
    let mut w = 300.0_f32;
    while w <= 2100.0 {
        let f = fov_for_width(w);
        assert!(
            f <= prev + 1e-4,
            "fov increased at width {w}: {prev} -> {f}"
        );
        prev = f;
        w += 1.0;
    }
}

#[test]
fn fov_interior_value_matches_blend_formula() {
    // width 1140: percent = 780 * 100 / 1920 = 40.625,
    // fov = 45 + (59.375 * 59 / 100) = 80.03125
    let f = fov_for_width(1140.0);
    assert!((f - 80.03125).abs() < 1e-3, "got {f}");
}

#[test]
fn camera_viewport_is_stateless() {
    // Jumping straight from the narrow clamp to the wide clamp needs no
    // intermediate resize; the result depends only on the final size.
    let mut camera = Camera::new(1280.0, 720.0);
    camera.set_viewport(360.0, 640.0);
    assert_eq!(camera.fov_deg, 104.0);
    camera.set_viewport(1920.0, 1080.0);
    assert_eq!(camera.fov_deg, 45.0);
    assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn camera_matrices_are_finite() {
    let camera = Camera::new(1280.0, 720.0);
    for m in [camera.projection_matrix(), camera.view_matrix(), camera.view_proj()] {
        for v in m.to_cols_array() {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn camera_aspect_guards_against_zero_height() {
    let mut camera = Camera::new(1280.0, 720.0);
    camera.set_viewport(1280.0, 0.0);
    assert!(camera.aspect.is_finite());
}
