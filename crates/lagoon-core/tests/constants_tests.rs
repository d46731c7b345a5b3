// Host-side tests for constants and their relationships.

use lagoon_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn water_step_is_the_fixed_per_frame_increment() {
    assert!(WATER_PHASE_STEP > 0.0);
    assert_eq!(WATER_PHASE_STEP, 1.0 / 80.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fov_clamps_are_ordered() {
    assert!(FOV_NARROW_WIDTH < FOV_WIDE_WIDTH);
    assert!(FOV_NARROW_DEG > FOV_WIDE_DEG);
    assert!(FOV_WIDE_DEG > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_are_sane() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_stay_in_range() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(BLOB_SETTLE > 0.0 && BLOB_SETTLE < 1.0);
}

#[test]
fn layout_has_five_platforms_and_five_emitters() {
    assert_eq!(BASE_POSITIONS.len(), 5);
    assert_eq!(BLOB_POSITIONS.len(), 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_cap_bounds_gpu_cost() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MAX_PIXEL_RATIO <= 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn marker_sizes_are_positive() {
    assert!(BASE_MARKER_SCALE > 0.0);
    assert!(BLOB_MARKER_SCALE > 0.0);
    assert!(BLOB_BOB_AMPLITUDE > 0.0);
    assert!(BLOB_HOVER_HEIGHT > BASE_HEIGHT);
}
