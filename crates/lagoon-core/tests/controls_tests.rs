// Host-side tests for the damped orbit controls.

use glam::Vec3;
use lagoon_core::constants::ORBIT_TARGET;
use lagoon_core::{Camera, OrbitControls};

fn make_pair() -> (Camera, OrbitControls) {
    let camera = Camera::new(1280.0, 720.0);
    let controls = OrbitControls::new(&camera, Vec3::from(ORBIT_TARGET));
    (camera, controls)
}

#[test]
fn controls_start_disabled() {
    let (_, controls) = make_pair();
    assert!(!controls.enabled());
}

#[test]
fn update_without_input_keeps_the_eye_in_place() {
    let (mut camera, mut controls) = make_pair();
    let before = camera.eye;
    for _ in 0..10 {
        controls.update(&mut camera);
    }
    // spherical round-trip tolerance at this orbit radius
    assert!((camera.eye - before).length() < 0.5, "eye drifted to {:?}", camera.eye);
}

#[test]
fn rotation_is_ignored_while_disabled() {
    let (mut camera, mut controls) = make_pair();
    let before = camera.eye;
    controls.rotate(0.8, 0.3);
    for _ in 0..10 {
        controls.update(&mut camera);
    }
    assert!((camera.eye - before).length() < 0.5);
}

#[test]
fn rotation_moves_the_eye_once_enabled() {
    let (mut camera, mut controls) = make_pair();
    let before = camera.eye;
    controls.set_enabled(true);
    controls.rotate(0.5, 0.0);
    for _ in 0..300 {
        controls.update(&mut camera);
    }
    assert!((camera.eye - before).length() > 1.0);
}

#[test]
fn orbit_preserves_the_distance_to_the_target() {
    let (mut camera, mut controls) = make_pair();
    let target = Vec3::from(ORBIT_TARGET);
    let radius = (camera.eye - target).length();
    controls.set_enabled(true);
    controls.rotate(1.2, -0.4);
    for _ in 0..300 {
        controls.update(&mut camera);
    }
    let after = (camera.eye - target).length();
    assert!((after - radius).abs() / radius < 1e-3);
    assert_eq!(camera.target, target);
}

#[test]
fn damping_converges_instead_of_overshooting() {
    let (mut camera, mut controls) = make_pair();
    controls.set_enabled(true);
    controls.rotate(0.4, 0.0);

    // successive eye movements shrink monotonically under exponential decay
    let mut last = camera.eye;
    let mut steps = Vec::new();
    for _ in 0..50 {
        controls.update(&mut camera);
        steps.push((camera.eye - last).length());
        last = camera.eye;
    }
    for pair in steps.windows(2).skip(1) {
        assert!(pair[1] <= pair[0] + 1e-4);
    }
}
