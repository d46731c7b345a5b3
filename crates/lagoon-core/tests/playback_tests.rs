// Host-side tests for the single-active-emitter state machine, alone and
// driven through the scene.

use lagoon_core::{Playback, SceneState, Viewport};

fn make_scene() -> SceneState {
    SceneState::new(Viewport {
        width: 1280.0,
        height: 720.0,
        pixel_ratio: 1.0,
    })
    .expect("valid viewport")
}

fn active_flags(scene: &SceneState) -> Vec<bool> {
    scene.entities().blobs().map(|b| b.is_active()).collect()
}

#[test]
fn play_activates_exactly_one_slot() {
    let mut playback = Playback::default();
    for slot in 1..=5 {
        playback.play(slot as i32);
        for other in 1..=5 {
            assert_eq!(playback.is_active(other), other == slot);
        }
    }
}

#[test]
fn play_is_total_over_any_integer() {
    let mut playback = Playback::default();
    playback.play(3);
    assert_eq!(playback.active(), Some(3));
    for invalid in [0, 6, 9, -3, i32::MIN, i32::MAX] {
        playback.play(3);
        playback.play(invalid);
        assert_eq!(playback.active(), None, "input {invalid}");
    }
}

#[test]
fn play_is_idempotent() {
    let mut playback = Playback::default();
    playback.play(2);
    let once = playback;
    playback.play(2);
    assert_eq!(playback, once);
}

#[test]
fn all_blobs_start_off() {
    let scene = make_scene();
    assert_eq!(active_flags(&scene), vec![false; 5]);
    assert_eq!(scene.playback().active(), None);
}

#[test]
fn scene_play_flips_blob_capabilities() {
    let mut scene = make_scene();
    scene.play(3);
    assert_eq!(active_flags(&scene), vec![false, false, true, false, false]);

    scene.play(9);
    assert_eq!(active_flags(&scene), vec![false; 5]);
}

#[test]
fn scene_play_switches_between_slots() {
    let mut scene = make_scene();
    scene.play(1);
    assert_eq!(active_flags(&scene), vec![true, false, false, false, false]);
    scene.play(4);
    assert_eq!(active_flags(&scene), vec![false, false, false, true, false]);
}

#[test]
fn scene_play_zero_turns_everything_off() {
    let mut scene = make_scene();
    scene.play(5);
    scene.play(0);
    assert_eq!(active_flags(&scene), vec![false; 5]);
}
