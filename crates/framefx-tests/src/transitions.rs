//! End-to-end transition engine tests.

use framefx_core::pixel_index;
use framefx_effects::TransitionEngine;

const W: u32 = 24;
const H: u32 = 12;

fn gradient_frame(seed: u32) -> Vec<u8> {
    let mut frame = vec![0u8; (W * H * 4) as usize];
    for y in 0..H {
        for x in 0..W {
            let idx = pixel_index(x, y, W);
            frame[idx] = ((x * 9 + seed) % 256) as u8;
            frame[idx + 1] = ((y * 19 + seed * 3) % 256) as u8;
            frame[idx + 2] = ((x + y + seed * 7) % 256) as u8;
            frame[idx + 3] = ((x * y) % 256) as u8; // deliberately varied alpha
        }
    }
    frame
}

fn rgb_matches(out: &[u8], expected: &[u8]) -> bool {
    out.chunks_exact(4)
        .zip(expected.chunks_exact(4))
        .all(|(o, e)| o[..3] == e[..3])
}

#[test]
fn every_transition_forces_opaque_alpha() {
    let engine = TransitionEngine::new(W, H);
    let f1 = gradient_frame(1);
    let f2 = gradient_frame(2);

    let outputs = [
        engine.fade(&f1, &f2, 0.3).unwrap(),
        engine.crossfade(&f1, &f2, 0.3).unwrap(),
        engine.wipe_left(&f1, &f2, 0.3).unwrap(),
        engine.wipe_right(&f1, &f2, 0.3).unwrap(),
        engine.wipe_up(&f1, &f2, 0.3).unwrap(),
        engine.wipe_down(&f1, &f2, 0.3).unwrap(),
        engine.slide_left(&f1, &f2, 0.3).unwrap(),
        engine.slide_right(&f1, &f2, 0.3).unwrap(),
        engine.slide_up(&f1, &f2, 0.3).unwrap(),
        engine.slide_down(&f1, &f2, 0.3).unwrap(),
        engine.dissolve(&f1, &f2, 0.3).unwrap(),
        engine.fade_to_black(&f1, &f2, 0.3).unwrap(),
        engine.fade_to_white(&f1, &f2, 0.3).unwrap(),
    ];

    for (i, out) in outputs.iter().enumerate() {
        assert_eq!(out.len(), (W * H * 4) as usize);
        for px in out.chunks_exact(4) {
            assert_eq!(px[3], 255, "transition {i} leaked input alpha");
        }
    }
}

#[test]
fn inputs_are_never_mutated() {
    let engine = TransitionEngine::new(W, H);
    let f1 = gradient_frame(4);
    let f2 = gradient_frame(5);
    let f1_copy = f1.clone();
    let f2_copy = f2.clone();

    engine.fade(&f1, &f2, 0.7).unwrap();
    engine.wipe_down(&f1, &f2, 0.7).unwrap();
    engine.dissolve(&f1, &f2, 0.7).unwrap();
    engine.slide_up(&f1, &f2, 0.7).unwrap();

    assert_eq!(f1, f1_copy);
    assert_eq!(f2, f2_copy);
}

#[test]
fn progress_boundaries_reproduce_source_frames() {
    let engine = TransitionEngine::new(W, H);
    let f1 = gradient_frame(8);
    let f2 = gradient_frame(9);

    assert!(rgb_matches(&engine.fade(&f1, &f2, 0.0).unwrap(), &f1));
    assert!(rgb_matches(&engine.fade(&f1, &f2, 1.0).unwrap(), &f2));
    assert!(rgb_matches(&engine.crossfade(&f1, &f2, 0.0).unwrap(), &f1));
    assert!(rgb_matches(&engine.crossfade(&f1, &f2, 1.0).unwrap(), &f2));
    assert!(rgb_matches(&engine.slide_left(&f1, &f2, 0.0).unwrap(), &f1));
    assert!(rgb_matches(&engine.slide_left(&f1, &f2, 1.0).unwrap(), &f2));
    assert!(rgb_matches(&engine.wipe_up(&f1, &f2, 0.0).unwrap(), &f1));
    assert!(rgb_matches(&engine.wipe_up(&f1, &f2, 1.0).unwrap(), &f2));
    assert!(rgb_matches(&engine.dissolve(&f1, &f2, 1.0).unwrap(), &f2));
}

#[test]
fn fade_to_black_passes_through_black_at_midpoint() {
    let engine = TransitionEngine::new(W, H);
    let f1 = gradient_frame(3);
    let f2 = gradient_frame(6);
    let out = engine.fade_to_black(&f1, &f2, 0.5).unwrap();
    for px in out.chunks_exact(4) {
        assert_eq!(&px[..3], &[0, 0, 0]);
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    let engine = TransitionEngine::new(W, H);
    let f1 = gradient_frame(10);
    let f2 = gradient_frame(11);
    assert!(rgb_matches(&engine.crossfade(&f1, &f2, -0.5).unwrap(), &f1));
    assert!(rgb_matches(&engine.crossfade(&f1, &f2, 1.5).unwrap(), &f2));
}

#[test]
fn reconfigured_engine_accepts_new_geometry() {
    let mut engine = TransitionEngine::default();
    let f1 = gradient_frame(1);
    let f2 = gradient_frame(2);

    assert!(engine.fade(&f1, &f2, 0.5).is_err(), "1080p default geometry");
    engine.set_dimensions(W, H);
    assert!(engine.fade(&f1, &f2, 0.5).is_ok());
}
