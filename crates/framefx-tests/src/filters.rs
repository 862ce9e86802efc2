//! End-to-end filter engine tests over realistic frame setups.

use framefx_core::pixel_index;
use framefx_effects::{ChromaKeyParams, ColorGradeParams, FilterEngine, LutParams};

const W: u32 = 32;
const H: u32 = 18;

/// Frame with a deterministic but non-uniform pattern.
fn patterned_frame() -> Vec<u8> {
    let mut frame = vec![0u8; (W * H * 4) as usize];
    for y in 0..H {
        for x in 0..W {
            let idx = pixel_index(x, y, W);
            frame[idx] = ((x * 8) % 256) as u8;
            frame[idx + 1] = ((y * 14) % 256) as u8;
            frame[idx + 2] = ((x * y) % 256) as u8;
            frame[idx + 3] = 255;
        }
    }
    frame
}

#[test]
fn noop_parameters_leave_frame_untouched() {
    let engine = FilterEngine::new(W, H);
    let original = patterned_frame();

    let mut frame = original.clone();
    engine.blur(&mut frame, 0).unwrap();
    assert_eq!(frame, original, "blur radius 0");

    engine.sharpen(&mut frame, 0.0).unwrap();
    assert_eq!(frame, original, "sharpen amount 0");

    engine.noise_reduction(&mut frame, 0).unwrap();
    assert_eq!(frame, original, "noise reduction strength 0");

    engine
        .color_grade(&mut frame, &ColorGradeParams::default())
        .unwrap();
    assert_eq!(frame, original, "neutral color grade");
}

#[test]
fn green_screen_composite_workflow() {
    // Green background with a red subject square in the middle.
    let engine = FilterEngine::new(W, H);
    let mut frame = vec![0u8; (W * H * 4) as usize];
    for y in 0..H {
        for x in 0..W {
            let idx = pixel_index(x, y, W);
            let subject = (8..16).contains(&x) && (6..12).contains(&y);
            let rgba: [u8; 4] = if subject {
                [200, 30, 40, 255]
            } else {
                [0, 250, 5, 255]
            };
            frame[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    let params = ChromaKeyParams {
        key_r: 0,
        key_g: 255,
        key_b: 0,
        tolerance: 0.2,
        softness: 0.05,
        spill_suppression: 0.5,
    };
    engine.chroma_key(&mut frame, &params).unwrap();

    // Background keyed out, subject intact and opaque.
    let bg = pixel_index(0, 0, W);
    let fg = pixel_index(10, 8, W);
    assert_eq!(frame[bg + 3], 0, "green background fully transparent");
    assert_eq!(frame[fg + 3], 255, "subject fully opaque");
    assert_eq!(frame[fg], 200, "subject red channel untouched");
}

#[test]
fn filter_chain_runs_in_sequence() {
    // A typical grade-then-soften chain over one buffer.
    let engine = FilterEngine::new(W, H);
    let mut frame = patterned_frame();

    engine
        .color_grade(
            &mut frame,
            &ColorGradeParams {
                brightness: 10.0,
                contrast: 20.0,
                saturation: 15.0,
                hue: -12.0,
            },
        )
        .unwrap();
    engine
        .apply_lut(
            &mut frame,
            &LutParams {
                temperature: 0.3,
                warmth: 0.1,
                contrast: 1.1,
                saturation: 1.2,
                intensity: 0.8,
            },
        )
        .unwrap();
    engine.blur(&mut frame, 2).unwrap();
    engine.sharpen(&mut frame, 0.8).unwrap();
    engine.vignette(&mut frame, 0.6, 0.4).unwrap();
    engine.noise_reduction(&mut frame, 1).unwrap();

    assert_eq!(frame.len(), (W * H * 4) as usize);
}

#[test]
fn engines_share_buffers_with_matching_geometry() {
    let mut engine = FilterEngine::default();
    let mut frame = patterned_frame();

    // Default engine geometry is 1920x1080 and must reject this buffer.
    assert!(engine.blur(&mut frame, 1).is_err());

    engine.set_dimensions(W, H);
    assert!(engine.blur(&mut frame, 1).is_ok());
}

#[test]
fn vignette_preserves_center_while_darkening_edges() {
    let engine = FilterEngine::new(W, H);
    let mut frame = vec![180u8; (W * H * 4) as usize];
    engine.vignette(&mut frame, 0.9, 0.2).unwrap();

    let center = pixel_index(W / 2, H / 2, W);
    let corner = pixel_index(0, 0, W);
    assert_eq!(frame[center], 180);
    assert!(frame[corner] < 180);
}
