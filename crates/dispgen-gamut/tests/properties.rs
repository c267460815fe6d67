//! Range and identity properties of every strategy over a wide sample.

use dispgen_core::{ContentHint, GamutMappingStrategy};
use dispgen_gamut::{GamutMapper, in_gamut, strategy};

/// Deterministic sample: a coarse grid plus LCG noise plus specials.
fn samples() -> Vec<[f64; 3]> {
    let mut out = Vec::new();
    let grid = [-2.0, -0.5, -0.01, 0.0, 0.3, 0.8, 1.0, 1.01, 1.3, 4.0, 1e6];
    for &r in &grid {
        for &g in &grid {
            for &b in &grid {
                out.push([r, g, b]);
            }
        }
    }
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 6.0 - 2.5
    };
    for _ in 0..2000 {
        out.push([next(), next(), next()]);
    }
    out.push([f64::NAN, 0.5, 0.5]);
    out.push([f64::INFINITY, f64::NEG_INFINITY, f64::NAN]);
    out.push([f64::MAX, -f64::MAX, f64::MIN_POSITIVE]);
    out
}

fn hints() -> [Option<ContentHint>; 5] {
    [
        None,
        Some(ContentHint::Photographic),
        Some(ContentHint::Graphics),
        Some(ContentHint::Specular),
        Some(ContentHint::Auto),
    ]
}

#[test]
fn every_strategy_lands_in_unit_cube() {
    let samples = samples();
    for st in GamutMappingStrategy::ALL {
        for hint in hints() {
            let mapper = GamutMapper::new(st).with_hint(hint);
            for rgb in &samples {
                let out = mapper.map(*rgb);
                assert!(in_gamut(out), "{st} {hint:?} {rgb:?} -> {out:?}");
            }
        }
    }
}

#[test]
fn in_gamut_colors_are_untouched() {
    let keep = [
        GamutMappingStrategy::Clip,
        GamutMappingStrategy::Relative,
        GamutMappingStrategy::Absolute,
        GamutMappingStrategy::Saturation,
        GamutMappingStrategy::Perceptual,
        GamutMappingStrategy::Adaptive,
        GamutMappingStrategy::HuePreserving,
    ];
    for rgb in samples().into_iter().filter(|c| in_gamut(*c)) {
        for st in keep {
            assert_eq!(GamutMapper::new(st).map(rgb), rgb, "{st}");
        }
    }
}

#[test]
fn relative_equals_clip() {
    let clip = GamutMapper::new(GamutMappingStrategy::Clip);
    let rel = GamutMapper::new(GamutMappingStrategy::Relative);
    for rgb in samples() {
        assert_eq!(clip.map(rgb), rel.map(rgb));
    }
}

#[test]
fn soft_clip_identity_below_knee() {
    let mapper = GamutMapper::new(GamutMappingStrategy::SoftClip);
    for i in 0..=80 {
        let v = i as f64 / 100.0;
        assert_eq!(mapper.map([v, v, v]), [v, v, v]);
    }
}

#[test]
fn soft_clip_respects_custom_knee() {
    let mapper = GamutMapper::new(GamutMappingStrategy::SoftClip).with_soft_clip_start(0.5);
    assert_eq!(mapper.map([0.5, 0.2, 0.0]), [0.5, 0.2, 0.0]);
    assert!(mapper.map([0.7, 0.0, 0.0])[0] < 0.7);
    assert_eq!(
        strategy::soft_clip([0.7, 0.0, 0.0], 0.5),
        mapper.map([0.7, 0.0, 0.0])
    );
}

#[test]
fn soft_clip_holds_ceiling_past_the_knee() {
    for start in [0.0, 0.3, 0.8, 0.99] {
        let reach = start + 1.5 * (1.0 - start) + 1e-9;
        for i in 0..=200 {
            let v = reach + i as f64 * 0.05;
            assert_eq!(strategy::soft_clip_channel(v, start, 1.0), 1.0, "start {start} v {v}");
        }
        assert_eq!(strategy::soft_clip_channel(f64::MAX, start, 1.0), 1.0);
        let mapper = GamutMapper::new(GamutMappingStrategy::SoftClip).with_soft_clip_start(start);
        assert_eq!(mapper.map([f64::INFINITY; 3]), [1.0; 3], "start {start}");
        assert_eq!(mapper.map([reach, reach, reach]), [1.0; 3], "start {start}");
    }
}
