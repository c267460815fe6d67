//! Round-trip accuracy of every display curve.
//!
//! 1000 evenly spaced samples in [0, 1], decoded then re-encoded and the
//! reverse, must agree within 1e-4.

use dispgen_core::{Eotf, LuminanceProfile, Surround, ViewingConditions};
use dispgen_transfer::{TransferFunction, TransferModel};

const SAMPLES: usize = 1000;
const TOLERANCE: f64 = 1e-4;

fn models() -> Vec<TransferModel> {
    let displays = [
        LuminanceProfile::new(0.005, 1000.0),
        LuminanceProfile::new(0.0005, 4000.0),
        LuminanceProfile::new(0.1, 100.0),
    ];
    let viewing = [
        ViewingConditions::default(),
        ViewingConditions {
            ambient_light: 200.0,
            viewing_angle: 30.0,
            surround: Surround::Average,
        },
    ];
    let mut out = Vec::new();
    for lum in &displays {
        for vc in &viewing {
            for eotf in [Eotf::Pq, Eotf::Hlg, Eotf::Gamma(1.8), Eotf::Gamma(2.4), Eotf::Gamma(3.0)] {
                out.push(TransferModel::for_eotf(eotf, lum, vc).unwrap());
            }
        }
    }
    out
}

fn samples() -> impl Iterator<Item = f64> {
    (0..SAMPLES).map(|i| i as f64 / (SAMPLES - 1) as f64)
}

#[test]
fn code_to_linear_to_code() {
    for model in models() {
        for v in samples() {
            let back = model.from_linear(model.to_linear(v));
            assert!(
                (back - v).abs() < TOLERANCE,
                "{}: v={v} back={back}",
                model.name()
            );
        }
    }
}

#[test]
fn linear_to_code_to_linear() {
    for model in models() {
        for l in samples() {
            let back = model.to_linear(model.from_linear(l));
            assert!(
                (back - l).abs() < TOLERANCE,
                "{}: l={l} back={back}",
                model.name()
            );
        }
    }
}

#[test]
fn curves_are_monotonic() {
    for model in models() {
        let mut prev = -1.0;
        for v in samples() {
            let l = model.to_linear(v);
            assert!(l >= prev, "{} not monotonic at {v}", model.name());
            prev = l;
        }
    }
}
