//! Inspect command: derived colorimetry and curve parameters.

use crate::InspectArgs;
use anyhow::{Context, Result};
use dispgen_math::Mat3;
use dispgen_primaries::{
    ReferenceGamut, display_matrix, estimate_cct_duv, gamut_coverage, rgb_to_xyz_matrix,
};
use dispgen_transfer::TransferModel;

/// Runs the inspect command.
pub fn run(args: InspectArgs) -> Result<()> {
    let request = super::load_request(&args.config)?;
    let disp = &request.characterization;
    let white = disp.white_point.xy;

    println!("{}", disp.name);
    println!("  White point: {white}");
    match estimate_cct_duv(white) {
        Ok((cct, duv)) => println!("  CCT: {cct:.0} K, duv: {duv:+.4}"),
        Err(err) => println!("  CCT: n/a ({err})"),
    }
    println!("  Contrast: {:.0}:1", disp.luminance.contrast_ratio());

    let to_xyz = rgb_to_xyz_matrix(&disp.primaries, white).context("RGB to XYZ matrix")?;
    print_matrix("RGB -> XYZ", &to_xyz);
    let from_xyz = display_matrix(&disp.primaries, white, disp.adaptation)
        .context("Display matrix")?;
    let label = format!("XYZ D65 -> display RGB (adaptation: {})", disp.adaptation.as_str());
    print_matrix(&label, &from_xyz);

    println!("  Coverage:");
    for reference in ReferenceGamut::ALL {
        match gamut_coverage(&disp.primaries, reference) {
            Some(pct) => println!("    {:<12} {pct:6.1}%", reference.name()),
            None => println!("    {:<12} n/a", reference.name()),
        }
    }

    println!("  Curves:");
    for &eotf in &request.variants {
        let model = TransferModel::for_eotf(eotf, &disp.luminance, &disp.viewing)
            .with_context(|| format!("Transfer model for {eotf}"))?;
        match model {
            TransferModel::Pq(pq) => println!(
                "    PQ     peak code {:.4}, OCIO pre-scale {}",
                pq.peak_code(),
                pq.ocio_scale()
            ),
            TransferModel::Hlg(hlg) => {
                println!("    HLG    system gamma {:.4}", hlg.system_gamma())
            }
            TransferModel::Gamma(g) => println!("    GAMMA  exponent {}", g.value()),
        }
    }
    Ok(())
}

fn print_matrix(label: &str, m: &Mat3) {
    println!("  {label}:");
    for row in m.m {
        println!("    [{:10.6} {:10.6} {:10.6}]", row[0], row[1], row[2]);
    }
}
