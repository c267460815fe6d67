//! Built-in base configs.
//!
//! Two ACES 1.3 base configs with a CIE-XYZ-D65 display reference, the
//! reference display profiles are merged into:
//!
//! - [`aces_config`] - ACES spaces, standard displays, two view transforms
//! - [`studio_config`] - the above plus linear working spaces for common
//!   display gamuts
//!
//! ```
//! use dispgen_ocio::builtin;
//!
//! let config = builtin::studio_config();
//! assert_eq!(config.role("cie_xyz_d65_interchange"), Some("CIE-XYZ-D65"));
//! assert!(config.colorspace("ACEScg").is_some());
//! ```

use crate::colorspace::{ColorSpace, Encoding, ReferenceSpace};
use crate::config::{Config, ProfileVersion};
use crate::display::{Display, View, ViewTransform};
use crate::transform::Transform;

/// Name of the display reference color space.
pub const DISPLAY_REFERENCE: &str = "CIE-XYZ-D65";

/// Default view transform of the built-in configs.
pub const SDR_VIEW_TRANSFORM: &str = "ACES 1.0 - SDR Video";

/// View transform without tone mapping.
pub const UNTONEMAPPED_VIEW_TRANSFORM: &str = "Un-tone-mapped";

// AP1 to AP0.
#[rustfmt::skip]
const AP1_TO_AP0: [f64; 16] = [
    0.6954522414, 0.1406786965, 0.1638690622, 0.0,
    0.0447945634, 0.8596711185, 0.0955343182, 0.0,
    -0.0055258826, 0.0040252103, 1.0015006723, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

// AP0 to linear Rec.709, Bradford D60 to D65.
#[rustfmt::skip]
const AP0_TO_REC709: [f64; 16] = [
    2.5216861940, -1.1341309764, -0.3875552176, 0.0,
    -0.2764799142, 1.3727190409, -0.0962391267, 0.0,
    -0.0153780649, -0.1529753373, 1.1683534022, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

// AP0 to linear P3-D65, Bradford D60 to D65.
#[rustfmt::skip]
const AP0_TO_P3_D65: [f64; 16] = [
    2.0249052772, -0.6895693527, -0.3353359245, 0.0,
    -0.1836026177, 1.2891351640, -0.1055325463, 0.0,
    0.0090598440, -0.0592813538, 1.0502215098, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

// AP0 to linear Rec.2020, Bradford D60 to D65.
#[rustfmt::skip]
const AP0_TO_REC2020: [f64; 16] = [
    1.4904095199, -0.2661709167, -0.2242386032, 0.0,
    -0.0801679350, 1.1821671234, -0.1019991884, 0.0,
    0.0032276337, -0.0347764804, 1.0315488467, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// ACES 1.3 base config.
pub fn aces_config() -> Config {
    let mut config = Config::new("aces-config-v2.1.0_aces-v1.3_ocio-v2.3");
    config.set_version(ProfileVersion::V2_3);
    config.set_description("ACES 1.3 base config with a CIE-XYZ-D65 display reference");

    for cs in aces_colorspaces().into_iter().chain(display_colorspaces()) {
        push(&mut config, cs);
    }
    add_roles(&mut config);
    add_view_transforms(&mut config);
    add_displays(&mut config);
    config
}

/// Studio base config: the ACES config plus linear display-gamut
/// working spaces.
pub fn studio_config() -> Config {
    let mut config = aces_config();
    config.set_name("studio-config-v2.1.0_aces-v1.3_ocio-v2.3");
    config.set_description("Studio base config: ACES 1.3 plus linear display working spaces");
    for cs in studio_colorspaces() {
        push(&mut config, cs);
    }
    config.set_role("color_picking", "Linear Rec.709 (sRGB)");
    config.set_role("rendering", "ACEScg");
    config.add_inactive_colorspace("ACEScc");
    config
}

// Built-in names are distinct by construction.
fn push(config: &mut Config, cs: ColorSpace) {
    if let Err(e) = config.add_colorspace(cs) {
        tracing::error!(error = %e, "built-in config has a duplicate color space");
    }
}

fn add_roles(config: &mut Config) {
    config.set_role("aces_interchange", "ACES2065-1");
    config.set_role("cie_xyz_d65_interchange", DISPLAY_REFERENCE);
    config.set_role("color_timing", "ACEScct");
    config.set_role("compositing_log", "ACEScct");
    config.set_role("data", "Raw");
    config.set_role("default", "ACES2065-1");
    config.set_role("scene_linear", "ACEScg");
}

fn add_view_transforms(config: &mut Config) {
    config.add_view_transform(
        ViewTransform::new(SDR_VIEW_TRANSFORM)
            .with_family("ACES")
            .with_description("ACES 1.0 SDR video output transform")
            .with_from_scene_reference(Transform::builtin(
                "ACES-OUTPUT - ACES2065-1_to_CIE-XYZ-D65 - SDR-VIDEO_1.0",
            )),
    );
    config.add_view_transform(
        ViewTransform::new(UNTONEMAPPED_VIEW_TRANSFORM)
            .with_family("Utility")
            .with_description("Colorimetric conversion without tone mapping")
            .with_from_scene_reference(Transform::builtin(
                "UTILITY - ACES-AP0_to_CIE-XYZ-D65_BFD",
            )),
    );
    config.set_default_view_transform(UNTONEMAPPED_VIEW_TRANSFORM);
}

fn add_displays(config: &mut Config) {
    let names = ["sRGB - Display", "Rec.1886 Rec.709 - Display", "P3-D65 - Display", "Rec.2100-PQ - Display"];
    for name in names {
        let display = Display::new(name)
            .with_view(View::with_view_transform(SDR_VIEW_TRANSFORM, SDR_VIEW_TRANSFORM, name))
            .with_view(View::with_view_transform(
                UNTONEMAPPED_VIEW_TRANSFORM,
                UNTONEMAPPED_VIEW_TRANSFORM,
                name,
            ))
            .with_view(View::new("Raw", "Raw"));
        if let Err(e) = config.add_display(display) {
            tracing::error!(error = %e, "built-in config has a duplicate display");
        }
    }
    config.set_active_displays(names.iter().map(|n| n.to_string()).collect());
    config.set_active_views(vec![
        SDR_VIEW_TRANSFORM.to_string(),
        UNTONEMAPPED_VIEW_TRANSFORM.to_string(),
        "Raw".to_string(),
    ]);
}

// ============================================================================
// Color space definitions
// ============================================================================

fn aces_colorspaces() -> Vec<ColorSpace> {
    vec![
        ColorSpace::builder("ACES2065-1")
            .alias("aces2065_1")
            .alias("ACES - ACES2065-1")
            .family("ACES")
            .encoding(Encoding::SceneLinear)
            .category("file-io")
            .description("The Academy Color Encoding System reference color space")
            .build(),
        ColorSpace::builder("ACEScc")
            .alias("ACES - ACEScc")
            .family("ACES")
            .encoding(Encoding::Log)
            .category("file-io")
            .description("ACEScc to ACES2065-1")
            .to_reference(Transform::builtin("ACEScc_to_ACES2065-1"))
            .build(),
        ColorSpace::builder("ACEScct")
            .alias("ACES - ACEScct")
            .alias("acescct_ap1")
            .family("ACES")
            .encoding(Encoding::Log)
            .category("file-io")
            .category("working-space")
            .description("ACEScct to ACES2065-1")
            .to_reference(Transform::builtin("ACEScct_to_ACES2065-1"))
            .build(),
        ColorSpace::builder("ACEScg")
            .alias("ACES - ACEScg")
            .alias("lin_ap1")
            .family("ACES")
            .encoding(Encoding::SceneLinear)
            .category("file-io")
            .category("working-space")
            .description("ACEScg to ACES2065-1")
            .to_reference(Transform::matrix(AP1_TO_AP0))
            .build(),
        ColorSpace::builder("Linear Rec.709 (sRGB)")
            .alias("lin_rec709_srgb")
            .alias("lin_srgb")
            .family("Utility")
            .encoding(Encoding::SceneLinear)
            .category("file-io")
            .category("working-space")
            .description("Linear Rec.709 (sRGB) to ACES2065-1")
            .from_reference(Transform::matrix(AP0_TO_REC709))
            .build(),
        ColorSpace::builder("Raw")
            .alias("Utility - Raw")
            .family("Utility")
            .encoding(Encoding::Data)
            .category("file-io")
            .description("The utility \"Raw\" colorspace")
            .build(),
    ]
}

fn studio_colorspaces() -> Vec<ColorSpace> {
    vec![
        ColorSpace::builder("Linear P3-D65")
            .alias("lin_p3d65")
            .family("Utility")
            .encoding(Encoding::SceneLinear)
            .category("file-io")
            .category("working-space")
            .description("Linear P3-D65 to ACES2065-1")
            .from_reference(Transform::matrix(AP0_TO_P3_D65))
            .build(),
        ColorSpace::builder("Linear Rec.2020")
            .alias("lin_rec2020")
            .family("Utility")
            .encoding(Encoding::SceneLinear)
            .category("file-io")
            .category("working-space")
            .description("Linear Rec.2020 to ACES2065-1")
            .from_reference(Transform::matrix(AP0_TO_REC2020))
            .build(),
    ]
}

fn display_colorspaces() -> Vec<ColorSpace> {
    let display = |name: &str, alias: &str, encoding: Encoding, style: &str| {
        ColorSpace::builder(name)
            .alias(alias)
            .reference_space(ReferenceSpace::Display)
            .family("Display")
            .encoding(encoding)
            .category("file-io")
            .description(format!("Convert CIE XYZ (D65 white) to {name}"))
            .from_reference(Transform::builtin(style))
            .build()
    };
    vec![
        ColorSpace::builder(DISPLAY_REFERENCE)
            .alias("cie_xyz_d65")
            .reference_space(ReferenceSpace::Display)
            .family("Display")
            .encoding(Encoding::DisplayLinear)
            .description("The CIE XYZ (D65) display connection colorspace")
            .build(),
        display(
            "sRGB - Display",
            "srgb_display",
            Encoding::Sdr,
            "DISPLAY - CIE-XYZ-D65_to_sRGB",
        ),
        display(
            "Rec.1886 Rec.709 - Display",
            "rec1886_rec709_display",
            Encoding::Sdr,
            "DISPLAY - CIE-XYZ-D65_to_REC.1886-REC.709",
        ),
        display(
            "P3-D65 - Display",
            "g26_p3d65_display",
            Encoding::Sdr,
            "DISPLAY - CIE-XYZ-D65_to_G2.6-P3-D65",
        ),
        display(
            "Rec.2100-PQ - Display",
            "rec2100_pq_display",
            Encoding::Hdr,
            "DISPLAY - CIE-XYZ-D65_to_REC.2100-PQ",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;

    #[test]
    fn aces_config_is_consistent() {
        let config = aces_config();
        assert!(!check::has_errors(&check::check(&config)));
        assert_eq!(config.displays().len(), 4);
        assert_eq!(config.display_colorspaces().count(), 5);
    }

    #[test]
    fn studio_extends_aces() {
        let aces = aces_config();
        let studio = studio_config();
        assert!(studio.colorspaces().len() > aces.colorspaces().len());
        assert!(studio.colorspace("lin_rec2020").is_some());
        assert!(!check::has_errors(&check::check(&studio)));
    }

    #[test]
    fn restricted_active_lists() {
        let config = studio_config();
        assert_eq!(config.active_displays().len(), 4);
        assert!(config.active_views().iter().any(|v| v == "Raw"));
    }
}
