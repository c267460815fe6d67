//! Builds display color spaces and merges them into a base config.
//!
//! Each display color space is defined from the `CIE-XYZ-D65` display
//! reference by one group:
//!
//! ```text
//! XYZ -> display RGB matrix      (optionally white adapted)
//!   -> gamut shaping             (range clamp or GAMUT-MAP builtin, in [0, 1])
//!   -> EOTF pre-scale            (PQ only: peak / 100)
//!   -> encoding curve            (ST-2084, HLG OETF or inverse exponent)
//! ```
//!
//! Shaping runs on peak-relative light so that clamping happens at the
//! display peak, before PQ rescales to OCIO's 100 cd/m² unit.

use crate::error::ProfileResult;
use dispgen_core::{DisplayCharacterization, Eotf, GamutMappingStrategy};
use dispgen_gamut::ShapingTransform;
use dispgen_ocio::{
    BaseConfigProvider, BitDepth, ColorSpace, Config, Display, Encoding, ReferenceSpace,
    Transform, View, check,
};
use dispgen_primaries::display_matrix;
use dispgen_transfer::TransferModel;
use tracing::{debug, info, warn};

/// View name binding each generated display to its color space.
pub const OUTPUT_VIEW: &str = "Output";

/// Family of generated color spaces.
pub const DISPLAY_FAMILY: &str = "Display";

/// Builtin encoding linear (1.0 = 100 cd/m²) to ST 2084.
pub const PQ_CURVE_STYLE: &str = "CURVE - LINEAR_to_ST-2084";

/// Builtin encoding scene linear to HLG.
pub const HLG_CURVE_STYLE: &str = "CURVE - HLG-OETF";

/// A base config with the display color spaces merged in.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    /// Merged config.
    pub config: Config,
    /// Names of the color spaces (and displays) added, in variant order.
    pub created: Vec<String>,
    /// Post-merge reference check findings.
    pub issues: Vec<check::Issue>,
}

/// `"<display> - <EOTF> - Display"`.
pub fn colorspace_name(display: &str, eotf: Eotf) -> String {
    format!("{display} - {} - Display", eotf.kind())
}

/// Lowercased color space name, spaces to `_`, suffixed `_display`.
pub fn colorspace_alias(colorspace: &str) -> String {
    format!("{}_display", colorspace.to_lowercase().replace(' ', "_"))
}

/// Encoding curve steps for `model`, after the data is peak-relative.
fn curve_steps(model: TransferModel) -> Vec<Transform> {
    match model {
        TransferModel::Pq(pq) => vec![
            Transform::scale(pq.ocio_scale()),
            Transform::builtin(PQ_CURVE_STYLE),
        ],
        // HLG display light -> scene light via the OOTF exponent, then OETF.
        TransferModel::Hlg(hlg) => vec![
            Transform::exponent(1.0 / hlg.system_gamma()),
            Transform::builtin(HLG_CURVE_STYLE),
        ],
        TransferModel::Gamma(g) => vec![Transform::exponent(g.value()).inverse()],
    }
}

fn shaping_step(shaping: ShapingTransform) -> Transform {
    match shaping {
        ShapingTransform::Clamp { min, max } => Transform::clamp(min, max),
        ShapingTransform::Builtin { style } => Transform::builtin(style),
    }
}

/// The `from_display_reference` group for `disp` encoded with `eotf`.
pub fn display_transform(disp: &DisplayCharacterization, eotf: Eotf) -> ProfileResult<Transform> {
    let matrix = display_matrix(&disp.primaries, disp.white_point.xy, disp.adaptation)?;
    let model = TransferModel::for_eotf(eotf, &disp.luminance, &disp.viewing)?;

    let mut steps = vec![
        Transform::matrix(matrix.to_4x4()),
        shaping_step(ShapingTransform::for_strategy(disp.gamut_mapping, disp.content_hint)),
    ];
    steps.extend(curve_steps(model));
    Ok(Transform::group(steps))
}

/// Display color space for `disp` encoded with `eotf`.
pub fn display_colorspace(disp: &DisplayCharacterization, eotf: Eotf) -> ProfileResult<ColorSpace> {
    let name = colorspace_name(&disp.name, eotf);
    let encoding = if eotf.kind().is_hdr() {
        Encoding::Hdr
    } else {
        Encoding::Sdr
    };
    let gamut = match (disp.gamut_mapping, disp.content_hint) {
        (GamutMappingStrategy::Adaptive, Some(hint)) => {
            format!("{} (hint: {})", disp.gamut_mapping, hint.as_str())
        }
        (strategy, _) => strategy.to_string(),
    };
    let description = format!(
        "Display colorspace for {} (Peak: {} cd/m², Black: {} cd/m², EOTF: {}, Gamut: {})",
        disp.name, disp.luminance.peak_luminance, disp.luminance.black_level, eotf, gamut,
    );

    Ok(ColorSpace::builder(&name)
        .alias(colorspace_alias(&name))
        .family(DISPLAY_FAMILY)
        .encoding(encoding)
        .bit_depth(BitDepth::F32)
        .category("file-io")
        .category("display")
        .description(description)
        .reference_space(ReferenceSpace::Display)
        .from_reference(display_transform(disp, eotf)?)
        .build())
}

// ============================================================================
// Assembler
// ============================================================================

/// Merges display color spaces into a base config from a provider.
pub struct Assembler<'a> {
    provider: &'a dyn BaseConfigProvider,
}

impl<'a> Assembler<'a> {
    /// Assembler resolving base configs through `provider`.
    pub fn new(provider: &'a dyn BaseConfigProvider) -> Self {
        Self { provider }
    }

    /// Resolves the base config and adds one color space, display and
    /// `Output` view per variant.
    ///
    /// An empty `variants` slice emits the characterization's own EOTF.
    /// Existing entries are never replaced: a name collision fails with
    /// the document error.
    pub fn assemble(
        &self,
        disp: &DisplayCharacterization,
        variants: &[Eotf],
    ) -> ProfileResult<OutputDocument> {
        let own = [disp.eotf];
        let variants = if variants.is_empty() { &own[..] } else { variants };

        let colorspaces = variants
            .iter()
            .map(|&eotf| display_colorspace(disp, eotf))
            .collect::<ProfileResult<Vec<_>>>()?;

        let selector = &disp.base_config;
        let mut config = self.provider.resolve(selector)?;
        info!(base = %selector.uri(), name = config.name(), "resolved base config");

        let mut created = Vec::with_capacity(colorspaces.len());
        for cs in colorspaces {
            let name = cs.name().to_string();
            config.add_colorspace(cs)?;
            config.add_display(Display::new(&name).with_view(View::new(OUTPUT_VIEW, &name)))?;
            if config.activate_display(&name) {
                debug!(display = %name, "appended to active_displays");
            }
            debug!(colorspace = %name, "added display colorspace");
            created.push(name);
        }
        if config.activate_view(OUTPUT_VIEW) {
            debug!(view = OUTPUT_VIEW, "appended to active_views");
        }

        let issues = check::check(&config);
        for issue in &issues {
            warn!(context = issue.context.as_deref().unwrap_or(""), "{issue}");
        }

        info!(
            display = %disp.name,
            created = created.len(),
            issues = issues.len(),
            "assembled output document"
        );
        Ok(OutputDocument {
            config,
            created,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileError;
    use dispgen_core::{BaseConfigSelector, ContentHint, LuminanceProfile};
    use dispgen_ocio::{BuiltinProvider, OcioResult, TransformDirection};

    fn monitor() -> DisplayCharacterization {
        DisplayCharacterization::builder("Studio Monitor")
            .luminance(LuminanceProfile::new(0.001, 1000.0))
            .eotf(Eotf::Gamma(2.4))
            .build()
    }

    #[test]
    fn test_names() {
        let name = colorspace_name("Studio Monitor", Eotf::Pq);
        assert_eq!(name, "Studio Monitor - PQ - Display");
        assert_eq!(colorspace_alias(&name), "studio_monitor_-_pq_-_display_display");
    }

    #[test]
    fn test_gamma_colorspace() {
        let cs = display_colorspace(&monitor(), Eotf::Gamma(2.4)).unwrap();
        assert_eq!(cs.name(), "Studio Monitor - GAMMA - Display");
        assert_eq!(cs.family(), DISPLAY_FAMILY);
        assert_eq!(cs.encoding(), Some(Encoding::Sdr));
        assert_eq!(cs.bit_depth(), Some(BitDepth::F32));
        assert_eq!(cs.categories(), ["file-io", "display"]);
        assert!(cs.is_display());
        assert!(cs.description().contains("Peak: 1000 cd/m²"));
        assert!(cs.description().contains("Gamut: clip"));

        let group = cs.from_reference().unwrap();
        let steps = group.steps();
        assert_eq!(steps.len(), 3);
        assert!(matches!(steps[0], Transform::Matrix(_)));
        assert!(matches!(steps[1], Transform::Range(_)));
        match &steps[2] {
            Transform::Exponent(e) => {
                assert_eq!(e.value[0], 2.4);
                assert_eq!(e.direction, TransformDirection::Inverse);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pq_prescale_after_shaping() {
        let disp = DisplayCharacterization::builder("HDR")
            .luminance(LuminanceProfile::new(0.005, 1000.0))
            .gamut_mapping(GamutMappingStrategy::Perceptual)
            .eotf(Eotf::Pq)
            .build();
        let cs = display_colorspace(&disp, Eotf::Pq).unwrap();
        assert_eq!(cs.encoding(), Some(Encoding::Hdr));
        let steps = cs.from_reference().unwrap().steps().to_vec();
        assert_eq!(steps.len(), 4);
        match &steps[1] {
            Transform::Builtin(b) => assert_eq!(b.style, "GAMUT-MAP - PERCEPTUAL"),
            other => panic!("unexpected {other:?}"),
        }
        match &steps[2] {
            Transform::Matrix(m) => assert_eq!(m.matrix[0], 10.0),
            other => panic!("unexpected {other:?}"),
        }
        match &steps[3] {
            Transform::Builtin(b) => assert_eq!(b.style, PQ_CURVE_STYLE),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_adaptive_hint_reaches_document() {
        let adaptive = |hint| {
            let disp = DisplayCharacterization::builder("HDR")
                .luminance(LuminanceProfile::new(0.005, 1000.0))
                .gamut_mapping(GamutMappingStrategy::Adaptive)
                .content_hint(hint)
                .eotf(Eotf::Pq)
                .build();
            display_colorspace(&disp, Eotf::Pq).unwrap()
        };

        let plain = adaptive(None);
        assert!(matches!(plain.from_reference().unwrap().steps()[1], Transform::Range(_)));
        assert!(plain.description().contains("Gamut: adaptive)"));

        let specular = adaptive(Some(ContentHint::Specular));
        match &specular.from_reference().unwrap().steps()[1] {
            Transform::Builtin(b) => assert_eq!(b.style, "GAMUT-MAP - SOFT-CLIP"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(specular.description().contains("Gamut: adaptive (hint: specular)"));

        let auto = adaptive(Some(ContentHint::Auto));
        assert!(matches!(
            &auto.from_reference().unwrap().steps()[1],
            Transform::Builtin(b) if b.style == "GAMUT-MAP - ADAPTIVE"
        ));
    }

    #[test]
    fn test_hlg_uses_inverse_system_gamma() {
        let cs = display_colorspace(&monitor(), Eotf::Hlg).unwrap();
        let steps = cs.from_reference().unwrap().steps().to_vec();
        match &steps[2] {
            Transform::Exponent(e) => approx::assert_abs_diff_eq!(e.value[0], 1.0 / 1.2, epsilon = 1e-12),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(&steps[3], Transform::Builtin(b) if b.style == HLG_CURVE_STYLE));
    }

    #[test]
    fn test_degenerate_primaries_fail() {
        let disp = DisplayCharacterization::builder("Flat")
            .primaries(dispgen_core::PrimarySet::new([0.2, 0.2], [0.4, 0.4], [0.6, 0.6]))
            .build();
        assert!(matches!(
            display_colorspace(&disp, Eotf::Pq),
            Err(ProfileError::Colorimetry(_))
        ));
    }

    #[test]
    fn test_assemble_into_builtin() {
        let provider = BuiltinProvider::new();
        let doc = Assembler::new(&provider)
            .assemble(&monitor(), &[Eotf::Gamma(2.4), Eotf::Pq])
            .unwrap();
        assert_eq!(
            doc.created,
            ["Studio Monitor - GAMMA - Display", "Studio Monitor - PQ - Display"]
        );
        let display = doc.config.display("Studio Monitor - PQ - Display").unwrap();
        assert_eq!(display.default_view(), Some(OUTPUT_VIEW));
        assert!(doc.config.active_displays().iter().any(|d| d == "Studio Monitor - PQ - Display"));
        assert!(doc.config.active_views().iter().any(|v| v == OUTPUT_VIEW));
        assert!(!check::has_errors(&doc.issues));
    }

    #[test]
    fn test_duplicate_variant_fails() {
        let provider = BuiltinProvider::new();
        let err = Assembler::new(&provider)
            .assemble(&monitor(), &[Eotf::Gamma(2.2), Eotf::Gamma(2.4)])
            .unwrap_err();
        assert!(matches!(err, ProfileError::Document(_)));
    }

    #[test]
    fn test_unknown_base_reports_key() {
        let disp = DisplayCharacterization::builder("X")
            .base_config(BaseConfigSelector {
                kind: "bogus".into(),
                ..BaseConfigSelector::default()
            })
            .build();
        let provider = BuiltinProvider::new();
        match Assembler::new(&provider).assemble(&disp, &[]) {
            Err(ProfileError::BaseConfigUnresolved { key, known }) => {
                assert_eq!(key, "bogus-config-v2.1.0_aces-v1.3_ocio-v2.3");
                assert_eq!(known.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_fake_provider() {
        let fake = |_: &BaseConfigSelector| -> OcioResult<Config> { Ok(Config::new("empty")) };
        let doc = Assembler::new(&fake).assemble(&monitor(), &[]).unwrap();
        assert_eq!(doc.config.colorspaces().len(), 1);
        assert_eq!(doc.config.displays().len(), 1);
        // Unrestricted base: active lists stay empty.
        assert!(doc.config.active_displays().is_empty());
    }
}
