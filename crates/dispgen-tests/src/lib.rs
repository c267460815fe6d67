//! End-to-end tests for the dispgen crates.
//!
//! These tests drive the full path from a display record to a written
//! OCIO config and check how validation, base config resolution and
//! assembly interact.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use dispgen_core::{
        BaseConfigSelector, Chromaticity, DisplayCharacterization, Eotf, GamutMappingStrategy,
        LuminanceProfile,
    };
    use dispgen_ocio::{BuiltinProvider, Config, OcioResult, Transform};
    use dispgen_profile::{Pipeline, ProfileError, ProfileRequest};
    use dispgen_validate::{RuleSet, Severity};
    use std::cell::Cell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn demos_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
    }

    fn reference_display(eotf: Eotf) -> DisplayCharacterization {
        DisplayCharacterization::builder("Reference Monitor")
            .primaries(dispgen_primaries::REC709)
            .white_point(dispgen_primaries::derive_white_point(Chromaticity::D65))
            .luminance(LuminanceProfile::new(0.001, 1000.0))
            .eotf(eotf)
            .gamut_mapping(GamutMappingStrategy::Clip)
            .build()
    }

    /// Gamma 2.4 display, lenient: one color space, no error findings.
    #[test]
    fn test_gamma_display_end_to_end() {
        let request = ProfileRequest::new(reference_display(Eotf::gamma(2.4).unwrap()))
            .with_strict(Some(false));
        let provider = BuiltinProvider::new();
        let generated = Pipeline::new(&provider).generate(&request).unwrap();

        assert_eq!(generated.report.errors().count(), 0);
        assert_eq!(generated.document.created, ["Reference Monitor - GAMMA - Display"]);
        let ours: Vec<_> = generated
            .document
            .config
            .display_colorspaces()
            .filter(|cs| cs.name().starts_with("Reference Monitor"))
            .collect();
        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].name(), "Reference Monitor - GAMMA - Display");
    }

    /// Strict mode with an out-of-range gamma never reaches the provider.
    #[test]
    fn test_strict_rejection_skips_provider() {
        let calls = Cell::new(0);
        let fake = |sel: &BaseConfigSelector| -> OcioResult<Config> {
            calls.set(calls.get() + 1);
            Ok(Config::new(sel.key()))
        };
        let request = ProfileRequest::new(reference_display(Eotf::gamma(5.0).unwrap()))
            .with_strict(Some(true));

        match Pipeline::new(&fake).generate(&request) {
            Err(ProfileError::ValidationRejected { report }) => {
                assert!(report.findings().iter().all(|f| f.severity == Severity::Error));
                assert!(report.findings().iter().any(|f| f.rule.as_str() == "eotf_gamma"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(calls.get(), 0);

        // Same display, lenient: the provider is reached exactly once.
        let lenient = request.with_strict(Some(false));
        Pipeline::new(&fake).generate(&lenient).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unknown_base_config_kind() {
        let mut disp = reference_display(Eotf::Pq);
        disp.base_config.kind = "bogus".into();
        let provider = BuiltinProvider::new();
        match Pipeline::new(&provider).generate(&ProfileRequest::new(disp)) {
            Err(ProfileError::BaseConfigUnresolved { key, known }) => {
                assert_eq!(key, "bogus-config-v2.1.0_aces-v1.3_ocio-v2.3");
                assert!(known.contains(&"studio-config-v2.1.0_aces-v1.3_ocio-v2.3".to_string()));
                assert!(known.contains(&"aces-config-v2.1.0_aces-v1.3_ocio-v2.3".to_string()));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_rec2020_d65_white_metrics() {
        let (cct, duv) = dispgen_primaries::estimate_cct_duv(Chromaticity::D65).unwrap();
        assert!((cct - 6500.0).abs() < 50.0, "cct {cct}");
        assert!(duv.abs() <= 0.006, "duv {duv}");

        let disp = DisplayCharacterization::builder("Wide")
            .primaries(dispgen_primaries::REC2020)
            .white_point(Chromaticity::D65)
            .luminance(LuminanceProfile::new(0.005, 1000.0))
            .eotf(Eotf::Pq)
            .build();
        let report = dispgen_validate::Validator::new(&RuleSet::default()).validate(&disp, &[disp.eotf]);
        assert!(report.is_empty(), "{:?}", report.findings());
    }

    #[test]
    fn test_written_document_structure() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("reference.ocio");
        let request = ProfileRequest::new(reference_display(Eotf::Pq))
            .with_variants(vec![Eotf::Pq, Eotf::Hlg])
            .with_output(&out);
        let provider = BuiltinProvider::new();
        Pipeline::new(&provider).run(&request).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("ocio_profile_version: 2.3"));
        assert!(text.contains("!<GroupTransform>"));
        assert!(text.contains("from_display_reference:"));

        let doc: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        let displays = doc["displays"].as_mapping().unwrap();
        assert!(displays.contains_key("Reference Monitor - PQ - Display"));
        assert!(displays.contains_key("Reference Monitor - HLG - Display"));
        let active: Vec<_> = doc["active_displays"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(active.contains(&"Reference Monitor - HLG - Display"));
        let views: Vec<_> = doc["active_views"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(views.contains(&"Output"));
    }

    #[test]
    fn test_demo_record_with_rule_file() {
        let dir = tempdir().unwrap();
        let request = ProfileRequest::load(demos_dir().join("display_config.yaml"))
            .unwrap()
            .with_output(dir.path().join("oled.ocio"));
        let rules = RuleSet::load(demos_dir().join("validation_settings.yaml")).unwrap();
        let provider = BuiltinProvider::new();
        let generated = Pipeline::new(&provider).with_rules(rules).run(&request).unwrap();

        assert!(generated.report.is_empty(), "{:?}", generated.report.findings());
        assert_eq!(
            generated.document.created,
            [
                "Reference OLED - PQ - Display",
                "Reference OLED - HLG - Display",
                "Reference OLED - GAMMA - Display",
            ]
        );
        assert!(dir.path().join("oled.ocio").exists());
    }

    /// Every strategy lands in the document as its shaping stage.
    #[test]
    fn test_strategy_shaping_in_document() {
        let fake = |sel: &BaseConfigSelector| -> OcioResult<Config> { Ok(Config::new(sel.key())) };
        for strategy in GamutMappingStrategy::ALL {
            let mut disp = reference_display(Eotf::Pq);
            disp.gamut_mapping = strategy;
            let generated = Pipeline::new(&fake).generate(&ProfileRequest::new(disp)).unwrap();
            let cs = &generated.document.config.colorspaces()[0];
            let steps = cs.from_reference().unwrap().steps();
            let shaping = dispgen_gamut::ShapingTransform::for_strategy(strategy, None);
            match (&steps[1], shaping) {
                (Transform::Range(r), dispgen_gamut::ShapingTransform::Clamp { min, max }) => {
                    assert_eq!(r.min_in, Some(min));
                    assert_eq!(r.max_out, Some(max));
                }
                (Transform::Builtin(b), dispgen_gamut::ShapingTransform::Builtin { style }) => {
                    assert_eq!(b.style, style);
                }
                (step, shaping) => panic!("{strategy}: {step:?} vs {shaping:?}"),
            }
        }
    }

    /// The adaptive content hint changes the written document.
    #[test]
    fn test_content_hint_changes_document() {
        let fake = |sel: &BaseConfigSelector| -> OcioResult<Config> { Ok(Config::new(sel.key())) };
        let written = |hint| {
            let mut disp = reference_display(Eotf::Pq);
            disp.gamut_mapping = GamutMappingStrategy::Adaptive;
            disp.content_hint = hint;
            let generated = Pipeline::new(&fake).generate(&ProfileRequest::new(disp)).unwrap();
            dispgen_ocio::to_yaml_string(&generated.document.config).unwrap()
        };
        let plain = written(None);
        let specular = written(Some(dispgen_core::ContentHint::Specular));
        assert_ne!(plain, specular);
        assert!(specular.contains("GAMUT-MAP - SOFT-CLIP"));
        assert!(specular.contains("hint: specular"));
        assert!(!plain.contains("GAMUT-MAP"));
    }

    /// The mapped signal stays encodable by each curve.
    #[test]
    fn test_mapped_values_roundtrip_through_curves() {
        use dispgen_transfer::{TransferFunction, TransferModel};

        let disp = reference_display(Eotf::Pq);
        let mapper = dispgen_gamut::GamutMapper::new(GamutMappingStrategy::SoftClip);
        for eotf in [Eotf::Pq, Eotf::Hlg, Eotf::Gamma(2.4)] {
            let model = TransferModel::for_eotf(eotf, &disp.luminance, &disp.viewing).unwrap();
            for rgb in [[1.4, 0.2, -0.1], [0.5, 0.5, 0.5], [0.9, 1.1, 0.0]] {
                for c in mapper.map(rgb) {
                    let back = model.to_linear(model.from_linear(c));
                    assert_abs_diff_eq!(back, c, epsilon = 1e-4);
                }
            }
        }
    }
}
