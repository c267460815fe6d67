//! File-level generation: display config in, OCIO config out.

use dispgen_ocio::BuiltinProvider;
use dispgen_profile::{Pipeline, ProfileError, ProfileRequest};
use dispgen_validate::RuleSet;
use std::fs;

const RECORD: &str = r#"
display:
  name: "Grading Panel"
primaries:
  red: [0.680, 0.320]
  green: [0.265, 0.690]
  blue: [0.150, 0.060]
white_point: [0.3127, 0.3290]
luminance:
  black_level: 0.005
  peak_luminance: 1000
eotf:
  type: PQ
eotf_variants:
  - type: PQ
  - type: GAMMA
    gamma_value: 2.4
gamut_mapping: soft_clip
"#;

#[test]
fn record_file_to_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("panel.ocio");
    let record = dir.path().join("display_config.yaml");
    fs::write(&record, format!("{RECORD}ocio:\n  output_config: {}\n", out.display())).unwrap();

    let request = ProfileRequest::load(&record).unwrap();
    let provider = BuiltinProvider::new();
    let generated = Pipeline::new(&provider).run(&request).unwrap();

    assert_eq!(generated.output, out);
    assert!(generated.report.is_empty());
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Grading Panel - PQ - Display"));
    assert!(text.contains("Grading Panel - GAMMA - Display"));
    assert!(text.contains("GAMUT-MAP - SOFT-CLIP"));
    assert!(text.contains("CURVE - LINEAR_to_ST-2084"));
    assert!(text.contains("!<ExponentTransform>"));
}

#[test]
fn rules_file_enables_strict_mode() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = dir.path().join("validation_settings.yaml");
    fs::write(&rules_path, "strict_mode: true\ngamut_coverage:\n  max: 120\n").unwrap();

    let request = ProfileRequest::from_yaml_str(RECORD).unwrap();
    let provider = BuiltinProvider::new();
    let pipeline = Pipeline::new(&provider).with_rules(RuleSet::load(&rules_path).unwrap());
    match pipeline.generate(&request) {
        Err(ProfileError::ValidationRejected { report }) => {
            assert!(report.findings().iter().all(|f| f.rule.as_str() == "gamut_coverage"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn missing_record_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProfileRequest::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
}
