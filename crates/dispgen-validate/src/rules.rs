//! Rule identifiers, thresholds and rule set files.
//!
//! A rule set file is a YAML mapping from rule name to overrides:
//!
//! ```yaml
//! strict_mode: false
//! contrast_ratio:
//!   min: 500
//!   max: 1000000
//! gamut_coverage: false      # shorthand for enabled: false
//! ```
//!
//! Absent rules and absent fields keep their built-in values. The flat
//! keys of older settings files (`check_contrast`, `min_contrast_ratio`,
//! `max_duv_deviation`, ...) are still understood.

use crate::error::{ValidateError, ValidateResult};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Default rule set file name.
pub const DEFAULT_RULES_FILE: &str = "validation_settings.yaml";

// ============================================================================
// Rule identifiers
// ============================================================================

/// Validation rule names, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    /// Each primary inside the xy triangle.
    Primaries,
    /// White point coordinates in range.
    WhitePoint,
    /// Black and peak positive, peak above black.
    Luminance,
    /// Peak / black within bounds.
    ContrastRatio,
    /// Area coverage relative to Rec.709, percent.
    GamutCoverage,
    /// White point CCT in Kelvin.
    WhitePointTemperature,
    /// Absolute white point duv.
    WhitePointDuv,
    /// Ambient luminance, cd/m².
    AmbientLight,
    /// Viewing angle, degrees.
    ViewingAngle,
    /// Gamma of every power-law EOTF.
    EotfGamma,
}

impl RuleId {
    /// All rules in evaluation order.
    pub const ALL: [RuleId; 10] = [
        Self::Primaries,
        Self::WhitePoint,
        Self::Luminance,
        Self::ContrastRatio,
        Self::GamutCoverage,
        Self::WhitePointTemperature,
        Self::WhitePointDuv,
        Self::AmbientLight,
        Self::ViewingAngle,
        Self::EotfGamma,
    ];

    /// Name used in rule set files and findings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primaries => "primaries",
            Self::WhitePoint => "white_point",
            Self::Luminance => "luminance",
            Self::ContrastRatio => "contrast_ratio",
            Self::GamutCoverage => "gamut_coverage",
            Self::WhitePointTemperature => "white_point_temperature",
            Self::WhitePointDuv => "white_point_duv",
            Self::AmbientLight => "ambient_light",
            Self::ViewingAngle => "viewing_angle",
            Self::EotfGamma => "eotf_gamma",
        }
    }

    /// Built-in thresholds.
    pub fn default_rule(&self) -> Rule {
        match self {
            Self::Primaries | Self::WhitePoint => Rule::bounded(0.0, 1.0),
            Self::Luminance => Rule::ENABLED,
            Self::ContrastRatio => Rule::bounded(100.0, 200_000.0),
            Self::GamutCoverage => Rule::bounded(35.0, 250.0),
            Self::WhitePointTemperature => Rule::bounded(4000.0, 10_000.0),
            Self::WhitePointDuv => Rule {
                max: Some(0.006),
                ..Rule::ENABLED
            },
            Self::AmbientLight => Rule::bounded(0.0, 500.0),
            Self::ViewingAngle => Rule::bounded(0.0, 90.0),
            Self::EotfGamma => Rule::bounded(1.8, 3.0),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown validation rule '{s}'"))
    }
}

// ============================================================================
// Thresholds
// ============================================================================

/// Thresholds of one rule. A bound of `None` is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Whether the rule runs.
    pub enabled: bool,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
}

impl Rule {
    /// Enabled, unbounded.
    pub const ENABLED: Rule = Rule {
        enabled: true,
        min: None,
        max: None,
    };

    /// Enabled with both bounds.
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            enabled: true,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound or `fallback`.
    pub fn min_or(&self, fallback: f64) -> f64 {
        self.min.unwrap_or(fallback)
    }

    /// Upper bound or `fallback`.
    pub fn max_or(&self, fallback: f64) -> f64 {
        self.max.unwrap_or(fallback)
    }

    /// True when `v` satisfies both bounds. NaN never does.
    pub fn contains(&self, v: f64) -> bool {
        !v.is_nan()
            && self.min.is_none_or(|min| v >= min)
            && self.max.is_none_or(|max| v <= max)
    }

    /// `[min, max]` for messages.
    pub fn range_label(&self) -> String {
        let fmt = |b: Option<f64>| b.map_or_else(|| "-".to_string(), |v| v.to_string());
        format!("[{}, {}]", fmt(self.min), fmt(self.max))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    enabled: Option<bool>,
    min: Option<f64>,
    max: Option<f64>,
}

// ============================================================================
// Rule set
// ============================================================================

/// Thresholds for every rule plus the file-level strict flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: BTreeMap<RuleId, Rule>,
    strict_mode: Option<bool>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: RuleId::ALL.iter().map(|id| (*id, id.default_rule())).collect(),
            strict_mode: None,
        }
    }
}

impl RuleSet {
    /// Thresholds of `id`.
    pub fn get(&self, id: RuleId) -> Rule {
        self.rules.get(&id).copied().unwrap_or_else(|| id.default_rule())
    }

    /// Replaces the thresholds of `id`.
    pub fn with_rule(mut self, id: RuleId, rule: Rule) -> Self {
        self.rules.insert(id, rule);
        self
    }

    /// Disables `id`.
    pub fn without(self, id: RuleId) -> Self {
        let rule = Rule {
            enabled: false,
            ..self.get(id)
        };
        self.with_rule(id, rule)
    }

    /// `strict_mode` from the rules file, if it set one.
    pub fn strict_mode(&self) -> Option<bool> {
        self.strict_mode
    }

    /// Sets the file-level strict flag.
    pub fn with_strict_mode(mut self, strict: Option<bool>) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Iterates rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, Rule)> + '_ {
        self.rules.iter().map(|(id, rule)| (*id, *rule))
    }

    /// Built-in defaults merged under the overrides in `yaml`.
    pub fn from_yaml_str(yaml: &str) -> ValidateResult<Self> {
        let doc: Value = serde_yaml::from_str(yaml)?;
        let mut set = Self::default();
        let map = match doc {
            Value::Null => return Ok(set),
            Value::Mapping(map) => map,
            _ => {
                return Err(ValidateError::InvalidRule {
                    rule: "<document>".into(),
                    reason: "expected a mapping of rule names".into(),
                });
            }
        };

        for (key, value) in map {
            let Some(key) = key.as_str() else {
                warn!(key = ?key, "ignoring non-string rule set key");
                continue;
            };
            set.apply(key, value)?;
        }
        set.check_bounds()?;
        Ok(set)
    }

    /// Reads `path`. A missing file, or one that is not valid YAML, yields
    /// the defaults with a warning. Unusable overrides are still errors.
    pub fn load(path: impl AsRef<Path>) -> ValidateResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "rule set file not found, using default thresholds");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ValidateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = match Self::from_yaml_str(&text) {
            Ok(set) => set,
            Err(ValidateError::Yaml(err)) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "cannot parse rule set file, using default thresholds"
                );
                return Ok(Self::default());
            }
            Err(err) => return Err(err),
        };
        debug!(path = %path.display(), "loaded rule set");
        Ok(set)
    }

    fn apply(&mut self, key: &str, value: Value) -> ValidateResult<()> {
        if key == "strict_mode" {
            self.strict_mode = Some(as_bool(key, &value)?);
            return Ok(());
        }
        if let Ok(id) = key.parse::<RuleId>() {
            let raw = match value {
                Value::Bool(enabled) => RawRule {
                    enabled: Some(enabled),
                    ..RawRule::default()
                },
                Value::Null => RawRule::default(),
                other => serde_yaml::from_value(other).map_err(|e| ValidateError::InvalidRule {
                    rule: key.into(),
                    reason: e.to_string(),
                })?,
            };
            return self.merge(id, &raw);
        }
        if let Some((ids, field)) = legacy_key(key) {
            let raw = match field {
                LegacyField::Enabled => RawRule {
                    enabled: Some(as_bool(key, &value)?),
                    ..RawRule::default()
                },
                LegacyField::Min => RawRule {
                    min: Some(as_f64(key, &value)?),
                    ..RawRule::default()
                },
                LegacyField::Max => RawRule {
                    max: Some(as_f64(key, &value)?),
                    ..RawRule::default()
                },
            };
            for &id in ids {
                self.merge(id, &raw)?;
            }
            return Ok(());
        }
        if key == "warn_on_validation_failure" {
            debug!(key, "ignoring obsolete rule set key");
            return Ok(());
        }
        warn!(rule = key, "unknown validation rule ignored");
        Ok(())
    }

    fn merge(&mut self, id: RuleId, raw: &RawRule) -> ValidateResult<()> {
        let mut rule = self.get(id);
        if let Some(enabled) = raw.enabled {
            rule.enabled = enabled;
        }
        if raw.min.is_some() {
            rule.min = raw.min;
        }
        if raw.max.is_some() {
            rule.max = raw.max;
        }
        if rule.min.is_some_and(|v| !v.is_finite()) || rule.max.is_some_and(|v| !v.is_finite()) {
            return Err(ValidateError::InvalidRule {
                rule: id.as_str().into(),
                reason: "bounds must be finite".into(),
            });
        }
        self.rules.insert(id, rule);
        Ok(())
    }

    // Runs once every override is in, so key order never matters.
    fn check_bounds(&self) -> ValidateResult<()> {
        for (id, rule) in self.iter() {
            if let (Some(min), Some(max)) = (rule.min, rule.max) {
                if min > max {
                    return Err(ValidateError::InvalidRule {
                        rule: id.as_str().into(),
                        reason: format!("min {min} is greater than max {max}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum LegacyField {
    Enabled,
    Min,
    Max,
}

const WHITE_POINT_RULES: &[RuleId] = &[
    RuleId::WhitePoint,
    RuleId::WhitePointTemperature,
    RuleId::WhitePointDuv,
];

/// Rules a flat key applies to. `check_white_point` gates the whole
/// white point block: coordinates, CCT and duv.
fn legacy_key(key: &str) -> Option<(&'static [RuleId], LegacyField)> {
    let hit: (&'static [RuleId], LegacyField) = match key {
        "check_primaries" => (&[RuleId::Primaries], LegacyField::Enabled),
        "check_white_point" => (WHITE_POINT_RULES, LegacyField::Enabled),
        "check_luminance" => (&[RuleId::Luminance], LegacyField::Enabled),
        "check_contrast" => (&[RuleId::ContrastRatio], LegacyField::Enabled),
        "min_contrast_ratio" => (&[RuleId::ContrastRatio], LegacyField::Min),
        "max_contrast_ratio" => (&[RuleId::ContrastRatio], LegacyField::Max),
        "min_white_point_temp" => (&[RuleId::WhitePointTemperature], LegacyField::Min),
        "max_white_point_temp" => (&[RuleId::WhitePointTemperature], LegacyField::Max),
        "max_duv_deviation" => (&[RuleId::WhitePointDuv], LegacyField::Max),
        _ => return None,
    };
    Some(hit)
}

fn as_bool(key: &str, value: &Value) -> ValidateResult<bool> {
    value.as_bool().ok_or_else(|| ValidateError::InvalidRule {
        rule: key.into(),
        reason: format!("expected a boolean, got {value:?}"),
    })
}

fn as_f64(key: &str, value: &Value) -> ValidateResult<f64> {
    value.as_f64().ok_or_else(|| ValidateError::InvalidRule {
        rule: key.into(),
        reason: format!("expected a number, got {value:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = RuleSet::default();
        assert_eq!(set.get(RuleId::ContrastRatio), Rule::bounded(100.0, 200_000.0));
        assert_eq!(set.get(RuleId::WhitePointDuv).max, Some(0.006));
        assert_eq!(set.get(RuleId::WhitePointDuv).min, None);
        assert_eq!(set.strict_mode(), None);
        assert_eq!(set.iter().count(), RuleId::ALL.len());
    }

    #[test]
    fn test_rule_names_roundtrip() {
        for id in RuleId::ALL {
            assert_eq!(id.as_str().parse::<RuleId>().unwrap(), id);
        }
        assert!("nonsense".parse::<RuleId>().is_err());
    }

    #[test]
    fn test_contains_inclusive() {
        let rule = Rule::bounded(100.0, 200_000.0);
        assert!(rule.contains(100.0));
        assert!(rule.contains(200_000.0));
        assert!(!rule.contains(200_000.1));
        assert!(!rule.contains(f64::NAN));
        assert!(Rule::ENABLED.contains(-1e300));
    }

    #[test]
    fn test_partial_override() {
        let yaml = "strict_mode: true\ncontrast_ratio:\n  min: 500\ngamut_coverage: false\n";
        let set = RuleSet::from_yaml_str(yaml).unwrap();
        assert_eq!(set.strict_mode(), Some(true));
        assert_eq!(set.get(RuleId::ContrastRatio), Rule::bounded(500.0, 200_000.0));
        assert!(!set.get(RuleId::GamutCoverage).enabled);
        assert_eq!(set.get(RuleId::EotfGamma), RuleId::EotfGamma.default_rule());
    }

    #[test]
    fn test_legacy_keys() {
        let yaml = "check_contrast: false\nmax_duv_deviation: 0.02\nmin_white_point_temp: 3000\nwarn_on_validation_failure: true\n";
        let set = RuleSet::from_yaml_str(yaml).unwrap();
        assert!(!set.get(RuleId::ContrastRatio).enabled);
        assert_eq!(set.get(RuleId::WhitePointDuv).max, Some(0.02));
        assert_eq!(set.get(RuleId::WhitePointTemperature).min, Some(3000.0));
    }

    #[test]
    fn test_legacy_bounds_in_any_order() {
        for yaml in [
            "min_contrast_ratio: 300000\nmax_contrast_ratio: 1000000\n",
            "max_contrast_ratio: 1000000\nmin_contrast_ratio: 300000\n",
        ] {
            let set = RuleSet::from_yaml_str(yaml).unwrap();
            assert_eq!(set.get(RuleId::ContrastRatio), Rule::bounded(300_000.0, 1_000_000.0));
        }
        assert!(matches!(
            RuleSet::from_yaml_str("min_contrast_ratio: 300000\n"),
            Err(ValidateError::InvalidRule { .. })
        ));
    }

    #[test]
    fn test_legacy_white_point_switch() {
        let set = RuleSet::from_yaml_str("check_white_point: false\n").unwrap();
        for id in [RuleId::WhitePoint, RuleId::WhitePointTemperature, RuleId::WhitePointDuv] {
            assert!(!set.get(id).enabled, "{id}");
        }
        assert!(set.get(RuleId::Primaries).enabled);
        assert_eq!(
            set.get(RuleId::WhitePointDuv).max,
            RuleId::WhitePointDuv.default_rule().max
        );
    }

    #[test]
    fn test_unknown_rules_ignored() {
        let set = RuleSet::from_yaml_str("frobnicate:\n  min: 1\n").unwrap();
        assert_eq!(set, RuleSet::default());
        assert_eq!(RuleSet::from_yaml_str("").unwrap(), RuleSet::default());
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(matches!(
            RuleSet::from_yaml_str("eotf_gamma:\n  min: 3\n  max: 2\n"),
            Err(ValidateError::InvalidRule { .. })
        ));
        assert!(matches!(
            RuleSet::from_yaml_str("eotf_gamma:\n  minimum: 3\n"),
            Err(ValidateError::InvalidRule { .. })
        ));
        assert!(matches!(
            RuleSet::from_yaml_str("strict_mode: maybe\n"),
            Err(ValidateError::InvalidRule { .. })
        ));
        assert!(RuleSet::from_yaml_str("- a\n- b\n").is_err());
    }

    #[test]
    fn test_range_label() {
        assert_eq!(Rule::bounded(1.8, 3.0).range_label(), "[1.8, 3]");
        assert_eq!(RuleId::WhitePointDuv.default_rule().range_label(), "[-, 0.006]");
    }
}
