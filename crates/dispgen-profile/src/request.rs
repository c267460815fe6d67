//! Display config file parsing.
//!
//! The YAML record is read into loosely typed `Raw*` structs and then
//! converted into a typed [`ProfileRequest`]. Name lookups (EOTF,
//! strategy, surround, adaptation) fail during that conversion with the
//! offending value.
//!
//! ```yaml
//! display:
//!   name: "Studio Monitor"
//! primaries:
//!   red: [0.680, 0.320]
//!   green: [0.265, 0.690]
//!   blue: [0.150, 0.060]
//! white_point: [0.3127, 0.3290]
//! luminance:
//!   black_level: 0.005
//!   peak_luminance: 1000
//! eotf:
//!   type: PQ
//! eotf_variants:
//!   - type: GAMMA
//!     gamma_value: 2.4
//! viewing_conditions:
//!   ambient_light: 5
//!   surround: dim
//! gamut_mapping: soft_clip
//! validation:
//!   strict_mode: false
//! ocio:
//!   base_config:
//!     type: studio
//!   output_config: studio_monitor.ocio
//! ```

use crate::error::{ProfileError, ProfileResult};
use dispgen_core::{
    BaseConfigSelector, ChromaticAdaptation, Chromaticity, ContentHint, DisplayCharacterization,
    Eotf, GamutMappingStrategy, LuminanceProfile, PrimarySet, Surround, ViewingConditions,
    WhitePoint,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Display config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "display_config.yaml";

/// `<name lower, spaces and dashes to _>_config.ocio`.
///
/// ```
/// use dispgen_profile::default_output_filename;
///
/// assert_eq!(default_output_filename("Studio Monitor-2"), "studio_monitor_2_config.ocio");
/// ```
pub fn default_output_filename(display_name: &str) -> String {
    let stem: String = display_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    format!("{stem}_config.ocio")
}

// ============================================================================
// Typed request
// ============================================================================

/// Everything one generation run needs besides rules and provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    /// Display being profiled.
    pub characterization: DisplayCharacterization,
    /// EOTFs to emit a color space for; never empty.
    pub variants: Vec<Eotf>,
    /// Output path from the record, if any.
    pub output: Option<PathBuf>,
    /// `validation.strict_mode` from the record, if present.
    pub strict: Option<bool>,
}

impl ProfileRequest {
    /// Request emitting only the characterization's own EOTF.
    pub fn new(characterization: DisplayCharacterization) -> Self {
        let variants = vec![characterization.eotf];
        Self {
            characterization,
            variants,
            output: None,
            strict: None,
        }
    }

    /// Replaces the variant list. An empty list keeps the record EOTF.
    pub fn with_variants(mut self, variants: Vec<Eotf>) -> Self {
        self.variants = if variants.is_empty() {
            vec![self.characterization.eotf]
        } else {
            variants
        };
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the record-level strict flag.
    pub fn with_strict(mut self, strict: Option<bool>) -> Self {
        self.strict = strict;
        self
    }

    /// Configured output path, or [`default_output_filename`].
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_filename(&self.characterization.name)))
    }

    /// Parses a display config document.
    pub fn from_yaml_str(yaml: &str) -> ProfileResult<Self> {
        let raw: RawDisplayConfig = serde_yaml::from_str(yaml)?;
        raw.into_request()
    }

    /// Reads and parses a display config file.
    pub fn load(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let request = Self::from_yaml_str(&text)?;
        debug!(
            path = %path.display(),
            display = %request.characterization.name,
            variants = request.variants.len(),
            "request::load"
        );
        Ok(request)
    }
}

// ============================================================================
// Raw document
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawDisplayConfig {
    display: RawDisplay,
    primaries: RawPrimaries,
    white_point: [f64; 2],
    luminance: RawLuminance,
    eotf: RawEotf,
    #[serde(default)]
    eotf_variants: Vec<RawEotf>,
    #[serde(default)]
    viewing_conditions: RawViewing,
    /// Older records put viewing overrides here; they win over
    /// `viewing_conditions`.
    #[serde(default)]
    advanced: RawViewing,
    #[serde(default)]
    gamut_mapping: Option<String>,
    #[serde(default)]
    gamut_mapping_hint: Option<String>,
    #[serde(default)]
    chromatic_adaptation: Option<String>,
    #[serde(default)]
    validation: RawValidation,
    #[serde(default)]
    ocio: RawOcio,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawPrimaries {
    red: [f64; 2],
    green: [f64; 2],
    blue: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RawLuminance {
    black_level: f64,
    peak_luminance: f64,
}

#[derive(Debug, Deserialize)]
struct RawEotf {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    gamma_value: Option<f64>,
}

impl RawEotf {
    fn to_eotf(&self) -> ProfileResult<Eotf> {
        Ok(Eotf::from_parts(&self.kind, self.gamma_value)?)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawViewing {
    #[serde(default)]
    ambient_light: Option<f64>,
    #[serde(default)]
    viewing_angle: Option<f64>,
    #[serde(default)]
    surround: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawValidation {
    #[serde(default)]
    strict_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOcio {
    #[serde(default)]
    base_config: RawBaseConfig,
    #[serde(default)]
    output_config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBaseConfig {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    config_version: Option<String>,
    #[serde(default)]
    aces_version: Option<String>,
    #[serde(default)]
    ocio_version: Option<String>,
}

impl RawBaseConfig {
    fn into_selector(self) -> BaseConfigSelector {
        BaseConfigSelector::new(
            self.kind.unwrap_or_else(|| BaseConfigSelector::DEFAULT_KIND.into()),
            self.config_version
                .unwrap_or_else(|| BaseConfigSelector::DEFAULT_CONFIG_VERSION.into()),
            self.aces_version
                .unwrap_or_else(|| BaseConfigSelector::DEFAULT_ACES_VERSION.into()),
            self.ocio_version
                .unwrap_or_else(|| BaseConfigSelector::DEFAULT_OCIO_VERSION.into()),
        )
    }
}

impl RawDisplayConfig {
    fn into_request(self) -> ProfileResult<ProfileRequest> {
        let defaults = ViewingConditions::default();
        let surround = match self.advanced.surround.or(self.viewing_conditions.surround) {
            Some(name) => name.parse::<Surround>()?,
            None => defaults.surround,
        };
        let viewing = ViewingConditions {
            ambient_light: self
                .advanced
                .ambient_light
                .or(self.viewing_conditions.ambient_light)
                .unwrap_or(defaults.ambient_light),
            viewing_angle: self
                .advanced
                .viewing_angle
                .or(self.viewing_conditions.viewing_angle)
                .unwrap_or(defaults.viewing_angle),
            surround,
        };

        let gamut_mapping = match &self.gamut_mapping {
            Some(name) => name.parse::<GamutMappingStrategy>()?,
            None => GamutMappingStrategy::default(),
        };
        let content_hint = self
            .gamut_mapping_hint
            .as_deref()
            .map(str::parse::<ContentHint>)
            .transpose()?;
        let adaptation = match &self.chromatic_adaptation {
            Some(name) => name.parse::<ChromaticAdaptation>()?,
            None => ChromaticAdaptation::default(),
        };

        let eotf = self.eotf.to_eotf()?;
        let variants = self
            .eotf_variants
            .iter()
            .map(RawEotf::to_eotf)
            .collect::<ProfileResult<Vec<_>>>()?;

        let [wx, wy] = self.white_point;
        let characterization = DisplayCharacterization::builder(self.display.name)
            .primaries(PrimarySet::new(
                self.primaries.red,
                self.primaries.green,
                self.primaries.blue,
            ))
            .white_point(WhitePoint::new(Chromaticity::new(wx, wy)))
            .luminance(LuminanceProfile::new(
                self.luminance.black_level,
                self.luminance.peak_luminance,
            ))
            .eotf(eotf)
            .viewing(viewing)
            .gamut_mapping(gamut_mapping)
            .content_hint(content_hint)
            .adaptation(adaptation)
            .base_config(self.ocio.base_config.into_selector())
            .build();

        let mut request = ProfileRequest::new(characterization)
            .with_variants(variants)
            .with_strict(self.validation.strict_mode);
        request.output = self.ocio.output_config;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
display:
  name: "Studio Monitor"
primaries:
  red: [0.64, 0.33]
  green: [0.30, 0.60]
  blue: [0.15, 0.06]
white_point: [0.3127, 0.3290]
luminance:
  black_level: 0.1
  peak_luminance: 100
eotf:
  type: GAMMA
  gamma_value: 2.4
"#;

    #[test]
    fn test_minimal_record() {
        let req = ProfileRequest::from_yaml_str(MINIMAL).unwrap();
        let c = &req.characterization;
        assert_eq!(c.name, "Studio Monitor");
        assert_eq!(c.eotf, Eotf::Gamma(2.4));
        assert_eq!(req.variants, vec![Eotf::Gamma(2.4)]);
        assert_eq!(c.gamut_mapping, GamutMappingStrategy::Clip);
        assert_eq!(c.viewing, ViewingConditions::default());
        assert_eq!(c.base_config, BaseConfigSelector::default());
        assert_eq!(req.strict, None);
        assert_eq!(req.output_path(), PathBuf::from("studio_monitor_config.ocio"));
    }

    #[test]
    fn test_full_record() {
        let yaml = format!(
            "{MINIMAL}
eotf_variants:
  - type: PQ
  - type: hlg
viewing_conditions:
  ambient_light: 10
  viewing_angle: 30
  surround: dark
advanced:
  ambient_light: 2
gamut_mapping: Soft-Clip
gamut_mapping_hint: graphics
chromatic_adaptation: bradford
validation:
  strict_mode: true
ocio:
  base_config:
    type: aces
  output_config: out/monitor.ocio
"
        );
        let req = ProfileRequest::from_yaml_str(&yaml).unwrap();
        let c = &req.characterization;
        assert_eq!(req.variants, vec![Eotf::Pq, Eotf::Hlg]);
        assert_eq!(c.viewing.ambient_light, 2.0);
        assert_eq!(c.viewing.viewing_angle, 30.0);
        assert_eq!(c.viewing.surround, Surround::Dark);
        assert_eq!(c.gamut_mapping, GamutMappingStrategy::SoftClip);
        assert_eq!(c.content_hint, Some(ContentHint::Graphics));
        assert_eq!(c.adaptation, ChromaticAdaptation::Bradford);
        assert_eq!(c.base_config.key(), "aces-config-v2.1.0_aces-v1.3_ocio-v2.3");
        assert_eq!(req.strict, Some(true));
        assert_eq!(req.output_path(), PathBuf::from("out/monitor.ocio"));
    }

    #[test]
    fn test_gamma_without_value_is_rejected() {
        let yaml = MINIMAL.replace("  gamma_value: 2.4\n", "");
        let err = ProfileRequest::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Core(dispgen_core::Error::InvalidEotfParameter { .. })
        ));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let yaml = format!("{MINIMAL}gamut_mapping: magic\n");
        let err = ProfileRequest::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Core(dispgen_core::Error::UnknownGamutStrategy { .. })
        ));
    }

    #[test]
    fn test_missing_section_is_yaml_error() {
        let yaml = MINIMAL.replace("white_point: [0.3127, 0.3290]\n", "");
        assert!(matches!(
            ProfileRequest::from_yaml_str(&yaml),
            Err(ProfileError::Yaml(_))
        ));
    }

    #[test]
    fn test_empty_variants_keep_record_eotf() {
        let disp = DisplayCharacterization::builder("X").eotf(Eotf::Pq).build();
        let req = ProfileRequest::new(disp).with_variants(Vec::new());
        assert_eq!(req.variants, vec![Eotf::Pq]);
    }

    #[test]
    fn test_default_output_filename() {
        assert_eq!(default_output_filename("My Display"), "my_display_config.ocio");
        assert_eq!(default_output_filename("OLED-55 Pro"), "oled_55_pro_config.ocio");
    }
}
