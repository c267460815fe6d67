//! The display characterization aggregate.
//!
//! Built once per run and never mutated. Use the builder:
//!
//! ```rust
//! use dispgen_core::*;
//!
//! let disp = DisplayCharacterization::builder("Studio Monitor")
//!     .primaries(PrimarySet::new([0.64, 0.33], [0.30, 0.60], [0.15, 0.06]))
//!     .luminance(LuminanceProfile::new(0.05, 100.0))
//!     .eotf(Eotf::gamma(2.4).unwrap())
//!     .build();
//! assert_eq!(disp.white_point.xy, Chromaticity::D65);
//! assert_eq!(disp.gamut_mapping, GamutMappingStrategy::Clip);
//! ```

use crate::{
    BaseConfigSelector, ChromaticAdaptation, Chromaticity, ContentHint, Eotf,
    GamutMappingStrategy, LuminanceProfile, PrimarySet, ViewingConditions, WhitePoint,
};

/// Measured behavior of one display plus how it should be profiled.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCharacterization {
    /// Display name, used in colorspace and display names.
    pub name: String,
    /// Measured primaries.
    pub primaries: PrimarySet,
    /// Measured white point.
    pub white_point: WhitePoint,
    /// Black level and peak.
    pub luminance: LuminanceProfile,
    /// Native transfer function.
    pub eotf: Eotf,
    /// Viewing environment.
    pub viewing: ViewingConditions,
    /// Gamut mapping strategy.
    pub gamut_mapping: GamutMappingStrategy,
    /// Content hint for the adaptive strategy.
    pub content_hint: Option<ContentHint>,
    /// White adaptation toward the D65 reference.
    pub adaptation: ChromaticAdaptation,
    /// Base config to merge into.
    pub base_config: BaseConfigSelector,
}

impl DisplayCharacterization {
    /// Starts a builder with Rec.709 primaries, D65 white, SDR luminance
    /// and gamma 2.4.
    pub fn builder(name: impl Into<String>) -> DisplayCharacterizationBuilder {
        DisplayCharacterizationBuilder::new(name)
    }
}

/// Builder for [`DisplayCharacterization`].
#[derive(Debug, Clone)]
pub struct DisplayCharacterizationBuilder {
    inner: DisplayCharacterization,
}

impl DisplayCharacterizationBuilder {
    /// New builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: DisplayCharacterization {
                name: name.into(),
                primaries: PrimarySet::new([0.64, 0.33], [0.30, 0.60], [0.15, 0.06]),
                white_point: WhitePoint::new(Chromaticity::D65),
                luminance: LuminanceProfile::default(),
                eotf: Eotf::Gamma(2.4),
                viewing: ViewingConditions::default(),
                gamut_mapping: GamutMappingStrategy::default(),
                content_hint: None,
                adaptation: ChromaticAdaptation::default(),
                base_config: BaseConfigSelector::default(),
            },
        }
    }

    /// Sets the primaries.
    pub fn primaries(mut self, primaries: PrimarySet) -> Self {
        self.inner.primaries = primaries;
        self
    }

    /// Sets the white point.
    pub fn white_point(mut self, white_point: impl Into<WhitePoint>) -> Self {
        self.inner.white_point = white_point.into();
        self
    }

    /// Sets the luminance profile.
    pub fn luminance(mut self, luminance: LuminanceProfile) -> Self {
        self.inner.luminance = luminance;
        self
    }

    /// Sets the EOTF.
    pub fn eotf(mut self, eotf: Eotf) -> Self {
        self.inner.eotf = eotf;
        self
    }

    /// Sets the viewing conditions.
    pub fn viewing(mut self, viewing: ViewingConditions) -> Self {
        self.inner.viewing = viewing;
        self
    }

    /// Sets the gamut mapping strategy.
    pub fn gamut_mapping(mut self, strategy: GamutMappingStrategy) -> Self {
        self.inner.gamut_mapping = strategy;
        self
    }

    /// Sets the content hint.
    pub fn content_hint(mut self, hint: Option<ContentHint>) -> Self {
        self.inner.content_hint = hint;
        self
    }

    /// Sets the chromatic adaptation.
    pub fn adaptation(mut self, adaptation: ChromaticAdaptation) -> Self {
        self.inner.adaptation = adaptation;
        self
    }

    /// Sets the base config selector.
    pub fn base_config(mut self, selector: BaseConfigSelector) -> Self {
        self.inner.base_config = selector;
        self
    }

    /// Finishes.
    pub fn build(self) -> DisplayCharacterization {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let d = DisplayCharacterization::builder("OLED")
            .eotf(Eotf::Pq)
            .gamut_mapping(GamutMappingStrategy::SoftClip)
            .content_hint(Some(ContentHint::Specular))
            .build();
        assert_eq!(d.name, "OLED");
        assert_eq!(d.eotf, Eotf::Pq);
        assert_eq!(d.gamut_mapping, GamutMappingStrategy::SoftClip);
        assert_eq!(d.content_hint, Some(ContentHint::Specular));
        assert_eq!(d.base_config, BaseConfigSelector::default());
    }
}
