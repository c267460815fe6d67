//! Color space definition.
//!
//! A color space is either scene-referred (written under `colorspaces`)
//! or display-referred (written under `display_colorspaces`), with
//! optional transforms to and from its reference space.
//!
//! ```
//! use dispgen_ocio::{BitDepth, ColorSpace, Encoding, ReferenceSpace, Transform};
//!
//! let cs = ColorSpace::builder("Monitor - GAMMA - Display")
//!     .reference_space(ReferenceSpace::Display)
//!     .family("Display")
//!     .encoding(Encoding::Sdr)
//!     .bit_depth(BitDepth::F32)
//!     .category("display")
//!     .from_reference(Transform::exponent(2.4).inverse())
//!     .build();
//!
//! assert!(cs.is_display());
//! assert_eq!(cs.encoding(), Some(Encoding::Sdr));
//! ```

use crate::transform::Transform;

/// Color encoding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Scene-referred linear.
    SceneLinear,
    /// Display-referred linear.
    DisplayLinear,
    /// Logarithmic encoding.
    Log,
    /// SDR video encoding.
    Sdr,
    /// HDR video encoding (PQ, HLG).
    Hdr,
    /// Non-color data.
    Data,
}

impl Encoding {
    /// Returns the config string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SceneLinear => "scene-linear",
            Self::DisplayLinear => "display-linear",
            Self::Log => "log",
            Self::Sdr => "sdr-video",
            Self::Hdr => "hdr-video",
            Self::Data => "data",
        }
    }
}

/// Bit depth hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    Uint8,
    /// 10-bit unsigned integer.
    Uint10,
    /// 12-bit unsigned integer.
    Uint12,
    /// 16-bit unsigned integer.
    Uint16,
    /// 16-bit float.
    F16,
    /// 32-bit float.
    #[default]
    F32,
}

impl BitDepth {
    /// Returns the config string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uint8 => "8ui",
            Self::Uint10 => "10ui",
            Self::Uint12 => "12ui",
            Self::Uint16 => "16ui",
            Self::F16 => "16f",
            Self::F32 => "32f",
        }
    }
}

/// Which reference a color space converts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceSpace {
    /// Scene-referred reference (e.g. ACES2065-1).
    #[default]
    Scene,
    /// Display-referred reference (e.g. CIE-XYZ-D65).
    Display,
}

/// Color space definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpace {
    name: String,
    aliases: Vec<String>,
    description: String,
    family: String,
    encoding: Option<Encoding>,
    bit_depth: Option<BitDepth>,
    categories: Vec<String>,
    is_data: bool,
    reference_space: ReferenceSpace,
    to_reference: Option<Transform>,
    from_reference: Option<Transform>,
}

impl ColorSpace {
    /// Creates a scene-referred color space with no transforms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            family: String::new(),
            encoding: None,
            bit_depth: None,
            categories: Vec::new(),
            is_data: false,
            reference_space: ReferenceSpace::Scene,
            to_reference: None,
            from_reference: None,
        }
    }

    /// Creates a builder.
    #[inline]
    pub fn builder(name: impl Into<String>) -> ColorSpaceBuilder {
        ColorSpaceBuilder::new(name)
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all aliases.
    #[inline]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the family path (may be empty).
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the encoding.
    #[inline]
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    /// Returns the bit depth hint.
    #[inline]
    pub fn bit_depth(&self) -> Option<BitDepth> {
        self.bit_depth
    }

    /// Returns the categories.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Checks if this is a data (non-color) space.
    #[inline]
    pub fn is_data(&self) -> bool {
        self.is_data
    }

    /// Returns the reference space.
    #[inline]
    pub fn reference_space(&self) -> ReferenceSpace {
        self.reference_space
    }

    /// True for display-referred color spaces.
    #[inline]
    pub fn is_display(&self) -> bool {
        self.reference_space == ReferenceSpace::Display
    }

    /// Returns the transform to the reference space.
    #[inline]
    pub fn to_reference(&self) -> Option<&Transform> {
        self.to_reference.as_ref()
    }

    /// Returns the transform from the reference space.
    #[inline]
    pub fn from_reference(&self) -> Option<&Transform> {
        self.from_reference.as_ref()
    }

    /// Checks if a name or alias matches, ignoring ASCII case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Name followed by aliases.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Builder for [`ColorSpace`].
#[derive(Debug)]
pub struct ColorSpaceBuilder {
    inner: ColorSpace,
}

impl ColorSpaceBuilder {
    /// Creates a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: ColorSpace::new(name),
        }
    }

    /// Adds an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.inner.aliases.push(alias.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.inner.description = desc.into();
        self
    }

    /// Sets the family path.
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.inner.family = family.into();
        self
    }

    /// Sets the encoding. [`Encoding::Data`] also marks the space as data.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.inner.encoding = Some(encoding);
        if encoding == Encoding::Data {
            self.inner.is_data = true;
        }
        self
    }

    /// Sets the bit depth.
    pub fn bit_depth(mut self, depth: BitDepth) -> Self {
        self.inner.bit_depth = Some(depth);
        self
    }

    /// Adds a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.inner.categories.push(category.into());
        self
    }

    /// Marks as data (non-color) space.
    pub fn is_data(mut self, is_data: bool) -> Self {
        self.inner.is_data = is_data;
        self
    }

    /// Sets the reference space.
    pub fn reference_space(mut self, space: ReferenceSpace) -> Self {
        self.inner.reference_space = space;
        self
    }

    /// Sets the transform to the reference space.
    pub fn to_reference(mut self, transform: Transform) -> Self {
        self.inner.to_reference = Some(transform);
        self
    }

    /// Sets the transform from the reference space.
    pub fn from_reference(mut self, transform: Transform) -> Self {
        self.inner.from_reference = Some(transform);
        self
    }

    /// Builds the color space.
    pub fn build(self) -> ColorSpace {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_colorspace() {
        let cs = ColorSpace::builder("ACEScg")
            .alias("ACES - ACEScg")
            .family("ACES")
            .encoding(Encoding::SceneLinear)
            .description("ACES CG working space")
            .build();

        assert_eq!(cs.name(), "ACEScg");
        assert_eq!(cs.family(), "ACES");
        assert!(cs.matches_name("acescg"));
        assert!(cs.matches_name("ACES - ACEScg"));
        assert!(!cs.is_display());
        assert_eq!(cs.all_names().count(), 2);
    }

    #[test]
    fn data_colorspace() {
        let cs = ColorSpace::builder("Raw").encoding(Encoding::Data).build();
        assert!(cs.is_data());
    }

    #[test]
    fn config_strings() {
        assert_eq!(Encoding::Hdr.as_str(), "hdr-video");
        assert_eq!(Encoding::Sdr.as_str(), "sdr-video");
        assert_eq!(BitDepth::F32.as_str(), "32f");
        assert_eq!(BitDepth::Uint10.as_str(), "10ui");
    }
}
