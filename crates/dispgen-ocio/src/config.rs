//! In-memory OCIO v2 config.
//!
//! Holds exactly what the writer emits: roles, scene and display color
//! spaces, displays, the active lists and view transforms. Insertion
//! order is kept everywhere so the written document is stable.

use crate::colorspace::ColorSpace;
use crate::display::{Display, ViewTransform};
use crate::error::{OcioError, OcioResult};
use std::fmt;

/// `ocio_profile_version` of a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProfileVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl ProfileVersion {
    /// OCIO 2.0.
    pub const V2_0: Self = Self::new(2, 0);
    /// OCIO 2.3.
    pub const V2_3: Self = Self::new(2, 3);

    /// Creates a version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses `2.3`, `v2.3` or `2`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches(['v', 'V']);
        let (major, minor) = s.split_once('.').unwrap_or((s, "0"));
        Some(Self::new(major.parse().ok()?, minor.parse().ok()?))
    }
}

impl Default for ProfileVersion {
    fn default() -> Self {
        Self::V2_0
    }
}

impl fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// An OCIO config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    name: String,
    description: String,
    version: ProfileVersion,
    roles: Vec<(String, String)>,
    colorspaces: Vec<ColorSpace>,
    displays: Vec<Display>,
    active_displays: Vec<String>,
    active_views: Vec<String>,
    view_transforms: Vec<ViewTransform>,
    default_view_transform: Option<String>,
    inactive_colorspaces: Vec<String>,
}

impl Config {
    /// Creates an empty config.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Returns the config name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the config name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the description.
    pub fn set_description(&mut self, desc: impl Into<String>) {
        self.description = desc.into();
    }

    /// Returns the profile version.
    #[inline]
    pub fn version(&self) -> ProfileVersion {
        self.version
    }

    /// Sets the profile version.
    pub fn set_version(&mut self, version: ProfileVersion) {
        self.version = version;
    }

    // ========================================================================
    // Roles
    // ========================================================================

    /// Roles in definition order.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(r, c)| (r.as_str(), c.as_str()))
    }

    /// Color space name a role maps to.
    pub fn role(&self, role: &str) -> Option<&str> {
        self.roles
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, c)| c.as_str())
    }

    /// Defines or replaces a role.
    pub fn set_role(&mut self, role: impl Into<String>, colorspace: impl Into<String>) {
        let role = role.into();
        let colorspace = colorspace.into();
        match self.roles.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = colorspace,
            None => self.roles.push((role, colorspace)),
        }
    }

    // ========================================================================
    // Color spaces
    // ========================================================================

    /// All color spaces, scene and display, in insertion order.
    #[inline]
    pub fn colorspaces(&self) -> &[ColorSpace] {
        &self.colorspaces
    }

    /// Scene-referred color spaces.
    pub fn scene_colorspaces(&self) -> impl Iterator<Item = &ColorSpace> {
        self.colorspaces.iter().filter(|cs| !cs.is_display())
    }

    /// Display-referred color spaces.
    pub fn display_colorspaces(&self) -> impl Iterator<Item = &ColorSpace> {
        self.colorspaces.iter().filter(|cs| cs.is_display())
    }

    /// Looks up a color space by name or alias.
    pub fn colorspace(&self, name: &str) -> Option<&ColorSpace> {
        self.colorspaces.iter().find(|cs| cs.matches_name(name))
    }

    /// Adds a color space. Fails if its name or any alias is taken.
    pub fn add_colorspace(&mut self, cs: ColorSpace) -> OcioResult<()> {
        if let Some(taken) = cs.all_names().find(|n| self.colorspace(n).is_some()) {
            return Err(OcioError::DuplicateColorSpace {
                name: taken.to_string(),
            });
        }
        self.colorspaces.push(cs);
        Ok(())
    }

    /// Color spaces hidden from menus.
    #[inline]
    pub fn inactive_colorspaces(&self) -> &[String] {
        &self.inactive_colorspaces
    }

    /// Hides a color space from menus.
    pub fn add_inactive_colorspace(&mut self, name: impl Into<String>) {
        self.inactive_colorspaces.push(name.into());
    }

    // ========================================================================
    // Displays
    // ========================================================================

    /// All displays.
    #[inline]
    pub fn displays(&self) -> &[Display] {
        &self.displays
    }

    /// Looks up a display by name.
    pub fn display(&self, name: &str) -> Option<&Display> {
        self.displays.iter().find(|d| d.name() == name)
    }

    /// Adds a display. Fails if the name is taken.
    pub fn add_display(&mut self, display: Display) -> OcioResult<()> {
        if self.display(display.name()).is_some() {
            return Err(OcioError::DuplicateDisplay {
                name: display.name().to_string(),
            });
        }
        self.displays.push(display);
        Ok(())
    }

    /// Active display list. Empty means every display is active.
    #[inline]
    pub fn active_displays(&self) -> &[String] {
        &self.active_displays
    }

    /// Active view list. Empty means every view is active.
    #[inline]
    pub fn active_views(&self) -> &[String] {
        &self.active_views
    }

    /// Replaces the active display list.
    pub fn set_active_displays(&mut self, names: Vec<String>) {
        self.active_displays = names;
    }

    /// Replaces the active view list.
    pub fn set_active_views(&mut self, names: Vec<String>) {
        self.active_views = names;
    }

    /// Makes `name` selectable when the active display list is
    /// restricted. Returns true if the list changed.
    pub fn activate_display(&mut self, name: &str) -> bool {
        activate(&mut self.active_displays, name)
    }

    /// Makes `name` selectable when the active view list is restricted.
    /// Returns true if the list changed.
    pub fn activate_view(&mut self, name: &str) -> bool {
        activate(&mut self.active_views, name)
    }

    // ========================================================================
    // View transforms
    // ========================================================================

    /// Shared view transforms.
    #[inline]
    pub fn view_transforms(&self) -> &[ViewTransform] {
        &self.view_transforms
    }

    /// Looks up a view transform by name.
    pub fn view_transform(&self, name: &str) -> Option<&ViewTransform> {
        self.view_transforms.iter().find(|v| v.name() == name)
    }

    /// Adds a view transform.
    pub fn add_view_transform(&mut self, vt: ViewTransform) {
        self.view_transforms.push(vt);
    }

    /// Default view transform name.
    #[inline]
    pub fn default_view_transform(&self) -> Option<&str> {
        self.default_view_transform.as_deref()
    }

    /// Sets the default view transform.
    pub fn set_default_view_transform(&mut self, name: impl Into<String>) {
        self.default_view_transform = Some(name.into());
    }
}

fn activate(list: &mut Vec<String>, name: &str) -> bool {
    if list.is_empty() || list.iter().any(|n| n == name) {
        return false;
    }
    list.push(name.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReferenceSpace, View};

    #[test]
    fn roles_keep_order_and_replace() {
        let mut config = Config::new("test");
        config.set_role("scene_linear", "ACEScg");
        config.set_role("data", "Raw");
        config.set_role("scene_linear", "Linear Rec.709");
        let roles: Vec<_> = config.roles().collect();
        assert_eq!(roles, [("scene_linear", "Linear Rec.709"), ("data", "Raw")]);
        assert_eq!(config.role("data"), Some("Raw"));
    }

    #[test]
    fn duplicate_colorspace_by_alias() {
        let mut config = Config::new("test");
        config
            .add_colorspace(ColorSpace::builder("ACEScg").alias("lin_ap1").build())
            .unwrap();
        let err = config
            .add_colorspace(ColorSpace::builder("Other").alias("LIN_AP1").build())
            .unwrap_err();
        assert!(matches!(err, OcioError::DuplicateColorSpace { name } if name == "LIN_AP1"));
        assert_eq!(config.colorspaces().len(), 1);
    }

    #[test]
    fn scene_and_display_split() {
        let mut config = Config::new("test");
        config.add_colorspace(ColorSpace::new("ACEScg")).unwrap();
        config
            .add_colorspace(
                ColorSpace::builder("sRGB - Display")
                    .reference_space(ReferenceSpace::Display)
                    .build(),
            )
            .unwrap();
        assert_eq!(config.scene_colorspaces().count(), 1);
        assert_eq!(config.display_colorspaces().count(), 1);
    }

    #[test]
    fn duplicate_display() {
        let mut config = Config::new("test");
        config
            .add_display(Display::new("sRGB").with_view(View::new("Raw", "Raw")))
            .unwrap();
        assert!(matches!(
            config.add_display(Display::new("sRGB")),
            Err(OcioError::DuplicateDisplay { .. })
        ));
    }

    #[test]
    fn activate_only_when_restricted() {
        let mut config = Config::new("test");
        assert!(!config.activate_display("New"));
        assert!(config.active_displays().is_empty());

        config.set_active_displays(vec!["sRGB - Display".into()]);
        assert!(config.activate_display("New"));
        assert!(!config.activate_display("New"));
        assert_eq!(config.active_displays().len(), 2);
    }

    #[test]
    fn profile_version_parse() {
        assert_eq!(ProfileVersion::parse("v2.3"), Some(ProfileVersion::V2_3));
        assert_eq!(ProfileVersion::parse("2"), Some(ProfileVersion::V2_0));
        assert_eq!(ProfileVersion::parse("two"), None);
        assert_eq!(ProfileVersion::V2_3.to_string(), "2.3");
    }
}
