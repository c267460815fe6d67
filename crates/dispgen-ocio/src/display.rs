//! Displays, views and view transforms.
//!
//! A view either points straight at a color space, or pairs a shared
//! view transform with a display color space (OCIO v2):
//!
//! ```
//! use dispgen_ocio::{Display, View};
//!
//! let display = Display::new("Studio Monitor - GAMMA - Display")
//!     .with_view(View::new("Output", "Studio Monitor - GAMMA - Display"));
//!
//! assert_eq!(display.views().len(), 1);
//! assert_eq!(display.default_view(), Some("Output"));
//! ```

use crate::transform::Transform;

/// A view within a display.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: String,
    colorspace: Option<String>,
    view_transform: Option<String>,
    display_colorspace: Option<String>,
    description: String,
}

impl View {
    /// View that targets `colorspace` directly.
    pub fn new(name: impl Into<String>, colorspace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colorspace: Some(colorspace.into()),
            view_transform: None,
            display_colorspace: None,
            description: String::new(),
        }
    }

    /// View built from a view transform and a display color space.
    pub fn with_view_transform(
        name: impl Into<String>,
        view_transform: impl Into<String>,
        display_colorspace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            colorspace: None,
            view_transform: Some(view_transform.into()),
            display_colorspace: Some(display_colorspace.into()),
            description: String::new(),
        }
    }

    /// Sets description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Returns the view name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the direct target color space.
    #[inline]
    pub fn colorspace(&self) -> Option<&str> {
        self.colorspace.as_deref()
    }

    /// Returns the view transform name.
    #[inline]
    pub fn view_transform(&self) -> Option<&str> {
        self.view_transform.as_deref()
    }

    /// Returns the display color space paired with the view transform.
    #[inline]
    pub fn display_colorspace(&self) -> Option<&str> {
        self.display_colorspace.as_deref()
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A display device with its views.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    name: String,
    views: Vec<View>,
}

impl Display {
    /// Creates a display with no views.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            views: Vec::new(),
        }
    }

    /// Adds a view (builder style).
    pub fn with_view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    /// Adds a view.
    pub fn add_view(&mut self, view: View) {
        self.views.push(view);
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all views.
    #[inline]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Gets a view by name.
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// First view, which hosts treat as the default.
    #[inline]
    pub fn default_view(&self) -> Option<&str> {
        self.views.first().map(|v| v.name.as_str())
    }
}

/// Shared view transform (OCIO v2).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    name: String,
    family: String,
    description: String,
    from_scene_reference: Option<Transform>,
    to_scene_reference: Option<Transform>,
}

impl ViewTransform {
    /// Creates an empty view transform.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family: String::new(),
            description: String::new(),
            from_scene_reference: None,
            to_scene_reference: None,
        }
    }

    /// Sets family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Sets description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the scene reference to display reference transform.
    pub fn with_from_scene_reference(mut self, t: Transform) -> Self {
        self.from_scene_reference = Some(t);
        self
    }

    /// Sets the display reference to scene reference transform.
    pub fn with_to_scene_reference(mut self, t: Transform) -> Self {
        self.to_scene_reference = Some(t);
        self
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the family.
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the transform from the scene reference.
    #[inline]
    pub fn from_scene_reference(&self) -> Option<&Transform> {
        self.from_scene_reference.as_ref()
    }

    /// Returns the transform to the scene reference.
    #[inline]
    pub fn to_scene_reference(&self) -> Option<&Transform> {
        self.to_scene_reference.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_forms() {
        let direct = View::new("Output", "Monitor");
        assert_eq!(direct.colorspace(), Some("Monitor"));
        assert_eq!(direct.view_transform(), None);

        let shared = View::with_view_transform("ACES 1.0 - SDR Video", "SDR", "sRGB - Display");
        assert_eq!(shared.colorspace(), None);
        assert_eq!(shared.display_colorspace(), Some("sRGB - Display"));
    }

    #[test]
    fn view_lookup_ignores_case() {
        let display = Display::new("sRGB")
            .with_view(View::new("Film", "sRGB"))
            .with_view(View::new("Raw", "Raw"));
        assert!(display.view("raw").is_some());
        assert_eq!(display.default_view(), Some("Film"));
    }
}
