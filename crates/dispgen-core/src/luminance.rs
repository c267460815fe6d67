//! Display luminance range.

/// Black level and peak luminance in cd/m².
///
/// Positivity and ordering are checked by the validator, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceProfile {
    /// Luminance of code value 0.
    pub black_level: f64,
    /// Luminance of full white.
    pub peak_luminance: f64,
}

impl LuminanceProfile {
    /// Creates a luminance profile.
    pub const fn new(black_level: f64, peak_luminance: f64) -> Self {
        Self {
            black_level,
            peak_luminance,
        }
    }

    /// `peak / black`. Infinite for a zero black level.
    ///
    /// ```rust
    /// use dispgen_core::LuminanceProfile;
    ///
    /// let lum = LuminanceProfile::new(0.005, 1000.0);
    /// assert!((lum.contrast_ratio() - 200_000.0).abs() < 1e-6);
    /// ```
    pub fn contrast_ratio(&self) -> f64 {
        if self.black_level == 0.0 {
            return f64::INFINITY;
        }
        self.peak_luminance / self.black_level
    }

    /// True when both values are positive and peak exceeds black.
    pub fn is_valid(&self) -> bool {
        self.black_level > 0.0 && self.peak_luminance > 0.0 && self.peak_luminance > self.black_level
    }
}

impl Default for LuminanceProfile {
    /// SDR reference: 0.1 black, 100 cd/m² peak.
    fn default() -> Self {
        Self::new(0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast() {
        assert_eq!(LuminanceProfile::new(0.001, 1000.0).contrast_ratio(), 1_000_000.0);
        assert!(LuminanceProfile::new(0.0, 1000.0).contrast_ratio().is_infinite());
    }

    #[test]
    fn test_validity() {
        assert!(LuminanceProfile::new(0.05, 600.0).is_valid());
        assert!(!LuminanceProfile::new(0.0, 600.0).is_valid());
        assert!(!LuminanceProfile::new(10.0, 5.0).is_valid());
    }
}
