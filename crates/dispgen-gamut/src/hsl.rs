//! HSL decomposition used by the saturation strategy.
//!
//! Hue comes from channel differences and chroma from the channel
//! spread, so both stay defined for out-of-range input. Saturation is
//! only meaningful when lightness lies strictly inside (0, 1).

/// Hue in degrees [0, 360), saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue, degrees.
    pub h: f64,
    /// Saturation; may exceed 1 for out-of-gamut input.
    pub s: f64,
    /// Lightness `(max + min) / 2`.
    pub l: f64,
}

/// Hexcone hue in degrees, 0 for achromatic input.
pub fn hue(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= f64::EPSILON * max.abs().max(1.0) {
        return 0.0;
    }
    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (sector * 60.0).rem_euclid(360.0)
}

/// RGB to HSL.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> Hsl {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let l = 0.5 * (max + min);
    let chroma = max - min;
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if chroma <= 0.0 || denom <= 1e-12 {
        0.0
    } else {
        chroma / denom
    };
    Hsl { h: hue(rgb), s, l }
}

/// HSL to RGB. In-range `s` and `l` give in-range RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let chroma = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let hp = hsl.h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = hsl.l - 0.5 * chroma;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(hue([1.0, 0.0, 0.0]), 0.0);
        assert_eq!(hue([0.0, 1.0, 0.0]), 120.0);
        assert_eq!(hue([0.0, 0.0, 1.0]), 240.0);
        assert_eq!(hue([1.0, 0.0, 1.0]), 300.0);
    }

    #[test]
    fn test_roundtrip_in_range() {
        for rgb in [[0.2, 0.4, 0.6], [0.9, 0.1, 0.3], [0.5, 0.5, 0.5], [1.0, 0.8, 0.0]] {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            for (a, b) in rgb.iter().zip(back) {
                assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_out_of_range_lightness() {
        let hsl = rgb_to_hsl([1.5, 1.2, 1.1]);
        assert!(hsl.l > 1.0);
        assert_eq!(hsl.s, 0.0);
        assert_abs_diff_eq!(hsl.h, 15.0, epsilon = 1e-9);
    }
}
