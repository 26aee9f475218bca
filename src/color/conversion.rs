//! Color space conversion utilities
//!
//! Provides conversions between the crate's 8-bit RGB values and HSL:
//! - RGB to HSL with hue expressed as a fraction of a turn in [0, 1)
//! - Hue rotation with modulo-1 wraparound
//! - HSL back to RGB with clamped, truncating 8-bit quantization
//! - Hex color representation

use palette::{FromColor, Hsl, ShiftHue, Srgb};

use crate::{PaletteError, Result, Rgb};

/// Color converter between 8-bit RGB and HSL
///
/// Quantization back to 8 bits clamps each channel into [0, 1] and then
/// truncates toward zero. Truncation is applied uniformly so repeated
/// conversions of the same input always produce the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert an 8-bit RGB color to HSL
    ///
    /// Channels are normalized to [0, 1] before conversion. Achromatic
    /// inputs (black, white, greys) yield zero saturation with hue pinned
    /// at zero degrees; the conversion never divides by zero.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let srgb = Srgb::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        );
        Hsl::from_color(srgb)
    }

    /// Convert an HSL color back to 8-bit RGB
    ///
    /// Each channel is clamped into [0, 1], scaled by 255, and truncated.
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let srgb = Srgb::from_color(hsl);
        Rgb::new(
            quantize_channel(srgb.red),
            quantize_channel(srgb.green),
            quantize_channel(srgb.blue),
        )
    }

    /// The hue of an HSL color as a fraction of a full turn, in [0, 1)
    pub fn hue_fraction(&self, hsl: Hsl) -> f32 {
        hsl.hue.into_positive_degrees() / 360.0
    }

    /// Rotate the hue of an HSL color by a fraction of a full turn
    ///
    /// Lightness and saturation are untouched. The rotation wraps modulo 1,
    /// so negative fractions land just below a full turn rather than going
    /// negative: a -0.1 rotation of hue 0.05 yields hue 0.95.
    pub fn shift_hue_fraction(&self, hsl: Hsl, fraction: f32) -> Hsl {
        hsl.shift_hue(fraction * 360.0)
    }

    /// Format an RGB color as a hex string (e.g., "#FF0000")
    pub fn rgb_to_hex(&self, rgb: Rgb) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000") to RGB
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidHex`] if the string is not six hex
    /// digits after an optional leading `#`.
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Rgb> {
        let digits = hex.trim_start_matches('#');
        // Length check alone is not enough: slicing below is by byte
        // offset, so multi-byte characters must be rejected here
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got '{}'", digits),
            ));
        }

        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|e| PaletteError::invalid_hex(hex, format!("red channel: {}", e)))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|e| PaletteError::invalid_hex(hex, format!("green channel: {}", e)))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|e| PaletteError::invalid_hex(hex, format!("blue channel: {}", e)))?;

        Ok(Rgb::new(r, g, b))
    }
}

/// Clamp a normalized channel into [0, 1] and truncate to 8 bits
fn quantize_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let converter = ColorConverter::new();

        let red = converter.rgb_to_hsl(Rgb::new(255, 0, 0));
        assert!(converter.hue_fraction(red).abs() < 0.001);
        assert!((red.saturation - 1.0).abs() < 0.001);
        assert!((red.lightness - 0.5).abs() < 0.001);

        let green = converter.rgb_to_hsl(Rgb::new(0, 255, 0));
        assert!((converter.hue_fraction(green) - 1.0 / 3.0).abs() < 0.001);

        let blue = converter.rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!((converter.hue_fraction(blue) - 2.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic_no_panic() {
        let converter = ColorConverter::new();

        // Saturation is degenerate at black, white, and grey; the
        // conversion must stay finite
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(128, 128, 128),
        ] {
            let hsl = converter.rgb_to_hsl(rgb);
            assert!(hsl.saturation.abs() < 0.001);
            assert!(hsl.lightness.is_finite());
        }
    }

    #[test]
    fn test_hsl_roundtrip_is_near_identity() {
        let converter = ColorConverter::new();

        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(70, 130, 180),
            Rgb::new(210, 105, 30),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
        ] {
            let back = converter.hsl_to_rgb(converter.rgb_to_hsl(rgb));
            assert!((back.r as i32 - rgb.r as i32).abs() <= 1, "{} vs {}", rgb, back);
            assert!((back.g as i32 - rgb.g as i32).abs() <= 1, "{} vs {}", rgb, back);
            assert!((back.b as i32 - rgb.b as i32).abs() <= 1, "{} vs {}", rgb, back);
        }
    }

    #[test]
    fn test_hue_fraction_range() {
        let converter = ColorConverter::new();

        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(255, 128, 0),
            Rgb::new(0, 255, 128),
            Rgb::new(128, 0, 255),
            Rgb::new(255, 0, 64),
        ] {
            let fraction = converter.hue_fraction(converter.rgb_to_hsl(rgb));
            assert!((0.0..1.0).contains(&fraction), "hue {} out of range", fraction);
        }
    }

    #[test]
    fn test_shift_hue_wraps_without_going_negative() {
        let converter = ColorConverter::new();

        // Red sits at hue 0; a -0.1 rotation must wrap to 0.9, not -0.1
        let red = converter.rgb_to_hsl(Rgb::new(255, 0, 0));
        let shifted = converter.shift_hue_fraction(red, -0.1);
        assert!((converter.hue_fraction(shifted) - 0.9).abs() < 0.001);
    }

    #[test]
    fn test_shift_hue_preserves_lightness_and_saturation() {
        let converter = ColorConverter::new();

        let hsl = converter.rgb_to_hsl(Rgb::new(200, 60, 90));
        let shifted = converter.shift_hue_fraction(hsl, 0.5);
        assert!((shifted.saturation - hsl.saturation).abs() < 0.001);
        assert!((shifted.lightness - hsl.lightness).abs() < 0.001);
    }

    #[test]
    fn test_double_complement_returns_to_original_hue() {
        let converter = ColorConverter::new();

        let hsl = converter.rgb_to_hsl(Rgb::new(70, 130, 180));
        let original = converter.hue_fraction(hsl);
        let twice = converter.shift_hue_fraction(converter.shift_hue_fraction(hsl, 0.5), 0.5);
        let diff = (converter.hue_fraction(twice) - original).abs();
        // Compare on the circle: 0.999 and 0.001 are close
        assert!(diff.min(1.0 - diff) < 0.001);
    }

    #[test]
    fn test_rgb_to_hex() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hex(Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(converter.rgb_to_hex(Rgb::new(0, 255, 0)), "#00FF00");
        assert_eq!(converter.rgb_to_hex(Rgb::new(70, 130, 180)), "#4682B4");
    }

    #[test]
    fn test_hex_to_rgb() {
        let converter = ColorConverter::new();
        assert_eq!(converter.hex_to_rgb("#FF0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(converter.hex_to_rgb("4682b4").unwrap(), Rgb::new(70, 130, 180));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        let converter = ColorConverter::new();
        assert!(converter.hex_to_rgb("#FF").is_err());
        assert!(converter.hex_to_rgb("#GGGGGG").is_err());
        assert!(converter.hex_to_rgb("").is_err());
    }

    #[test]
    fn test_hex_to_rgb_non_ascii() {
        let converter = ColorConverter::new();
        // 6 bytes but only 4 characters; must error, not slice mid-char
        assert!(converter.hex_to_rgb("0\u{e9}0\u{e9}").is_err());
        assert!(converter.hex_to_rgb("#ff00é").is_err());
        assert!(converter.hex_to_rgb("ＦＦ00").is_err());
    }

    #[test]
    fn test_quantize_channel_truncates_and_clamps() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(0.5), 127); // truncation, not rounding
        assert_eq!(quantize_channel(-0.2), 0);
        assert_eq!(quantize_channel(1.7), 255);
    }
}
