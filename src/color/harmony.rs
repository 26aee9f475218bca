//! Color harmony generation
//!
//! Derives aesthetically related colors from a sample by hue rotation in
//! HSL space: the complement, two analogs, and two triadic points.
//! Lightness and saturation are held fixed so the derived colors keep the
//! feel of the original sample.

use serde::{Deserialize, Serialize};

use crate::color::conversion::ColorConverter;
use crate::config::HarmonyConfig;
use crate::constants::harmony;
use crate::{Result, Rgb};

/// The harmony relation of a derived color to its sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyKind {
    /// Half a turn away on the hue circle (maximum contrast)
    Complementary,
    /// Small hue offset below the sample
    AnalogousMinus,
    /// Small hue offset above the sample
    AnalogousPlus,
    /// A third of a turn above the sample
    TriadicFirst,
    /// Two thirds of a turn above the sample
    TriadicSecond,
}

impl HarmonyKind {
    /// All kinds in canonical order
    pub const ALL: [HarmonyKind; 5] = [
        Self::Complementary,
        Self::AnalogousMinus,
        Self::AnalogousPlus,
        Self::TriadicFirst,
        Self::TriadicSecond,
    ];

    /// Hue offset for this kind as a fraction of a full turn
    ///
    /// `analogous_spread` is the magnitude of the analog offsets; the other
    /// kinds have fixed geometry.
    pub fn hue_offset(self, analogous_spread: f32) -> f32 {
        match self {
            Self::Complementary => harmony::COMPLEMENTARY_OFFSET,
            Self::AnalogousMinus => -analogous_spread,
            Self::AnalogousPlus => analogous_spread,
            Self::TriadicFirst => harmony::TRIADIC_FIRST_OFFSET,
            Self::TriadicSecond => harmony::TRIADIC_SECOND_OFFSET,
        }
    }
}

impl std::fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complementary => write!(f, "complementary"),
            Self::AnalogousMinus => write!(f, "analogous-"),
            Self::AnalogousPlus => write!(f, "analogous+"),
            Self::TriadicFirst => write!(f, "triadic 1"),
            Self::TriadicSecond => write!(f, "triadic 2"),
        }
    }
}

/// The five colors derived from one sample
///
/// Recomputed fresh for every sample; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonySet {
    pub complementary: Rgb,
    pub analogous_minus: Rgb,
    pub analogous_plus: Rgb,
    pub triadic_first: Rgb,
    pub triadic_second: Rgb,
}

impl HarmonySet {
    /// The members in canonical kind order
    pub fn members(&self) -> [(HarmonyKind, Rgb); 5] {
        [
            (HarmonyKind::Complementary, self.complementary),
            (HarmonyKind::AnalogousMinus, self.analogous_minus),
            (HarmonyKind::AnalogousPlus, self.analogous_plus),
            (HarmonyKind::TriadicFirst, self.triadic_first),
            (HarmonyKind::TriadicSecond, self.triadic_second),
        ]
    }

    /// The member for a given kind
    pub fn get(&self, kind: HarmonyKind) -> Rgb {
        match kind {
            HarmonyKind::Complementary => self.complementary,
            HarmonyKind::AnalogousMinus => self.analogous_minus,
            HarmonyKind::AnalogousPlus => self.analogous_plus,
            HarmonyKind::TriadicFirst => self.triadic_first,
            HarmonyKind::TriadicSecond => self.triadic_second,
        }
    }
}

/// Harmony palette generator
///
/// Pure mapping from a sample to its [`HarmonySet`]: convert to HSL, rotate
/// the hue by each kind's offset with lightness and saturation fixed, and
/// quantize back to 8-bit RGB. Total over the RGB domain; zero-saturation
/// samples (black, white, greys) rotate to themselves.
#[derive(Debug, Clone)]
pub struct HarmonyGenerator {
    converter: ColorConverter,
    analogous_spread: f32,
}

impl Default for HarmonyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyGenerator {
    /// Create a generator with the default analogous spread
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
            analogous_spread: harmony::DEFAULT_ANALOGOUS_SPREAD,
        }
    }

    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::PaletteError::InvalidParameter`] if the config's
    /// analogous spread is outside (0, 0.5).
    pub fn with_config(config: HarmonyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            converter: ColorConverter::new(),
            analogous_spread: config.analogous_spread,
        })
    }

    /// The analogous spread in use, as a fraction of a full turn
    pub fn analogous_spread(&self) -> f32 {
        self.analogous_spread
    }

    /// Generate the five derived colors for a sample
    pub fn generate(&self, sample: Rgb) -> HarmonySet {
        let hsl = self.converter.rgb_to_hsl(sample);
        let rotate = |kind: HarmonyKind| {
            let offset = kind.hue_offset(self.analogous_spread);
            self.converter
                .hsl_to_rgb(self.converter.shift_hue_fraction(hsl, offset))
        };

        HarmonySet {
            complementary: rotate(HarmonyKind::Complementary),
            analogous_minus: rotate(HarmonyKind::AnalogousMinus),
            analogous_plus: rotate(HarmonyKind::AnalogousPlus),
            triadic_first: rotate(HarmonyKind::TriadicFirst),
            triadic_second: rotate(HarmonyKind::TriadicSecond),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Rgb, expected: Rgb, slack: i32) {
        let close = (actual.r as i32 - expected.r as i32).abs() <= slack
            && (actual.g as i32 - expected.g as i32).abs() <= slack
            && (actual.b as i32 - expected.b as i32).abs() <= slack;
        assert!(close, "{} not within ±{} of {}", actual, slack, expected);
    }

    #[test]
    fn test_generate_produces_five_members() {
        let generator = HarmonyGenerator::new();
        let set = generator.generate(Rgb::new(200, 40, 90));
        assert_eq!(set.members().len(), 5);
    }

    #[test]
    fn test_complement_of_red_is_cyan() {
        let generator = HarmonyGenerator::new();
        let set = generator.generate(Rgb::new(255, 0, 0));
        assert_close(set.complementary, Rgb::new(0, 255, 255), 2);
    }

    #[test]
    fn test_triadic_of_red() {
        let generator = HarmonyGenerator::new();
        let set = generator.generate(Rgb::new(255, 0, 0));
        // Red rotated a third of a turn lands on green, two thirds on blue
        assert_close(set.triadic_first, Rgb::new(0, 255, 0), 2);
        assert_close(set.triadic_second, Rgb::new(0, 0, 255), 2);
    }

    #[test]
    fn test_black_degenerate_case() {
        let generator = HarmonyGenerator::new();
        let set = generator.generate(Rgb::new(0, 0, 0));
        // Hue is undefined at zero saturation; every member stays black
        // and nothing panics on the way
        for (_, rgb) in set.members() {
            assert_close(rgb, Rgb::new(0, 0, 0), 1);
        }
    }

    #[test]
    fn test_white_and_grey_stay_put() {
        let generator = HarmonyGenerator::new();
        for sample in [Rgb::new(255, 255, 255), Rgb::new(128, 128, 128)] {
            let set = generator.generate(sample);
            for (_, rgb) in set.members() {
                assert_close(rgb, sample, 1);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let generator = HarmonyGenerator::new();
        let sample = Rgb::new(87, 201, 143);
        let first = generator.generate(sample);
        for _ in 0..10 {
            assert_eq!(generator.generate(sample), first);
        }
    }

    #[test]
    fn test_lightness_and_saturation_preserved() {
        let generator = HarmonyGenerator::new();
        let converter = ColorConverter::new();
        let sample = Rgb::new(180, 60, 120);
        let original = converter.rgb_to_hsl(sample);

        for (_, rgb) in generator.generate(sample).members() {
            let hsl = converter.rgb_to_hsl(rgb);
            // Quantization to 8 bits costs a little precision
            assert!((hsl.saturation - original.saturation).abs() < 0.02);
            assert!((hsl.lightness - original.lightness).abs() < 0.02);
        }
    }

    #[test]
    fn test_analogous_rotation_wraps_below_zero() {
        let generator = HarmonyGenerator::new();
        let converter = ColorConverter::new();
        // Red's hue is 0; the minus analog must wrap to 0.9 of a turn
        let set = generator.generate(Rgb::new(255, 0, 0));
        let hue = converter.hue_fraction(converter.rgb_to_hsl(set.analogous_minus));
        assert!((hue - 0.9).abs() < 0.01);
    }

    #[test]
    fn test_custom_analogous_spread() {
        let generator = HarmonyGenerator::with_config(HarmonyConfig {
            analogous_spread: 0.25,
        })
        .unwrap();
        let converter = ColorConverter::new();

        let set = generator.generate(Rgb::new(255, 0, 0));
        let hue = converter.hue_fraction(converter.rgb_to_hsl(set.analogous_plus));
        assert!((hue - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_invalid_spread_rejected() {
        for spread in [0.0, -0.1, 0.5, 0.9] {
            let config = HarmonyConfig {
                analogous_spread: spread,
            };
            assert!(HarmonyGenerator::with_config(config).is_err(), "spread {}", spread);
        }
    }

    #[test]
    fn test_get_agrees_with_members() {
        let generator = HarmonyGenerator::new();
        let set = generator.generate(Rgb::new(255, 99, 71));

        for (kind, rgb) in set.members() {
            assert_eq!(set.get(kind), rgb, "{}", kind);
        }
        assert_eq!(set.get(HarmonyKind::Complementary), set.complementary);
    }

    #[test]
    fn test_kind_offsets() {
        assert_eq!(HarmonyKind::Complementary.hue_offset(0.1), 0.5);
        assert_eq!(HarmonyKind::AnalogousMinus.hue_offset(0.1), -0.1);
        assert_eq!(HarmonyKind::AnalogousPlus.hue_offset(0.1), 0.1);
        assert!((HarmonyKind::TriadicFirst.hue_offset(0.1) - 1.0 / 3.0).abs() < 1e-6);
        assert!((HarmonyKind::TriadicSecond.hue_offset(0.1) - 2.0 / 3.0).abs() < 1e-6);
    }
}
