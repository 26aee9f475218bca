//! # chromatap
//!
//! A Rust crate for naming and harmonizing colors sampled from a live video
//! feed.
//!
//! This library provides the two algorithmic halves of a point-and-click
//! color picker:
//! - Resolving an RGB sample to the nearest CSS3 named color
//! - Deriving aesthetically related colors (complementary, analogous,
//!   triadic) by hue rotation in HSL space
//!
//! Opening a capture device, rendering frames, and wiring click callbacks
//! are the caller's concern; the crate consumes fully-formed RGB samples
//! and produces named and derived colors.
//!
//! ## Example
//!
//! ```rust
//! use chromatap::{analyze_session, ColorNamer, HarmonyGenerator, Rgb, SampleSession};
//!
//! let namer = ColorNamer::css3();
//! let generator = HarmonyGenerator::new();
//!
//! let mut session = SampleSession::new();
//! let sample = session.record(Rgb::new(255, 0, 0));
//! assert_eq!(namer.nearest_name(sample.rgb), "red");
//!
//! let reports = analyze_session(&session, &namer, &generator);
//! assert_eq!(reports.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;

pub use color::conversion::ColorConverter;
pub use color::harmony::{HarmonyGenerator, HarmonyKind, HarmonySet};
pub use color::namer::{ColorNamer, NamedColorTable};
pub use config::HarmonyConfig;
pub use error::{PaletteError, Result};
pub use session::{ColorSample, SampleSession};

/// An 8-bit RGB color value.
///
/// Immutable value type with no identity beyond its components. Produced by
/// pixel sampling or by [`HarmonyGenerator`]; consumed by [`ColorNamer`] and
/// by display code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array, in `[r, g, b]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One harmony member with its resolved name, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledColor {
    /// Which harmony relation produced this color
    pub kind: HarmonyKind,
    /// The derived color
    pub rgb: Rgb,
    /// Nearest CSS3 name of the derived color
    pub name: String,
    /// Hex representation for display
    pub hex: String,
}

/// Complete analysis of one captured sample: the original color, its nearest
/// name, and its five labeled harmony members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleReport {
    /// Selection order of the sample within its session
    pub index: usize,
    /// The sampled color
    pub rgb: Rgb,
    /// Nearest CSS3 name of the sample
    pub name: String,
    /// Hex representation of the sample
    pub hex: String,
    /// The five derived colors, each labeled with its own nearest name
    pub harmony: Vec<LabeledColor>,
}

/// Analyze every sample captured during a session.
///
/// This is the batch entry point, run after the interactive session ends.
/// For each sample, in selection order, it resolves the nearest name,
/// generates the harmony set, and labels each harmony member with its own
/// nearest name for swatch-panel display.
///
/// Each sample's analysis is independent; the output order always matches
/// the selection order regardless of how callers might parallelize.
pub fn analyze_session(
    session: &SampleSession,
    namer: &ColorNamer,
    generator: &HarmonyGenerator,
) -> Vec<SampleReport> {
    let converter = ColorConverter::new();
    session
        .samples()
        .map(|sample| {
            let harmony = generator
                .generate(sample.rgb)
                .members()
                .into_iter()
                .map(|(kind, rgb)| LabeledColor {
                    kind,
                    rgb,
                    name: namer.nearest_name(rgb).to_string(),
                    hex: converter.rgb_to_hex(rgb),
                })
                .collect();

            SampleReport {
                index: sample.index,
                rgb: sample.rgb,
                name: namer.nearest_name(sample.rgb).to_string(),
                hex: converter.rgb_to_hex(sample.rgb),
                harmony,
            }
        })
        .collect()
}
