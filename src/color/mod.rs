//! Color conversion, naming, and harmony module
//!
//! This module handles RGB/HSL color space conversions, nearest-named-color
//! resolution against the CSS3 reference table, and generation of
//! hue-rotated harmony palettes.

pub mod conversion;
pub mod harmony;
pub mod namer;

pub use conversion::ColorConverter;
pub use harmony::HarmonyGenerator;
pub use namer::ColorNamer;
