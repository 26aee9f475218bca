//! Configuration for harmony generation
//!
//! The harmony geometry is mostly fixed (complement at half a turn, triadic
//! points at thirds), but the analogous spread is an aesthetic knob. This
//! module defines the serializable configuration and its JSON file helpers.
//!
//! ```no_run
//! use chromatap::HarmonyConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = HarmonyConfig::from_json_file(Path::new("harmony.json"))?;
//!
//! // Or use defaults
//! let config = HarmonyConfig::default();
//! # Ok::<(), chromatap::PaletteError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::harmony;
use crate::{PaletteError, Result};

/// Tunable parameters for harmony generation.
///
/// Can be serialized to/from JSON for reproducible palettes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonyConfig {
    /// Analogous hue offset magnitude as a fraction of a full turn.
    ///
    /// Must lie strictly between 0 and 0.5; at 0.5 the analogs would
    /// coincide with the complement.
    #[serde(default = "default_analogous_spread")]
    pub analogous_spread: f32,
}

fn default_analogous_spread() -> f32 {
    harmony::DEFAULT_ANALOGOUS_SPREAD
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            analogous_spread: harmony::DEFAULT_ANALOGOUS_SPREAD,
        }
    }
}

impl HarmonyConfig {
    /// Check that every parameter is in its valid range
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidParameter`] for an out-of-range
    /// analogous spread.
    pub fn validate(&self) -> Result<()> {
        if !self.analogous_spread.is_finite()
            || self.analogous_spread <= 0.0
            || self.analogous_spread >= harmony::MAX_ANALOGOUS_SPREAD
        {
            return Err(PaletteError::invalid_parameter(
                "analogous_spread",
                self.analogous_spread,
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
