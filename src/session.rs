//! Captured sample sequence
//!
//! The capture/UI collaborator emits one RGB color per click; this module
//! accumulates them as an explicit, owned, append-only sequence. Samples
//! are never mutated or removed once recorded, and the selection order is
//! what downstream display code sees.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// One captured color together with its selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Zero-based position in the selection sequence
    pub index: usize,
    /// The sampled color
    pub rgb: Rgb,
}

/// Append-only sequence of captured samples
///
/// Owned by the session driver and passed into the batch analysis step;
/// there is no shared or global state behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSession {
    samples: Vec<ColorSample>,
}

impl SampleSession {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clicked color, returning the sample with its index
    pub fn record(&mut self, rgb: Rgb) -> ColorSample {
        let sample = ColorSample {
            index: self.samples.len(),
            rgb,
        };
        self.samples.push(sample);
        sample
    }

    /// Iterate over the samples in selection order
    pub fn samples(&self) -> impl Iterator<Item = &ColorSample> {
        self.samples.iter()
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
