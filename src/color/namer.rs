//! Nearest-named-color resolution
//!
//! Resolves an RGB sample to the closest entry in a fixed named-color
//! reference table by squared Euclidean distance in RGB space. The table
//! is a few hundred entries and resolution runs once per user click, so a
//! linear scan is the whole algorithm.

use serde::{Deserialize, Serialize};

use crate::constants::css;
use crate::{PaletteError, Result, Rgb};

/// One named color in the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColorEntry {
    /// Canonical (lowercase) color name
    pub name: String,
    /// The color's RGB value
    pub rgb: Rgb,
}

/// Immutable named-color reference table
///
/// Constructed once at startup and read-only afterwards. Entries are held
/// sorted alphabetically by lowercased name; that canonical ordering is the
/// scan order, which makes equidistant nearest-name matches resolve
/// deterministically to the alphabetically earlier entry.
#[derive(Debug, Clone)]
pub struct NamedColorTable {
    entries: Vec<NamedColorEntry>,
}

impl NamedColorTable {
    /// The bundled CSS3 extended color keyword table
    pub fn css3() -> Self {
        let entries = css::NAMED_COLORS
            .iter()
            .map(|&(name, rgb)| NamedColorEntry {
                name: name.to_string(),
                rgb: Rgb::from(rgb),
            })
            .collect();
        Self { entries }
    }

    /// Build a table from caller-supplied entries
    ///
    /// Names are lowercased and the entries sorted into canonical
    /// alphabetical order. Intended for tests that substitute a small table;
    /// nearest-name resolution itself always runs against whatever table
    /// the namer was constructed with.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyTable`] if `entries` is empty; the
    /// nearest-name contract requires a non-empty table.
    pub fn from_entries<N: Into<String>>(
        entries: impl IntoIterator<Item = (N, Rgb)>,
    ) -> Result<Self> {
        let mut entries: Vec<NamedColorEntry> = entries
            .into_iter()
            .map(|(name, rgb)| NamedColorEntry {
                name: name.into().to_lowercase(),
                rgb,
            })
            .collect();

        if entries.is_empty() {
            return Err(PaletteError::EmptyTable);
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { entries })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in canonical order
    pub fn entries(&self) -> impl Iterator<Item = &NamedColorEntry> {
        self.entries.iter()
    }
}

/// Nearest-named-color resolver
///
/// Pure lookup over an immutable table; no interior mutability, so a single
/// namer can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ColorNamer {
    table: NamedColorTable,
}

impl ColorNamer {
    /// Create a namer over the bundled CSS3 table
    pub fn css3() -> Self {
        Self::with_table(NamedColorTable::css3())
    }

    /// Create a namer over a caller-supplied table
    pub fn with_table(table: NamedColorTable) -> Self {
        Self { table }
    }

    /// The table this namer resolves against
    pub fn table(&self) -> &NamedColorTable {
        &self.table
    }

    /// Resolve a sample to the name of the nearest table entry
    ///
    /// Distance is squared Euclidean in RGB space. Ties go to the entry
    /// earlier in canonical (alphabetical) order, so repeated calls with
    /// the same sample always return the same name.
    pub fn nearest_name(&self, sample: Rgb) -> &str {
        let mut best: &NamedColorEntry = &self.table.entries[0];
        let mut best_distance = squared_distance(sample, best.rgb);

        for entry in &self.table.entries[1..] {
            let distance = squared_distance(sample, entry.rgb);
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }

        &best.name
    }

    /// Exact, case-insensitive lookup of a name in the table
    pub fn lookup(&self, name: &str) -> Option<Rgb> {
        let name = name.to_lowercase();
        self.table
            .entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name.as_str()))
            .ok()
            .map(|index| self.table.entries[index].rgb)
    }
}

/// Squared Euclidean distance between two RGB colors
fn squared_distance(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}
