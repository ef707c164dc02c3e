//! Display range derived from the series columns

use super::cell::parse_cell;
use super::table::Table;

/// Share of the data span added above and below it
const MARGIN_RATIO: f64 = 0.25;

/// Margin used when every value is the same
const FLAT_MARGIN: f64 = 5.0;

/// Values are percentages
const DOMAIN_MIN: f64 = 0.0;
const DOMAIN_MAX: f64 = 100.0;

/// Value interval mapped onto the frame's vertical extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    /// Scan every series cell, skipping no-hit markers, and pad the observed
    /// extremes. A table without any hits yields `[0, 5]`.
    pub(crate) fn from_table(table: &Table) -> Self {
        let values = table
            .series()
            .flat_map(|(_, _, cells)| cells)
            .filter_map(|raw| parse_cell(raw).ok().flatten());
        Self::from_values(values)
    }

    /// Extremes are seeded by the first value seen, not by zero.
    pub(crate) fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut extremes: Option<(f64, f64)> = None;
        for value in values {
            extremes = Some(match extremes {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        let (min, max) = extremes.unwrap_or((0.0, 0.0));

        let margin = if max != min {
            (max - min) * MARGIN_RATIO
        } else {
            FLAT_MARGIN
        };

        DisplayRange {
            min: (min - margin).clamp(DOMAIN_MIN, DOMAIN_MAX),
            max: (max + margin).clamp(DOMAIN_MIN, DOMAIN_MAX),
        }
    }

    pub(crate) fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Label value of gridline `division` counted from the top
    pub(crate) fn tick_value(&self, division: u32, divisions: u32) -> f64 {
        let remaining = divisions.saturating_sub(division) as f64;
        self.min + self.span() * remaining / divisions.max(1) as f64
    }
}
