//! Cell value conversion

use thiserror::Error;

/// Cell content meaning "no hit" for a sample/database pair
pub(crate) const NO_HIT: &str = ".";

#[derive(Debug, Error, PartialEq)]
#[error("`{0}` is neither `.` nor a `;`-separated list of numbers")]
pub(crate) struct InvalidCell(pub String);

/// Parse one series cell.
///
/// Returns `Ok(None)` for the no-hit marker, otherwise the numeric value the
/// cell stands for. Cells listing several hits (`v1;v2;...`) are reduced by
/// [`collapse_hits`].
pub(crate) fn parse_cell(raw: &str) -> Result<Option<f64>, InvalidCell> {
    if raw == NO_HIT {
        return Ok(None);
    }

    let hits = raw
        .split(';')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| InvalidCell(raw.to_string()))?;

    collapse_hits(&hits)
        .map(Some)
        .ok_or_else(|| InvalidCell(raw.to_string()))
}

/// Numeric value of a cell, with no-hit and unreadable cells counting as 0.
pub(crate) fn cell_value(raw: &str) -> f64 {
    parse_cell(raw).ok().flatten().unwrap_or(0.0)
}

/// Multi-hit cells currently keep their first hit only.
fn collapse_hits(hits: &[f64]) -> Option<f64> {
    hits.first().copied()
}
