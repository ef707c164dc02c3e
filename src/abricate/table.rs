//! Abricate summary table parser

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::cell::parse_cell;
use crate::error::{Error, Result};

/// First character of the header line
pub(crate) const HEADER_MARKER: char = '#';

/// Label of the column holding sample file names
pub(crate) const FILE_LABEL: &str = "FILE";

/// Index of the first series (database) column; the columns before it are
/// sample metadata.
pub(crate) const SERIES_OFFSET: usize = 2;

/// Column-major string table read from one summary file
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Table {
    labels: Vec<String>,
    /// columns[column][row]
    columns: Vec<Vec<String>>,
    file_column: usize,
}

impl Table {
    /// Open and parse the summary file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|_| Error::FileNotFound(path.to_path_buf()))?;
        Self::parse(path, BufReader::new(file))
    }

    /// Parse a summary table from `reader`. `path` is only used in error
    /// messages.
    pub(crate) fn parse<R: BufRead>(path: &Path, mut reader: R) -> Result<Self> {
        let mut header = String::new();
        if reader.read_line(&mut header).map_err(|e| read_error(path, e))? == 0 {
            return Err(Error::FileEmpty(path.to_path_buf()));
        }
        let labels = parse_labels(path, &header)?;

        let mut body = String::new();
        reader
            .read_to_string(&mut body)
            .map_err(|e| read_error(path, e))?;
        let columns = distribute_tokens(path, &labels, &body)?;

        let mut table = Table {
            file_column: file_column_index(&labels),
            labels,
            columns,
        };
        table.validate_series(path)?;
        table.strip_sample_paths();

        Ok(table)
    }

    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    #[cfg(test)]
    pub(crate) fn column(&self, index: usize) -> &[String] {
        &self.columns[index]
    }

    /// Number of rows (samples)
    pub(crate) fn sample_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of database columns
    pub(crate) fn series_count(&self) -> usize {
        self.labels.len().saturating_sub(SERIES_OFFSET)
    }

    /// Sample names, already reduced to their file name component
    pub(crate) fn sample_names(&self) -> &[String] {
        &self.columns[self.file_column]
    }

    /// Series columns as `(series index, label, cells)`
    pub(crate) fn series(&self) -> impl Iterator<Item = (usize, &str, &[String])> {
        self.labels
            .iter()
            .zip(&self.columns)
            .skip(SERIES_OFFSET)
            .enumerate()
            .map(|(index, (label, cells))| (index, label.as_str(), cells.as_slice()))
    }

    fn validate_series(&self, path: &Path) -> Result<()> {
        for (index, label, cells) in self.series() {
            for (row, raw) in cells.iter().enumerate() {
                parse_cell(raw).map_err(|e| {
                    Error::malformed(
                        path,
                        format!(
                            "column {} ({}), row {}: {}",
                            index + SERIES_OFFSET + 1,
                            label,
                            row + 1,
                            e
                        ),
                    )
                })?;
            }
        }
        Ok(())
    }

    fn strip_sample_paths(&mut self) {
        for entry in &mut self.columns[self.file_column] {
            if let Some(pos) = entry.rfind('/') {
                entry.drain(..=pos);
            }
        }
    }
}

/// Undecodable text is a property of the file, not an I/O failure.
fn read_error(path: &Path, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::InvalidData {
        Error::malformed(path, "is not valid UTF-8 text")
    } else {
        Error::Io(e)
    }
}

/// Split the header line into column labels, dropping the marker.
fn parse_labels(path: &Path, header: &str) -> Result<Vec<String>> {
    let header = header.trim_end_matches(['\n', '\r']);
    let Some(fields) = header.strip_prefix(HEADER_MARKER) else {
        return Err(Error::malformed(
            path,
            "does not contain a header to process",
        ));
    };

    // A tab in the last position does not open another column
    let fields = fields.strip_suffix('\t').unwrap_or(fields);
    if fields.is_empty() {
        return Err(Error::malformed(path, "header names no columns"));
    }

    Ok(fields.split('\t').map(str::to_string).collect())
}

/// Deal whitespace-separated tokens round-robin into one buffer per label.
fn distribute_tokens(path: &Path, labels: &[String], body: &str) -> Result<Vec<Vec<String>>> {
    let width = labels.len();
    let mut columns = vec![Vec::new(); width];

    let mut count = 0;
    for (i, token) in body.split_whitespace().enumerate() {
        columns[i % width].push(token.to_string());
        count = i + 1;
    }

    if count % width != 0 {
        return Err(Error::malformed(
            path,
            format!(
                "last row has {} of {} columns",
                count % width,
                width
            ),
        ));
    }

    Ok(columns)
}

/// First column labelled `FILE`, or column 0 when there is none.
// TODO: column 0 may not hold file names at all; decide whether a missing
// FILE column should be rejected instead.
fn file_column_index(labels: &[String]) -> usize {
    labels
        .iter()
        .position(|label| label == FILE_LABEL)
        .unwrap_or(0)
}
