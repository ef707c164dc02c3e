//! Batch mode: one graph per file in a directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::abricate::Table;
use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::output::{print_batch_summary, print_saved, print_warning};

use super::{graph_table, make_renderer};

/// Graph every summary file in `dir`, in file name order. The first failure
/// stops the batch.
pub fn run_batch(dir: &Path, config: &Config, debug: bool) -> Result<usize> {
    let inputs = collect_inputs(dir)?;
    if inputs.is_empty() {
        print_warning(&format!("No input files found in {}", dir.display()));
        return Ok(0);
    }

    let mut renderer = make_renderer(config)?;
    for input in &inputs {
        let table = Table::load(input)?;
        let output = graph_table(&mut renderer, config, input, &table, debug)?;
        print_saved(&output);
    }

    print_batch_summary(inputs.len(), dir);
    Ok(inputs.len())
}

/// Regular files in `dir`, skipping hidden files, config files and graphs
/// from earlier runs.
fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|_| Error::FileNotFound(dir.to_path_buf()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_candidate(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();

    Ok(inputs)
}

fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') || name.ends_with(".cfg") {
        return false;
    }
    ![OutputFormat::Png, OutputFormat::Jpeg]
        .iter()
        .any(|format| name.ends_with(&format!("_bargraph.{}", format.extension())))
}
