//! Single file mode

use std::path::Path;

use crate::abricate::Table;
use crate::config::Config;
use crate::error::Result;
use crate::output::print_saved;

use super::{graph_table, make_renderer};

/// Graph one summary file. The file is read before the typeface is loaded,
/// so input errors are reported first.
pub fn run_single(input: &Path, config: &Config, debug: bool) -> Result<()> {
    let table = Table::load(input)?;
    let mut renderer = make_renderer(config)?;
    let output = graph_table(&mut renderer, config, input, &table, debug)?;
    print_saved(&output);
    Ok(())
}
