//! CLI mode implementations

mod batch;
mod single;

pub use batch::run_batch;
pub use single::run_single;

use std::fs;
use std::path::{Path, PathBuf};

use crate::abricate::Table;
use crate::chart::Renderer;
use crate::config::Config;
use crate::error::Result;
use crate::output::{get_display_name, print_debug, print_warning};

/// Renderer for `config`'s typeface with the default image geometry
fn make_renderer(config: &Config) -> Result<Renderer> {
    Renderer::new(
        &config.typeface_path(),
        &config.typeface_name,
        Default::default(),
    )
}

/// Lay out, draw and encode the graph for `table`, read from `input`.
/// Returns the path the graph was written to.
fn graph_table(
    renderer: &mut Renderer,
    config: &Config,
    input: &Path,
    table: &Table,
    debug: bool,
) -> Result<PathBuf> {
    let summary = renderer.render(table)?;

    if summary.key_hidden > 0 {
        print_warning(&format!(
            "{}: {} series did not fit in the key",
            get_display_name(input),
            summary.key_hidden
        ));
    }
    if debug {
        print_debug(&get_display_name(input), table, &summary);
    }

    fs::create_dir_all(&config.output_dir)?;
    let output = config.output_path(input);
    renderer.save(&output, config.output_format)?;

    Ok(output)
}
