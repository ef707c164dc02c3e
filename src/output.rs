use std::path::Path;

use colored::*;

use crate::abricate::Table;
use crate::chart::ChartSummary;

pub(crate) fn print_error(msg: &str) {
    println!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_saved(path: &Path) {
    println!("{} {}", "Graph saved to:".green(), path.display());
}

pub(crate) fn print_batch_summary(graphs: usize, dir: &Path) {
    println!(
        "{} {} graph(s) from {}",
        "Done:".bold(),
        graphs,
        dir.display()
    );
}

pub(crate) fn get_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Per-file diagnostics for `--debug`
pub(crate) fn print_debug(name: &str, table: &Table, summary: &ChartSummary) {
    let tag = "debug".cyan().bold();
    eprintln!("{}: {}", tag, name);
    eprintln!("{}:   labels: {}", tag, table.labels().join(", "));
    eprintln!(
        "{}:   samples: {}, series: {}, bars: {}",
        tag, summary.samples, summary.series, summary.bars
    );
    eprintln!(
        "{}:   range: {:.2} - {:.2}",
        tag, summary.range.min, summary.range.max
    );
    if summary.key_hidden > 0 {
        eprintln!("{}:   key entries hidden: {}", tag, summary.key_hidden);
    }
}
