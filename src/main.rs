mod abricate;
mod chart;
mod config;
mod error;
mod mode;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;

use config::{Config, DEFAULT_CONFIG_PATH, OutputFormat, normalize_dir, normalize_path};
use error::{Error, Result};
use mode::{run_batch, run_single};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "abrprint",
    version,
    about = "Bar graph generator for Abricate summary files",
    after_help = "Examples:
  abrprint results.tab                      Graph results.tab from the source directory
  abrprint -i /data/abricate/results.tab    Graph a file outside the source directory
  abrprint                                  Graph every file in the source directory
  abrprint runs/ -b                         Graph every file in <source dir>/runs
  abrprint -d ~/abr_results/ -e jpeg        Store a new source directory and image type"
)]
struct Args {
    /// Summary file (or directory, with --batch) inside the source directory
    #[arg(long_help = "Summary file to graph, looked up inside the stored source directory \
(see --set-source-dir). With --batch this names a directory instead, and every file in it is \
graphed. Without a source and without setting flags, every file in the source directory is \
graphed.")]
    source: Option<String>,

    /// Path of an input file or directory, used as given
    #[arg(
        short = 'i',
        long = "raw-input",
        value_name = "PATH",
        conflicts_with = "source",
        long_help = "Path of an input file or directory, used as given instead of being looked \
up in the source directory. Use this to graph a file outside the source directory without \
changing the stored configuration:

    abrprint results.tab
        reads <source dir>/results.tab

    abrprint -i /data/abricate_results/results.tab
        reads exactly /data/abricate_results/results.tab"
    )]
    raw_input: Option<String>,

    /// Generate a graph for each file in the source directory
    #[arg(
        short,
        long,
        long_help = "Generate one graph for each file in a directory. Running abrprint with no \
arguments already graphs every file in the stored source directory. To graph the files of \
another directory, name it together with this flag:

    abrprint runs/ -b
    abrprint -i /data/abricate_results -b

Hidden files, .cfg files and graphs from earlier runs are skipped. The first file that cannot \
be graphed stops the batch."
    )]
    batch: bool,

    /// Store the directory searched for source files
    #[arg(
        short = 'd',
        long = "set-source-dir",
        value_name = "PATH",
        long_help = "Store the directory searched for source files, so a summary can be named \
without its full path. It starts out as the current directory.

    abrprint -d ~/abr_results/
    abrprint MyResultFile.tab
        reads ~/abr_results/MyResultFile.tab

Backslashes are turned into forward slashes and a trailing slash is added."
    )]
    set_source_dir: Option<String>,

    /// Store the directory holding TrueType fonts
    #[arg(
        short = 't',
        long = "set-typeface-dir",
        value_name = "PATH",
        long_help = "Store the directory holding TrueType fonts. The font named with \
--set-font is loaded from <PATH>/<NAME>.ttf."
    )]
    set_typeface_dir: Option<String>,

    /// Store the directory graphs are saved to (created if missing)
    #[arg(
        short = 'o',
        long = "set-output-dir",
        value_name = "PATH",
        long_help = "Store the directory graphs are saved to. It is remembered until changed \
and is created when it does not exist yet.

Graph names come from the input names: test123.tab becomes test123_bargraph.png (or .jpeg). \
An existing graph with the same name in the output directory is overwritten."
    )]
    set_output_dir: Option<String>,

    /// Store the typeface name (TrueType file name without .ttf)
    #[arg(
        short = 'f',
        long = "set-font",
        value_name = "NAME",
        long_help = "Store the typeface used for all text in the graph. The default is \
Consolas. Place a TrueType file in the typeface directory and give its name without the \
.ttf extension:

    abrprint -f Comic_Sans
        loads <typeface dir>/Comic_Sans.ttf"
    )]
    set_font: Option<String>,

    /// Store the image type graphs are saved as (PNG or JPEG)
    #[arg(
        short = 'e',
        long = "set-file-type",
        value_name = "TYPE",
        long_help = "Store the image type graphs are saved as: PNG (the default) or JPEG, in \
any letter case.

    abrprint -e jpeg
        test123.tab is now graphed as test123_bargraph.jpeg"
    )]
    set_file_type: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print labels, value range and bar count for each file
    #[arg(long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// What a run graphs
#[derive(Debug, PartialEq)]
enum Job {
    Single(PathBuf),
    Batch(PathBuf),
    /// Only settings were changed
    Nothing,
}

/// Apply setting flags to `config`. Returns whether any were given.
fn apply_settings(args: &Args, config: &mut Config) -> bool {
    let mut changed = false;

    if let Some(dir) = &args.set_source_dir {
        config.input_dir = normalize_dir(dir);
        changed = true;
    }
    if let Some(dir) = &args.set_typeface_dir {
        config.typeface_dir = normalize_path(dir);
        changed = true;
    }
    if let Some(dir) = &args.set_output_dir {
        config.output_dir = normalize_dir(dir);
        changed = true;
    }
    if let Some(name) = &args.set_font {
        config.typeface_name = name.clone();
        changed = true;
    }
    if let Some(format) = args.set_file_type {
        config.output_format = format;
        changed = true;
    }

    changed
}

fn plan(args: &Args, config: &Config, settings_changed: bool) -> Result<Job> {
    if matches!(args.raw_input.as_deref(), Some("")) {
        return Err(Error::CliArgument(
            "path argument required for flag -i/--raw-input".to_string(),
        ));
    }

    let input_dir = Path::new(&config.input_dir);
    let requested = match (&args.raw_input, &args.source) {
        (Some(raw), _) => Some(PathBuf::from(normalize_path(raw))),
        (None, Some(source)) => Some(input_dir.join(source)),
        (None, None) => None,
    };

    if args.batch {
        return Ok(Job::Batch(
            requested.unwrap_or_else(|| input_dir.to_path_buf()),
        ));
    }

    let job = match requested {
        Some(path) if path.is_dir() => {
            return Err(Error::CliArgument(format!(
                "{} is a directory, use -b/--batch to graph its files",
                path.display()
            )));
        }
        Some(path) => Job::Single(path),
        None if settings_changed => Job::Nothing,
        None => Job::Batch(input_dir.to_path_buf()),
    };

    Ok(job)
}

fn run(args: &Args) -> Result<()> {
    let mut config = Config::load_or_create(&args.config)?;
    let settings_changed = apply_settings(args, &mut config);
    if settings_changed {
        config.save(&args.config)?;
    }

    match plan(args, &config, settings_changed)? {
        Job::Single(path) => run_single(&path, &config, args.debug),
        Job::Batch(dir) => run_batch(&dir, &config, args.debug).map(|_| ()),
        Job::Nothing => Ok(()),
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => {
                print!("{}", e.render());
                std::process::exit(1);
            }
        },
    };

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
