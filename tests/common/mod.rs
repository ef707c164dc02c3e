//! Common test utilities

use std::path::{Path, PathBuf};

/// Two samples, two databases
pub const SMALL_SUMMARY: &str = "#FILE\tNUM_FOUND\tDB1\tDB2\n\
    /data/run1/sample_a.tab\t2\t40.5\t.\n\
    /data/run1/sample_b.tab\t1\t90.0\t78.2;81.0\n";

/// Directories searched for a TrueType font the renderer can load
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/Library/Fonts",
    "C:/Windows/Fonts",
];

/// Write `contents` as a summary file named `name` inside `dir`
pub fn write_summary(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// A TrueType font installed on this machine, as (directory, name without
/// `.ttf`). Tests that draw graphs are skipped when none exists.
pub fn find_font() -> Option<(PathBuf, String)> {
    for dir in FONT_DIRS {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        let mut fonts: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "ttf"))
            .collect();
        fonts.sort();

        // Prefer a regular face when the directory has one
        let pick = fonts
            .iter()
            .find(|p| p.file_stem().is_some_and(|s| s == "DejaVuSans"))
            .or_else(|| fonts.first());
        if let Some(path) = pick {
            let name = path.file_stem()?.to_string_lossy().into_owned();
            return Some((PathBuf::from(dir), name));
        }
    }
    None
}

/// Write a config file pointing abrprint at the given directories
pub fn write_config(
    path: &Path,
    input_dir: &Path,
    font: &(PathBuf, String),
    output_dir: &Path,
    ext: &str,
) {
    let contents = format!(
        "ABR_INPUT_DIR\t{}/\nABR_TYPEFACE_DIR\t{}\nABR_TYPEFACE_NAME\t{}\nABR_OUTPUT_DIR\t{}/\nABR_OUTPUT_EXT\t{}\n",
        input_dir.display(),
        font.0.display(),
        font.1,
        output_dir.display(),
        ext,
    );
    std::fs::write(path, contents).unwrap();
}
