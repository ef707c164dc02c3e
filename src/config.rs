//! Persisted settings: directories, typeface and output image type

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::ImageFormat;

use crate::error::{Error, Result};

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "abrprint.cfg";

const KEY_INPUT_DIR: &str = "ABR_INPUT_DIR";
const KEY_TYPEFACE_DIR: &str = "ABR_TYPEFACE_DIR";
const KEY_TYPEFACE_NAME: &str = "ABR_TYPEFACE_NAME";
const KEY_OUTPUT_DIR: &str = "ABR_OUTPUT_DIR";
const KEY_OUTPUT_EXT: &str = "ABR_OUTPUT_EXT";

/// Image type graphs are saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Lowercase file extension
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PNG" => Ok(OutputFormat::Png),
            "JPEG" => Ok(OutputFormat::Jpeg),
            _ => Err(format!("unsupported image type `{}` (expected PNG or JPEG)", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Settings read once at startup and handed to every stage
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_dir: String,
    pub typeface_dir: String,
    pub typeface_name: String,
    pub output_dir: String,
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: "./".to_string(),
            typeface_dir: "./".to_string(),
            typeface_name: "Consolas".to_string(),
            output_dir: "./".to_string(),
            output_format: OutputFormat::Png,
        }
    }
}

impl Config {
    /// Read the config file at `path`, writing a default one first if it
    /// does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Config::default();
                config.save(path)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse `KEY<TAB>VALUE` lines. Fields not mentioned keep their default.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let mut config = Config::default();
        let malformed = |reason: String| Error::ConfigMalformed {
            path: path.to_path_buf(),
            reason,
        };

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once('\t')
                .or_else(|| line.split_once(char::is_whitespace))
                .map(|(key, value)| (key.trim(), value.trim()))
                .filter(|(_, value)| !value.is_empty())
                .ok_or_else(|| malformed(format!("line {} has no value", number + 1)))?;

            match key {
                KEY_INPUT_DIR => config.input_dir = value.to_string(),
                KEY_TYPEFACE_DIR => config.typeface_dir = value.to_string(),
                KEY_TYPEFACE_NAME => config.typeface_name = value.to_string(),
                KEY_OUTPUT_DIR => config.output_dir = value.to_string(),
                KEY_OUTPUT_EXT => {
                    config.output_format = value
                        .parse::<OutputFormat>()
                        .map_err(|e| malformed(format!("line {}: {}", number + 1, e)))?;
                }
                _ => {
                    return Err(malformed(format!(
                        "unrecognized field `{}` on line {}",
                        key,
                        number + 1
                    )));
                }
            }
        }

        Ok(config)
    }

    /// Rewrite the whole config file from this struct.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_file_contents())?;
        Ok(())
    }

    pub fn to_file_contents(&self) -> String {
        format!(
            "{}\t{}\n{}\t{}\n{}\t{}\n{}\t{}\n{}\t{}\n",
            KEY_INPUT_DIR,
            self.input_dir,
            KEY_TYPEFACE_DIR,
            self.typeface_dir,
            KEY_TYPEFACE_NAME,
            self.typeface_name,
            KEY_OUTPUT_DIR,
            self.output_dir,
            KEY_OUTPUT_EXT,
            self.output_format,
        )
    }

    /// Path of the TrueType file for the configured typeface
    pub fn typeface_path(&self) -> PathBuf {
        Path::new(&self.typeface_dir).join(format!("{}.ttf", self.typeface_name))
    }

    /// Where the graph for `input` is written: `<stem>_bargraph.<ext>`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        Path::new(&self.output_dir).join(format!(
            "{}_bargraph.{}",
            stem,
            self.output_format.extension()
        ))
    }
}

/// Forward slashes only, with a trailing slash.
pub fn normalize_dir(dir: &str) -> String {
    let mut dir = normalize_path(dir);
    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}

/// Backslashes become forward slashes.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
