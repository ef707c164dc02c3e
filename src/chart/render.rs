//! Canvas and typeface shared by every graph of a run

use std::fs;
use std::path::Path;

use image::ColorType;
use plotters::style::{FontStyle, register_font};

use super::{BitmapSurface, ChartSummary, Geometry, draw_chart};
use crate::abricate::Table;
use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// Owns the RGB canvas and the registered typeface. Created once, then
/// reused for each table.
pub(crate) struct Renderer {
    geometry: Geometry,
    canvas: Vec<u8>,
    font: String,
}

impl Renderer {
    /// Load the TrueType file at `typeface` and register it as `font_name`.
    pub(crate) fn new(typeface: &Path, font_name: &str, geometry: Geometry) -> Result<Self> {
        let bytes = fs::read(typeface).map_err(|e| {
            Error::GraphicsInit(format!("cannot load typeface {}: {}", typeface.display(), e))
        })?;

        // Registered fonts stay alive for the rest of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        register_font(font_name, FontStyle::Normal, bytes).map_err(|_| {
            Error::GraphicsInit(format!(
                "{} is not a valid TrueType font",
                typeface.display()
            ))
        })?;

        let canvas = vec![0; geometry.width as usize * geometry.height as usize * 3];
        Ok(Self {
            geometry,
            canvas,
            font: font_name.to_string(),
        })
    }

    /// Draw the graph for `table` onto the canvas, replacing whatever the
    /// previous graph left there.
    pub(crate) fn render(&mut self, table: &Table) -> Result<ChartSummary> {
        let size = (self.geometry.width, self.geometry.height);
        let mut surface = BitmapSurface::new(&mut self.canvas, size, &self.font);
        let summary = draw_chart(&mut surface, table, &self.geometry)?;
        surface.present()?;
        Ok(summary)
    }

    /// Encode the canvas to `path`.
    pub(crate) fn save(&self, path: &Path, format: OutputFormat) -> Result<()> {
        image::save_buffer_with_format(
            path,
            &self.canvas,
            self.geometry.width,
            self.geometry.height,
            ColorType::Rgb8,
            format.image_format(),
        )
        .map_err(|source| Error::ImageEncode {
            path: path.to_path_buf(),
            source,
        })
    }
}
