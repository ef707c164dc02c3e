//! Drawing surface abstraction and its plotters bitmap implementation

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Rect;
use crate::error::{Error, Result};

/// Pixel position, origin at the top-left corner
pub(crate) type Point = (i32, i32);

/// Primitive draw calls the layout code needs. Positions are in pixels.
pub(crate) trait Surface {
    fn fill(&mut self, color: RGBColor) -> Result<()>;

    fn line(&mut self, from: Point, to: Point, color: RGBColor) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: RGBColor) -> Result<()>;

    /// Draw `text` with its top-left corner at `at`
    fn text(&mut self, text: &str, at: Point, size: u32, color: RGBColor) -> Result<()>;

    fn text_width(&self, text: &str, size: u32) -> Result<i32>;

    fn polyline(&mut self, points: &[Point], color: RGBColor) -> Result<()> {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color)?;
        }
        Ok(())
    }
}

/// Surface drawing into an RGB byte buffer through plotters
pub(crate) struct BitmapSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    font: &'a str,
}

impl<'a> BitmapSurface<'a> {
    /// `buffer` must hold exactly `width * height * 3` bytes. `font` is the
    /// name a typeface was registered under.
    pub(crate) fn new(buffer: &'a mut [u8], size: (u32, u32), font: &'a str) -> Self {
        let area = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
        Self { area, font }
    }

    /// Flush pending drawing into the buffer.
    pub(crate) fn present(self) -> Result<()> {
        self.area.present().map_err(render_error)
    }

    fn text_style(&self, size: u32, color: RGBColor) -> TextStyle<'a> {
        FontDesc::new(FontFamily::Name(self.font), size as f64, FontStyle::Normal).color(&color)
    }
}

impl Surface for BitmapSurface<'_> {
    fn fill(&mut self, color: RGBColor) -> Result<()> {
        self.area.fill(&color).map_err(render_error)
    }

    fn line(&mut self, from: Point, to: Point, color: RGBColor) -> Result<()> {
        self.area
            .draw(&PathElement::new(vec![from, to], color.stroke_width(1)))
            .map_err(render_error)
    }

    fn fill_rect(&mut self, rect: Rect, color: RGBColor) -> Result<()> {
        if rect.width <= 0 || rect.height <= 0 {
            return Ok(());
        }
        // The bitmap backend fills up to, but not including, the second corner
        let corners = [(rect.x, rect.y), (rect.right(), rect.bottom())];
        self.area
            .draw(&Rectangle::new(corners, color.filled()))
            .map_err(render_error)
    }

    fn text(&mut self, text: &str, at: Point, size: u32, color: RGBColor) -> Result<()> {
        let style = self.text_style(size, color);
        self.area.draw_text(text, &style, at).map_err(render_error)
    }

    fn text_width(&self, text: &str, size: u32) -> Result<i32> {
        let style = self.text_style(size, BLACK);
        self.area
            .estimate_text_size(text, &style)
            .map(|(width, _)| width as i32)
            .map_err(render_error)
    }
}

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}
