//! Bar graph layout and rendering

mod bars;
mod colors;
mod frame;
mod key;
mod render;
mod surface;

pub(crate) use bars::{layout_bars, sort_bars};
pub(crate) use frame::{Frame, draw_border, draw_frame};
pub(crate) use key::{draw_key, layout_key};
pub(crate) use render::Renderer;
pub(crate) use surface::{BitmapSurface, Point, Surface};

use crate::abricate::{DisplayRange, Table};
use crate::error::Result;

/// Output image size
pub(crate) const IMAGE_WIDTH: u32 = 1200;
pub(crate) const IMAGE_HEIGHT: u32 = 800;

/// Space between the image border and the frame
const GRAPH_PADDING: i32 = 150;

/// Frame border thickness in pixels
const GRAPH_THICKNESS: i32 = 5;

/// Number of horizontal gridline intervals
const VERTICAL_DIVISIONS: u32 = 10;

const FONT_SIZE: u32 = 16;

/// Screen rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub(crate) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn right(&self) -> i32 {
        self.x + self.width
    }

    pub(crate) fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Fixed dimensions of one graph image
#[derive(Debug, Clone, Copy)]
pub(crate) struct Geometry {
    pub width: u32,
    pub height: u32,
    pub padding: i32,
    pub thickness: i32,
    pub divisions: u32,
    pub font_size: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            padding: GRAPH_PADDING,
            thickness: GRAPH_THICKNESS,
            divisions: VERTICAL_DIVISIONS,
            font_size: FONT_SIZE,
        }
    }
}

impl Geometry {
    /// Plotting area: the image minus padding on every side
    pub(crate) fn frame_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.width as i32 - 2 * self.padding,
            self.height as i32 - 2 * self.padding,
        )
    }
}

/// What was drawn for one table
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSummary {
    pub range: DisplayRange,
    pub samples: usize,
    pub series: usize,
    pub bars: usize,
    /// Series left out of the key for lack of room above the frame
    pub key_hidden: usize,
}

/// Draw the complete graph for `table`: background, key, frame, bars and
/// finally the frame border on top of the bar bases.
pub(crate) fn draw_chart<S: Surface>(
    surface: &mut S,
    table: &Table,
    geometry: &Geometry,
) -> Result<ChartSummary> {
    let range = DisplayRange::from_table(table);
    let frame = Frame::new(
        geometry.frame_rect(),
        range,
        geometry.divisions,
        geometry.thickness,
        table.sample_names(),
    );

    surface.fill(colors::BACKGROUND)?;

    let key = layout_key(surface, table.labels(), &frame, geometry.font_size)?;
    draw_key(surface, &key, geometry.font_size)?;

    draw_frame(surface, &frame, geometry.font_size)?;

    let mut bars = layout_bars(&frame, table);
    sort_bars(&mut bars);
    for bar in &bars {
        surface.fill_rect(bar.rect, bar.color)?;
    }

    draw_border(surface, &frame)?;

    Ok(ChartSummary {
        range,
        samples: table.sample_count(),
        series: table.series_count(),
        bars: bars.len(),
        key_hidden: key.hidden,
    })
}

#[cfg(test)]
mod tests;
