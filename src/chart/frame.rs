//! Graph frame: gridlines, value axis, sample columns and border

use super::colors::{FRAME, GRID};
use super::{Rect, Surface};
use crate::abricate::DisplayRange;
use crate::error::Result;

/// Length of the value-axis tick marks
const TICK_LENGTH: i32 = 8;

/// Gap between tick labels and tick marks
const TICK_LABEL_GAP: i32 = 4;

/// Gap between the border and the sample labels
const SAMPLE_LABEL_GAP: i32 = 6;

/// One sample's slot along the horizontal axis
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SampleColumn {
    pub label: String,
    /// Left edge of the slot; the sample label and its bars start here
    pub x: i32,
}

/// Plotting area plus everything needed to map values into it
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub rect: Rect,
    pub samples: Vec<SampleColumn>,
    pub divisions: u32,
    pub range: DisplayRange,
    pub thickness: i32,
}

impl Frame {
    /// Build the frame and place one column per sample label.
    pub(crate) fn new(
        rect: Rect,
        range: DisplayRange,
        divisions: u32,
        thickness: i32,
        sample_labels: &[String],
    ) -> Self {
        let entry_width = entry_width(rect.width, sample_labels.len());
        let samples = sample_labels
            .iter()
            .enumerate()
            .map(|(i, label)| SampleColumn {
                label: label.clone(),
                x: rect.x + i as i32 * entry_width,
            })
            .collect();

        Self {
            rect,
            samples,
            divisions: divisions.max(1),
            range,
            thickness,
        }
    }

    /// Width of one sample's slot
    pub(crate) fn entry_width(&self) -> i32 {
        entry_width(self.rect.width, self.samples.len())
    }

    /// Horizontal offset of bars and labels inside a slot
    pub(crate) fn inset(&self) -> i32 {
        2 * self.thickness
    }

    /// Vertical position of gridline `division`, counted from the top
    pub(crate) fn division_y(&self, division: u32) -> i32 {
        self.rect.y + (self.rect.height as i64 * division as i64 / self.divisions as i64) as i32
    }
}

fn entry_width(frame_width: i32, samples: usize) -> i32 {
    frame_width / samples.max(1) as i32 + 1
}

/// Draw gridlines with their value labels, the sample dividers and the
/// sample labels under the frame.
pub(crate) fn draw_frame<S: Surface>(surface: &mut S, frame: &Frame, font_size: u32) -> Result<()> {
    let rect = frame.rect;
    let axis_x = rect.x - frame.thickness;

    for division in 0..=frame.divisions {
        let y = frame.division_y(division);
        surface.line((rect.x, y), (rect.right(), y), GRID)?;
        surface.line((axis_x - TICK_LENGTH, y), (axis_x, y), FRAME)?;

        let label = format!("{:.2}", frame.range.tick_value(division, frame.divisions));
        let width = surface.text_width(&label, font_size)?;
        surface.text(
            &label,
            (
                axis_x - TICK_LENGTH - TICK_LABEL_GAP - width,
                y - font_size as i32 / 2,
            ),
            font_size,
            FRAME,
        )?;
    }

    for sample in frame.samples.iter().skip(1) {
        surface.line((sample.x, rect.y), (sample.x, rect.bottom()), GRID)?;
    }

    let label_y = rect.bottom() + frame.thickness + SAMPLE_LABEL_GAP;
    for sample in &frame.samples {
        surface.text(
            &sample.label,
            (sample.x + frame.inset(), label_y),
            font_size,
            FRAME,
        )?;
    }

    Ok(())
}

/// Left, bottom and right border, stroked once per pixel of thickness with
/// each pass shifted one pixel outward.
pub(crate) fn draw_border<S: Surface>(surface: &mut S, frame: &Frame) -> Result<()> {
    let rect = frame.rect;
    for shift in 0..frame.thickness {
        surface.polyline(
            &[
                (rect.x - shift, rect.y),
                (rect.x - shift, rect.bottom() + shift),
                (rect.right() + shift, rect.bottom() + shift),
                (rect.right() + shift, rect.y),
            ],
            FRAME,
        )?;
    }
    Ok(())
}
