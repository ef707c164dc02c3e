//! Color key above the frame

use plotters::style::RGBColor;

use super::colors::{FRAME, bar_color};
use super::{Frame, Point, Rect, Surface};
use crate::abricate::SERIES_OFFSET;
use crate::error::Result;

/// Preferred distance from the top of the image to the first key line
const KEY_TOP: i32 = 30;

/// The key never starts closer to the image edge than this
const KEY_MIN_TOP: i32 = 4;

/// Space kept free between the last key line and the frame
const KEY_FRAME_GAP: i32 = 8;

const SWATCH_SIZE: i32 = 14;

/// Gap between a swatch and its label
const SWATCH_GAP: i32 = 6;

/// Space after each entry
const ENTRY_PADDING: i32 = 20;

/// Entries wrap once they would pass this share of the frame width
const WRAP_RATIO: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyEntry {
    pub label: String,
    pub swatch: Rect,
    pub text_at: Point,
    pub color: RGBColor,
}

/// Laid out key. `hidden` counts series whose entries did not fit between
/// the image top and the frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Key {
    pub entries: Vec<KeyEntry>,
    pub hidden: usize,
}

/// Place one swatch + label per series, left to right, wrapping to a new
/// line when an entry would run past the wrap limit.
///
/// The key starts at `KEY_TOP` when it fits there. A taller key is moved up
/// so its last line ends above the frame, and lines that still do not fit
/// are dropped.
pub(crate) fn layout_key<S: Surface>(
    surface: &S,
    labels: &[String],
    frame: &Frame,
    font_size: u32,
) -> Result<Key> {
    let left = frame.rect.x;
    let limit = left + (frame.rect.width as f64 * WRAP_RATIO) as i32;
    let line_height = font_size as i32 * 3 / 2;

    // (series, label, x, line)
    let mut placed = Vec::new();
    let (mut x, mut line) = (left, 0);
    for (series, label) in labels.iter().skip(SERIES_OFFSET).enumerate() {
        let advance = SWATCH_SIZE + SWATCH_GAP + surface.text_width(label, font_size)?;
        if x > left && x + advance > limit {
            x = left;
            line += 1;
        }
        placed.push((series, label, x, line));
        x += advance + ENTRY_PADDING;
    }

    let Some(&(_, _, _, last_line)) = placed.last() else {
        return Ok(Key::default());
    };

    let bottom_limit = frame.rect.y - KEY_FRAME_GAP;
    let capacity = ((bottom_limit - KEY_MIN_TOP) / line_height).max(1);
    let lines = (last_line + 1).min(capacity);
    let top = KEY_TOP.min(bottom_limit - lines * line_height).max(KEY_MIN_TOP);

    let total = placed.len();
    let entries: Vec<KeyEntry> = placed
        .into_iter()
        .take_while(|&(_, _, _, line)| line < lines)
        .map(|(series, label, x, line)| {
            let y = top + line * line_height;
            KeyEntry {
                label: label.clone(),
                swatch: Rect::new(
                    x,
                    y + (font_size as i32 - SWATCH_SIZE) / 2,
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                ),
                text_at: (x + SWATCH_SIZE + SWATCH_GAP, y),
                color: bar_color(series),
            }
        })
        .collect();

    Ok(Key {
        hidden: total - entries.len(),
        entries,
    })
}

pub(crate) fn draw_key<S: Surface>(surface: &mut S, key: &Key, font_size: u32) -> Result<()> {
    for entry in &key.entries {
        surface.fill_rect(entry.swatch, entry.color)?;
        surface.text(&entry.label, entry.text_at, font_size, FRAME)?;
    }
    Ok(())
}
