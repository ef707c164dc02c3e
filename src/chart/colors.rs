//! Color definitions for graphs

use plotters::style::RGBColor;

pub(super) const BACKGROUND: RGBColor = RGBColor(220, 235, 240);
/// Border, ticks and text
pub(super) const FRAME: RGBColor = RGBColor(40, 50, 80);
/// Gridlines and sample dividers
pub(super) const GRID: RGBColor = RGBColor(185, 200, 225);

/// One color per database column, light/dark pairs by hue
pub(super) const BAR_PALETTE: [RGBColor; 24] = [
    RGBColor(210, 70, 70),
    RGBColor(150, 20, 20),
    RGBColor(75, 210, 70),
    RGBColor(34, 150, 20),
    RGBColor(70, 90, 210),
    RGBColor(20, 60, 150),
    RGBColor(210, 70, 170),
    RGBColor(150, 20, 90),
    RGBColor(210, 145, 70),
    RGBColor(150, 90, 20),
    RGBColor(70, 210, 140),
    RGBColor(20, 150, 100),
    RGBColor(130, 70, 210),
    RGBColor(25, 20, 150),
    RGBColor(210, 70, 150),
    RGBColor(150, 20, 150),
    RGBColor(210, 190, 70),
    RGBColor(150, 140, 20),
    RGBColor(70, 210, 195),
    RGBColor(20, 140, 150),
    RGBColor(70, 150, 210),
    RGBColor(100, 20, 150),
    RGBColor(210, 70, 210),
    RGBColor(143, 20, 80),
];

/// Palette color for a series; wraps around past the last entry
pub(super) fn bar_color(series: usize) -> RGBColor {
    BAR_PALETTE[series % BAR_PALETTE.len()]
}
