//! Unit tests for chart layout, drawn onto a recording surface

use std::io::Cursor;
use std::path::Path;

use plotters::style::RGBColor;

use super::bars::{BarMetrics, GraphBar, bar_height};
use super::colors::{BAR_PALETTE, FRAME, GRID, bar_color};
use super::*;
use crate::error::Result;

/// Surface that records draw calls. Glyphs are half as wide as the font size.
#[derive(Default)]
struct Recorder {
    fills: Vec<RGBColor>,
    lines: Vec<(Point, Point, RGBColor)>,
    rects: Vec<(Rect, RGBColor)>,
    texts: Vec<(String, Point)>,
}

impl Surface for Recorder {
    fn fill(&mut self, color: RGBColor) -> Result<()> {
        self.fills.push(color);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: RGBColor) -> Result<()> {
        self.lines.push((from, to, color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: RGBColor) -> Result<()> {
        self.rects.push((rect, color));
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, _size: u32, _color: RGBColor) -> Result<()> {
        self.texts.push((text.to_string(), at));
        Ok(())
    }

    fn text_width(&self, text: &str, size: u32) -> Result<i32> {
        Ok((text.chars().count() as u32 * size / 2) as i32)
    }
}

fn table(text: &str) -> Table {
    Table::parse(Path::new("summary.tab"), Cursor::new(text.as_bytes())).unwrap()
}

fn frame_for(table: &Table) -> Frame {
    let geometry = Geometry::default();
    Frame::new(
        geometry.frame_rect(),
        DisplayRange::from_table(table),
        geometry.divisions,
        geometry.thickness,
        table.sample_names(),
    )
}

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("s{}.tab", i)).collect()
}

const EXAMPLE: &str = "#FILE\tNUM\tDB1\tDB2\n\
                       /a/b/sample1.tab\t2\t50\t.\n\
                       /a/b/sample2.tab\t2\t.\t75\n";

#[test]
fn test_frame_rect_from_padding() {
    assert_eq!(Geometry::default().frame_rect(), Rect::new(150, 150, 900, 500));
}

#[test]
fn test_sample_columns_are_evenly_spaced() {
    let frame = Frame::new(
        Rect::new(150, 150, 900, 500),
        DisplayRange { min: 0.0, max: 5.0 },
        10,
        5,
        &names(3),
    );
    assert_eq!(frame.entry_width(), 301);
    let xs: Vec<i32> = frame.samples.iter().map(|s| s.x).collect();
    assert_eq!(xs, [150, 451, 752]);
    assert_eq!(frame.samples[1].label, "s1.tab");
}

#[test]
fn test_division_positions() {
    let frame = Frame::new(
        Rect::new(150, 150, 900, 500),
        DisplayRange { min: 0.0, max: 5.0 },
        10,
        5,
        &names(1),
    );
    assert_eq!(frame.division_y(0), 150);
    assert_eq!(frame.division_y(3), 300);
    assert_eq!(frame.division_y(10), 650);
}

#[test]
fn test_example_bars() {
    let table = table(EXAMPLE);
    let frame = frame_for(&table);
    let bars = layout_bars(&frame, &table);

    assert_eq!(bars.len(), 2);

    assert_eq!(bars[0].label, "DB1");
    assert_eq!(bars[0].value, 50.0);
    assert_eq!(bars[0].rect, Rect::new(160, 568, 215, 83));
    assert_eq!(bars[0].color, BAR_PALETTE[0]);

    assert_eq!(bars[1].label, "DB2");
    assert_eq!(bars[1].value, 75.0);
    assert_eq!(bars[1].rect, Rect::new(826, 235, 215, 416));
    assert_eq!(bars[1].color, BAR_PALETTE[1]);
}

#[test]
fn test_zero_cells_produce_no_bars() {
    let table = table("#FILE\tNUM\tDB1\tDB2\na\t1\t0\t.\nb\t1\t0.0\t12\n");
    let frame = frame_for(&table);
    let bars = layout_bars(&frame, &table);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].value, 12.0);
}

#[test]
fn test_no_series_columns() {
    let table = table("#FILE\tNUM\na\t1\nb\t2\n");
    let frame = frame_for(&table);
    assert!(layout_bars(&frame, &table).is_empty());
}

#[test]
fn test_bar_bottoms_align() {
    let table = table("#FILE\tNUM\tDB1\tDB2\tDB3\na\t3\t20\t55\t90\n");
    let frame = frame_for(&table);
    for bar in layout_bars(&frame, &table) {
        assert_eq!(bar.rect.bottom(), frame.rect.bottom() + 1);
    }
}

#[test]
fn test_bar_height_is_monotonic() {
    let range = DisplayRange { min: 10.0, max: 90.0 };
    let mut last = -1;
    for step in 0..=80 {
        let height = bar_height(10.0 + step as f64, &range, 500);
        assert!(height >= last, "height dropped at step {}", step);
        last = height;
    }
    assert_eq!(bar_height(90.0, &range, 500), 500);
    assert_eq!(bar_height(10.0, &range, 500), 0);
}

#[test]
fn test_bar_height_truncates_and_clamps() {
    let range = DisplayRange { min: 0.0, max: 3.0 };
    assert_eq!(bar_height(1.0, &range, 100), 33);
    assert_eq!(bar_height(250.0, &range, 100), 100);
    let flat = DisplayRange { min: 100.0, max: 100.0 };
    assert_eq!(bar_height(150.0, &flat, 100), 0);
}

#[test]
fn test_bar_width_shrinks_with_series() {
    let rect = Rect::new(150, 150, 900, 500);
    let range = DisplayRange { min: 0.0, max: 5.0 };
    let frame = Frame::new(rect, range, 10, 5, &names(1));

    // usable width is 901 - 20 = 881
    assert_eq!(
        BarMetrics::new(&frame, 1),
        BarMetrics {
            slot_width: 881,
            bar_width: 881
        }
    );
    assert_eq!(BarMetrics::new(&frame, 3).slot_width, 293);

    // Past three series a padding slot is reserved and bars span two slots
    let dense = BarMetrics::new(&frame, 4);
    assert_eq!(dense.slot_width, 176);
    assert_eq!(dense.bar_width, 352);

    let widths: Vec<i32> = (1..=8)
        .map(|series| BarMetrics::new(&frame, series).slot_width)
        .collect();
    assert!(widths.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn test_dense_series_fit_inside_slot() {
    let table = table("#FILE\tNUM\tA\tB\tC\tD\tE\na\t5\t10\t20\t30\t40\t50\n");
    let frame = frame_for(&table);
    let bars = layout_bars(&frame, &table);
    let slot_end = frame.samples[0].x + frame.entry_width() - frame.inset();
    assert_eq!(bars.len(), 5);
    for bar in &bars {
        assert!(bar.rect.right() <= slot_end, "{:?} overflows", bar.rect);
    }
}

#[test]
fn test_palette_wraps() {
    assert_eq!(bar_color(0), BAR_PALETTE[0]);
    assert_eq!(bar_color(BAR_PALETTE.len()), BAR_PALETTE[0]);
    assert_eq!(bar_color(BAR_PALETTE.len() + 3), BAR_PALETTE[3]);
}

#[test]
fn test_sort_bars_descending_and_stable() {
    let bar = |label: &str, height: i32| GraphBar {
        label: label.to_string(),
        value: height as f64,
        rect: Rect::new(0, 0, 10, height),
        color: BAR_PALETTE[0],
    };
    let mut bars = vec![
        bar("a", 10),
        bar("b", 40),
        bar("c", 10),
        bar("d", 25),
        bar("e", 40),
    ];
    sort_bars(&mut bars);

    let order: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(order, ["b", "e", "d", "a", "c"]);
    assert!(
        bars.windows(2)
            .all(|pair| pair[0].rect.height >= pair[1].rect.height)
    );
}

#[test]
fn test_key_skips_metadata_labels() {
    let table = table(EXAMPLE);
    let frame = frame_for(&table);
    let key = layout_key(&Recorder::default(), table.labels(), &frame, 16)
        .unwrap()
        .entries;

    assert_eq!(key.len(), 2);
    assert_eq!(key[0].label, "DB1");
    assert_eq!(key[0].swatch, Rect::new(150, 31, 14, 14));
    assert_eq!(key[0].text_at, (170, 30));
    // 14 + 6 + 3 * 8 + 20
    assert_eq!(key[1].swatch.x, 214);
    assert_eq!(key[1].color, BAR_PALETTE[1]);
}

#[test]
fn test_key_wraps_near_frame_width() {
    let mut labels = vec!["FILE".to_string(), "NUM".to_string()];
    labels.extend((0..3).map(|i| format!("{}{}", "x".repeat(39), i)));
    let frame = Frame::new(
        Rect::new(150, 150, 900, 500),
        DisplayRange { min: 0.0, max: 5.0 },
        10,
        5,
        &names(1),
    );
    let key = layout_key(&Recorder::default(), &labels, &frame, 16).unwrap();
    assert_eq!(key.hidden, 0);

    let starts: Vec<Point> = key.entries.iter().map(|e| (e.swatch.x, e.text_at.1)).collect();
    assert_eq!(starts, [(150, 30), (510, 30), (150, 54)]);
}

#[test]
fn test_key_entry_wider_than_limit_stays_on_line() {
    let labels = vec![
        "FILE".to_string(),
        "NUM".to_string(),
        "y".repeat(300),
    ];
    let frame = frame_for(&table(EXAMPLE));
    let key = layout_key(&Recorder::default(), &labels, &frame, 16).unwrap();
    assert_eq!(key.entries[0].text_at, (170, 30));
}

fn gene_labels(count: usize) -> Vec<String> {
    let mut labels = vec!["FILE".to_string(), "NUM_FOUND".to_string()];
    labels.extend((1..=count).map(|i| format!("blaTEM-{}", i)));
    labels
}

#[test]
fn test_long_key_stays_above_frame() {
    let labels = gene_labels(60);
    let frame = frame_for(&table(EXAMPLE));
    let key = layout_key(&Recorder::default(), &labels, &frame, 16).unwrap();

    assert!(key.entries.len() < 60);
    assert_eq!(key.entries.len() + key.hidden, 60);
    for entry in &key.entries {
        assert!(entry.swatch.bottom() <= frame.rect.y, "{:?}", entry);
        assert!(entry.text_at.1 + 16 <= frame.rect.y, "{:?}", entry);
        assert!(entry.text_at.1 >= 0);
    }
    // Kept entries are the first series, in order
    assert_eq!(key.entries[0].label, "blaTEM-1");
    assert_eq!(key.entries[1].label, "blaTEM-2");
}

#[test]
fn test_key_moves_up_before_dropping_lines() {
    // 12 series wrap onto two lines; with the frame at y = 80 a key starting
    // at the usual top would reach it
    let labels = gene_labels(12);
    let frame = Frame::new(
        Rect::new(150, 80, 900, 500),
        DisplayRange { min: 0.0, max: 5.0 },
        10,
        5,
        &names(1),
    );
    let key = layout_key(&Recorder::default(), &labels, &frame, 16).unwrap();

    assert_eq!(key.hidden, 0);
    let tops: Vec<i32> = key.entries.iter().map(|e| e.text_at.1).collect();
    // 80 - 8 - 2 * 24
    assert_eq!(tops.first(), Some(&24));
    assert_eq!(tops.last(), Some(&48));
    assert!(key.entries.iter().all(|e| e.swatch.bottom() <= 80));
}

#[test]
fn test_frame_draws_ticks_dividers_and_labels() {
    let table = table(EXAMPLE);
    let frame = frame_for(&table);
    let mut surface = Recorder::default();
    draw_frame(&mut surface, &frame, 16).unwrap();

    let gridlines = surface
        .lines
        .iter()
        .filter(|(from, to, color)| *color == GRID && from.1 == to.1)
        .count();
    assert_eq!(gridlines, 11);

    let dividers: Vec<_> = surface
        .lines
        .iter()
        .filter(|(from, to, color)| *color == GRID && from.0 == to.0)
        .collect();
    assert_eq!(dividers.len(), 1);
    assert_eq!(dividers[0].0, (601, 150));

    let texts: Vec<&str> = surface.texts.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts.first(), Some(&"81.25"));
    assert!(texts.contains(&"62.50"));
    assert!(texts.contains(&"43.75"));

    let sample_labels: Vec<_> = surface
        .texts
        .iter()
        .filter(|(t, _)| t.ends_with(".tab"))
        .collect();
    assert_eq!(
        sample_labels,
        [
            &("sample1.tab".to_string(), (160, 661)),
            &("sample2.tab".to_string(), (611, 661)),
        ]
    );
}

#[test]
fn test_tick_labels_right_aligned_to_axis() {
    let table = table(EXAMPLE);
    let frame = frame_for(&table);
    let mut surface = Recorder::default();
    draw_frame(&mut surface, &frame, 16).unwrap();

    // "81.25" is 40px wide; axis at 145, tick 8px, gap 4px
    assert_eq!(surface.texts[0].1, (93, 142));
}

#[test]
fn test_border_has_three_thick_sides() {
    let frame = frame_for(&table(EXAMPLE));
    let mut surface = Recorder::default();
    draw_border(&mut surface, &frame).unwrap();

    assert_eq!(surface.lines.len(), 15);
    assert!(surface.lines.iter().all(|(_, _, color)| *color == FRAME));
    assert_eq!(surface.lines[0], ((150, 150), (150, 650), FRAME));
    assert_eq!(surface.lines[1], ((150, 650), (1050, 650), FRAME));
    assert_eq!(surface.lines[2], ((1050, 650), (1050, 150), FRAME));
    assert_eq!(surface.lines[14], ((1054, 654), (1054, 150), FRAME));
}

#[test]
fn test_draw_chart_paints_tallest_bar_first() {
    let table = table(EXAMPLE);
    let mut surface = Recorder::default();
    let summary = draw_chart(&mut surface, &table, &Geometry::default()).unwrap();

    assert_eq!(
        summary,
        ChartSummary {
            range: DisplayRange {
                min: 43.75,
                max: 81.25
            },
            samples: 2,
            series: 2,
            bars: 2,
            key_hidden: 0,
        }
    );
    assert_eq!(surface.fills.len(), 1);

    // Two key swatches, then the bars
    let bar_heights: Vec<i32> = surface.rects[2..].iter().map(|(r, _)| r.height).collect();
    assert_eq!(bar_heights, [416, 83]);
}

#[test]
fn test_draw_chart_without_samples() {
    let table = table("#FILE\tNUM\tDB1\n");
    let mut surface = Recorder::default();
    let summary = draw_chart(&mut surface, &table, &Geometry::default()).unwrap();
    assert_eq!(summary.bars, 0);
    assert_eq!(summary.range, DisplayRange { min: 0.0, max: 5.0 });
}
