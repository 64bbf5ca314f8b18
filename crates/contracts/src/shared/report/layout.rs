//! Page layout of a tabular report.
//!
//! Produces device-independent drawing operations in millimetres, top-left
//! origin, on A4 portrait pages. The first page carries the title block; the
//! table header row is repeated on every page.

use super::fonts::Font;
use super::{ReportHeader, ReportTable};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

// Title block
const TITLE_Y: f32 = 15.0;
const SUBTITLE_Y: f32 = 25.0;
const DATE_Y: f32 = 35.0;
const ADDRESS_Y: f32 = 45.0;
const RULE_Y: f32 = 49.0;
const RULE_X1: f32 = 10.0;
const RULE_X2: f32 = 200.0;
const RULE_WIDTH: f32 = 0.5;

// Table
const MARGIN_X: f32 = 14.0;
const TABLE_WIDTH: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_X;
const TABLE_START_Y: f32 = 55.0;
const CONTINUATION_TOP: f32 = 60.0;
const MARGIN_BOTTOM: f32 = 14.0;
/// Lowest baseline or box edge allowed on a page
pub const PRINTABLE_BOTTOM: f32 = PAGE_HEIGHT_MM - MARGIN_BOTTOM;
const FONT_SIZE: f32 = 10.0;
const CELL_PADDING: f32 = 2.0;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const BASELINE_RATIO: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

const TITLE_COLOR: Rgb = Rgb(75, 156, 211);
const SUBTITLE_COLOR: Rgb = Rgb(51, 51, 51);
const DATE_COLOR: Rgb = Rgb(102, 102, 102);
const ADDRESS_COLOR: Rgb = Rgb(153, 153, 153);
const HEADER_FILL: Rgb = Rgb(44, 62, 80);
const ALTERNATE_FILL: Rgb = Rgb(230, 230, 230);
const BODY_TEXT: Rgb = Rgb(20, 20, 20);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `x`/`y` is the left end of the baseline
    Text {
        x: f32,
        y: f32,
        size_pt: f32,
        font: Font,
        color: Rgb,
        text: String,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
    /// Indices of the table body rows that start on this page
    pub body_rows: Vec<usize>,
    /// Row carried over from the previous page, when one was split
    pub continued_row: Option<usize>,
}

impl PageLayout {
    fn has_body(&self) -> bool {
        !self.body_rows.is_empty() || self.continued_row.is_some()
    }
}

pub fn layout_report(header: &ReportHeader, table: &ReportTable) -> Vec<PageLayout> {
    let widths = column_widths(table);
    let mut pages = Vec::new();

    let mut page = PageLayout::default();
    title_block(header, &mut page.ops);
    let mut y = TABLE_START_Y;
    y += header_row(table.columns(), &widths, y, &mut page.ops);

    let header_height = row_height(&wrap_row(table.columns(), &widths, Font::Bold));
    let fresh_capacity = lines_fitting(PRINTABLE_BOTTOM - CONTINUATION_TOP - header_height);

    for (index, row) in table.rows().iter().enumerate() {
        let wrapped = wrap_row(row, &widths, Font::Regular);
        let total = line_count(&wrapped);
        let mut from = 0;

        while from < total {
            let left = total - from;
            let fit = lines_fitting(PRINTABLE_BOTTOM - y);

            // Строка не помещается: переносим целиком, если она влезет на
            // новую страницу, иначе режем по строкам текста
            if fit < left
                && page.has_body()
                && (fit == 0 || (from == 0 && left <= fresh_capacity))
            {
                pages.push(std::mem::take(&mut page));
                y = CONTINUATION_TOP;
                y += header_row(table.columns(), &widths, y, &mut page.ops);
                continue;
            }

            let take = fit.min(left).max(1);
            let height = take as f32 * line_height() + 2.0 * CELL_PADDING;

            if is_shaded_row(index) {
                page.ops.push(DrawOp::FillRect {
                    x: MARGIN_X,
                    y,
                    w: TABLE_WIDTH,
                    h: height,
                    color: ALTERNATE_FILL,
                });
            }
            let mut x = MARGIN_X;
            for (lines, width) in wrapped.iter().zip(&widths) {
                let end = lines.len().min(from + take);
                let slice: &[String] = if from < end { &lines[from..end] } else { &[] };
                cell_text(slice, x + CELL_PADDING, y, Font::Regular, BODY_TEXT, &mut page.ops);
                x += width;
            }

            if from == 0 {
                page.body_rows.push(index);
            } else {
                page.continued_row = Some(index);
            }
            y += height;
            from += take;

            if from < total {
                pages.push(std::mem::take(&mut page));
                y = CONTINUATION_TOP;
                y += header_row(table.columns(), &widths, y, &mut page.ops);
            }
        }
    }

    pages.push(page);
    pages
}

/// Как alternateRowStyles: затеняются 1-я, 3-я, ... строки. Списки на
/// экране используют ту же чётность.
pub fn is_shaded_row(index: usize) -> bool {
    index % 2 == 0
}

/// Whole text lines that fit into `available` millimetres of a row.
fn lines_fitting(available: f32) -> usize {
    let room = available - 2.0 * CELL_PADDING;
    if room < line_height() {
        return 0;
    }
    (room / line_height() + 1e-4).floor() as usize
}

fn line_count(wrapped: &[Vec<String>]) -> usize {
    wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1)
}

fn title_block(header: &ReportHeader, ops: &mut Vec<DrawOp>) {
    centered(&header.title, TITLE_Y, 24.0, Font::Bold, TITLE_COLOR, ops);
    centered(&header.subtitle, SUBTITLE_Y, 18.0, Font::Regular, SUBTITLE_COLOR, ops);
    centered(
        &format!("Report Generated Date: {}", header.generated_on),
        DATE_Y,
        12.0,
        Font::Italic,
        DATE_COLOR,
        ops,
    );
    centered(&header.address, ADDRESS_Y, 10.0, Font::Regular, ADDRESS_COLOR, ops);
    ops.push(DrawOp::Line {
        x1: RULE_X1,
        y1: RULE_Y,
        x2: RULE_X2,
        y2: RULE_Y,
        width: RULE_WIDTH,
        color: Rgb::BLACK,
    });
}

fn centered(text: &str, y: f32, size_pt: f32, font: Font, color: Rgb, ops: &mut Vec<DrawOp>) {
    let text = printable(text);
    let width = text_width_mm(&text, font, size_pt);
    ops.push(DrawOp::Text {
        x: (PAGE_WIDTH_MM - width) / 2.0,
        y,
        size_pt,
        font,
        color,
        text,
    });
}

/// Draws the header row at `y` and returns its height.
fn header_row(columns: &[String], widths: &[f32], y: f32, ops: &mut Vec<DrawOp>) -> f32 {
    let wrapped = wrap_row(columns, widths, Font::Bold);
    let height = row_height(&wrapped);

    ops.push(DrawOp::FillRect {
        x: MARGIN_X,
        y,
        w: TABLE_WIDTH,
        h: height,
        color: HEADER_FILL,
    });

    let mut x = MARGIN_X;
    for (lines, width) in wrapped.iter().zip(widths) {
        for (i, line) in lines.iter().enumerate() {
            let line_width = text_width_mm(line, Font::Bold, FONT_SIZE);
            ops.push(DrawOp::Text {
                x: x + (width - line_width) / 2.0,
                y: baseline(y, i),
                size_pt: FONT_SIZE,
                font: Font::Bold,
                color: Rgb::WHITE,
                text: line.clone(),
            });
        }
        x += width;
    }
    height
}

fn cell_text(lines: &[String], x: f32, top: f32, font: Font, color: Rgb, ops: &mut Vec<DrawOp>) {
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        ops.push(DrawOp::Text {
            x,
            y: baseline(top, i),
            size_pt: FONT_SIZE,
            font,
            color,
            text: line.clone(),
        });
    }
}

fn baseline(row_top: f32, line: usize) -> f32 {
    row_top + CELL_PADDING + line as f32 * line_height() + FONT_SIZE * PT_TO_MM * BASELINE_RATIO
}

fn line_height() -> f32 {
    FONT_SIZE * PT_TO_MM * LINE_HEIGHT_FACTOR
}

fn row_height(wrapped: &[Vec<String>]) -> f32 {
    line_count(wrapped) as f32 * line_height() + 2.0 * CELL_PADDING
}

fn wrap_row(cells: &[String], widths: &[f32], font: Font) -> Vec<Vec<String>> {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| wrap_text(&printable(cell), font, FONT_SIZE, width - 2.0 * CELL_PADDING))
        .collect()
}

fn text_width_mm(text: &str, font: Font, size_pt: f32) -> f32 {
    font.text_width_pt(text, size_pt) * PT_TO_MM
}

/// Column widths that fill the table width.
///
/// Every column first gets its longest unbreakable word (header or cell) so
/// that numbers and e-mail addresses are not split. Whatever is left is shared
/// in proportion to how much wider each column's content is than that
/// minimum. When even the minimums do not fit they are scaled down.
pub fn column_widths(table: &ReportTable) -> Vec<f32> {
    let columns = table.columns().len();
    let mut minimum = vec![0.0_f32; columns];
    let mut natural = vec![0.0_f32; columns];

    for (col, title) in table.columns().iter().enumerate() {
        minimum[col] = longest_word_mm(title, Font::Bold);
        natural[col] = longest_line_mm(title, Font::Bold);
    }
    for row in table.rows() {
        for (col, cell) in row.iter().enumerate() {
            minimum[col] = minimum[col].max(longest_word_mm(cell, Font::Regular));
            natural[col] = natural[col].max(longest_line_mm(cell, Font::Regular));
        }
    }
    let minimum: Vec<f32> = minimum.iter().map(|w| w + 2.0 * CELL_PADDING).collect();
    let natural: Vec<f32> = natural.iter().map(|w| w + 2.0 * CELL_PADDING).collect();

    let natural_total: f32 = natural.iter().sum();
    if natural_total <= TABLE_WIDTH {
        return natural
            .iter()
            .map(|w| w * TABLE_WIDTH / natural_total)
            .collect();
    }

    let minimum_total: f32 = minimum.iter().sum();
    if minimum_total >= TABLE_WIDTH {
        return minimum
            .iter()
            .map(|w| w * TABLE_WIDTH / minimum_total)
            .collect();
    }

    let spare = TABLE_WIDTH - minimum_total;
    let growth: Vec<f32> = natural.iter().zip(&minimum).map(|(n, m)| n - m).collect();
    let growth_total: f32 = growth.iter().sum();
    minimum
        .iter()
        .zip(&growth)
        .map(|(m, g)| m + g * spare / growth_total)
        .collect()
}

fn longest_word_mm(text: &str, font: Font) -> f32 {
    text.split_whitespace()
        .map(|word| text_width_mm(word, font, FONT_SIZE))
        .fold(0.0_f32, f32::max)
}

fn longest_line_mm(text: &str, font: Font) -> f32 {
    text.split('\n')
        .map(|line| text_width_mm(line, font, FONT_SIZE))
        .fold(0.0_f32, f32::max)
}

/// Text as it can be printed with the standard fonts: anything outside
/// printable ASCII becomes `?`.
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\n' => c,
            c if c.is_whitespace() => ' ',
            _ => '?',
        })
        .collect()
}

/// Greedy word wrap to `max_width_mm`; words wider than a line are broken
/// between characters. Always yields at least one (possibly empty) line.
pub fn wrap_text(text: &str, font: Font, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, font, size_pt) <= max_width_mm + 1e-3;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }
            for c in word.chars() {
                let mut next = current.clone();
                next.push(c);
                if !fits(&next) && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    next = c.to_string();
                }
                current = next;
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ReportHeader {
        ReportHeader {
            title: "Saloon Management".into(),
            subtitle: "Employee Details Report".into(),
            generated_on: "10/17/2026".into(),
            address: "Saloon, Gampaha".into(),
        }
    }

    fn table(rows: usize) -> ReportTable {
        let mut table = ReportTable::new(vec!["No".into(), "Name".into(), "Email".into()]).unwrap();
        for i in 0..rows {
            table
                .push_row(vec![
                    (i + 1).to_string(),
                    format!("Employee {}", i + 1),
                    format!("employee{}@salon.lk", i + 1),
                ])
                .unwrap();
        }
        table
    }

    fn texts(page: &PageLayout) -> Vec<&str> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_body_row_per_record_in_order() {
        for n in [0, 1, 7, 120] {
            let pages = layout_report(&header(), &table(n));
            let placed: Vec<usize> = pages.iter().flat_map(|p| p.body_rows.clone()).collect();
            assert_eq!(placed, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_long_tables_paginate_and_repeat_header() {
        let pages = layout_report(&header(), &table(120));
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(texts(page).contains(&"Email"));
            assert!(!page.body_rows.is_empty());
        }
        assert!(texts(&pages[0]).contains(&"Saloon Management"));
        assert!(!texts(&pages[1]).contains(&"Saloon Management"));
    }

    #[test]
    fn test_title_block_content() {
        let pages = layout_report(&header(), &table(1));
        let t = texts(&pages[0]);
        assert!(t.contains(&"Employee Details Report"));
        assert!(t.contains(&"Report Generated Date: 10/17/2026"));
        assert!(t.contains(&"Saloon, Gampaha"));
    }

    fn fills(page: &PageLayout, fill: Rgb) -> Vec<(f32, f32)> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { y, h, color, .. } if *color == fill => Some((*y, *h)),
                _ => None,
            })
            .collect()
    }

    fn three_columns(address: &str) -> ReportTable {
        let mut table =
            ReportTable::new(vec!["No".into(), "Contact No".into(), "Address".into()]).unwrap();
        table
            .push_row(vec!["1".into(), "0771234567".into(), address.to_string()])
            .unwrap();
        table
            .push_row(vec!["2".into(), "0717654321".into(), "12 Main St".into()])
            .unwrap();
        table
    }

    #[test]
    fn test_first_row_and_every_other_row_are_shaded() {
        let pages = layout_report(&header(), &table(4));
        let shaded = fills(&pages[0], ALTERNATE_FILL);
        assert_eq!(shaded.len(), 2);
        assert!(is_shaded_row(0) && !is_shaded_row(1) && is_shaded_row(2));

        let header_fill = fills(&pages[0], HEADER_FILL)[0];
        // row 1 starts right below the header row
        assert!((shaded[0].0 - (header_fill.0 + header_fill.1)).abs() < 1e-3);
    }

    #[test]
    fn test_rows_stay_inside_printable_area() {
        let pages = layout_report(&header(), &table(200));
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::FillRect { y, h, .. } = op {
                    assert!(y + h <= PRINTABLE_BOTTOM + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_row_taller_than_a_page_is_split_across_pages() {
        let address = "word ".repeat(3000);
        let table = three_columns(&address);
        let pages = layout_report(&header(), &table);
        assert!(pages.len() > 2);

        for page in &pages {
            for op in &page.ops {
                match op {
                    DrawOp::Text { y, .. } => assert!(*y <= PRINTABLE_BOTTOM, "text at {}", y),
                    DrawOp::FillRect { y, h, .. } => assert!(y + h <= PRINTABLE_BOTTOM + 1e-3),
                    DrawOp::Line { .. } => {}
                }
            }
            // the header row is repeated above every fragment
            assert!(texts(page).contains(&"Address"));
        }

        // every word of the long cell is printed exactly once
        let words: usize = pages
            .iter()
            .flat_map(|p| texts(p))
            .filter(|t| t.starts_with("word"))
            .map(|t| t.split_whitespace().count())
            .sum();
        assert_eq!(words, 3000);

        assert_eq!(pages[0].body_rows, vec![0]);
        assert_eq!(pages[1].continued_row, Some(0));
        let placed: Vec<usize> = pages.iter().flat_map(|p| p.body_rows.clone()).collect();
        assert_eq!(placed, vec![0, 1]);
        assert!(texts(pages.last().unwrap()).contains(&"0717654321"));
    }

    #[test]
    fn test_row_that_fits_a_fresh_page_moves_whole() {
        let mut table = ReportTable::new(vec!["No".into(), "Notes".into()]).unwrap();
        for i in 0..20 {
            table.push_row(vec![(i + 1).to_string(), "short".into()]).unwrap();
        }
        // about forty lines: too tall for what is left of page 1
        table.push_row(vec!["21".into(), "line\n".repeat(40)]).unwrap();

        let pages = layout_report(&header(), &table);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].body_rows.len(), 20);
        assert_eq!(pages[1].body_rows, vec![20]);
        assert_eq!(pages[1].continued_row, None);
    }

    #[test]
    fn test_long_cell_does_not_starve_short_columns() {
        let address = "No. 42, Lotus Garden Residences, Colombo Road, Kirillawala, \
                       Kadawatha, Gampaha District, Western Province, Sri Lanka 11850";
        let table = three_columns(address);
        let widths = column_widths(&table);
        let total: f32 = widths.iter().sum();
        assert!((total - TABLE_WIDTH).abs() < 1e-3);

        let contact = wrap_text("0771234567", Font::Regular, FONT_SIZE, widths[1] - 2.0 * CELL_PADDING);
        assert_eq!(contact, vec!["0771234567".to_string()]);
        let number = wrap_text("No", Font::Bold, FONT_SIZE, widths[0] - 2.0 * CELL_PADDING);
        assert_eq!(number, vec!["No".to_string()]);
        assert!(widths[2] > widths[1]);
    }

    #[test]
    fn test_cells_are_wrapped_to_their_column() {
        let address = "12 Temple Road Gampaha ".repeat(10);
        let table = three_columns(&address);
        let widths = column_widths(&table);
        let pages = layout_report(&header(), &table);

        let column_left = MARGIN_X + widths[0] + widths[1];
        let column_right = column_left + widths[2];
        let mut address_lines = 0;
        for op in &pages[0].ops {
            if let DrawOp::Text { x, y, text, font: Font::Regular, size_pt, .. } = op {
                if *x >= column_left && *y > TABLE_START_Y && *size_pt == FONT_SIZE {
                    address_lines += 1;
                    assert!(x + text_width_mm(text, Font::Regular, FONT_SIZE) <= column_right + 1e-3);
                }
            }
        }
        assert!(address_lines > 1);
    }

    #[test]
    fn test_text_outside_ascii_is_replaced() {
        assert_eq!(printable("Café\tαβ"), "Caf? ??");
        let mut table = ReportTable::new(vec!["No".into(), "Name".into()]).unwrap();
        table.push_row(vec!["1".into(), "Nimal Perera".into()]).unwrap();
        let header = ReportHeader { address: "Gampaha – Sri Lanka".into(), ..header() };
        let pages = layout_report(&header, &table);
        assert!(texts(&pages[0]).contains(&"Gampaha ? Sri Lanka"));
    }

    #[test]
    fn test_column_widths_fill_table() {
        let widths = column_widths(&table(3));
        let total: f32 = widths.iter().sum();
        assert!((total - TABLE_WIDTH).abs() < 1e-3);
        assert!(widths[2] > widths[0]);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("", Font::Regular, 10.0, 50.0), vec![String::new()]);
        assert_eq!(
            wrap_text("short", Font::Regular, 10.0, 50.0),
            vec!["short".to_string()]
        );

        let lines = wrap_text("one two three four five six", Font::Regular, 10.0, 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), "one two three four five six");

        let long = "averyveryverylongaddresswithoutanyspaces@salon.lk";
        let lines = wrap_text(long, Font::Regular, 10.0, 15.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), long);
        for line in &lines {
            assert!(text_width_mm(line, Font::Regular, 10.0) <= 15.0 + 1e-3);
        }
    }
}
