//! Branded PDF layout for FRAMES reports.
//!
//! # Design
//! - Header band, title block and category context box are drawn once on the
//!   first page; the grid table starts below them.
//! - Table columns share the printable width equally and values wrap inside
//!   their cell. When a row would cross the bottom margin the table continues
//!   on a new page with the header row repeated.
//! - The footer is stamped on every page after layout.

mod metrics;
mod writer;

use crate::info::ReportInfo;
use crate::table::{ReportRow, ReportTable, header_label};

use metrics::{points_to_mm, text_width_mm};
use writer::{Font, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PdfDocument, Rgb};

const PRIMARY: Rgb = Rgb(0, 51, 102);
const SECONDARY: Rgb = Rgb(0, 168, 89);
const ACCENT: Rgb = Rgb(220, 53, 69);
const TEXT: Rgb = Rgb(33, 37, 41);
const LIGHT_GRAY: Rgb = Rgb(240, 240, 240);
const WHITE: Rgb = Rgb(255, 255, 255);
const MUTED: Rgb = Rgb(100, 100, 100);
const FOOTER_GRAY: Rgb = Rgb(150, 150, 150);
const ALTERNATE_ROW: Rgb = Rgb(248, 249, 250);
const GRID_LINE: Rgb = Rgb(200, 200, 200);

const MARGIN: f64 = 14.0;
const TABLE_TOP: f64 = 80.0;
const CONTINUATION_TOP: f64 = 20.0;
const BOTTOM_LIMIT: f64 = PAGE_HEIGHT_MM - 20.0;
const CELL_PADDING: f64 = 3.0;
const BODY_SIZE: f64 = 9.0;
const LINE_FACTOR: f64 = 1.15;

const FOOTER_TEXT: &str =
    "Generated by FRAMES - Facial Recognition Attendance Management Educational System";
const EMPTY_TEXT: &str = "No data available for this report.";

/// Render a report as PDF bytes.
///
/// An empty dataset still produces a document carrying the header and a
/// "no data" notice.
#[must_use]
pub fn render_pdf(info: &ReportInfo, rows: &[ReportRow]) -> Vec<u8> {
    let table = ReportTable::from_rows(rows);
    let mut doc = PdfDocument::new(&info.title);

    draw_header(&mut doc, info);
    if table.is_empty() {
        doc.current().text(
            centered_x(Font::Regular, 10.0, EMPTY_TEXT),
            90.0,
            EMPTY_TEXT,
            Font::Regular,
            10.0,
            ACCENT,
        );
    } else {
        draw_table(&mut doc, &table);
    }

    let footer_x = centered_x(Font::Regular, 8.0, FOOTER_TEXT);
    for page in doc.pages_mut() {
        page.text(
            footer_x,
            PAGE_HEIGHT_MM - 10.0,
            FOOTER_TEXT,
            Font::Regular,
            8.0,
            FOOTER_GRAY,
        );
    }

    tracing::debug!(rows = table.rows().len(), title = %info.title, "rendered pdf report");
    doc.finish()
}

fn centered_x(font: Font, size: f64, text: &str) -> f64 {
    (PAGE_WIDTH_MM - text_width_mm(font, size, text)) / 2.0
}

fn draw_header(doc: &mut PdfDocument, info: &ReportInfo) {
    let page = doc.current();
    page.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, 15.0, PRIMARY);

    let brand = "FRAMES REPORT";
    page.text(
        centered_x(Font::Bold, 22.0, brand),
        30.0,
        brand,
        Font::Bold,
        22.0,
        PRIMARY,
    );

    let title = info.title.to_uppercase();
    page.text(
        centered_x(Font::Bold, 14.0, &title),
        38.0,
        &title,
        Font::Bold,
        14.0,
        SECONDARY,
    );

    let kind = info.kind_label();
    page.text(
        centered_x(Font::Regular, 10.0, kind),
        44.0,
        kind,
        Font::Regular,
        10.0,
        MUTED,
    );

    page.fill_rounded_rect(
        MARGIN,
        45.0,
        PAGE_WIDTH_MM - MARGIN * 2.0,
        25.0,
        3.0,
        LIGHT_GRAY,
    );

    for ((label, value), y) in info.category.context_lines().iter().zip([55.0, 63.0]) {
        page.text(20.0, y, label, Font::Bold, 10.0, TEXT);
        let offset = text_width_mm(Font::Bold, 10.0, label);
        page.text(20.0 + offset, y, value, Font::Regular, 10.0, TEXT);
    }

    // Bold label, regular value; the block is right-aligned on its widest row.
    let right_rows = [
        ("Date Range: ", info.date_range.as_str()),
        ("Generated: ", info.generated_at.as_str()),
    ];
    let widest = right_rows
        .iter()
        .map(|(label, value)| {
            text_width_mm(Font::Bold, 10.0, label) + text_width_mm(Font::Regular, 10.0, value)
        })
        .fold(0.0_f64, f64::max);
    let right_x = PAGE_WIDTH_MM - 20.0 - widest;
    for ((label, value), y) in right_rows.iter().zip([55.0, 63.0]) {
        page.text(right_x, y, label, Font::Bold, 10.0, TEXT);
        let offset = text_width_mm(Font::Bold, 10.0, label);
        page.text(right_x + offset, y, value, Font::Regular, 10.0, TEXT);
    }
}

/// Colour and weight for a status cell, if the value calls for emphasis.
fn status_style(value: &str) -> Option<(Rgb, Font)> {
    let lowered = value.to_lowercase();
    if ["late", "risk", "absent"]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        Some((ACCENT, Font::Bold))
    } else if ["present", "good"]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        Some((SECONDARY, Font::Regular))
    } else {
        None
    }
}

fn line_height() -> f64 {
    points_to_mm(BODY_SIZE) * LINE_FACTOR
}

fn row_height(line_count: usize) -> f64 {
    let lines = u32::try_from(line_count.max(1)).unwrap_or(u32::MAX);
    CELL_PADDING.mul_add(2.0, f64::from(lines) * line_height())
}

fn draw_table(doc: &mut PdfDocument, table: &ReportTable) {
    let columns = table.columns();
    let column_count = u32::try_from(columns.len().max(1)).unwrap_or(u32::MAX);
    let column_width = (PAGE_WIDTH_MM - MARGIN * 2.0) / f64::from(column_count);
    let inner_width = CELL_PADDING.mul_add(-2.0, column_width);
    let status_columns: Vec<bool> = columns
        .iter()
        .map(|key| key.to_lowercase().contains("status"))
        .collect();
    let headers: Vec<Vec<String>> = columns
        .iter()
        .map(|key| wrap(&header_label(key), Font::Bold, inner_width))
        .collect();

    let mut y = TABLE_TOP;
    y = draw_header_row(doc, &headers, column_width, y);

    for (index, row) in table.rows().iter().enumerate() {
        let styles: Vec<Option<(Rgb, Font)>> = row
            .iter()
            .zip(&status_columns)
            .map(|(value, is_status)| if *is_status { status_style(value) } else { None })
            .collect();
        let cells: Vec<Vec<String>> = row
            .iter()
            .zip(&styles)
            .map(|(value, style)| {
                let font = style.map_or(Font::Regular, |(_, font)| font);
                wrap(value, font, inner_width)
            })
            .collect();
        let height = row_height(cells.iter().map(Vec::len).max().unwrap_or(1));

        if y + height > BOTTOM_LIMIT {
            doc.add_page();
            y = draw_header_row(doc, &headers, column_width, CONTINUATION_TOP);
        }

        let page = doc.current();
        if index % 2 == 1 {
            page.fill_rect(MARGIN, y, column_width * f64::from(column_count), height, ALTERNATE_ROW);
        }
        let mut x = MARGIN;
        for (lines, style) in cells.iter().zip(&styles) {
            let (color, font) = style.unwrap_or((TEXT, Font::Regular));
            for (line_index, line) in lines.iter().enumerate() {
                page.text(
                    x + CELL_PADDING,
                    baseline(y, line_index),
                    line,
                    font,
                    BODY_SIZE,
                    color,
                );
            }
            page.stroke_rect(x, y, column_width, height, GRID_LINE, 0.1);
            x += column_width;
        }
        y += height;
    }
}

fn draw_header_row(
    doc: &mut PdfDocument,
    headers: &[Vec<String>],
    column_width: f64,
    top: f64,
) -> f64 {
    let height = row_height(headers.iter().map(Vec::len).max().unwrap_or(1));
    let page = doc.current();
    let mut x = MARGIN;
    for lines in headers {
        page.fill_rect(x, top, column_width, height, PRIMARY);
        for (line_index, line) in lines.iter().enumerate() {
            let width = text_width_mm(Font::Bold, BODY_SIZE, line);
            page.text(
                x + (column_width - width) / 2.0,
                baseline(top, line_index),
                line,
                Font::Bold,
                BODY_SIZE,
                WHITE,
            );
        }
        page.stroke_rect(x, top, column_width, height, GRID_LINE, 0.1);
        x += column_width;
    }
    top + height
}

fn baseline(row_top: f64, line_index: usize) -> f64 {
    let index = u32::try_from(line_index).unwrap_or(u32::MAX);
    let first = points_to_mm(BODY_SIZE).mul_add(0.8, row_top + CELL_PADDING);
    f64::from(index).mul_add(line_height(), first)
}

/// Greedy word wrap; words wider than the cell are split by character.
fn wrap(text: &str, font: Font, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(font, BODY_SIZE, &candidate) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width_mm(font, BODY_SIZE, word) <= max_width {
            current = word.to_string();
        } else {
            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && text_width_mm(font, BODY_SIZE, &next) > max_width {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                } else {
                    current = next;
                }
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
