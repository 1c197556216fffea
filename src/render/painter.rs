//! Paints one worksheet page into an arbitrary rectangle with FLTK draw
//! calls. The on-screen preview ([`draw_page`]) and the offscreen
//! rasterizer ([`draw_sheet`]) share the same content painting, so what you
//! see is what the PDF gets.
//!
//! [`draw_page`] insets the content by the margins for a WYSIWYG preview.
//! [`draw_sheet`] fills the whole rectangle with content: the exporter
//! applies the margins when placing the bitmap on the PDF page, and
//! applying them here as well would double them.
//!
//! Page numbers are NOT painted here — the exporter adds them as vector
//! text, and painting them into the bitmap would duplicate them.

use fltk::draw;
use fltk::enums::{Align, Color, Font};

use super::layout::{self, Rect};
use crate::app::settings::PageSettings;
use crate::app::worksheet::Page;
use crate::app::generator::Problem;

/// Fraction of a cell's height used for the operand font.
const DIGIT_FRAC: f32 = 0.26;
const INDEX_FRAC: f32 = 0.13;
const HEADER_FONT_FRAC: f32 = 0.45;

/// Preview rendering: the sheet with its content inset by the margins and
/// optional dashed margin guides.
pub fn draw_page(page: &Page, settings: &PageSettings, area: Rect) {
    draw::draw_rect_fill(area.x, area.y, area.w, area.h, Color::White);

    let content = layout::content_rect(settings, area);
    if settings.show_margins {
        draw_margin_guides(content);
    }
    draw_content(page, content);
}

/// Export rendering: content fills the whole rectangle. Margins come from
/// the PDF placement, nowhere else.
pub fn draw_sheet(page: &Page, area: Rect) {
    draw::draw_rect_fill(area.x, area.y, area.w, area.h, Color::White);
    draw_content(page, area);
}

fn draw_content(page: &Page, content: Rect) {
    let plan = layout::layout_page(page.problems.len(), content);
    draw_header(plan.header);
    for (i, (problem, cell)) in page.problems.iter().zip(&plan.cells).enumerate() {
        draw_problem(i + 1, problem, *cell);
    }
}

/// Dashed outline of the content area so the user can see where the
/// printable region ends.
fn draw_margin_guides(content: Rect) {
    draw::set_draw_color(Color::from_rgb(214, 120, 120));
    draw::set_line_style(draw::LineStyle::Dash, 1);
    draw::draw_rect(content.x, content.y, content.w, content.h);
    draw::set_line_style(draw::LineStyle::Solid, 0);
}

fn draw_header(header: Rect) {
    if header.h <= 0 {
        return;
    }
    let size = font_size(header.h as f32 * HEADER_FONT_FRAC);
    draw::set_font(Font::Helvetica, size);
    draw::set_draw_color(Color::Black);

    let half = header.w / 2;
    draw::draw_text2(
        "Name: ____________________",
        header.x,
        header.y,
        half,
        header.h,
        Align::Left | Align::Inside,
    );
    draw::draw_text2(
        "Date: ______________",
        header.x + half,
        header.y,
        header.w - half,
        header.h,
        Align::Right | Align::Inside,
    );
}

/// One problem as a stacked vertical sum:
/// index label, first operand, operator + second operand, answer rule.
fn draw_problem(index: usize, problem: &Problem, cell: Rect) {
    let pad = (cell.w as f32 * 0.12) as i32;
    let inner = Rect::new(cell.x + pad, cell.y, cell.w - 2 * pad, cell.h);
    let row_h = inner.h / 4;
    if row_h <= 0 || inner.w <= 0 {
        return;
    }

    let index_size = font_size(cell.h as f32 * INDEX_FRAC);
    draw::set_font(Font::Helvetica, index_size);
    draw::set_draw_color(Color::from_rgb(130, 130, 130));
    draw::draw_text2(
        &format!("{})", index),
        cell.x,
        cell.y,
        pad.max(index_size * 2),
        row_h,
        Align::Left | Align::Inside,
    );

    let digit_size = font_size(cell.h as f32 * DIGIT_FRAC);
    draw::set_font(Font::HelveticaBold, digit_size);
    draw::set_draw_color(Color::Black);

    draw::draw_text2(
        &problem.first.to_string(),
        inner.x,
        inner.y,
        inner.w,
        row_h,
        Align::Right | Align::Inside,
    );
    draw::draw_text2(
        problem.operator.symbol(),
        inner.x,
        inner.y + row_h,
        inner.w,
        row_h,
        Align::Left | Align::Inside,
    );
    draw::draw_text2(
        &problem.second.to_string(),
        inner.x,
        inner.y + row_h,
        inner.w,
        row_h,
        Align::Right | Align::Inside,
    );

    // Answer rule under the second operand
    let rule_y = inner.y + 2 * row_h + row_h / 6;
    draw::set_line_style(draw::LineStyle::Solid, (digit_size / 14).max(1));
    draw::draw_line(inner.x, rule_y, inner.x + inner.w, rule_y);
    draw::set_line_style(draw::LineStyle::Solid, 0);
}

fn font_size(px: f32) -> i32 {
    (px as i32).clamp(6, 200)
}
