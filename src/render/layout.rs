//! Pure page geometry. No FLTK here — everything is computed against an
//! arbitrary target rectangle so the preview widget and the offscreen
//! rasterizer share one layout.

use crate::app::settings::PageSettings;

/// Problems per row on a full sheet.
pub const GRID_COLS: usize = 5;

/// Header band (name/date line) as a fraction of the content height.
const HEADER_FRAC: f32 = 0.08;

/// Gutter between problem cells as a fraction of the content width.
const GAP_FRAC: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A laid-out worksheet page: the header band and one cell per problem,
/// row-major.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub header: Rect,
    pub cells: Vec<Rect>,
}

/// Inset a page rectangle by the configured margins, scaled from inches to
/// the rectangle's pixel density.
pub fn content_rect(settings: &PageSettings, page: Rect) -> Rect {
    let (page_w_in, page_h_in) = settings.page_size.dims_in();
    let ppi_x = page.w as f32 / page_w_in;
    let ppi_y = page.h as f32 / page_h_in;

    let m = &settings.margins;
    let left = (m.left * ppi_x) as i32;
    let right = (m.right * ppi_x) as i32;
    let top = (m.top * ppi_y) as i32;
    let bottom = (m.bottom * ppi_y) as i32;

    Rect {
        x: page.x + left,
        y: page.y + top,
        w: (page.w - left - right).max(0),
        h: (page.h - top - bottom).max(0),
    }
}

/// Lay out `count` problem cells in a fixed-width grid under a header band.
pub fn layout_page(count: usize, content: Rect) -> PageLayout {
    let header_h = (content.h as f32 * HEADER_FRAC) as i32;
    let header = Rect::new(content.x, content.y, content.w, header_h);

    if count == 0 || content.w <= 0 || content.h <= header_h {
        return PageLayout { header, cells: Vec::new() };
    }

    let cols = count.min(GRID_COLS);
    let rows = count.div_ceil(cols);

    let gap = ((content.w as f32 * GAP_FRAC) as i32).max(2);
    let grid = Rect::new(
        content.x,
        content.y + header_h + gap,
        content.w,
        content.h - header_h - gap,
    );

    let cell_w = (grid.w - gap * (cols as i32 - 1)) / cols as i32;
    let cell_h = (grid.h - gap * (rows as i32 - 1)) / rows as i32;
    if cell_w <= 0 || cell_h <= 0 {
        return PageLayout { header, cells: Vec::new() };
    }

    let mut cells = Vec::with_capacity(count);
    for i in 0..count {
        let col = (i % cols) as i32;
        let row = (i / cols) as i32;
        cells.push(Rect::new(
            grid.x + col * (cell_w + gap),
            grid.y + row * (cell_h + gap),
            cell_w,
            cell_h,
        ));
    }

    PageLayout { header, cells }
}
