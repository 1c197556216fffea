use std::cell::RefCell;
use std::rc::Rc;

use fltk::{draw, enums::Color, prelude::*, widget::Widget};

use crate::app::settings::PageSettings;
use crate::app::worksheet::Page;
use crate::render::layout::Rect;
use crate::render::painter;

const PREVIEW_PADDING: i32 = 24;

struct PreviewState {
    page: Option<Page>,
    settings: PageSettings,
}

/// Shows the currently selected worksheet page scaled to fit the widget,
/// preserving the page aspect ratio. The actual page content comes from the
/// same painter the exporter rasterizes with.
pub struct PagePreview {
    pub widget: Widget,
    state: Rc<RefCell<PreviewState>>,
}

impl PagePreview {
    pub fn new(settings: PageSettings) -> Self {
        let state = Rc::new(RefCell::new(PreviewState { page: None, settings }));

        let mut widget = Widget::new(0, 0, 0, 0, None);
        let draw_state = state.clone();
        widget.draw(move |w| {
            let state = draw_state.borrow();
            draw::draw_rect_fill(w.x(), w.y(), w.w(), w.h(), Color::from_rgb(229, 231, 235));

            let Some(page) = &state.page else { return };
            let area = fit_page(&state.settings, w.x(), w.y(), w.w(), w.h());
            if area.w <= 0 || area.h <= 0 {
                return;
            }

            draw::draw_rect_fill(area.x + 4, area.y + 4, area.w, area.h, Color::from_rgb(203, 206, 210));
            painter::draw_page(page, &state.settings, area);
            draw::set_draw_color(Color::from_rgb(120, 120, 120));
            draw::draw_rect(area.x, area.y, area.w, area.h);
        });

        Self { widget, state }
    }

    pub fn set_page(&mut self, page: Page) {
        self.state.borrow_mut().page = Some(page);
        self.widget.redraw();
    }

    pub fn set_settings(&mut self, settings: PageSettings) {
        self.state.borrow_mut().settings = settings;
        self.widget.redraw();
    }
}

/// Largest sheet rectangle with the page's aspect ratio that fits the
/// widget box, centered.
fn fit_page(settings: &PageSettings, x: i32, y: i32, w: i32, h: i32) -> Rect {
    let (page_w_in, page_h_in) = settings.page_size.dims_in();
    let avail_w = (w - 2 * PREVIEW_PADDING) as f32;
    let avail_h = (h - 2 * PREVIEW_PADDING) as f32;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Rect::new(x, y, 0, 0);
    }

    let scale = (avail_w / page_w_in).min(avail_h / page_h_in);
    let sheet_w = (page_w_in * scale) as i32;
    let sheet_h = (page_h_in * scale) as i32;

    Rect::new(x + (w - sheet_w) / 2, y + (h - sheet_h) / 2, sheet_w, sheet_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_page_keeps_aspect_and_fits() {
        let settings = PageSettings::default(); // letter, 8.5 x 11
        let area = fit_page(&settings, 0, 0, 800, 600);
        assert!(area.w > 0 && area.h > 0);
        assert!(area.w <= 800 && area.h <= 600);
        let aspect = area.w as f32 / area.h as f32;
        assert!((aspect - 8.5 / 11.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_page_degenerate_box() {
        let settings = PageSettings::default();
        let area = fit_page(&settings, 0, 0, 10, 10);
        assert_eq!((area.w, area.h), (0, 0));
    }
}
