//! MathSheet - a printable math worksheet generator.
//!
//! Pick an operator and a problem count, preview the paginated worksheet,
//! and download it as a multi-page PDF. Pages are rasterized offscreen and
//! embedded as images; page numbers are vector text.

pub mod app;
pub mod render;
pub mod ui;

pub use app::{AppError, AppSettings, Message, Operator, Page, Problem, Result, Worksheet};

use std::cell::RefCell;
use std::rc::Rc;

use fltk::prelude::*;

use app::state::AppState;

/// Build the UI and run the event loop until the user quits.
pub fn run() {
    let fl_app = fltk::app::App::default();
    let (sender, receiver) = fltk::app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));

    let mut widgets = {
        let s = settings.borrow();
        ui::main_window::build_main_window(&s, &sender)
    };
    {
        let s = settings.borrow();
        ui::menu::build_menu(&mut widgets.menu, &sender, &s);
    }
    widgets.wind.show();

    let mut state = AppState::new(widgets, settings, sender);

    while fl_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
