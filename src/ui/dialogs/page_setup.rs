use fltk::{
    button::{Button, CheckButton},
    enums::Color,
    frame::Frame,
    input::{FloatInput, Input, IntInput},
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{Margins, PageNumbering, PageSelection, PageSettings, PageSize};

/// Show the page-setup dialog and return updated settings if the user
/// clicked Save. Invalid numeric input falls back to the current value.
pub fn show_page_setup_dialog(current: &PageSettings) -> Option<PageSettings> {
    let mut dialog = Window::default()
        .with_size(350, 500)
        .with_label("Page Setup")
        .center_screen();
    dialog.make_modal(true);

    // Page size section
    Frame::default().with_pos(15, 15).with_size(320, 25).with_label("Page Size:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut size_choice = Choice::default().with_pos(30, 45).with_size(280, 25);
    for size in PageSize::all() {
        size_choice.add_choice(size.display_name());
    }
    size_choice.set_value(page_size_index(current.page_size));

    // Page numbering section
    Frame::default().with_pos(15, 85).with_size(320, 25).with_label("Page Numbering:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut check_numbering = CheckButton::default().with_pos(30, 115).with_size(280, 25).with_label("Show page numbers");
    check_numbering.set_value(current.numbering.enabled);

    Frame::default().with_pos(30, 145).with_size(120, 25).with_label("Start from page:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut start_input = IntInput::default().with_pos(160, 145).with_size(60, 25);
    start_input.set_value(&current.numbering.start_from.to_string());

    let mut check_centered = CheckButton::default().with_pos(30, 175).with_size(280, 25).with_label("Center align page numbers");
    check_centered.set_value(current.numbering.centered);

    // Margins section
    Frame::default().with_pos(15, 215).with_size(320, 25).with_label("Margins (inches):").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    Frame::default().with_pos(30, 245).with_size(50, 25).with_label("Top:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut top_input = FloatInput::default().with_pos(85, 245).with_size(60, 25);
    top_input.set_value(&current.margins.top.to_string());
    Frame::default().with_pos(175, 245).with_size(60, 25).with_label("Bottom:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut bottom_input = FloatInput::default().with_pos(240, 245).with_size(60, 25);
    bottom_input.set_value(&current.margins.bottom.to_string());
    Frame::default().with_pos(30, 275).with_size(50, 25).with_label("Left:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut left_input = FloatInput::default().with_pos(85, 275).with_size(60, 25);
    left_input.set_value(&current.margins.left.to_string());
    Frame::default().with_pos(175, 275).with_size(60, 25).with_label("Right:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut right_input = FloatInput::default().with_pos(240, 275).with_size(60, 25);
    right_input.set_value(&current.margins.right.to_string());

    let mut check_guides = CheckButton::default().with_pos(30, 315).with_size(280, 25).with_label("Show margin guides in preview");
    check_guides.set_value(current.show_margins);

    // Export selection section
    Frame::default().with_pos(15, 355).with_size(320, 25).with_label("Pages to download:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut pages_input = Input::default().with_pos(30, 385).with_size(280, 25);
    pages_input.set_value(&current.pages_to_download.to_field());

    let mut hint = Frame::default().with_pos(30, 413).with_size(280, 20);
    hint.set_label("\"all\", or a list of page numbers like 1, 3, 5");
    hint.set_label_size(11);
    hint.set_label_color(Color::from_rgb(100, 100, 100));
    hint.set_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(150, 455).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(250, 455).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current_settings = current.clone();
    save_btn.set_callback(move |_| {
        let new_settings = PageSettings {
            page_size: index_to_page_size(size_choice.value())
                .unwrap_or(current_settings.page_size),
            numbering: PageNumbering {
                enabled: check_numbering.value(),
                start_from: parse_start_from(&start_input.value(), current_settings.numbering.start_from),
                centered: check_centered.value(),
            },
            margins: Margins {
                top: parse_margin(&top_input.value(), current_settings.margins.top),
                bottom: parse_margin(&bottom_input.value(), current_settings.margins.bottom),
                left: parse_margin(&left_input.value(), current_settings.margins.left),
                right: parse_margin(&right_input.value(), current_settings.margins.right),
            },
            show_margins: check_guides.value(),
            pages_to_download: PageSelection::parse(&pages_input.value())
                .unwrap_or_else(|| current_settings.pages_to_download.clone()),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

/// Convert PageSize to dropdown index
fn page_size_index(size: PageSize) -> i32 {
    PageSize::all()
        .iter()
        .position(|s| *s == size)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to PageSize
fn index_to_page_size(index: i32) -> Option<PageSize> {
    if index < 0 {
        return None;
    }
    PageSize::all().get(index as usize).copied()
}

fn parse_margin(input: &str, fallback: f32) -> f32 {
    input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(fallback)
}

fn parse_start_from(input: &str, fallback: u32) -> u32 {
    input.trim().parse::<u32>().unwrap_or(fallback).max(1)
}
