use fltk::{
    app::Sender,
    button::Button,
    frame::Frame,
    group::Flex,
    menu::{Choice, MenuBar},
    prelude::*,
    window::Window,
};

use super::preview::PagePreview;
use super::sidebar::{Sidebar, SIDEBAR_WIDTH};
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

/// Problem counts offered in the toolbar dropdown.
pub const PROBLEM_COUNT_CHOICES: &[usize] = &[10, 15, 20, 25, 30, 40, 50];

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub count_choice: Choice,
    pub page_label: Frame,
    pub sidebar: Sidebar,
    pub preview: PagePreview,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 980, 760, "MathSheet");
    wind.set_xclass("MathSheet");

    let mut flex = Flex::new(0, 0, 980, 760, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Toolbar
    let mut toolbar = Flex::new(0, 0, 0, 40, None);
    toolbar.set_type(fltk::group::FlexType::Row);
    toolbar.set_margin(4);
    toolbar.set_spacing(6);

    let count_label = Frame::default().with_label("Problems per page:");
    toolbar.fixed(&count_label, 130);

    let mut count_choice = Choice::default();
    for n in PROBLEM_COUNT_CHOICES {
        count_choice.add_choice(&n.to_string());
    }
    let initial = PROBLEM_COUNT_CHOICES
        .iter()
        .position(|&n| n == settings.problem_count)
        .unwrap_or(3);
    count_choice.set_value(initial as i32);
    let s = *sender;
    count_choice.set_callback(move |c| {
        let idx = c.value();
        if idx >= 0 {
            if let Some(&n) = PROBLEM_COUNT_CHOICES.get(idx as usize) {
                s.send(Message::SetProblemCount(n));
            }
        }
    });
    toolbar.fixed(&count_choice, 70);

    let mut add_btn = Button::default().with_label("Add Page");
    let s = *sender;
    add_btn.set_callback(move |_| s.send(Message::AddPage));
    toolbar.fixed(&add_btn, 90);

    let mut regen_btn = Button::default().with_label("Regenerate");
    let s = *sender;
    regen_btn.set_callback(move |_| s.send(Message::RegenerateAll));
    toolbar.fixed(&regen_btn, 100);

    Frame::default(); // spacer

    let mut prev_btn = Button::default().with_label("@<");
    let s = *sender;
    prev_btn.set_callback(move |_| s.send(Message::PrevPage));
    toolbar.fixed(&prev_btn, 30);

    let page_label = Frame::default().with_label("Page 1 of 1");
    toolbar.fixed(&page_label, 110);

    let mut next_btn = Button::default().with_label("@>");
    let s = *sender;
    next_btn.set_callback(move |_| s.send(Message::NextPage));
    toolbar.fixed(&next_btn, 30);

    let mut export_btn = Button::default().with_label("Download PDF");
    let s = *sender;
    export_btn.set_callback(move |_| s.send(Message::ExportPdf));
    toolbar.fixed(&export_btn, 120);

    toolbar.end();
    flex.fixed(&toolbar, 40);

    // Body: operator sidebar + page preview
    let mut body = Flex::new(0, 0, 0, 0, None);
    body.set_type(fltk::group::FlexType::Row);

    let sidebar = Sidebar::new(sender, settings.operator);
    body.fixed(&sidebar.flex, SIDEBAR_WIDTH);

    let preview = PagePreview::new(settings.page.clone());

    body.end();
    flex.end();
    wind.resizable(&flex);

    // Closing the window goes through the normal quit path so settings
    // get saved.
    let s = *sender;
    wind.set_callback(move |_| s.send(Message::Quit));

    MainWidgets { wind, menu, count_choice, page_label, sidebar, preview }
}
