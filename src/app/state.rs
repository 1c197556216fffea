use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    dialog,
    frame::Frame,
    menu::{Choice, MenuBar},
    prelude::*,
    window::Window,
};

use super::export::{self, WORKSHEET_FILE_NAME};
use super::messages::Message;
use super::settings::AppSettings;
use super::worksheet::Worksheet;
use crate::render::raster::FltkRasterizer;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::page_setup::show_page_setup_dialog;
use crate::ui::file_dialogs::native_pdf_save_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::preview::PagePreview;
use crate::ui::sidebar::Sidebar;

/// Main application coordinator: owns the worksheet, the settings, and the
/// widgets that reflect them. Every user action arrives here as a
/// [`Message`].
pub struct AppState {
    pub worksheet: Worksheet,
    pub settings: Rc<RefCell<AppSettings>>,
    pub window: Window,
    pub menu: MenuBar,
    pub count_choice: Choice,
    pub page_label: Frame,
    pub sidebar: Sidebar,
    pub preview: PagePreview,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: Rc<RefCell<AppSettings>>,
        sender: Sender<Message>,
    ) -> Self {
        let (operator, problem_count) = {
            let s = settings.borrow();
            (s.operator, s.problem_count)
        };

        let mut state = Self {
            worksheet: Worksheet::new(operator, problem_count),
            settings,
            window: widgets.wind,
            menu: widgets.menu,
            count_choice: widgets.count_choice,
            page_label: widgets.page_label,
            sidebar: widgets.sidebar,
            preview: widgets.preview,
            sender,
        };
        state.refresh_preview();
        state.update_page_label();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::SetOperator(op) => {
                self.worksheet.set_operator(op);
                self.settings.borrow_mut().operator = op;
                self.sidebar.select(op);
                self.persist_settings();
                self.refresh_preview();
            }
            Message::SetProblemCount(n) => {
                self.worksheet.set_problem_count(n);
                self.settings.borrow_mut().problem_count = n;
                self.persist_settings();
                self.refresh_preview();
            }
            Message::AddPage => {
                self.worksheet.add_page();
                self.update_page_label();
                self.refresh_preview();
            }
            Message::RegenerateAll => {
                self.worksheet.regenerate_all();
                self.refresh_preview();
            }
            Message::PrevPage => {
                self.worksheet.prev_page();
                self.update_page_label();
                self.refresh_preview();
            }
            Message::NextPage => {
                self.worksheet.next_page();
                self.update_page_label();
                self.refresh_preview();
            }
            Message::ToggleMarginGuides => {
                let page = {
                    let mut s = self.settings.borrow_mut();
                    s.page.show_margins = !s.page.show_margins;
                    s.page.clone()
                };
                self.persist_settings();
                self.preview.set_settings(page);
            }
            Message::OpenPageSetup => self.open_page_setup(),
            Message::ExportPdf => self.export_pdf(),
            Message::ShowAbout => show_about_dialog(),
            Message::Quit => self.quit(),
        }
    }

    fn refresh_preview(&mut self) {
        self.preview.set_page(self.worksheet.current_page().clone());
    }

    fn update_page_label(&mut self) {
        self.page_label.set_label(&format!(
            "Page {} of {}",
            self.worksheet.current_index() + 1,
            self.worksheet.page_count()
        ));
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn open_page_setup(&mut self) {
        let current = self.settings.borrow().page.clone();
        if let Some(new_page) = show_page_setup_dialog(&current) {
            self.settings.borrow_mut().page = new_page.clone();
            self.persist_settings();
            self.preview.set_settings(new_page);
        }
    }

    fn export_pdf(&mut self) {
        let Some(chosen) = native_pdf_save_dialog(WORKSHEET_FILE_NAME) else {
            return;
        };
        let mut path = PathBuf::from(chosen);
        if path.extension().is_none() {
            path.set_extension("pdf");
        }

        let settings = self.settings.borrow().page.clone();
        let mut rasterizer = FltkRasterizer::new();
        match export::export_pdf(&self.worksheet, &settings, &mut rasterizer, &path) {
            Ok(summary) => dialog::message_default(&format!(
                "Saved {} page(s) to {}",
                summary.pages_written,
                summary.path.display()
            )),
            Err(e) => dialog::alert_default(&format!("Export failed: {}", e)),
        }
    }

    fn quit(&mut self) {
        self.persist_settings();
        app::quit();
    }
}
