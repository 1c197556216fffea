use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Export PDF...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportPdf) });
    menu.add("File/Page Setup...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenPageSetup) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Worksheet
    menu.add("Worksheet/Add Page", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AddPage) });
    menu.add("Worksheet/Regenerate Problems", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RegenerateAll) });
    menu.add("Worksheet/Previous Page", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PrevPage) });
    menu.add("Worksheet/Next Page", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NextPage) });

    // View
    let mg_flag = if settings.page.show_margins { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Show Margin Guides", Shortcut::None, mg_flag, { let s = *s; move |_| s.send(Message::ToggleMarginGuides) });

    // Help
    menu.add("Help/About MathSheet", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
