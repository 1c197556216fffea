pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod preview;
pub mod sidebar;
