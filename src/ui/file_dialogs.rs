use fltk::dialog;

/// Ask where to save the exported PDF. Returns None if the user cancels.
pub fn native_pdf_save_dialog(default_name: &str) -> Option<String> {
    dialog::file_chooser("Save Worksheet PDF", "*.pdf", default_name, false)
}
