use super::generator::Operator;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in `run`
/// hands them to `AppState::handle`.
#[derive(Debug, Clone)]
pub enum Message {
    // Worksheet
    SetOperator(Operator),
    SetProblemCount(usize),
    AddPage,
    RegenerateAll,

    // Preview navigation
    PrevPage,
    NextPage,

    // Page setup
    ToggleMarginGuides,
    OpenPageSetup,

    // Export & misc
    ExportPdf,
    ShowAbout,
    Quit,
}
