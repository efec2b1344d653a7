use crate::domain::models::{InstallMode, Section};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Navigation ---
    NextSection,
    PrevSection,
    GotoSection(Section),
    ScrollUp(u16),
    ScrollDown(u16),

    // --- Install widget ---
    SelectMode(InstallMode),
    ToggleMode,
    CopyCommand,

    // --- UI Mode Transitions ---
    ToggleHelp,
    CancelMode,
    CycleTheme,

    // --- Async Results ---
    // Dispatched by the command handler back to the main loop
    CopyCompleted(Result<String, String>),
}
