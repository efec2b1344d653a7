use super::persistence::Preferences;

/// Side effects requested by the reducer, executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CopyToClipboard(String),
    SavePreferences(Preferences),
}
