use super::keymap::KeyMap;
use super::persistence::Preferences;
use crate::domain::content;
use crate::domain::models::{InstallMode, Section};
use crate::theme::Theme;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a transient status message stays in the footer.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal, // Browsing the tour
    Help,   // Showing the keybinding overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub hint: Option<String>,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Navigation ---
    pub section: Section,
    pub scroll: u16,

    // --- Install widget (the only mutable domain value) ---
    pub install_mode: InstallMode,

    // --- Status & errors ---
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub last_error: Option<ErrorState>,

    // --- Config ---
    pub prefs: Preferences,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(prefs: Preferences) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&prefs.keys)),
            theme: Theme::from_palette_type(prefs.palette),
            prefs,
            ..Default::default()
        }
    }

    /// The literal command string bound to the current widget mode.
    #[must_use]
    pub fn current_command(&self) -> &'static str {
        content::SITE.commands.command_for(self.install_mode)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    pub fn set_error(&mut self, message: impl Into<String>, hint: Option<String>) {
        self.last_error = Some(ErrorState {
            message: message.into(),
            hint,
            timestamp: Local::now(),
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        let prefs = Preferences::default();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            section: Section::default(),
            scroll: 0,
            install_mode: InstallMode::default(),
            status_message: None,
            status_clear_time: None,
            last_error: None,
            keymap: Arc::new(KeyMap::from_config(&prefs.keys)),
            theme: Theme::from_palette_type(prefs.palette),
            prefs,
        }
    }
}
