use super::action::Action;
use crate::domain::models::{InstallMode, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(_config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);

        // Section navigation
        global.insert(key(KeyCode::Tab), Action::NextSection);
        global.insert(key(']'), Action::NextSection);
        global.insert(key(KeyCode::BackTab), Action::PrevSection);
        // BackTab arrives with SHIFT on most terminals
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevSection,
        );
        global.insert(key('['), Action::PrevSection);
        global.insert(key('1'), Action::GotoSection(Section::Install));
        global.insert(key('2'), Action::GotoSection(Section::Usage));
        global.insert(key('3'), Action::GotoSection(Section::Commands));
        global.insert(key('4'), Action::GotoSection(Section::About));

        // Scrolling
        global.insert(key('j'), Action::ScrollDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key('k'), Action::ScrollUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(10));

        // Install widget
        global.insert(key('i'), Action::SelectMode(InstallMode::Install));
        global.insert(key('u'), Action::SelectMode(InstallMode::Uninstall));
        global.insert(key(KeyCode::Enter), Action::ToggleMode);
        global.insert(key('y'), Action::CopyCommand);
        global.insert(key('c'), Action::CopyCommand);

        // General
        global.insert(key('T'), Action::CycleTheme);
        global.insert(shifted('T'), Action::CycleTheme);
        global.insert(key('?'), Action::ToggleHelp);
        global.insert(shifted('?'), Action::ToggleHelp);

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn shifted(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}
