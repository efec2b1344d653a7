use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState},
};
use crate::components;
use crate::theme::Theme;
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            if let Some(clear_time) = state.status_clear_time {
                if Instant::now() >= clear_time {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Navigation ---
        Action::NextSection => {
            state.section = state.section.next();
            state.scroll = 0;
        }
        Action::PrevSection => {
            state.section = state.section.prev();
            state.scroll = 0;
        }
        Action::GotoSection(section) => {
            if state.section != section {
                state.section = section;
                state.scroll = 0;
            }
        }
        Action::ScrollDown(amount) => {
            let max_scroll = components::page_height(state.section).saturating_sub(1);
            state.scroll = state.scroll.saturating_add(amount).min(max_scroll);
        }
        Action::ScrollUp(amount) => {
            state.scroll = state.scroll.saturating_sub(amount);
        }

        // --- Install widget ---
        Action::SelectMode(mode) => {
            // Re-selecting the active mode is a no-op
            state.install_mode = mode;
        }
        Action::ToggleMode => {
            state.install_mode = state.install_mode.toggled();
        }
        Action::CopyCommand => {
            return Some(Command::CopyToClipboard(state.current_command().to_string()));
        }
        Action::CopyCompleted(Ok(message)) => {
            state.set_status(message);
        }
        Action::CopyCompleted(Err(message)) => {
            state.set_error(
                message,
                Some("select the command text manually instead".to_string()),
            );
        }

        // --- UI Mode Transitions ---
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.last_error = None;
        }
        Action::CycleTheme => {
            state.prefs.palette = state.prefs.palette.next();
            state.theme = Theme::from_palette_type(state.prefs.palette);
            return Some(Command::SavePreferences(state.prefs.clone()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content;
    use crate::domain::models::{InstallMode, Section};
    use crate::theme::PaletteType;

    #[test]
    fn initial_state_shows_the_install_command() {
        let state = AppState::default();
        assert_eq!(state.install_mode, InstallMode::Install);
        assert_eq!(state.current_command(), content::SITE.commands.install);
    }

    #[test]
    fn selecting_a_mode_binds_its_literal() {
        let mut state = AppState::default();

        update(&mut state, Action::SelectMode(InstallMode::Uninstall));
        assert_eq!(state.current_command(), content::SITE.commands.uninstall);

        update(&mut state, Action::SelectMode(InstallMode::Install));
        assert_eq!(state.current_command(), content::SITE.commands.install);
    }

    #[test]
    fn selecting_the_active_mode_is_a_no_op() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectMode(InstallMode::Uninstall));
        let before = state.current_command();

        let command = update(&mut state, Action::SelectMode(InstallMode::Uninstall));

        assert_eq!(state.current_command(), before);
        assert_eq!(command, None);
    }

    #[test]
    fn mode_round_trip_restores_the_install_command() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectMode(InstallMode::Uninstall));
        update(&mut state, Action::SelectMode(InstallMode::Install));
        assert_eq!(state.current_command(), content::SITE.commands.install);
    }

    #[test]
    fn toggle_flips_the_mode() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleMode);
        assert_eq!(state.install_mode, InstallMode::Uninstall);
        update(&mut state, Action::ToggleMode);
        assert_eq!(state.install_mode, InstallMode::Install);
    }

    #[test]
    fn copy_requests_the_current_mode_literal() {
        let mut state = AppState::default();

        let command = update(&mut state, Action::CopyCommand);
        assert_eq!(
            command,
            Some(Command::CopyToClipboard(content::SITE.commands.install.to_string()))
        );

        update(&mut state, Action::SelectMode(InstallMode::Uninstall));
        let command = update(&mut state, Action::CopyCommand);
        assert_eq!(
            command,
            Some(Command::CopyToClipboard(
                content::SITE.commands.uninstall.to_string()
            ))
        );
    }

    #[test]
    fn copy_success_sets_a_transient_status() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CopyCompleted(Ok("Copied to clipboard".to_string())),
        );
        assert_eq!(state.status_message.as_deref(), Some("Copied to clipboard"));
        assert!(state.status_clear_time.is_some());
    }

    #[test]
    fn copy_failure_surfaces_an_error_with_a_hint() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CopyCompleted(Err("Clipboard unavailable".to_string())),
        );

        let err = state.last_error.expect("error state expected");
        assert!(err.message.contains("Clipboard unavailable"));
        assert!(err.hint.unwrap().contains("manually"));
    }

    #[test]
    fn tick_clears_an_expired_status() {
        let mut state = AppState::default();
        state.status_message = Some("Copied to clipboard".to_string());
        state.status_clear_time = Some(Instant::now());

        update(&mut state, Action::Tick);

        assert_eq!(state.status_message, None);
        assert_eq!(state.status_clear_time, None);
    }

    #[test]
    fn section_navigation_wraps_and_resets_scroll() {
        let mut state = AppState::default();
        state.section = Section::About;
        state.scroll = 7;

        update(&mut state, Action::NextSection);
        assert_eq!(state.section, Section::Install);
        assert_eq!(state.scroll, 0);

        update(&mut state, Action::PrevSection);
        assert_eq!(state.section, Section::About);
    }

    #[test]
    fn goto_the_current_section_keeps_scroll() {
        let mut state = AppState::default();
        state.scroll = 3;
        update(&mut state, Action::GotoSection(Section::Install));
        assert_eq!(state.scroll, 3);
    }

    #[test]
    fn scroll_is_clamped_to_the_page() {
        let mut state = AppState::default();
        update(&mut state, Action::ScrollDown(u16::MAX));
        assert_eq!(
            state.scroll,
            components::page_height(Section::Install) - 1
        );

        update(&mut state, Action::ScrollUp(u16::MAX));
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn escape_clears_error_and_help() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        state.set_error("boom", None);

        update(&mut state, Action::CancelMode);

        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn cycling_the_theme_persists_the_choice() {
        let mut state = AppState::default();
        let command = update(&mut state, Action::CycleTheme);

        assert_eq!(state.prefs.palette, PaletteType::Nord);
        match command {
            Some(Command::SavePreferences(prefs)) => {
                assert_eq!(prefs.palette, PaletteType::Nord);
            }
            other => panic!("expected SavePreferences, got {other:?}"),
        }
    }
}
