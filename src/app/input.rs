use super::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::{install, navbar};
use crate::domain::models::Section;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match app_state.mode {
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CancelMode),
                KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => {
                if key.code == KeyCode::Esc {
                    // Esc dismisses an error first; with nothing to
                    // dismiss it quits.
                    return Some(if app_state.last_error.is_some() {
                        Action::CancelMode
                    } else {
                        Action::Quit
                    });
                }
                app_state.keymap.get_action(key)
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    resolve_click(app_state, mouse.column, mouse.row, terminal_size)
                }
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(3)),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(3)),
                _ => None,
            },
            _ => None,
        },
    }
}

/// The layout is deterministic for a given terminal size, so clicks are
/// resolved by recomputing it rather than caching render geometry.
fn resolve_click(app_state: &AppState, x: u16, y: u16, size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, size.width, size.height);
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let layout = ui::get_layout(area);
    let pos = Position::new(x, y);

    if layout.header.contains(pos) {
        return navbar::section_at(layout.header, x).map(Action::GotoSection);
    }

    if app_state.section == Section::Install && layout.body.contains(pos) {
        return install::mode_at(layout.body, app_state.scroll, x, y).map(Action::SelectMode);
    }

    None
}
