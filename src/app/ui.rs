use super::state::{AppMode, AppState};
use crate::components::{
    about::AboutPage, commands::CommandsPage, footer::Footer, help::HelpModal,
    install::InstallPage, navbar::Navbar, usage::UsagePage,
};
use crate::{components, domain::models::Section};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(0),    // Page body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    // Keep the scroll inside the current page even if the content
    // shrank since the action that set it.
    let max_scroll = components::page_height(app_state.section).saturating_sub(1);
    app_state.scroll = app_state.scroll.min(max_scroll);

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());

    if layout.header.width > 0 && layout.header.height > 0 {
        let navbar = Navbar {
            section: app_state.section,
            theme: &theme,
        };
        f.render_widget(navbar, layout.header);
    }

    if layout.body.width > 0 && layout.body.height > 0 {
        match app_state.section {
            Section::Install => {
                let page = InstallPage {
                    mode: app_state.install_mode,
                    scroll: app_state.scroll,
                    theme: &theme,
                };
                f.render_widget(page, layout.body);
            }
            Section::Usage => {
                let page = UsagePage {
                    scroll: app_state.scroll,
                    theme: &theme,
                };
                f.render_widget(page, layout.body);
            }
            Section::Commands => {
                let page = CommandsPage {
                    scroll: app_state.scroll,
                    theme: &theme,
                };
                f.render_widget(page, layout.body);
            }
            Section::About => {
                let page = AboutPage {
                    scroll: app_state.scroll,
                    theme: &theme,
                };
                f.render_widget(page, layout.body);
            }
        }
    }

    if layout.footer.width > 0 && layout.footer.height > 0 {
        let footer = Footer {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(footer, layout.footer);
    }

    if app_state.mode == AppMode::Help {
        f.render_widget(HelpModal { theme: &theme }, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn every_section_renders() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut state = AppState::default();

        let expectations = [
            (Section::Install, "Talk to your shell."),
            (Section::Usage, "Command Examples"),
            (Section::Commands, "System Commands"),
            (Section::About, "Open Source & Private"),
        ];

        for (section, needle) in expectations {
            state.section = section;
            state.scroll = 0;
            terminal.draw(|f| draw(f, &mut state)).unwrap();
            let text = buffer_text(&terminal);
            assert!(text.contains(needle), "{section}: missing {needle:?}");
            assert!(text.contains("nlsh"));
        }
    }

    #[test]
    fn help_overlay_renders_on_top() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut state = AppState::default();
        state.mode = AppMode::Help;

        terminal.draw(|f| draw(f, &mut state)).unwrap();

        assert!(buffer_text(&terminal).contains("KEYBINDINGS"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        let mut state = AppState::default();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
