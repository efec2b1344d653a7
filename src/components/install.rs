use super::PAD;
use crate::domain::content;
use crate::domain::models::InstallMode;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct InstallPage<'a> {
    pub mode: InstallMode,
    pub scroll: u16,
    pub theme: &'a Theme,
}

const LOGO: [&str; 5] = [
    r"       _      _     ",
    r" _ __ | | ___| |__  ",
    r"| '_ \| |/ __| '_ \ ",
    r"| | | | |\__ \ | | |",
    r"|_| |_|_||___/_| |_|",
];

/// Line index of the Install/Uninstall tab row inside [`lines`].
const MODE_TAB_LINE: u16 = 14;

fn tab_label(mode: InstallMode) -> String {
    format!(" {} ", mode.label())
}

#[must_use]
pub fn lines(theme: &Theme, mode: InstallMode) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for row in LOGO {
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled(row, theme.accent),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(" OPEN SOURCE ", theme.badge),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(content::SITE.tagline, theme.hero_title),
    ]));
    lines.push(Line::from(""));
    for &row in content::SITE.description {
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled(row, theme.muted),
        ]));
    }
    lines.push(Line::from(""));

    // The command display widget: two tabs and the literal they select
    debug_assert_eq!(lines.len() as u16, MODE_TAB_LINE);
    let tab_style = |m: InstallMode| {
        if m == mode {
            theme.tab_active
        } else {
            theme.tab_inactive
        }
    };
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(
            tab_label(InstallMode::Install),
            tab_style(InstallMode::Install),
        ),
        Span::styled(
            tab_label(InstallMode::Uninstall),
            tab_style(InstallMode::Uninstall),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(
            format!(" {} ", content::SITE.commands.command_for(mode)),
            theme.surface,
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(" y ", theme.footer_segment_key),
        Span::styled(" copy to clipboard", theme.muted),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled("● ", theme.note),
        Span::styled(content::SITE.platform_note, theme.muted),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled(" DEMO ", theme.header_item),
    ]));
    lines.push(Line::from(""));

    for &row in content::SITE.demo_transcript {
        let spans = if let Some(rest) = row.strip_prefix("> ") {
            vec![
                Span::raw(PAD),
                Span::styled("> ", theme.prompt),
                Span::styled(rest, theme.text),
            ]
        } else if row.starts_with("  $ ") {
            vec![Span::raw(PAD), Span::styled(row, theme.command)]
        } else {
            vec![Span::raw(PAD), Span::styled(row, theme.muted)]
        };
        lines.push(Line::from(spans));
    }

    lines
}

#[must_use]
pub fn line_count() -> u16 {
    lines(&Theme::default(), InstallMode::Install).len() as u16
}

/// Maps a click inside the page body to a widget tab. Returns `None`
/// off the tab row. Kept in sync with [`lines`] via `MODE_TAB_LINE`.
#[must_use]
pub fn mode_at(body: Rect, scroll: u16, x: u16, y: u16) -> Option<InstallMode> {
    let row = y.checked_sub(body.y)?.checked_add(scroll)?;
    if row != MODE_TAB_LINE {
        return None;
    }

    let start = body.x + PAD.len() as u16;
    let install_width = tab_label(InstallMode::Install).len() as u16;
    let uninstall_width = tab_label(InstallMode::Uninstall).len() as u16;

    if x >= start && x < start + install_width {
        Some(InstallMode::Install)
    } else if x >= start + install_width && x < start + install_width + uninstall_width {
        Some(InstallMode::Uninstall)
    } else {
        None
    }
}

impl Widget for InstallPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme, self.mode))
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Returns a probe point inside each tab plus the tab row, for tests.
#[cfg(test)]
pub fn mode_tab_probe(body: Rect, scroll: u16) -> (u16, u16, u16) {
    let start = body.x + PAD.len() as u16;
    let install_width = tab_label(InstallMode::Install).len() as u16;
    let row = body.y + MODE_TAB_LINE - scroll;
    (start + 1, start + install_width + 1, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: Rect = Rect {
        x: 0,
        y: 1,
        width: 100,
        height: 30,
    };

    #[test]
    fn line_count_matches_the_rendered_lines() {
        for mode in [InstallMode::Install, InstallMode::Uninstall] {
            assert_eq!(
                lines(&Theme::default(), mode).len() as u16,
                line_count(),
                "{mode}"
            );
        }
    }

    #[test]
    fn the_tab_row_is_where_mode_at_expects_it() {
        let lines = lines(&Theme::default(), InstallMode::Install);
        let tab_row: String = lines[MODE_TAB_LINE as usize]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(tab_row.contains("Install"));
        assert!(tab_row.contains("Uninstall"));
    }

    #[test]
    fn the_command_row_shows_the_selected_literal() {
        for (mode, expected) in [
            (InstallMode::Install, content::SITE.commands.install),
            (InstallMode::Uninstall, content::SITE.commands.uninstall),
        ] {
            let lines = lines(&Theme::default(), mode);
            let command_row: String = lines[MODE_TAB_LINE as usize + 1]
                .spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect();
            assert!(command_row.contains(expected), "{mode}");
        }
    }

    #[test]
    fn clicks_resolve_to_tabs_only_on_the_tab_row() {
        let (install_x, uninstall_x, row) = mode_tab_probe(BODY, 0);

        assert_eq!(mode_at(BODY, 0, install_x, row), Some(InstallMode::Install));
        assert_eq!(
            mode_at(BODY, 0, uninstall_x, row),
            Some(InstallMode::Uninstall)
        );
        assert_eq!(mode_at(BODY, 0, install_x, row + 1), None);
        assert_eq!(mode_at(BODY, 0, 90, row), None);
    }

    #[test]
    fn scrolling_moves_the_tab_row() {
        let (install_x, _, row) = mode_tab_probe(BODY, 0);
        // After scrolling down 3 lines the tabs sit 3 rows higher
        assert_eq!(
            mode_at(BODY, 3, install_x, row - 3),
            Some(InstallMode::Install)
        );
        assert_eq!(mode_at(BODY, 3, install_x, row), None);
    }
}
