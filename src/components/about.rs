use super::PAD;
use crate::domain::content;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct AboutPage<'a> {
    pub scroll: u16,
    pub theme: &'a Theme,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("Open Source & Private", theme.hero_title),
        ]),
        Line::from(""),
    ];

    for &row in content::SITE.privacy_blurb {
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled(row, theme.muted),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled("Repository  ", theme.muted),
        Span::styled(content::SITE.repo_url, theme.link),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled("License   Privacy   Contact", theme.dimmed),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(PAD),
        Span::styled("© 2024 nlsh Project. Built for developers.", theme.dimmed),
    ]));

    lines
}

#[must_use]
pub fn line_count() -> u16 {
    lines(&Theme::default()).len() as u16
}

impl Widget for AboutPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
