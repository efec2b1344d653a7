use super::PAD;
use crate::domain::content;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct CommandsPage<'a> {
    pub scroll: u16,
    pub theme: &'a Theme,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("System Commands", theme.hero_title),
        ]),
        Line::from(""),
    ];

    for feature in content::SITE.features {
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled(format!(" {} ", feature.title), theme.footer_segment_key),
        ]));
        for body_line in feature.body {
            lines.push(Line::from(vec![
                Span::raw(PAD),
                Span::raw("  "),
                Span::styled(*body_line, theme.muted),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

#[must_use]
pub fn line_count() -> u16 {
    lines(&Theme::default()).len() as u16
}

impl Widget for CommandsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_appears_with_its_body() {
        let rendered: String = lines(&Theme::default())
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|s| s.content.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        for feature in content::SITE.features {
            assert!(rendered.contains(feature.title));
            for body_line in feature.body {
                assert!(rendered.contains(body_line));
            }
        }
    }
}
