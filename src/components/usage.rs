use super::PAD;
use crate::domain::content;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct UsagePage<'a> {
    pub scroll: u16,
    pub theme: &'a Theme,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("Usage", theme.hero_title),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("Start the session by typing ", theme.muted),
            Span::styled(" nlsh ", theme.surface),
            Span::styled(".", theme.muted),
        ]),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled(
                "The shell will interpret your natural language and convert",
                theme.muted,
            ),
        ]),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("it to the appropriate bash command.", theme.muted),
        ]),
        Line::from(""),
        Line::from(vec![Span::raw(PAD), Span::styled("PLATFORM", theme.dimmed)]),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("✓ ", theme.check),
            Span::styled("macOS / Linux", theme.text),
        ]),
        Line::from(vec![Span::raw(PAD), Span::styled("RUNTIME", theme.dimmed)]),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled("✓ ", theme.check),
            Span::styled("Python 3.8+", theme.text),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(PAD),
            Span::styled(">_ ", theme.accent),
            Span::styled("Command Examples", theme.hero_title),
        ]),
        Line::from(""),
    ];

    // Rendered in content order; the order is part of the content
    for example in content::SITE.examples {
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled(example.natural, theme.text),
        ]));
        lines.push(Line::from(vec![
            Span::raw(PAD),
            Span::styled("→ ", theme.accent),
            Span::styled(example.command, theme.command),
        ]));
        lines.push(Line::from(""));
    }

    lines
}

#[must_use]
pub fn line_count() -> u16 {
    lines(&Theme::default()).len() as u16
}

impl Widget for UsagePage<'_> {
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
    fn examples_render_in_content_order() {
        let rendered: Vec<String> = lines(&Theme::default())
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        let mut positions = Vec::new();
        for example in content::SITE.examples {
            let pos = rendered
                .iter()
                .position(|line| line.contains(example.natural))
                .unwrap_or_else(|| panic!("missing example: {}", example.natural));
            // The emitted command follows its description
            assert!(rendered[pos + 1].contains(example.command));
            positions.push(pos);
        }

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
