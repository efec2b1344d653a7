use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINTS: [(&str, &str); 7] = [
    ("Tab", "sections"),
    ("j/k", "scroll"),
    ("i/u", "mode"),
    ("y", "copy"),
    ("T", "theme"),
    ("?", "help"),
    ("q", "quit"),
];

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            let mut text = format!(
                "  {} ERROR: {}",
                err.timestamp.format("%H:%M:%S"),
                err.message
            );
            if let Some(hint) = &err.hint {
                text.push_str(&format!(" ({hint})"));
            }
            text.push_str("  ");
            Span::styled(text, theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        // Key hints, as many as fit
        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for (key, desc) in HINTS {
            let key_str = format!(" {key} ");
            let desc_str = format!(" {desc} ");

            let item_width = key_str.len() + desc_str.len() + 1;
            if current_width + item_width > available_width {
                break;
            }

            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
