use super::helpers::{centered_rect, draw_drop_shadow};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 70, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let rows = vec![
            // Navigation
            Row::new(vec![
                Cell::from(Span::styled("Navigation", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Tab / ]", key_style)),
                Cell::from(Span::styled("Next section", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" S-Tab / [", key_style)),
                Cell::from(Span::styled("Previous section", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" 1-4", key_style)),
                Cell::from(Span::styled("Jump to a section", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" j / k", key_style)),
                Cell::from(Span::styled("Scroll the page", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" PgUp / PgDn", key_style)),
                Cell::from(Span::styled("Scroll faster", desc_style)),
            ]),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            // Install widget
            Row::new(vec![
                Cell::from(Span::styled("Install widget", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" i", key_style)),
                Cell::from(Span::styled("Show the install command", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" u", key_style)),
                Cell::from(Span::styled("Show the uninstall command", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Enter", key_style)),
                Cell::from(Span::styled("Toggle install/uninstall", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" y / c", key_style)),
                Cell::from(Span::styled("Copy the shown command", desc_style)),
            ]),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            // General
            Row::new(vec![
                Cell::from(Span::styled("General", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" T", key_style)),
                Cell::from(Span::styled("Cycle color theme", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" ?", key_style)),
                Cell::from(Span::styled("Show this help", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Esc", key_style)),
                Cell::from(Span::styled("Close overlay / Clear errors", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" q", key_style)),
                Cell::from(Span::styled("Quit", desc_style)),
            ]),
        ];

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
