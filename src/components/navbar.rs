use crate::domain::content;
use crate::domain::models::{NavItem, Section};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LOGO: &str = " >_ nlsh ";
const GAP: u16 = 1;

pub struct Navbar<'a> {
    pub section: Section,
    pub theme: &'a Theme,
}

fn tab_origin(header: Rect) -> u16 {
    header.x + LOGO.len() as u16 + GAP
}

fn tab_width(item: &NavItem) -> u16 {
    item.label.len() as u16 + 2
}

/// Maps a click column to the nav item under it. Kept in sync with
/// [`Navbar::render`] by deriving both from the same label widths.
#[must_use]
pub fn section_at(header: Rect, x: u16) -> Option<Section> {
    let mut cursor = tab_origin(header);
    for item in content::SITE.nav {
        let width = tab_width(item);
        if x >= cursor && x < cursor + width {
            return Some(item.section);
        }
        cursor += width + GAP;
    }
    None
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(LOGO, self.theme.header_logo),
            Span::raw(" "),
        ];

        for item in content::SITE.nav {
            let style = if item.section == self.section {
                self.theme.nav_active
            } else {
                self.theme.nav_item
            };
            spans.push(Span::styled(format!(" {} ", item.label), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}

#[cfg(test)]
pub fn tab_center_x(header: Rect, section: Section) -> u16 {
    let mut cursor = tab_origin(header);
    for item in content::SITE.nav {
        let width = tab_width(item);
        if item.section == section {
            return cursor + width / 2;
        }
        cursor += width + GAP;
    }
    unreachable!("section has no nav item")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 1,
    };

    #[test]
    fn every_tab_is_clickable_at_its_center() {
        for section in Section::all() {
            let x = tab_center_x(HEADER, *section);
            assert_eq!(section_at(HEADER, x), Some(*section));
        }
    }

    #[test]
    fn the_logo_and_trailing_space_are_not_tabs() {
        assert_eq!(section_at(HEADER, 0), None);
        assert_eq!(section_at(HEADER, 79), None);
    }
}
