use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod midnight;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub nav_item: Style,
    pub nav_active: Style,

    pub hero_title: Style,
    pub badge: Style,
    pub text: Style,
    pub muted: Style,
    pub dimmed: Style,
    pub accent: Style,
    pub command: Style,
    pub prompt: Style,
    pub surface: Style,
    pub note: Style,
    pub check: Style,
    pub link: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub list_item: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Midnight,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Midnight => "Midnight",
            PaletteType::Nord => "Nord",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::Midnight, PaletteType::Nord]
    }

    #[must_use]
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Midnight => Self::from_palette(&midnight::MIDNIGHT),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border_focus: Style::default().fg(p.mauve),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().bg(p.base).fg(p.subtext0),
            nav_active: Style::default()
                .bg(p.surface0)
                .fg(p.subtext1)
                .add_modifier(Modifier::BOLD),

            hero_title: Style::default().fg(p.subtext1).add_modifier(Modifier::BOLD),
            badge: Style::default()
                .bg(p.surface1)
                .fg(p.subtext1)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.text),
            muted: Style::default().fg(p.subtext0),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            accent: Style::default().fg(p.mauve),
            command: Style::default().fg(p.green),
            prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            surface: Style::default().bg(p.surface0).fg(p.subtext1),
            note: Style::default().fg(p.peach),
            check: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            link: Style::default().fg(p.blue).add_modifier(Modifier::UNDERLINED),

            tab_active: Style::default()
                .bg(p.surface0)
                .fg(p.subtext1)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(p.subtext0),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.mauve)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().fg(p.text),

            list_item: Style::default().fg(p.text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Midnight)
    }
}
