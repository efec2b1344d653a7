use super::palette::Palette;
use ratatui::style::Color;

/// Near-black palette matching the nlsh site: purple accent, green
/// command text, orange platform note.
pub const MIDNIGHT: Palette = Palette {
    base: Color::Rgb(5, 5, 5),
    crust: Color::Rgb(0, 0, 0),
    surface0: Color::Rgb(20, 20, 20),
    surface1: Color::Rgb(30, 30, 30),
    surface2: Color::Rgb(51, 51, 51),
    overlay0: Color::Rgb(85, 85, 85),
    text: Color::Rgb(212, 212, 212),
    subtext0: Color::Rgb(163, 163, 163),
    subtext1: Color::Rgb(229, 229, 229),
    blue: Color::Rgb(96, 165, 250),
    teal: Color::Rgb(45, 212, 191),
    green: Color::Rgb(74, 222, 128),
    yellow: Color::Rgb(250, 204, 21),
    peach: Color::Rgb(249, 115, 22),
    red: Color::Rgb(239, 68, 68),
    mauve: Color::Rgb(168, 85, 247),
};
