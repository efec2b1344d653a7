pub mod about;
pub mod commands;
pub mod footer;
pub mod help;
pub mod helpers;
pub mod install;
pub mod navbar;
pub mod usage;

use crate::domain::models::Section;

/// Content height of a page, used to clamp scrolling.
#[must_use]
pub fn page_height(section: Section) -> u16 {
    match section {
        Section::Install => install::line_count(),
        Section::Usage => usage::line_count(),
        Section::Commands => commands::line_count(),
        Section::About => about::line_count(),
    }
}

/// Left margin shared by all pages.
pub(crate) const PAD: &str = "  ";
