use colored::Color;

use crate::models::Theme;

/// Terminal colors for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub tag: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Magenta,
                text: Color::Black,
                muted: Color::BrightBlack,
                tag: Color::Blue,
            },
            Theme::Dark => Self {
                accent: Color::BrightMagenta,
                text: Color::White,
                muted: Color::BrightBlack,
                tag: Color::BrightCyan,
            },
        }
    }
}
