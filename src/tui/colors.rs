//! Color palettes for the terminal user interface.

use ratatui::style::Color;

/// Colors used to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub progress: Color,
    pub editing: Color,
}

/// Used when dark mode is on
pub const DARK: Palette = Palette {
    bg: Color::Rgb(30, 30, 30),
    fg: Color::Rgb(230, 230, 230),
    muted: Color::DarkGray,
    accent: Color::Rgb(255, 215, 0),
    border: Color::Gray,
    highlight_bg: Color::Gray,
    highlight_fg: Color::Black,
    progress: Color::Rgb(0, 160, 80),
    editing: Color::Cyan,
};

/// Used when dark mode is off
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(245, 245, 245),
    fg: Color::Rgb(20, 20, 20),
    muted: Color::Gray,
    accent: Color::Rgb(0, 80, 160),
    border: Color::DarkGray,
    highlight_bg: Color::Rgb(200, 200, 200),
    highlight_fg: Color::Black,
    progress: Color::Rgb(0, 80, 0),
    editing: Color::Blue,
};

pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        DARK
    } else {
        LIGHT
    }
}
