use crate::content::Level;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Brand purple
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub warning: Color,   // Yellow
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,
    pub output_bg: Color, // Background of the runner output panel
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(203, 166, 247),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    warning: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(203, 166, 247),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    type_name: Color::Rgb(148, 226, 213),
    output_bg: Color::Rgb(24, 24, 37),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(136, 57, 239),
    secondary: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    warning: Color::Rgb(223, 142, 29),
    error: Color::Rgb(210, 15, 57),
    keyword: Color::Rgb(30, 102, 245),
    string: Color::Rgb(254, 100, 11),
    number: Color::Rgb(254, 100, 11),
    border_focused: Color::Rgb(136, 57, 239),
    border_normal: Color::Rgb(172, 176, 190),
    current_line_bg: Color::Rgb(220, 224, 232),
    function: Color::Rgb(223, 142, 29),
    type_name: Color::Rgb(23, 146, 153),
    output_bg: Color::Rgb(230, 233, 239),
};

pub fn theme(dark: bool) -> &'static Theme {
    if dark {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}

/// Badge color for a difficulty level
pub fn level_color(theme: &Theme, level: Level) -> Color {
    match level {
        Level::Beginner => theme.success,
        Level::Intermediate => theme.warning,
        Level::Advanced => theme.error,
    }
}
