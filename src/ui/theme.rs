//! Rose Pine based palette, plus the semantic colours the browser uses.
//! Palette values: https://rosepinetheme.com/

use ratatui::style::Color;

pub struct Theme;

impl Theme {
    pub const BASE: Color = Color::Rgb(25, 23, 36);
    pub const SURFACE: Color = Color::Rgb(31, 29, 46);
    pub const TEXT: Color = Color::Rgb(224, 222, 244);
    pub const SUBTLE: Color = Color::Rgb(144, 140, 170);
    pub const MUTED: Color = Color::Rgb(110, 106, 134);
    pub const BORDER: Color = Color::Rgb(82, 79, 103);

    pub const ACCENT: Color = Color::Rgb(196, 167, 231);
    pub const ERROR: Color = Color::Rgb(235, 111, 146);
    pub const SUCCESS: Color = Color::Rgb(156, 207, 216);
    pub const HEADING: Color = Color::Rgb(246, 193, 119);

    pub const VEGETARIAN: Color = Color::Rgb(49, 116, 143);
    pub const MEAT: Color = Color::Rgb(235, 188, 186);
}
