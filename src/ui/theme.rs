use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub border_active: Color,
    pub window_bg: Color,    // Cells inside the sliding window
    pub cell_bg: Color,      // Cells outside the window
    pub pointer_left: Color, // Left pointer marker
    pub pointer_right: Color, // Right pointer marker
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),         // Grey border
    border_active: Color::Rgb(249, 226, 175),  // Yellow border while editing
    window_bg: Color::Rgb(49, 80, 100),        // Teal-ish wash for window cells
    cell_bg: Color::Rgb(44, 44, 62),           // Slightly lighter than bg
    pointer_left: Color::Rgb(137, 180, 250),   // Blue L marker
    pointer_right: Color::Rgb(250, 179, 135),  // Orange R marker
};
