use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub pivot: Color,     // Yellow
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue for untouched elements
    secondary: Color::Rgb(250, 179, 135), // Orange for visiting/frontier
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161), // Green for sorted/visited
    error: Color::Rgb(243, 139, 168),   // Red for active comparisons
    pivot: Color::Rgb(249, 226, 175),   // Yellow for the pivot slot
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for the status bar
};
