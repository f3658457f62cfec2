//! Midnight theme implementation

use ratatui::style::Color;

use super::Theme;

/// Midnight color palette: near-black background, cyan accents
pub const MIDNIGHT: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(1, 2, 5),      // #010205
    bg_secondary: Color::Rgb(10, 15, 26), // #0a0f1a

    // Foreground colors
    fg_primary: Color::Rgb(241, 245, 249),   // #f1f5f9
    fg_secondary: Color::Rgb(203, 213, 225), // #cbd5e1
    fg_muted: Color::Rgb(100, 116, 139),     // #64748b

    // Accent colors
    accent_primary: Color::Rgb(6, 182, 212),     // #06b6d4
    accent_secondary: Color::Rgb(217, 70, 239),  // #d946ef

    // Semantic colors
    success: Color::Rgb(16, 185, 129), // #10b981
    warning: Color::Rgb(249, 115, 22), // #f97316
    error: Color::Rgb(239, 68, 68),    // #ef4444
    info: Color::Rgb(34, 211, 238),    // #22d3ee

    // UI elements
    border: Color::Rgb(30, 41, 59),           // #1e293b
    border_focused: Color::Rgb(6, 182, 212),  // #06b6d4
    selection: Color::Rgb(22, 41, 56),        // #162938
    cursor: Color::Rgb(241, 245, 249),        // #f1f5f9
};

// Workaround for const String
impl Theme {
    pub fn midnight() -> Self {
        Theme { name: "Midnight".to_string(), ..MIDNIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_has_correct_name() {
        let theme = Theme::midnight();
        assert_eq!(theme.name, "Midnight");
    }

    #[test]
    fn midnight_colors_are_rgb() {
        let theme = Theme::midnight();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
    }
}
