use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::task::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub red: Color,
    pub yellow: Color,
    pub orange: Color,
    pub green: Color,
    pub cyan: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub drop_target: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x12, 0x18),
            surface: Color::Rgb(0x1A, 0x1D, 0x27),
            text: Color::Rgb(0xC5, 0xC9, 0xD6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x70, 0x85),
            highlight: Color::Rgb(0x7A, 0xA2, 0xF7),
            red: Color::Rgb(0xF7, 0x5A, 0x5A),
            yellow: Color::Rgb(0xE5, 0xC0, 0x7B),
            orange: Color::Rgb(0xF0, 0x9E, 0x5A),
            green: Color::Rgb(0x73, 0xD0, 0x8A),
            cyan: Color::Rgb(0x5A, 0xD0, 0xE6),
            blue: Color::Rgb(0x5A, 0x9C, 0xF7),
            selection_bg: Color::Rgb(0x2A, 0x2F, 0x45),
            selection_border: Color::Rgb(0x7A, 0xA2, 0xF7),
            drop_target: Color::Rgb(0x73, 0xD0, 0x8A),
            search_match_bg: Color::Rgb(0xE5, 0xC0, 0x7B),
            search_match_fg: Color::Rgb(0x10, 0x12, 0x18),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF5, 0xF5, 0xF4),
            surface: Color::Rgb(0xEA, 0xEA, 0xE8),
            text: Color::Rgb(0x33, 0x36, 0x3D),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x8A, 0x8D, 0x94),
            highlight: Color::Rgb(0x2F, 0x5E, 0xC4),
            red: Color::Rgb(0xC4, 0x2B, 0x2B),
            yellow: Color::Rgb(0xA8, 0x7A, 0x00),
            orange: Color::Rgb(0xC2, 0x5E, 0x0E),
            green: Color::Rgb(0x1E, 0x8A, 0x44),
            cyan: Color::Rgb(0x0E, 0x7A, 0x96),
            blue: Color::Rgb(0x1D, 0x60, 0xC4),
            selection_bg: Color::Rgb(0xD8, 0xDE, 0xEE),
            selection_border: Color::Rgb(0x2F, 0x5E, 0xC4),
            drop_target: Color::Rgb(0x1E, 0x8A, 0x44),
            search_match_bg: Color::Rgb(0xFF, 0xE2, 0x7A),
            search_match_fg: Color::Rgb(0x33, 0x36, 0x3D),
        }
    }

    /// Look up a theme by its persisted name. Unknown names fall back to dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Theme::light(),
            _ => Theme::dark(),
        }
    }

    /// Build a theme from UI config: named base palette plus `[ui.colors]`
    /// hex overrides. Returns the resolved theme name alongside.
    pub fn from_config(ui: &UiConfig) -> (String, Theme) {
        let name = ui.theme.as_deref().unwrap_or("dark").to_string();
        let mut theme = Theme::named(&name);
        theme.apply_overrides(ui);
        (name, theme)
    }

    /// Apply `[ui.colors]` hex overrides onto the current palette
    pub fn apply_overrides(&mut self, ui: &UiConfig) {
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "surface" => self.surface = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "dim" => self.dim = color,
                    "highlight" => self.highlight = color,
                    "red" => self.red = color,
                    "yellow" => self.yellow = color,
                    "orange" => self.orange = color,
                    "green" => self.green = color,
                    "cyan" => self.cyan = color,
                    "blue" => self.blue = color,
                    "selection_bg" => self.selection_bg = color,
                    "selection_border" => self.selection_border = color,
                    "drop_target" => self.drop_target = color,
                    "search_match_bg" => self.search_match_bg = color,
                    "search_match_fg" => self.search_match_fg = color,
                    _ => {}
                }
            }
        }
    }

    /// Gutter color for a card's priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.blue,
            Priority::Medium => self.yellow,
            Priority::High => self.orange,
            Priority::Urgent => self.red,
        }
    }

    /// Accent color for a column, from its configured hex value
    pub fn column_color(&self, hex: &str) -> Color {
        parse_hex_color(hex).unwrap_or(self.dim)
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
