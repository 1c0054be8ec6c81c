use ratatui::style::{Color, Modifier};

use crate::model::{Preferences, UiConfig};

/// Color theme for the TUI, derived from the display preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub gauge_fill: Color,
    pub border: Color,
    /// Low-stimulus mode: no bold, no celebratory glyphs
    pub calm: bool,
}

impl Theme {
    /// The dark palette
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            gauge_fill: Color::Rgb(0x44, 0xFF, 0x88),
            border: Color::Rgb(0xFB, 0x41, 0x96),
            calm: false,
        }
    }

    /// The light palette
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xF7, 0xF2),
            text: Color::Rgb(0x3A, 0x34, 0x4A),
            text_bright: Color::Rgb(0x11, 0x0E, 0x1A),
            highlight: Color::Rgb(0xC2, 0x18, 0x5B),
            dim: Color::Rgb(0x8A, 0x84, 0x99),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            yellow: Color::Rgb(0xB2, 0x86, 0x00),
            green: Color::Rgb(0x2E, 0x7D, 0x32),
            selection_bg: Color::Rgb(0xF3, 0xD9, 0xE6),
            gauge_fill: Color::Rgb(0x2E, 0x7D, 0x32),
            border: Color::Rgb(0xC2, 0x18, 0x5B),
            calm: false,
        }
    }

    /// Mute accents so nothing competes for attention
    fn calmed(mut self) -> Self {
        self.highlight = self.text_bright;
        self.green = self.text;
        self.yellow = self.text;
        self.red = self.text;
        self.gauge_fill = self.dim;
        self.border = self.dim;
        self.calm = true;
        self
    }

    /// Pick the palette for the given preferences, then apply `[ui.colors]`
    pub fn resolve(prefs: &Preferences, ui: &UiConfig) -> Self {
        let mut theme = if prefs.dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        };
        if prefs.low_stimulus {
            theme = theme.calmed();
        }

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "selection_bg" => theme.selection_bg = color,
                    "gauge_fill" => theme.gauge_fill = color,
                    "border" => theme.border = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Modifier for emphasized text (none in low-stimulus mode)
    pub fn emphasis(&self) -> Modifier {
        if self.calm {
            Modifier::empty()
        } else {
            Modifier::BOLD
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#aé123"), None); // six bytes, not six digits
    }

    #[test]
    fn dark_mode_picks_dark_palette() {
        let ui = UiConfig::default();
        let dark = Theme::resolve(
            &Preferences {
                dark_mode: true,
                low_stimulus: false,
            },
            &ui,
        );
        assert_eq!(dark, Theme::dark());
        let light = Theme::resolve(&Preferences::default(), &ui);
        assert_eq!(light, Theme::light());
    }

    #[test]
    fn low_stimulus_mutes_accents() {
        let ui = UiConfig::default();
        let theme = Theme::resolve(
            &Preferences {
                dark_mode: true,
                low_stimulus: true,
            },
            &ui,
        );
        assert!(theme.calm);
        assert_eq!(theme.gauge_fill, theme.dim);
        assert_eq!(theme.highlight, theme.text_bright);
        assert_eq!(theme.emphasis(), Modifier::empty());
        // background is untouched
        assert_eq!(theme.background, Theme::dark().background);
    }

    #[test]
    fn color_overrides_apply_last() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("gauge_fill".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#112233".into());
        ui.colors.insert("text".into(), "not-a-color".into());

        let theme = Theme::resolve(&Preferences::default(), &ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.gauge_fill, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.text, Theme::light().text);
    }

    #[test]
    fn non_ascii_override_is_ignored() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#aé123".into());
        let theme = Theme::resolve(&Preferences::default(), &ui);
        assert_eq!(theme.highlight, Theme::light().highlight);

        let dark = Theme::resolve(
            &Preferences {
                dark_mode: true,
                low_stimulus: false,
            },
            &ui,
        );
        assert_eq!(dark.highlight, Theme::dark().highlight);
    }
}
