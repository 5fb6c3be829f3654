// Theme selection and colour palettes.
// Light and dark palettes mirror the Bloom design tokens.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::navigation::Screen;

const PINK_100: Color = Color::Rgb(0xFF, 0xF1, 0xF1);
const PINK_900: Color = Color::Rgb(0x3F, 0x2C, 0x2C);
const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const GRAY: Color = Color::Rgb(0x23, 0x23, 0x23);
const GREEN_900: Color = Color::Rgb(0x2D, 0x3B, 0x2D);
const GREEN_300: Color = Color::Rgb(0xB8, 0xC9, 0xB8);
// 85% and 15% white, flattened over their usual backdrop.
const WHITE_850: Color = Color::Rgb(0xF2, 0xF2, 0xF2);
const WHITE_150: Color = Color::Rgb(0x45, 0x45, 0x45);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }

    /// Parse a theme name as used in config and `BLOOM_THEME`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Material colours plus the Bloom text colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub on_primary: Color,
    pub on_background: Color,
    pub subtitle: Color,
    pub button_text1: Color,
    pub button_text2: Color,
    pub button_background: Color,
    pub h1: Color,
    pub h2: Color,
    pub body1: Color,
    pub body2: Color,
    pub caption: Color,
    pub divider: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: PINK_100,
        secondary: PINK_900,
        background: WHITE,
        surface: WHITE_850,
        on_primary: GRAY,
        on_background: GRAY,
        subtitle: GRAY,
        button_text1: WHITE,
        button_text2: PINK_900,
        button_background: PINK_900,
        h1: GRAY,
        h2: GRAY,
        body1: GRAY,
        body2: GRAY,
        caption: GRAY,
        divider: GRAY,
    };

    pub const DARK: Palette = Palette {
        primary: GREEN_900,
        secondary: GREEN_300,
        background: GRAY,
        surface: WHITE_150,
        on_primary: WHITE,
        on_background: WHITE,
        subtitle: WHITE,
        button_text1: GRAY,
        button_text2: WHITE,
        button_background: GREEN_300,
        h1: WHITE,
        h2: WHITE,
        body1: WHITE,
        body2: WHITE,
        caption: WHITE,
        divider: WHITE,
    };
}

/// Colours for the status line (top) and hint bar (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub status_bg: Color,
    pub status_fg: Color,
    pub hint_bg: Color,
    pub hint_fg: Color,
}

/// Pick chrome colours for a screen: welcome uses primary for both bars,
/// home only for the hint bar, everything else the background.
pub fn chrome_for(screen: Screen, palette: &Palette) -> Chrome {
    let (status_bg, hint_bg) = match screen {
        Screen::Welcome => (palette.primary, palette.primary),
        Screen::Home => (palette.background, palette.primary),
        Screen::Login => (palette.background, palette.background),
    };
    Chrome {
        status_bg,
        status_fg: contrast_text(status_bg),
        hint_bg,
        hint_fg: contrast_text(hint_bg),
    }
}

/// Relative luminance in 0.0..=1.0 for RGB colours, None for named colours.
pub fn luminance(color: Color) -> Option<f32> {
    let Color::Rgb(r, g, b) = color else {
        return None;
    };
    let channel = |c: u8| {
        let c = c as f32 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

/// Dark text on light backgrounds, light text otherwise.
pub fn contrast_text(background: Color) -> Color {
    match luminance(background) {
        Some(l) if l > 0.5 => GRAY,
        _ => WHITE,
    }
}
