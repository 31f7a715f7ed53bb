//! Dark palette built on Nord's Polar Night surfaces and Frost accents.

use folio_types::ThemeMode;
use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

const NIGHT: Color = Color::Rgb(0x2E, 0x34, 0x40);
const NIGHT_RAISED: Color = Color::Rgb(0x3B, 0x42, 0x52);
const NIGHT_HIGH: Color = Color::Rgb(0x43, 0x4C, 0x5E);
const NIGHT_EDGE: Color = Color::Rgb(0x4C, 0x56, 0x6A);

const SNOW: Color = Color::Rgb(0xD8, 0xDE, 0xE9);
const SNOW_BRIGHT: Color = Color::Rgb(0xE5, 0xE9, 0xF0);
const SNOW_WHITE: Color = Color::Rgb(0xEC, 0xEF, 0xF4);
const SLATE: Color = Color::Rgb(0x7B, 0x88, 0xA1);

const FROST_CYAN: Color = Color::Rgb(0x88, 0xC0, 0xD0);
const FROST_BLUE: Color = Color::Rgb(0x81, 0xA1, 0xC1);
const FROST_DEEP: Color = Color::Rgb(0x5E, 0x81, 0xAC);
const AURORA_YELLOW: Color = Color::Rgb(0xEB, 0xCB, 0x8B);

const ROLES: ThemeRoles = ThemeRoles {
    background: NIGHT,
    surface: NIGHT_RAISED,
    surface_muted: NIGHT_HIGH,
    border: NIGHT_EDGE,
    divider: NIGHT_HIGH,

    text: SNOW,
    text_secondary: SNOW_BRIGHT,
    text_muted: SLATE,

    accent_primary: FROST_CYAN,
    accent_secondary: FROST_BLUE,
    highlight: AURORA_YELLOW,
    link: FROST_CYAN,

    selection_bg: FROST_DEEP,
    selection_fg: SNOW_WHITE,
    focus: FROST_CYAN,

    scrollbar_thumb: FROST_BLUE,
    scrollbar_track: NIGHT_RAISED,
};

#[derive(Debug, Clone, Default)]
pub struct DarkTheme;

impl DarkTheme {
    pub const fn new() -> Self {
        Self
    }
}

impl Theme for DarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &ROLES
    }

    fn mode(&self) -> ThemeMode {
        ThemeMode::Dark
    }
}
