//! Light palette: Snow Storm surfaces with Polar Night text and deep Frost
//! accents for contrast on bright terminals.

use folio_types::ThemeMode;
use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

const PAPER: Color = Color::Rgb(0xEC, 0xEF, 0xF4);
const PAPER_SHADE: Color = Color::Rgb(0xE5, 0xE9, 0xF0);
const PAPER_DEEP: Color = Color::Rgb(0xD8, 0xDE, 0xE9);
const EDGE: Color = Color::Rgb(0xB8, 0xC2, 0xD3);

const INK: Color = Color::Rgb(0x2E, 0x34, 0x40);
const INK_SOFT: Color = Color::Rgb(0x3B, 0x42, 0x52);
const INK_FAINT: Color = Color::Rgb(0x5C, 0x66, 0x7A);

const OCEAN: Color = Color::Rgb(0x3B, 0x6E, 0xA8);
const HARBOR: Color = Color::Rgb(0x5E, 0x81, 0xAC);
const OCHRE: Color = Color::Rgb(0xB5, 0x86, 0x1F);

const ROLES: ThemeRoles = ThemeRoles {
    background: PAPER,
    surface: PAPER_SHADE,
    surface_muted: PAPER_DEEP,
    border: EDGE,
    divider: EDGE,

    text: INK,
    text_secondary: INK_SOFT,
    text_muted: INK_FAINT,

    accent_primary: OCEAN,
    accent_secondary: HARBOR,
    highlight: OCHRE,
    link: OCEAN,

    selection_bg: PAPER_DEEP,
    selection_fg: INK,
    focus: OCEAN,

    scrollbar_thumb: HARBOR,
    scrollbar_track: PAPER_DEEP,
};

#[derive(Debug, Clone, Default)]
pub struct LightTheme;

impl LightTheme {
    pub const fn new() -> Self {
        Self
    }
}

impl Theme for LightTheme {
    fn roles(&self) -> &ThemeRoles {
        &ROLES
    }

    fn mode(&self) -> ThemeMode {
        ThemeMode::Light
    }
}
