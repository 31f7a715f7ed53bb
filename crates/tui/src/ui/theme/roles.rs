use std::fmt::Debug;

use folio_types::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Colors by purpose rather than hue, so renderers never name a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    /// Rule under the header once it lifts off the page.
    pub divider: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,
    /// Achievement markers.
    pub highlight: Color,
    pub link: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    pub scrollbar_thumb: Color,
    pub scrollbar_track: Color,
}

/// A palette plus the handful of styles every component reaches for.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    /// Which side of the light/dark toggle this palette represents.
    fn mode(&self) -> ThemeMode;

    fn text_primary_style(&self) -> Style {
        fg(self.roles().text)
    }

    fn text_secondary_style(&self) -> Style {
        fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        let roles = self.roles();
        fg(roles.selection_fg).bg(roles.selection_bg)
    }

    fn accent_primary_style(&self) -> Style {
        fg(self.roles().accent_primary)
    }

    /// Bold primary accent, used for headings.
    fn accent_emphasis_style(&self) -> Style {
        self.accent_primary_style().add_modifier(Modifier::BOLD)
    }

    fn highlight_style(&self) -> Style {
        fg(self.roles().highlight)
    }
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}
