//! Style recipes shared by the header, the document, and the dropdown menu.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Rounded panel on the surface color, with an optional bold caption.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let panel = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    match title {
        Some(title) => panel.title(title).title_style(theme.text_secondary_style().add_modifier(Modifier::BOLD)),
        None => panel,
    }
}

/// Full-screen page background.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Raised surface for the lifted header and the dropdown.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::default().bg(roles.surface).fg(roles.text)
}

/// Header bar style: blends with the page at rest, lifts onto a surface with
/// a divider once the reader scrolls past the threshold.
pub fn header_style<T: Theme + ?Sized>(theme: &T, scrolled: bool) -> Style {
    if scrolled {
        panel_style(theme)
    } else {
        page_style(theme)
    }
}

/// Bottom divider drawn under the header; hidden at rest.
pub fn header_divider_style<T: Theme + ?Sized>(theme: &T, scrolled: bool) -> Style {
    let ThemeRoles {
        divider, background, surface, ..
    } = *theme.roles();
    if scrolled {
        Style::default().fg(divider).bg(surface)
    } else {
        Style::default().fg(background).bg(background)
    }
}

/// Section heading: bold accent.
pub fn section_title_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.accent_emphasis_style()
}

/// Hyperlink text; underlined so it reads as clickable without color.
pub fn link_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .fg(theme.roles().link)
        .add_modifier(Modifier::UNDERLINED)
}

/// Nav bar entry; the active entry is highlighted with the selection colors.
pub fn nav_item_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    if selected {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_secondary_style()
    }
}

/// Filled accent button.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary, background, ..
    } = *theme.roles();
    Style::default()
        .bg(accent_primary)
        .fg(background)
        .add_modifier(Modifier::BOLD)
}

/// Text-only accent button; `selected` adds the selection background.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        ..
    } = *theme.roles();
    let style = Style::default().fg(accent_secondary);
    if selected { style.bg(selection_bg) } else { style }
}

/// Technology and skill chips.
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        surface_muted, text_secondary, ..
    } = *theme.roles();
    Style::default().bg(surface_muted).fg(text_secondary)
}

/// Scales each RGB channel by `factor` (clamped to `0.0..=1.0`). Named and
/// indexed colors pass through.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let factor = factor.clamp(0.0, 1.0);
    let scale = |channel: u8| (f32::from(channel) * factor).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// The bar down the left edge of experience and education cards.
pub fn card_gutter_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().fg(darken_rgb(theme.roles().accent_secondary, 0.85))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DarkTheme, LightTheme};

    #[test]
    fn header_lifts_onto_surface_when_scrolled() {
        let theme = DarkTheme::new();
        assert_eq!(header_style(&theme, false).bg, Some(theme.roles().background));
        assert_eq!(header_style(&theme, true).bg, Some(theme.roles().surface));
    }

    #[test]
    fn darken_scales_rgb_and_ignores_named_colors() {
        assert_eq!(darken_rgb(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(darken_rgb(Color::Red, 0.5), Color::Red);
    }

    #[test]
    fn links_are_underlined_in_both_modes() {
        assert!(link_style(&DarkTheme::new()).add_modifier.contains(Modifier::UNDERLINED));
        assert!(link_style(&LightTheme::new()).add_modifier.contains(Modifier::UNDERLINED));
    }
}
