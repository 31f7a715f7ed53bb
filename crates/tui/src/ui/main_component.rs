use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect};

use super::components::Component;
use super::components::document::DocumentComponent;
use super::components::nav_bar::NavBarComponent;
use crate::app::App;

/// Root view: the document with the header drawn over it.
///
/// Keys are global (there is no focus to move); mouse events go to whichever
/// component owns the position under the cursor.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    pub document_view: DocumentComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            nav_bar_view: NavBarComponent::new(),
            document_view: DocumentComponent::new(),
        }
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key_to_msg(key, app.navigation.is_menu_open()) {
            Some(msg) => app.update(&msg),
            None => Vec::new(),
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let on_header = app.nav_bar.contains(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_header => self.nav_bar_view.handle_mouse_events(app, mouse),
            // A click outside the open dropdown only dismisses it.
            MouseEventKind::Down(MouseButton::Left) if app.navigation.is_menu_open() => app.update(&Msg::CloseMenu),
            MouseEventKind::Down(_) if on_header => Vec::new(),
            _ => self.document_view.handle_mouse_events(app, mouse),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.document_view.render(frame, area, app);
        self.nav_bar_view.render(frame, area, app);
    }
}

/// Keyboard bindings. `menu_open` decides whether Esc closes the menu or quits.
pub fn key_to_msg(key: KeyEvent, menu_open: bool) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Msg::Quit);
    }
    match key.code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Esc if menu_open => Some(Msg::CloseMenu),
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::ScrollLines(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::ScrollLines(1)),
        KeyCode::PageUp => Some(Msg::ScrollPages(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Msg::ScrollPages(1)),
        KeyCode::Home | KeyCode::Char('g') => Some(Msg::ScrollToTop),
        KeyCode::Char('m') => Some(Msg::ToggleMenu),
        KeyCode::Char('t') => Some(Msg::ToggleTheme),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .and_then(|value| usize::try_from(value).ok())
            .map(|value| Msg::NavigateToIndex(value - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn escape_closes_the_menu_before_quitting() {
        assert_eq!(key_to_msg(key(KeyCode::Esc), true), Some(Msg::CloseMenu));
        assert_eq!(key_to_msg(key(KeyCode::Esc), false), Some(Msg::Quit));
    }

    #[test]
    fn digits_navigate_by_position() {
        assert_eq!(key_to_msg(key(KeyCode::Char('1')), false), Some(Msg::NavigateToIndex(0)));
        assert_eq!(key_to_msg(key(KeyCode::Char('5')), false), Some(Msg::NavigateToIndex(4)));
        assert_eq!(key_to_msg(key(KeyCode::Char('0')), false), None);
    }

    #[test]
    fn scrolling_and_toggles() {
        assert_eq!(key_to_msg(key(KeyCode::Char('j')), false), Some(Msg::ScrollLines(1)));
        assert_eq!(key_to_msg(key(KeyCode::Up), false), Some(Msg::ScrollLines(-1)));
        assert_eq!(key_to_msg(key(KeyCode::PageDown), false), Some(Msg::ScrollPages(1)));
        assert_eq!(key_to_msg(key(KeyCode::Home), false), Some(Msg::ScrollToTop));
        assert_eq!(key_to_msg(key(KeyCode::Char('m')), false), Some(Msg::ToggleMenu));
        assert_eq!(key_to_msg(key(KeyCode::Char('t')), false), Some(Msg::ToggleTheme));
    }

    #[test]
    fn control_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(key_to_msg(ctrl('c'), false), Some(Msg::Quit));
        assert_eq!(key_to_msg(ctrl('t'), false), None);
    }
}
