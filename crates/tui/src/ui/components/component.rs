//! Component system for the portfolio page.
//!
//! Components are self-contained UI elements: they translate raw input that
//! lands in their area into application messages, apply those through
//! [`App::update`], and render themselves into a provided `Rect`. Side effects
//! are reported back to the runtime as [`Effect`]s rather than performed here.

use crossterm::event::{KeyEvent, MouseEvent};
use folio_types::Effect;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

/// A UI element with its own input handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: the main view routes key and mouse events to the
///    component that owns the area under the cursor.
/// 2. **State Updates**: components never mutate navigation state directly;
///    they build a `Msg` and hand it to `App::update`.
/// 3. **Rendering**: `render()` draws the component and records any hit areas
///    needed to resolve the next mouse event.
pub trait Component {
    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that fall inside this component's area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording their own layout for hit testing.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
