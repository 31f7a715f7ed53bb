use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::Paragraph,
};

use crate::app::App;
use crate::document::DocumentAction;
use crate::nav::Viewport;
use crate::ui::components::Component;
use crate::ui::components::common::scrollbar::render_vertical_scrollbar;
use crate::ui::layout::NAV_BAR_HEIGHT;
use crate::ui::theme::theme_helpers as th;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: i16 = 3;

/// Draws the visible slice of the document and routes clicks on its links.
#[derive(Debug, Default)]
pub struct DocumentComponent {
    last_area: Rect,
}

impl DocumentComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a screen position to the document action under it.
    fn action_at(&self, app: &App, column: u16, row: u16) -> Option<DocumentAction> {
        if !self.last_area.contains(Position::new(column, row)) {
            return None;
        }
        let document_row = app
            .viewport
            .scroll_offset()
            .saturating_add(row.saturating_sub(self.last_area.y));
        let document_column = column.saturating_sub(self.last_area.x);
        app.viewport
            .document()
            .region_at(document_row, document_column)
            .map(|region| region.action.clone())
    }
}

impl Component for DocumentComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let msg = match mouse.kind {
            MouseEventKind::ScrollUp => Some(Msg::ScrollLines(-WHEEL_STEP)),
            MouseEventKind::ScrollDown => Some(Msg::ScrollLines(WHEEL_STEP)),
            MouseEventKind::Down(MouseButton::Left) => match self.action_at(app, mouse.column, mouse.row) {
                Some(DocumentAction::OpenLink(link)) => Some(Msg::OpenLink(link)),
                Some(DocumentAction::ScrollToTop) => Some(Msg::ScrollToTop),
                None => None,
            },
            _ => None,
        };
        match msg {
            Some(msg) => app.update(&msg),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.last_area = area;
        let theme = &*app.theme;
        let lines = app
            .viewport
            .document()
            .visible_lines(app.viewport.scroll_offset(), area.height)
            .to_vec();
        frame.render_widget(Paragraph::new(lines).style(th::page_style(theme)), area);

        let below_header = Rect {
            y: area.y.saturating_add(NAV_BAR_HEIGHT),
            height: area.height.saturating_sub(NAV_BAR_HEIGHT),
            ..area
        };
        render_vertical_scrollbar(frame, below_header, theme, app.viewport.metrics());
    }
}
