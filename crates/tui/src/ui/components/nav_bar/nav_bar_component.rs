use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg, ThemeMode};
use folio_util::test_id;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NavBarState, NavTarget};
use crate::app::App;
use crate::document::PAGE_MARGIN;
use crate::ui::components::Component;
use crate::ui::layout::MainLayout;
use crate::ui::theme::theme_helpers as th;

const ITEM_GAP: u16 = 2;

/// Toggle glyph for the current mode.
pub fn theme_toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "[☾]",
        ThemeMode::Light => "[☀]",
    }
}

pub fn menu_button_label(is_open: bool) -> &'static str {
    if is_open { "[✕]" } else { "[≡]" }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Fixed header: brand, section entries, theme toggle, and (narrow) menu.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn message_for(app: &App, target: NavTarget) -> Option<Msg> {
        match target {
            NavTarget::Brand => Some(Msg::ScrollToTop),
            NavTarget::ThemeToggle => Some(Msg::ToggleTheme),
            NavTarget::MenuButton => Some(Msg::ToggleMenu),
            NavTarget::Item(index) => app
                .navigation
                .registry()
                .get(index)
                .map(|item| Msg::NavigateTo(item.anchor_id.to_string())),
        }
    }

    fn render_header(&self, frame: &mut Frame, header: Rect, app: &mut App) {
        let scrolled = app.navigation.is_scrolled_past_threshold();
        let theme = &*app.theme;
        frame.render_widget(Clear, header);
        frame.render_widget(Block::default().style(th::header_style(theme, scrolled)), header);

        let divider = Rect {
            y: header.bottom().saturating_sub(1),
            height: 1.min(header.height),
            ..header
        };
        frame.render_widget(
            Paragraph::new("─".repeat(usize::from(divider.width))).style(th::header_divider_style(theme, scrolled)),
            divider,
        );

        let row = MainLayout::header_content_row(header);
        let left = row.x.saturating_add(PAGE_MARGIN);
        let right = row.right().saturating_sub(PAGE_MARGIN);

        let brand = app.portfolio.profile.site;
        let brand_area = Rect::new(left, row.y, text_width(brand).min(row.width), 1);
        frame.render_widget(
            Paragraph::new(Span::styled(brand, theme.accent_emphasis_style())),
            brand_area,
        );
        app.nav_bar.brand_area = brand_area;

        let narrow = app.is_narrow();
        let mut cursor = right;
        if narrow {
            let label = menu_button_label(app.navigation.is_menu_open());
            let area = Self::place_left(&mut cursor, label, row, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(label, th::button_secondary_style(theme, app.navigation.is_menu_open()))),
                area,
            );
            app.nav_bar.menu_button_area = area;
        }

        let toggle = theme_toggle_label(app.theme_mode());
        let toggle_area = Self::place_left(&mut cursor, toggle, row, ITEM_GAP);
        frame.render_widget(
            Paragraph::new(Span::styled(toggle, th::button_secondary_style(theme, false))),
            toggle_area,
        );
        app.nav_bar.theme_toggle_area = toggle_area;

        if !narrow {
            self.render_inline_items(frame, row, cursor, app);
        }
    }

    /// Reserves `label` immediately left of `cursor` (minus `gap`).
    fn place_left(cursor: &mut u16, label: &str, row: Rect, gap: u16) -> Rect {
        let width = text_width(label);
        let x = cursor.saturating_sub(width).max(row.x);
        *cursor = x.saturating_sub(gap);
        Rect::new(x, row.y, width, 1)
    }

    fn render_inline_items(&self, frame: &mut Frame, row: Rect, right_edge: u16, app: &mut App) {
        let active = app.active_section();
        let labels: Vec<&'static str> = app.navigation.registry().iter().map(|item| item.label).collect();
        let total = labels
            .iter()
            .map(|label| text_width(label))
            .fold(0u16, |sum, width| sum.saturating_add(width))
            .saturating_add(ITEM_GAP.saturating_mul(u16::try_from(labels.len()).unwrap_or(0).saturating_sub(1)));
        let mut x = right_edge.saturating_sub(ITEM_GAP).saturating_sub(total).max(row.x);

        let theme = &*app.theme;
        for (index, label) in labels.iter().enumerate() {
            let area = Rect::new(x, row.y, text_width(label), 1).intersection(row);
            frame.render_widget(
                Paragraph::new(Span::styled(*label, th::nav_item_style(theme, active == Some(index)))),
                area,
            );
            app.nav_bar.item_areas.push(area);
            app.nav_bar.rendered_test_ids.push(test_id("link-nav", label));
            x = x.saturating_add(area.width).saturating_add(ITEM_GAP);
        }
    }

    fn render_menu(&self, frame: &mut Frame, screen: Rect, app: &mut App) {
        let count = app.navigation.registry().len();
        let menu_area = MainLayout::menu_area(screen, count);
        if menu_area.height < 3 {
            return;
        }
        let theme = &*app.theme;
        let block = th::block(theme, None, true);
        let inner = block.inner(menu_area);
        frame.render_widget(Clear, menu_area);
        frame.render_widget(block, menu_area);
        app.nav_bar.menu_area = menu_area;

        let active = app.active_section();
        let labels: Vec<&'static str> = app.navigation.registry().iter().map(|item| item.label).collect();
        for (index, label) in labels.iter().enumerate() {
            let offset = u16::try_from(index).unwrap_or(u16::MAX);
            if offset >= inner.height {
                break;
            }
            let area = Rect::new(inner.x, inner.y.saturating_add(offset), inner.width, 1);
            let selected = active == Some(index);
            let line = Line::from(vec![
                Span::styled(" › ", theme.accent_primary_style()),
                Span::styled(*label, th::nav_item_style(theme, selected).add_modifier(Modifier::BOLD)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            app.nav_bar.menu_item_areas.push(area);
            app.nav_bar.rendered_test_ids.push(test_id("link-mobile-nav", label));
        }
    }
}

impl Component for NavBarComponent {
    /// Resolves a left click against the last rendered layout.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(target) = app.nav_bar.target_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        match Self::message_for(app, target) {
            Some(msg) => app.update(&msg),
            None => Vec::new(),
        }
    }

    /// Renders the header overlay and, when open on a narrow layout, the menu.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [header, _] = MainLayout::responsive_layout(area);
        app.nav_bar.reset(header);
        self.render_header(frame, header, app);
        if app.is_narrow() && app.navigation.is_menu_open() {
            self.render_menu(frame, area, app);
        }
    }
}
