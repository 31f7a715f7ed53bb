use std::ops::Range;

use folio_types::Link;
use indexmap::IndexMap;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest width the builder lays out for; smaller terminals clip.
pub const MIN_DOCUMENT_WIDTH: u16 = 24;

const ITEM_GAP: u16 = 2;

/// What activating a clickable region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentAction {
    OpenLink(Link),
    ScrollToTop,
}

/// A clickable span of one document row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub row: u16,
    pub columns: Range<u16>,
    pub action: DocumentAction,
    pub test_id: String,
}

impl HitRegion {
    pub fn contains(&self, row: u16, column: u16) -> bool {
        self.row == row && self.columns.contains(&column)
    }
}

/// One inline element of an action row: styled text plus an optional action.
#[derive(Debug, Clone)]
pub struct RowItem {
    pub span: Span<'static>,
    pub action: Option<(DocumentAction, String)>,
}

impl RowItem {
    pub fn text(span: Span<'static>) -> Self {
        Self { span, action: None }
    }

    pub fn action(span: Span<'static>, action: DocumentAction, test_id: impl Into<String>) -> Self {
        Self {
            span,
            action: Some((action, test_id.into())),
        }
    }
}

/// The laid-out page: styled rows, anchor rows, and clickable regions.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: IndexMap<String, u16>,
    regions: Vec<HitRegion>,
    width: u16,
}

impl Document {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Rows visible through a window of `height` rows starting at `offset`.
    pub fn visible_lines(&self, offset: u16, height: u16) -> &[Line<'static>] {
        let start = usize::from(offset).min(self.lines.len());
        let end = start.saturating_add(usize::from(height)).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn anchor_row(&self, anchor_id: &str) -> Option<u16> {
        self.anchors.get(anchor_id).copied()
    }

    /// Anchor identifiers in document order.
    pub fn anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.anchors.keys().map(String::as_str)
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    pub fn region_at(&self, row: u16, column: u16) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.contains(row, column))
    }

    pub fn region_by_test_id(&self, test_id: &str) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.test_id == test_id)
    }

    /// Unstyled rendering with trailing whitespace trimmed from each row.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let row: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Incrementally lays out rows for a fixed width.
///
/// An optional gutter (for example a card's accent bar) is prefixed to every
/// row pushed while it is set and narrows the content width accordingly.
#[derive(Debug)]
pub struct DocumentBuilder {
    width: u16,
    lines: Vec<Line<'static>>,
    anchors: IndexMap<String, u16>,
    regions: Vec<HitRegion>,
    gutter: Option<Span<'static>>,
}

impl DocumentBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            width: width.max(MIN_DOCUMENT_WIDTH),
            lines: Vec::new(),
            anchors: IndexMap::new(),
            regions: Vec::new(),
            gutter: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Row index the next pushed line will occupy.
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn gutter_width(&self) -> u16 {
        self.gutter.as_ref().map_or(0, |gutter| span_width(gutter))
    }

    /// Columns available to content after the gutter.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(self.gutter_width()).max(1)
    }

    /// Runs `body` with `gutter` prefixed to each row it pushes.
    pub fn with_gutter(&mut self, gutter: Span<'static>, body: impl FnOnce(&mut Self)) {
        let previous = self.gutter.replace(gutter);
        body(self);
        self.gutter = previous;
    }

    /// Marks the next row as the target of `anchor_id`. The first
    /// registration wins; duplicates are logged and ignored.
    pub fn anchor(&mut self, anchor_id: &str) {
        let row = self.row();
        if self.anchors.contains_key(anchor_id) {
            warn!(anchor_id, row, "duplicate document anchor ignored");
            return;
        }
        self.anchors.insert(anchor_id.to_string(), row);
    }

    pub fn line(&mut self, line: impl Into<Line<'static>>) {
        let line = line.into();
        match &self.gutter {
            Some(gutter) => {
                let mut spans = Vec::with_capacity(line.spans.len() + 1);
                spans.push(gutter.clone());
                spans.extend(line.spans);
                self.lines.push(Line::from(spans));
            }
            None => self.lines.push(line),
        }
    }

    pub fn blank(&mut self) {
        self.line(Line::default());
    }

    pub fn blank_lines(&mut self, count: u16) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Horizontal rule inset by `indent` columns on both sides.
    pub fn rule(&mut self, style: Style, indent: u16) {
        let width = usize::from(self.content_width().saturating_sub(indent.saturating_mul(2)).max(1));
        let pad = " ".repeat(usize::from(indent));
        self.line(Line::from(vec![Span::raw(pad), Span::styled("─".repeat(width), style)]));
    }

    /// Word-wrapped paragraph indented by `indent` columns.
    pub fn wrapped(&mut self, text: &str, style: Style, indent: u16) {
        let available = usize::from(self.content_width().saturating_sub(indent).max(1));
        let pad = " ".repeat(usize::from(indent));
        for row in textwrap::wrap(text, available) {
            self.line(Line::from(vec![Span::raw(pad.clone()), Span::styled(row.into_owned(), style)]));
        }
    }

    /// Paragraph led by a marker; continuation rows hang under the text.
    pub fn bullet(&mut self, marker: Span<'static>, text: &str, style: Style, indent: u16) {
        let marker_width = span_width(&marker);
        let hang = indent.saturating_add(marker_width).saturating_add(1);
        let available = usize::from(self.content_width().saturating_sub(hang).max(1));
        let pad = " ".repeat(usize::from(indent));
        let hang_pad = " ".repeat(usize::from(hang));
        for (index, row) in textwrap::wrap(text, available).into_iter().enumerate() {
            let spans = if index == 0 {
                vec![
                    Span::raw(pad.clone()),
                    marker.clone(),
                    Span::raw(" "),
                    Span::styled(row.into_owned(), style),
                ]
            } else {
                vec![Span::raw(hang_pad.clone()), Span::styled(row.into_owned(), style)]
            };
            self.line(Line::from(spans));
        }
    }

    /// Flows `items` as padded chips, wrapping to new rows as needed.
    pub fn chips(&mut self, items: &[&str], style: Style, indent: u16) {
        let row_items = items
            .iter()
            .map(|item| RowItem::text(Span::styled(format!(" {item} "), style)))
            .collect();
        self.row_items(row_items, indent, 1);
    }

    /// Lays out inline items left to right, wrapping when a row is full, and
    /// records a hit region for every item that carries an action.
    pub fn actions(&mut self, items: Vec<RowItem>, indent: u16) {
        self.row_items(items, indent, ITEM_GAP);
    }

    fn row_items(&mut self, items: Vec<RowItem>, indent: u16, gap: u16) {
        let limit = self.content_width();
        let origin = self.gutter_width();
        let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(usize::from(indent)))];
        let mut cursor = indent;
        let mut placed_on_row = false;

        for mut item in items {
            if placed_on_row && cursor.saturating_add(gap).saturating_add(span_width(&item.span)) > limit {
                self.line(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(usize::from(indent))));
                cursor = indent;
                placed_on_row = false;
            }
            if placed_on_row {
                spans.push(Span::raw(" ".repeat(usize::from(gap))));
                cursor = cursor.saturating_add(gap);
            }
            // Alone on its row and still too wide.
            item.span = truncate_span(item.span, limit.saturating_sub(cursor).max(1));
            let width = span_width(&item.span);
            if let Some((action, test_id)) = item.action {
                let start = origin.saturating_add(cursor);
                self.regions.push(HitRegion {
                    row: self.row(),
                    columns: start..start.saturating_add(width),
                    action,
                    test_id,
                });
            }
            spans.push(item.span);
            cursor = cursor.saturating_add(width);
            placed_on_row = true;
        }
        if placed_on_row {
            self.line(Line::from(spans));
        }
    }

    pub fn build(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
            regions: self.regions,
            width: self.width,
        }
    }
}

fn span_width(span: &Span<'_>) -> u16 {
    u16::try_from(UnicodeWidthStr::width(span.content.as_ref())).unwrap_or(u16::MAX)
}

/// Cuts `span` to at most `max` columns, ending in `…` when anything was cut.
fn truncate_span(span: Span<'static>, max: u16) -> Span<'static> {
    if span_width(&span) <= max {
        return span;
    }
    let budget = usize::from(max.saturating_sub(1));
    let mut used = 0;
    let mut kept = String::new();
    for ch in span.content.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        kept.push(ch);
    }
    kept.push('…');
    Span::styled(kept, span.style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_record_the_next_row_once() {
        let mut builder = DocumentBuilder::new(40);
        builder.blank_lines(3);
        builder.anchor("skills");
        builder.line("Skills");
        builder.anchor("skills");
        builder.line("again");

        let document = builder.build();
        assert_eq!(document.anchor_row("skills"), Some(3));
        assert_eq!(document.anchor_ids().collect::<Vec<_>>(), vec!["skills"]);
    }

    #[test]
    fn wrapped_text_respects_width_and_indent() {
        let mut builder = DocumentBuilder::new(MIN_DOCUMENT_WIDTH);
        builder.wrapped("one two three four five six seven eight nine ten", Style::default(), 2);
        let document = builder.build();
        assert!(document.height() > 1);
        for row in document.plain_text().lines() {
            assert!(row.starts_with("  "), "row {row:?}");
            assert!(row.width() <= usize::from(MIN_DOCUMENT_WIDTH));
        }
    }

    #[test]
    fn action_rows_wrap_and_record_regions() {
        let mut builder = DocumentBuilder::new(30);
        builder.with_gutter(Span::raw("│ "), |builder| {
            builder.actions(
                vec![
                    RowItem::action(Span::raw("[ first link ]"), DocumentAction::ScrollToTop, "a"),
                    RowItem::action(Span::raw("[ second link ]"), DocumentAction::ScrollToTop, "b"),
                ],
                0,
            );
        });
        let document = builder.build();

        assert_eq!(document.height(), 2);
        let first = document.region_by_test_id("a").unwrap();
        assert_eq!((first.row, first.columns.clone()), (0, 2..16));
        let second = document.region_by_test_id("b").unwrap();
        assert_eq!((second.row, second.columns.clone()), (1, 2..17));
        assert_eq!(document.region_at(1, 5).map(|region| region.test_id.as_str()), Some("b"));
        assert!(document.region_at(0, 0).is_none());
    }

    #[test]
    fn the_gap_counts_toward_the_row_width() {
        let mut builder = DocumentBuilder::new(20);
        builder.actions(
            vec![
                RowItem::text(Span::raw("0123456789")),
                RowItem::action(Span::raw("abcdefghi"), DocumentAction::ScrollToTop, "late"),
            ],
            0,
        );
        let document = builder.build();

        assert_eq!(document.height(), 2);
        assert_eq!(document.region_by_test_id("late").map(|region| region.row), Some(1));
        for row in document.plain_text().lines() {
            assert!(row.width() <= 20, "row {row:?}");
        }
    }

    #[test]
    fn an_item_wider_than_the_row_is_cut_short() {
        let mut builder = DocumentBuilder::new(MIN_DOCUMENT_WIDTH);
        let long = "x".repeat(40);
        builder.actions(vec![RowItem::action(Span::raw(long), DocumentAction::ScrollToTop, "long")], 2);
        let document = builder.build();

        let text = document.plain_text();
        let row = text.lines().next().unwrap();
        assert_eq!(row.width(), usize::from(MIN_DOCUMENT_WIDTH));
        assert!(row.ends_with('…'));
        let region = document.region_by_test_id("long").unwrap();
        assert_eq!(region.columns, 2..MIN_DOCUMENT_WIDTH);
    }

    #[test]
    fn rules_are_inset_on_both_sides() {
        let mut builder = DocumentBuilder::new(30);
        builder.rule(Style::default(), 2);
        let text = builder.build().plain_text();
        assert_eq!(text, format!("  {}\n", "─".repeat(26)));
    }

    #[test]
    fn visible_lines_clip_to_document() {
        let mut builder = DocumentBuilder::new(30);
        for index in 0..10 {
            builder.line(format!("row {index}"));
        }
        let document = builder.build();
        assert_eq!(document.visible_lines(8, 5).len(), 2);
        assert!(document.visible_lines(20, 5).is_empty());
    }
}
