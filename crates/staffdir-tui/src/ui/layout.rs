//! Screen geometry.
//!
//! Rendering and mouse hit-testing both derive rectangles from these
//! functions, so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Card width in columns, borders included
pub const CARD_WIDTH: u16 = 36;

/// Card height in rows: name, email, city/state plus borders
pub const CARD_HEIGHT: u16 = 5;

/// Fixed overlay size
pub const OVERLAY_WIDTH: u16 = 62;
pub const OVERLAY_HEIGHT: u16 = 15;

/// Top-level screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub title: Rect,
    pub search: Rect,
    pub gallery: Rect,
    pub status: Rect,
}

pub fn screen(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Gallery
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        search: chunks[1],
        gallery: chunks[2],
        status: chunks[3],
    }
}

/// Area inside the gallery border
pub fn gallery_inner(gallery: Rect) -> Rect {
    gallery.inner(Margin::new(1, 1))
}

/// How many cards fit side by side (at least one)
pub fn columns(inner: Rect) -> usize {
    usize::from((inner.width / CARD_WIDTH).max(1))
}

/// How many card rows fit (at least one)
pub fn visible_rows(inner: Rect) -> usize {
    usize::from((inner.height / CARD_HEIGHT).max(1))
}

/// First card row to draw so the selected card is on screen
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let row = selected / columns.max(1);
    (row + 1).saturating_sub(visible_rows)
}

/// Rectangles of the visible cards, paired with their index in the gallery
pub fn card_rects(inner: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    let cols = columns(inner);
    let rows = visible_rows(inner);
    let first = first_visible_row(selected, cols, rows) * cols;
    // Stretch cards to use the full width
    let card_width = inner.width / cols as u16;

    (first..count)
        .take(cols * rows)
        .map(|i| {
            let rel = i - first;
            let x = inner.x + (rel % cols) as u16 * card_width;
            let y = inner.y + (rel / cols) as u16 * CARD_HEIGHT;
            (i, Rect::new(x, y, card_width, CARD_HEIGHT).intersection(inner))
        })
        .collect()
}

/// Overlay regions: the modal box, its detail body and its three controls
#[derive(Debug, Clone, Copy)]
pub struct OverlayLayout {
    pub modal: Rect,
    pub body: Rect,
    pub close: Rect,
    pub prev: Rect,
    pub next: Rect,
}

pub fn overlay(area: Rect) -> OverlayLayout {
    let modal = centered_rect_fixed(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);
    let buttons_y = modal.bottom().saturating_sub(2);

    let body = Rect::new(
        modal.x + 2,
        modal.y + 1,
        modal.width.saturating_sub(4),
        modal.height.saturating_sub(4),
    );
    let close = Rect::new(modal.right().saturating_sub(7), modal.y, 5, 1);
    let prev = Rect::new(modal.x + 2, buttons_y, 10, 1);
    let next = Rect::new(modal.right().saturating_sub(12), buttons_y, 10, 1);

    OverlayLayout {
        modal,
        body: body.intersection(modal),
        close: close.intersection(modal),
        prev: prev.intersection(modal),
        next: next.intersection(modal),
    }
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
