//! Keyboard and mouse input handling for the TUI.
//!
//! This module translates terminal events into application state changes.
//! Mouse hits are resolved against the same geometry the renderer draws.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use staffdir_core::{Direction, OverlayControl};

use crate::app::{App, AppState};

use super::layout;

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent, area: Rect) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    // The detail overlay is modal
    if app.overlay.is_open() {
        handle_overlay_input(app, key);
        return false;
    }

    // Handle search mode
    if matches!(app.state, AppState::Searching) {
        handle_search_input(app, key);
        return false;
    }

    handle_gallery_input(app, key, area);
    false
}

fn handle_overlay_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            app.navigate(Direction::Prev);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            app.navigate(Direction::Next);
        }
        KeyCode::Tab => app.overlay.focus_next(),
        KeyCode::BackTab => app.overlay.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.overlay.activate(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
            // Keep search query active
            app.stop_search();
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_insert(c);
        }
        _ => {}
    }
}

fn handle_gallery_input(app: &mut App, key: KeyEvent, area: Rect) {
    let inner = layout::gallery_inner(layout::screen(area).gallery);
    let cols = layout::columns(inner) as isize;
    let page = cols * layout::visible_rows(inner) as isize;

    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Left | KeyCode::Char('h') => app.gallery.select_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.gallery.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.gallery.select_offset(-cols),
        KeyCode::Down | KeyCode::Char('j') => app.gallery.select_offset(cols),
        KeyCode::PageUp => app.gallery.select_offset(-page),
        KeyCode::PageDown => app.gallery.select_offset(page),
        KeyCode::Home | KeyCode::Char('g') => app.gallery.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.gallery.select_last(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

/// Handle a mouse event against the current screen area
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if !matches!(app.state, AppState::Normal | AppState::Searching) {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if !app.overlay.is_open() => {
            app.gallery.select_next();
            return;
        }
        MouseEventKind::ScrollUp if !app.overlay.is_open() => {
            app.gallery.select_prev();
            return;
        }
        _ => return,
    }

    let point = Position::new(mouse.column, mouse.row);

    if app.overlay.is_open() {
        let geometry = layout::overlay(area);
        let hit = [
            (OverlayControl::Close, geometry.close),
            (OverlayControl::Prev, geometry.prev),
            (OverlayControl::Next, geometry.next),
        ]
        .into_iter()
        .find(|(_, rect)| rect.contains(point));

        match hit {
            Some((control, _)) => {
                app.overlay.set_focus(control);
                app.overlay.activate();
            }
            None if !geometry.modal.contains(point) => app.close_overlay(),
            None => {}
        }
        return;
    }

    let screen = layout::screen(area);
    if screen.search.contains(point) {
        app.start_search();
        return;
    }

    let inner = layout::gallery_inner(screen.gallery);
    let clicked = layout::card_rects(inner, app.gallery.len(), app.gallery.selected())
        .into_iter()
        .find(|(_, rect)| rect.contains(point));

    if let Some((index, _)) = clicked {
        app.stop_search();
        app.open_card(index);
    } else if matches!(app.state, AppState::Searching) {
        app.stop_search();
    }
}
