use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use staffdir_core::utils::truncate_string;
use staffdir_core::{Card, OverlayControl, Person};

use crate::app::{App, AppState};

use super::layout;
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let screen = layout::screen(frame.area());

    render_title_bar(frame, screen.title);
    render_search_bar(frame, app, screen.search);
    render_gallery(frame, app, screen.gallery);
    render_status_bar(frame, app, screen.status);

    // Render overlays
    if app.overlay.is_open() {
        render_detail_overlay(frame, app);
    }

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "  Employee Directory";
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + help_hint.len() as u16 + 2)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.state, AppState::Searching);
    let value = app.search.value();

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(" Search...", styles::muted_style()))
    } else {
        let cursor = if focused { "▌" } else { "" };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(value.to_string(), styles::search_style()),
            Span::styled(cursor, styles::search_style()),
        ])
    };

    let block = Block::default()
        .title(" [/] Search ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.state, AppState::Normal) && !app.overlay.is_open();
    let title = format!(
        " Employees ({} of {}) ",
        app.store.filtered().len(),
        app.store.all().len()
    );

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));
    frame.render_widget(block, area);

    let inner = layout::gallery_inner(area);

    if app.gallery.is_empty() {
        let message = if app.is_loading() {
            "Loading directory...".to_string()
        } else if app.store.is_empty() {
            "No employees loaded".to_string()
        } else {
            format!("No matches for \"{}\"", app.search.value())
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, styles::muted_style())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let selected = app.gallery.selected();
    for (index, rect) in layout::card_rects(inner, app.gallery.len(), selected) {
        if let Some(card) = app.gallery.cards().get(index) {
            render_card(frame, card, rect, focused && index == selected);
        }
    }
}

fn render_card(frame: &mut Frame, card: &Card, area: Rect, selected: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let name_style = if selected {
        styles::selected_style()
    } else {
        styles::title_style()
    };

    let lines = vec![
        Line::from(Span::styled(truncate_string(&card.name, width), name_style)),
        Line::from(Span::styled(
            truncate_string(&card.email, width),
            styles::list_item_style(),
        )),
        Line::from(Span::styled(
            truncate_string(&card.city_state, width),
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(selected));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.state {
        AppState::Searching => "[Enter/Esc] done | [Ctrl+U] clear",
        _ if app.overlay.is_open() => "[←/→] prev/next | [Tab] focus | [Esc] close",
        _ => "[Enter] open | [/] search | [q]uit",
    };

    let left_text = format!(" {} ", app.status_text());
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

fn render_detail_overlay(frame: &mut Frame, app: &App) {
    let Some(person) = app.overlay.current() else {
        return;
    };
    let geometry = layout::overlay(frame.area());
    let focus = app.overlay.focus();

    frame.render_widget(Clear, geometry.modal);

    let title = match app.overlay.position() {
        Some((index, len)) => format!(" {} of {} ", index, len),
        None => String::new(),
    };
    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());
    frame.render_widget(block, geometry.modal);

    frame.render_widget(Paragraph::new(detail_lines(person, geometry.body.width)), geometry.body);

    for (control, rect) in [
        (OverlayControl::Close, geometry.close),
        (OverlayControl::Prev, geometry.prev),
        (OverlayControl::Next, geometry.next),
    ] {
        let label = format!("[ {} ]", control.label());
        let button = Paragraph::new(Line::from(Span::styled(
            label,
            styles::button_style(focus == Some(control)),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, rect);
    }
}

fn detail_lines(person: &Person, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, styles::muted_style()),
            Span::raw(truncate_string(&value, width.saturating_sub(label.len()))),
        ])
    };

    vec![
        Line::from(Span::styled(person.full_name(), styles::title_style())),
        Line::from(Span::styled(
            truncate_string(&person.email, width),
            styles::list_item_style(),
        )),
        Line::from(Span::styled(person.city_state(), styles::list_item_style())),
        Line::from(Span::styled("─".repeat(width), styles::muted_style())),
        field("Phone:    ", person.phone.clone()),
        field("Address:  ", person.location_line()),
        field("Birthday: ", person.birth_date.display()),
        field("Photo:    ", person.photo_url.clone()),
    ]
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = layout::centered_rect_fixed(52, 24, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(k, styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled("  Employee Directory", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(Span::styled(
            format!("  {}", truncate_string(&app.config.endpoint_url(), 46)),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Gallery", styles::highlight_style())),
        key("  ←/→ ↑/↓   ", "Move between cards"),
        key("  Enter     ", "Open details"),
        key("  Click     ", "Open a card"),
        key("  /         ", "Search by name"),
        key("  q         ", "Quit"),
        Line::from(""),
        Line::from(Span::styled(" Details", styles::highlight_style())),
        key("  ←/→ p/n   ", "Previous / next employee"),
        key("  Tab       ", "Cycle focus between buttons"),
        key("  Enter     ", "Press focused button"),
        key("  Esc       ", "Close (or click outside)"),
        Line::from(""),
        Line::from(Span::styled(" Search", styles::highlight_style())),
        key("  Enter/Esc ", "Back to gallery, keep query"),
        key("  Ctrl+U    ", "Clear query"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = layout::centered_rect_fixed(46, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
