use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Bottom row: mode badge, status message, key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let (badge, hint) = match app.mode {
        Mode::Navigate => (
            " NAV ",
            "hjkl move · space grab · n new · enter edit · d delete · / search · p priority · t theme · ? help · q quit",
        ),
        Mode::Search => (" SEARCH ", "type to filter · enter apply · esc cancel"),
        Mode::Move => (
            " MOVE ",
            "hjkl place · enter drop · esc cancel",
        ),
        Mode::Create => (" NEW ", "tab next field · enter save · esc discard"),
        Mode::Edit => (" EDIT ", "tab next field · enter save · esc discard"),
        Mode::Confirm => (" DELETE ", "y confirm · n cancel"),
    };

    let mut spans = vec![Span::styled(
        badge,
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(app.theme.text_bright),
        ));
    }
    // Modal hints always show; the Navigate strip is opt-in via config
    if app.mode != Mode::Navigate || app.ui_config.show_key_hints {
        spans.push(Span::styled(
            format!(" {}", hint),
            Style::default().fg(app.theme.dim),
        ));
    }

    let row = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.surface));
    frame.render_widget(row, area);
}
