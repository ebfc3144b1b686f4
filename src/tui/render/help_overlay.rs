use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("h/l ←/→", "move between columns"),
    ("j/k ↑/↓", "move between cards"),
    ("g/G", "first / last card"),
    ("space, m", "pick card up (keyboard drag)"),
    ("enter, m", "  …drop at the marked position"),
    ("esc", "  …cancel the drag"),
    ("mouse", "drag cards and column headers"),
    ("n", "new task in this column"),
    ("enter, e", "edit task"),
    ("d", "delete task (asks first)"),
    ("/", "search (debounced)"),
    ("p", "cycle priority filter"),
    ("t", "toggle dark/light theme"),
    ("q", "quit"),
];

/// Centered key reference, dismissed by any key
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (KEYS.len() + 4) as u16;
    let popup = centered_rect(area, 52, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border))
        .style(Style::default().bg(app.theme.surface));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = Vec::with_capacity(KEYS.len() + 1);
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", key),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(action.to_string(), Style::default().fg(app.theme.text)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        " any key to close",
        Style::default().fg(app.theme.dim),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
