use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Small centered prompt before a task is deleted
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(task_id) = &app.confirm_delete else {
        return;
    };
    let title = app
        .board
        .task(task_id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| task_id.clone());

    let popup = centered_rect(area, 46, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" delete task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red))
        .style(Style::default().bg(app.theme.surface));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} — {}", task_id, title),
            Style::default().fg(app.theme.text_bright),
        )),
        Line::from(vec![
            Span::styled(
                " y ",
                Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("delete  ", Style::default().fg(app.theme.text)),
            Span::styled(
                " n ",
                Style::default()
                    .fg(app.theme.green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keep", Style::default().fg(app.theme.text)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
