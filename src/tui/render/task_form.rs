use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField, FormTarget};

use super::centered_rect;

/// Centered create/edit form. One row per field; the active field carries
/// the selection background and a trailing cursor mark.
pub fn render_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let title = match &form.target {
        FormTarget::Create { column_id } => format!(" new task → {} ", column_id),
        FormTarget::Edit { task_id } => format!(" edit {} ", task_id),
    };

    let popup = centered_rect(area, 56, (FormField::ORDER.len() + 4) as u16);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border))
        .style(Style::default().bg(app.theme.surface));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = Vec::with_capacity(FormField::ORDER.len() + 1);
    for field in FormField::ORDER {
        let active = field == form.field;
        let label_style = if active {
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim)
        };
        let value_style = if active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.text)
        };

        let value = match field {
            FormField::Priority => {
                let p = form.priority;
                let mut text = format!("◂ {} ▸", p.as_str());
                if active {
                    text.push_str("  (space cycles)");
                }
                text
            }
            _ => {
                let mut text = form.field_text(field).to_string();
                if active {
                    text.push('▏');
                }
                text
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<12}", field.label()), label_style),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        " tab fields · enter save · esc discard",
        Style::default().fg(app.theme.dim),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
