use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Column, Task};
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::push_highlighted_spans;

/// Header: `▍ To Do 2` with the column's accent color, plus a WIP warning
/// like `3/2 !` when over limit, and an underline row.
pub fn render_column_header(
    frame: &mut Frame,
    app: &App,
    column: &Column,
    area: Rect,
    is_cursor_column: bool,
    is_drop_target: bool,
) {
    if area.height == 0 {
        return;
    }
    let accent = app.theme.column_color(&column.color);
    let title_style = if is_cursor_column {
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text)
    };

    let mut spans = vec![
        Span::styled("▍ ", Style::default().fg(accent)),
        Span::styled(column.title.clone(), title_style),
    ];
    match column.max_tasks {
        Some(max) if column.len() > max => {
            spans.push(Span::styled(
                format!(" {}/{} !", column.len(), max),
                Style::default()
                    .fg(app.theme.red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Some(max) => {
            spans.push(Span::styled(
                format!(" {}/{}", column.len(), max),
                Style::default().fg(app.theme.dim),
            ));
        }
        None => {
            spans.push(Span::styled(
                format!(" {}", column.len()),
                Style::default().fg(app.theme.dim),
            ));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    if area.height > 1 {
        let underline_color = if is_drop_target {
            app.theme.drop_target
        } else if is_cursor_column {
            app.theme.selection_border
        } else {
            app.theme.dim
        };
        let underline = "─".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(underline, Style::default().fg(underline_color))),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }
}

/// A card: title line with priority gutter, then a meta line with
/// assignee initials, tags, and the due date (highlighted when overdue).
pub fn render_card(
    frame: &mut Frame,
    app: &App,
    task: &Task,
    area: Rect,
    selected: bool,
    dimmed: bool,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let base_style = if dimmed {
        Style::default().fg(app.theme.dim)
    } else if selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
    } else {
        Style::default().fg(app.theme.text)
    };
    let gutter_style = if dimmed {
        Style::default().fg(app.theme.dim)
    } else {
        Style::default().fg(app.theme.priority_color(task.priority))
    };

    // Title row
    let search_re = app.filter.matcher();
    let title_budget = (area.width as usize).saturating_sub(2);
    let mut title_spans = vec![Span::styled("▌ ", gutter_style)];
    push_highlighted_spans(
        &mut title_spans,
        &truncate_to_width(&task.title, title_budget),
        base_style,
        Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg),
        search_re.as_ref(),
    );
    frame.render_widget(
        Paragraph::new(Line::from(title_spans)).style(base_style),
        Rect::new(area.x, area.y, area.width, 1),
    );

    // Meta row
    if area.height > 1 {
        let meta_style = if dimmed || selected {
            base_style
        } else {
            Style::default().fg(app.theme.dim)
        };
        let mut spans = vec![Span::styled("  ", meta_style)];
        spans.push(Span::styled(task.id.clone(), meta_style));
        if let Some(initials) = task.initials() {
            spans.push(Span::styled(
                format!("  ({})", initials),
                if dimmed {
                    meta_style
                } else {
                    Style::default().fg(app.theme.cyan)
                },
            ));
        }
        for tag in &task.tags {
            spans.push(Span::styled(
                format!("  #{}", tag),
                if dimmed {
                    meta_style
                } else {
                    Style::default().fg(app.theme.highlight)
                },
            ));
        }
        if let Some(due) = task.due_date {
            let overdue = task.is_overdue(Local::now().date_naive());
            spans.push(Span::styled(
                format!("  {}{}", due.format("%b %d"), if overdue { " !" } else { "" }),
                if overdue && !dimmed {
                    Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD)
                } else {
                    meta_style
                },
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(base_style),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }
}
