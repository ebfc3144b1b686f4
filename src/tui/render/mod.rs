pub mod board_view;
pub mod confirm_popup;
pub mod help_overlay;
pub mod helpers;
pub mod status_row;
pub mod task_form;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar | board | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Modal overlays, topmost last
    if app.form.is_some() {
        task_form::render_task_form(frame, app, frame.area());
    }
    if app.confirm_delete.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.board.name),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} tasks", app.board.tasks.len()),
            Style::default().fg(app.theme.dim),
        ),
    ];
    if app.mode == Mode::Search {
        spans.push(Span::styled(
            format!("  /{}▏", app.search_input),
            Style::default().fg(app.theme.highlight),
        ));
    } else if !app.filter.query.is_empty() {
        spans.push(Span::styled(
            format!("  /{}", app.filter.query),
            Style::default().fg(app.theme.highlight),
        ));
    }
    if let Some(priority) = app.filter.priority {
        spans.push(Span::styled(
            format!("  [{}]", priority.as_str()),
            Style::default().fg(app.theme.priority_color(priority)),
        ));
    }
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.surface));
    frame.render_widget(bar, area);
}

/// A centered popup rect of at most `width`×`height` cells
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Board;
    use crate::model::config::UiConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(
            Board::sample(),
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        )
    }

    #[test]
    fn render_populates_layout_cache() {
        let mut app = app();
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert_eq!(app.layout.columns.len(), 4);
        let first = &app.layout.columns[0];
        assert_eq!(first.column_id, "todo");
        assert!(first.cards.y > first.area.y);
        // Columns tile the board left to right
        for pair in app.layout.columns.windows(2) {
            assert!(pair[1].area.x >= pair[0].area.x + pair[0].area.width);
        }
    }

    #[test]
    fn render_does_not_panic_on_tiny_terminal() {
        let mut app = app();
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn render_with_overlays_does_not_panic() {
        let mut app = app();
        app.open_create_form();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        app.form = None;
        app.confirm_delete = Some("T-001".into());
        app.show_help = true;
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn highlighted_spans_split_on_matches() {
        let re = Regex::new("(?i)drag").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Implement drag and drop",
            Style::default(),
            Style::default().add_modifier(Modifier::REVERSED),
            Some(&re),
        );
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "drag");
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let popup = centered_rect(area, 60, 20);
        assert_eq!(popup.width, 10);
        assert_eq!(popup.height, 5);
    }
}
