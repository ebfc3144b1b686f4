use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, BoardLayout, CARD_HEIGHT, ColumnRect, Mode};
use crate::tui::viewport::{self, VIRTUALIZE_THRESHOLD, VirtualWindow};

use super::helpers;

/// Overscan rows of cards rendered beyond the viewport edges
const OVERSCAN: usize = 2;

/// Rows taken by a column header (title line + underline)
const HEADER_HEIGHT: u16 = 2;

/// Render all columns side by side, caching their geometry for mouse
/// hit-testing.
pub fn render_board(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = app.board.columns.len();
    if count == 0 || area.height <= HEADER_HEIGHT {
        let empty = Paragraph::new(" no columns configured")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        app.layout = BoardLayout::default();
        return;
    }

    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let column_ids: Vec<String> = app.board.columns.iter().map(|c| c.id.clone()).collect();
    let mut rects = Vec::with_capacity(count);

    for (i, column_id) in column_ids.iter().enumerate() {
        let chunk = chunks[i];
        let cards = Rect::new(
            chunk.x + 1,
            chunk.y + HEADER_HEIGHT,
            chunk.width.saturating_sub(2),
            chunk.height.saturating_sub(HEADER_HEIGHT),
        );

        let visible = app.visible_ids(column_id);
        let mut scroll = viewport::clamp_scroll(
            app.scroll_for(column_id),
            visible.len(),
            CARD_HEIGHT as usize,
            cards.height as usize,
        );
        // Keep the cursor card in view in its own column
        if i == app.cursor_column && !visible.is_empty() && app.mode != Mode::Search {
            let cursor_top = app.cursor_row.min(visible.len() - 1) * CARD_HEIGHT as usize;
            let view = cards.height as usize;
            if cursor_top < scroll {
                scroll = cursor_top;
            } else if cursor_top + CARD_HEIGHT as usize > scroll + view {
                scroll = (cursor_top + CARD_HEIGHT as usize).saturating_sub(view);
            }
        }
        app.set_scroll(column_id, scroll);

        rects.push(ColumnRect {
            column_id: column_id.clone(),
            area: chunk,
            cards,
            scroll,
        });

        render_column(frame, app, i, chunk, cards, &visible, scroll);
    }

    app.layout = BoardLayout { columns: rects };
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    column_index: usize,
    area: Rect,
    cards: Rect,
    visible: &[String],
    scroll: usize,
) {
    let Some(column) = app.board.columns.get(column_index) else {
        return;
    };
    let is_cursor_column = column_index == app.cursor_column;
    let is_drop_target = drop_slot(app, &column.id).is_some()
        || app
            .drag
            .hover()
            .is_some_and(|(over, _)| over == column.id && app.drag.dragged_column().is_none());

    helpers::render_column_header(frame, app, column, area, is_cursor_column, is_drop_target);

    if cards.height == 0 || cards.width == 0 {
        return;
    }

    if visible.is_empty() {
        let hint = if app.filter.is_active() {
            " no matches"
        } else {
            " empty"
        };
        let empty = Paragraph::new(hint).style(Style::default().fg(app.theme.dim));
        frame.render_widget(empty, Rect::new(cards.x, cards.y, cards.width, 1));
        return;
    }

    // Large columns go through the window; small ones render directly
    let indices: Vec<usize> = if visible.len() > VIRTUALIZE_THRESHOLD {
        VirtualWindow::compute(
            visible.len(),
            CARD_HEIGHT as usize,
            cards.height as usize,
            scroll,
            OVERSCAN,
        )
        .indices()
        .collect()
    } else {
        (0..visible.len()).collect()
    };

    for index in indices {
        let top = index * CARD_HEIGHT as usize;
        let Some(y) = card_screen_y(cards, top, scroll) else {
            continue;
        };
        let height = (CARD_HEIGHT as usize).min((cards.y + cards.height).saturating_sub(y) as usize);
        if height == 0 {
            continue;
        }
        let card_area = Rect::new(cards.x, y, cards.width, height as u16);

        let task_id = &visible[index];
        let Some(task) = app.board.task(task_id) else {
            continue;
        };
        let selected = is_cursor_column && index == app.cursor_row && app.mode != Mode::Move;
        let dimmed = app.drag.dragged_task() == Some(task_id.as_str())
            || app.keyboard_drag.dragged_task() == Some(task_id.as_str());
        helpers::render_card(frame, app, task, card_area, selected, dimmed);
    }

    // Drop indicator for whichever drag path is targeting this column
    if let Some(slot) = drop_slot(app, &column.id) {
        let top = slot * CARD_HEIGHT as usize;
        if let Some(y) = card_screen_y(cards, top, scroll) {
            let line = Line::from(Span::styled(
                "▸".to_string() + &"─".repeat(cards.width.saturating_sub(1) as usize),
                Style::default().fg(app.theme.drop_target),
            ));
            frame.render_widget(Paragraph::new(line), Rect::new(cards.x, y, cards.width, 1));
        }
    }
}

/// Screen row for a card whose content starts `top` rows into the list,
/// or None when it is scrolled out of the viewport.
fn card_screen_y(cards: Rect, top: usize, scroll: usize) -> Option<u16> {
    if top + CARD_HEIGHT as usize <= scroll {
        return None;
    }
    let offset = top.saturating_sub(scroll);
    let y = cards.y as usize + offset;
    (y < (cards.y + cards.height) as usize).then_some(y as u16)
}

/// The visible-list slot a drag (either path) is targeting in this column
fn drop_slot(app: &App, column_id: &str) -> Option<usize> {
    if let Some((over, Some(stored))) = app.drag.hover() {
        if over == column_id && app.drag.dragged_task().is_some() {
            return Some(app.visible_slot(column_id, stored));
        }
    }
    if let Some((target, stored)) = app.keyboard_drag.target() {
        if target == column_id {
            return Some(app.visible_slot(column_id, stored));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::UiConfig;
    use crate::model::{Board, Column, Task};
    use crate::tui::input::handle_key;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app_with_many_tasks(count: usize) -> App {
        let mut board = Board::new("big", vec![Column::new("todo", "To Do", "#888888")]);
        for i in 0..count {
            let id = format!("T-{:03}", i);
            board.tasks.insert(id.clone(), Task::new(&id, format!("task {i}"), "todo"));
            board.column_mut("todo").unwrap().task_ids.push(id);
        }
        App::new(
            board,
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| super::super::render(frame, app))
            .unwrap();
    }

    #[test]
    fn virtualized_column_renders_without_panic() {
        let mut app = app_with_many_tasks(500);
        draw(&mut app, 60, 24);
        // Scroll deep into the list and re-render
        app.set_scroll("todo", 500 * CARD_HEIGHT as usize);
        draw(&mut app, 60, 24);
        // Clamped back within the scrollable range
        let total = 500 * CARD_HEIGHT as usize;
        assert!(app.scroll_for("todo") <= total);
    }

    #[test]
    fn cursor_follow_adjusts_scroll() {
        let mut app = app_with_many_tasks(100);
        for _ in 0..50 {
            handle_key(&mut app, KeyEvent::from(KeyCode::Char('j')));
        }
        draw(&mut app, 60, 24);
        let scroll = app.scroll_for("todo");
        assert!(scroll > 0, "cursor at row 50 must scroll the column");
        let cursor_top = 50 * CARD_HEIGHT as usize;
        assert!(cursor_top >= scroll);
    }

    #[test]
    fn filtered_reorder_rerenders_cleanly() {
        let mut app = app_with_many_tasks(200);
        app.filter.query = "task 1".into(); // matches 1, 10-19, 100-199
        draw(&mut app, 60, 24);
        // Reorder under the filter, then render again
        crate::ops::board_ops::move_task(&mut app.board, "T-000", "todo", "todo", 150);
        draw(&mut app, 60, 24);
    }
}
