use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ops::board_ops;
use crate::tui::app::{App, CARD_HEIGHT};

/// Handle a mouse event against the board view.
///
/// Button-down on a card starts a task drag; button-down on column chrome
/// starts a column drag (never both — the card grab wins). Motion updates
/// the advisory hover target; button-up commits through the same move path
/// the keyboard uses.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_down(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(app, mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => on_up(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown => scroll_column(app, mouse.column, mouse.row, 1),
        MouseEventKind::ScrollUp => scroll_column(app, mouse.column, mouse.row, -1),
        _ => {}
    }
}

fn on_down(app: &mut App, x: u16, y: u16) {
    let Some(rect) = app.layout.column_at(x, y) else {
        return;
    };
    let column_id = rect.column_id.clone();
    let visible = app.visible_ids(&column_id);

    if rect.in_header(y) {
        app.drag.start_column(&column_id);
        return;
    }
    if let Some(index) = rect.card_index_at(y, visible.len()) {
        let task_id = visible[index].clone();
        app.drag.start_task(&task_id);
        // Keyboard focus follows the grab
        if let Some(col_idx) = app.board.column_index(&column_id) {
            app.cursor_column = col_idx;
            app.cursor_row = index;
        }
    }
}

fn on_drag(app: &mut App, x: u16, y: u16) {
    if !app.drag.is_active() {
        return;
    }
    let Some(rect) = app.layout.column_at(x, y) else {
        return;
    };
    let column_id = rect.column_id.clone();

    if app.drag.dragged_task().is_some() {
        let visible_len = app.visible_ids(&column_id).len();
        let slot = rect.insert_index_at(y, visible_len);
        let stored = app.stored_insert_index(&column_id, slot);
        app.drag.drag_over(column_id, Some(stored));
    } else {
        app.drag.drag_over(column_id, None);
    }
}

fn on_up(app: &mut App, x: u16, y: u16) {
    if !app.drag.is_active() {
        return;
    }
    let target = app.layout.column_at(x, y).map(|r| r.column_id.clone());

    if app.drag.dragged_task().is_some() {
        match target {
            Some(column_id) => {
                if let Some(request) = app.drag.drop_task(&app.board, &column_id) {
                    app.apply_move_request(request);
                }
            }
            // Released outside the board: drag ends, nothing moves
            None => app.drag.clear(),
        }
        return;
    }

    if let Some(dragged) = app.drag.drop_column() {
        if let Some(target_id) = target {
            if let Some(dest) = app.board.column_index(&target_id) {
                if board_ops::move_column(&mut app.board, &dragged, dest) {
                    app.set_status(format!("moved column {}", dragged));
                }
            }
        }
        app.clamp_cursor();
    }
}

fn scroll_column(app: &mut App, x: u16, y: u16, direction: i64) {
    let Some(rect) = app.layout.column_at(x, y) else {
        return;
    };
    let column_id = rect.column_id.clone();
    let step = CARD_HEIGHT as i64;
    let current = app.scroll_for(&column_id) as i64;
    let next = (current + direction * step).max(0) as usize;
    // The upper bound is clamped against the list length at render time
    app.set_scroll(&column_id, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Board;
    use crate::model::config::UiConfig;
    use crate::tui::app::{BoardLayout, ColumnRect};
    use ratatui::layout::Rect;

    /// App with the sample board laid out as four 30-wide columns:
    /// header rows 0..2, cards from row 2.
    fn app_with_layout() -> App {
        let mut app = App::new(
            Board::sample(),
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        );
        let ids = ["todo", "in-progress", "review", "done"];
        app.layout = BoardLayout {
            columns: ids
                .iter()
                .enumerate()
                .map(|(i, id)| ColumnRect {
                    column_id: id.to_string(),
                    area: Rect::new(i as u16 * 30, 0, 30, 24),
                    cards: Rect::new(i as u16 * 30 + 1, 2, 28, 22),
                    scroll: 0,
                })
                .collect(),
        };
        app
    }

    fn event(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn down_on_card_starts_task_drag_and_focuses() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 5, 5));
        // Row 5 is the second card (rows 2..5 = card 0, 5..8 = card 1)
        assert_eq!(app.drag.dragged_task(), Some("T-002"));
        assert_eq!(app.cursor_row, 1);
    }

    #[test]
    fn down_on_header_starts_column_drag() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 35, 1));
        assert_eq!(app.drag.dragged_column(), Some("in-progress"));
        assert_eq!(app.drag.dragged_task(), None);
    }

    #[test]
    fn full_drag_lifecycle_moves_the_card() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 5, 2));
        assert_eq!(app.drag.dragged_task(), Some("T-001"));
        handle_mouse(&mut app, event(MouseEventKind::Drag(MouseButton::Left), 95, 2));
        handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), 95, 2));
        assert!(!app.drag.is_active());
        assert_eq!(app.board.task("T-001").unwrap().status, "done");
        // Hovered the top of the done column → inserted first
        assert_eq!(app.board.column("done").unwrap().task_ids[0], "T-001");
        assert!(crate::ops::check::check_board(&app.board).valid);
    }

    #[test]
    fn release_outside_the_board_cancels() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 5, 2));
        handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), 5, 30));
        assert!(!app.drag.is_active());
        assert_eq!(app.board.task("T-001").unwrap().status, "todo");
    }

    #[test]
    fn column_drop_reorders_columns() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 95, 1));
        assert_eq!(app.drag.dragged_column(), Some("done"));
        handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), 5, 1));
        let order: Vec<&str> = app.board.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["done", "todo", "in-progress", "review"]);
    }

    #[test]
    fn drag_without_down_is_ignored() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Drag(MouseButton::Left), 5, 5));
        assert!(!app.drag.is_active());
        handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), 5, 5));
        assert!(crate::ops::check::check_board(&app.board).valid);
    }

    #[test]
    fn deleted_mid_drag_drop_is_noop() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::Down(MouseButton::Left), 5, 2));
        board_ops::delete_task(&mut app.board, "T-001");
        handle_mouse(&mut app, event(MouseEventKind::Up(MouseButton::Left), 95, 2));
        assert!(!app.drag.is_active());
        assert!(crate::ops::check::check_board(&app.board).valid);
    }

    #[test]
    fn scroll_wheel_moves_by_card_heights() {
        let mut app = app_with_layout();
        handle_mouse(&mut app, event(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(app.scroll_for("todo"), CARD_HEIGHT as usize);
        handle_mouse(&mut app, event(MouseEventKind::ScrollUp, 5, 5));
        handle_mouse(&mut app, event(MouseEventKind::ScrollUp, 5, 5));
        assert_eq!(app.scroll_for("todo"), 0);
    }
}
