//! End-to-end properties of the board model: the membership/status
//! invariant, move round-trips, id conservation, and the behavior of both
//! drag paths against a board that changes mid-drag.

use pretty_assertions::assert_eq;

use plank::model::{Board, Column, Task};
use plank::ops::board_ops::{self, TaskPatch};
use plank::ops::check::check_board;
use plank::ops::ordered;
use plank::tui::drag::DragSession;
use plank::tui::keyboard_drag::{Direction, KeyboardDrag};
use plank::tui::viewport::VirtualWindow;

/// Build a board from (column, [task ids]) pairs
fn board_with(columns: &[(&str, &[&str])]) -> Board {
    let cols = columns
        .iter()
        .map(|(id, _)| Column::new(*id, *id, "#888888"))
        .collect();
    let mut board = Board::new("test", cols);
    for (col_id, task_ids) in columns {
        for task_id in *task_ids {
            board
                .tasks
                .insert(task_id.to_string(), Task::new(*task_id, *task_id, *col_id));
            board
                .column_mut(col_id)
                .unwrap()
                .task_ids
                .push(task_id.to_string());
        }
    }
    board
}

fn ids(board: &Board, column: &str) -> Vec<String> {
    board.column(column).unwrap().task_ids.clone()
}

/// Multiset of all listed ids across every column, sorted
fn all_listed_ids(board: &Board) -> Vec<String> {
    let mut all: Vec<String> = board
        .columns
        .iter()
        .flat_map(|c| c.task_ids.iter().cloned())
        .collect();
    all.sort();
    all
}

// ---------------------------------------------------------------------------
// Invariant preservation
// ---------------------------------------------------------------------------

#[test]
fn invariant_holds_across_an_operation_storm() {
    let mut board = board_with(&[
        ("todo", &["a", "b", "c"]),
        ("doing", &["d"]),
        ("done", &[]),
    ]);
    assert!(check_board(&board).valid);

    board_ops::move_task(&mut board, "a", "todo", "doing", 0);
    board_ops::move_task(&mut board, "d", "doing", "doing", 2);
    board_ops::create_task(&mut board, "done", Task::new("", "fresh", ""));
    board_ops::update_task(
        &mut board,
        "b",
        TaskPatch {
            status: Some("done".into()),
            ..Default::default()
        },
    );
    board_ops::delete_task(&mut board, "c");
    board_ops::move_column(&mut board, "done", 0);
    // Stale/no-op operations mixed in
    board_ops::move_task(&mut board, "c", "todo", "done", 0);
    board_ops::delete_task(&mut board, "c");
    board_ops::move_task(&mut board, "a", "todo", "doing", 0);

    let result = check_board(&board);
    assert!(result.valid, "errors: {:?}", result.errors);
}

#[test]
fn every_sample_task_is_listed_exactly_once() {
    let board = Board::sample();
    let listed = all_listed_ids(&board);
    let mut expected: Vec<String> = board.tasks.keys().cloned().collect();
    expected.sort();
    assert_eq!(listed, expected);
}

// ---------------------------------------------------------------------------
// Round-trip and idempotence
// ---------------------------------------------------------------------------

#[test]
fn move_there_and_back_restores_source_order() {
    let mut board = board_with(&[("a-col", &["a", "b", "c", "d"]), ("b-col", &["x", "y"])]);
    let original = ids(&board, "a-col");

    assert!(board_ops::move_task(&mut board, "b", "a-col", "b-col", 1));
    assert_eq!(ids(&board, "b-col"), vec!["x", "b", "y"]);

    assert!(board_ops::move_task(&mut board, "b", "b-col", "a-col", 1));
    assert_eq!(ids(&board, "a-col"), original);
    assert_eq!(ids(&board, "b-col"), vec!["x", "y"]);
    assert!(check_board(&board).valid);
}

#[test]
fn dropping_on_own_position_changes_nothing() {
    let mut board = board_with(&[("todo", &["a", "b", "c"])]);
    let before = ids(&board, "todo");
    assert!(!board_ops::move_task(&mut board, "b", "todo", "todo", 1));
    // One past self adjusts back onto self
    assert!(!board_ops::move_task(&mut board, "b", "todo", "todo", 2));
    assert_eq!(ids(&board, "todo"), before);
}

// ---------------------------------------------------------------------------
// Index adjustment reference table
// ---------------------------------------------------------------------------

#[test]
fn index_adjustment_reference_cases() {
    let list: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
    let moved = |from: usize, to: usize| -> Vec<String> {
        ordered::move_within(&list, from, to).unwrap_or_else(|| list.clone())
    };
    assert_eq!(moved(0, 3), ["b", "c", "d", "a"]);
    assert_eq!(moved(3, 0), ["d", "a", "b", "c"]);
    assert_eq!(moved(1, 1), ["a", "b", "c", "d"]);
}

// ---------------------------------------------------------------------------
// Conservation
// ---------------------------------------------------------------------------

#[test]
fn cross_column_moves_conserve_the_id_multiset() {
    let mut board = board_with(&[
        ("todo", &["a", "b", "c"]),
        ("doing", &["d", "e"]),
        ("done", &["f"]),
    ]);
    let before = all_listed_ids(&board);

    for (task, from, to, index) in [
        ("a", "todo", "done", 0),
        ("e", "doing", "todo", 2),
        ("f", "done", "doing", 99), // clamped
        ("a", "done", "done", 0),
    ] {
        board_ops::move_task(&mut board, task, from, to, index);
        assert_eq!(all_listed_ids(&board), before);
        assert!(check_board(&board).valid);
    }
}

// ---------------------------------------------------------------------------
// Keyboard drag scenario
// ---------------------------------------------------------------------------

#[test]
fn keyboard_drag_to_end_of_column() {
    // Task at index 1 of 3 in todo; Down twice reaches the end slot (3)
    let mut board = board_with(&[("todo", &["a", "b", "c"])]);
    let mut drag = KeyboardDrag::default();
    assert!(drag.start(&board, "b"));
    drag.move_target(&board, Direction::Down);
    drag.move_target(&board, Direction::Down);
    assert_eq!(drag.target(), Some(("todo", 3)));

    let request = drag.commit(&board).expect("a real move");
    assert!(board_ops::apply_move(&mut board, &request));
    assert_eq!(ids(&board, "todo"), vec!["a", "c", "b"]);
    assert!(check_board(&board).valid);
}

#[test]
fn both_drag_paths_agree_on_the_same_move() {
    let pointer_board = {
        let mut board = board_with(&[("todo", &["a", "b", "c"]), ("done", &["x"])]);
        let mut session = DragSession::default();
        session.start_task("b");
        session.drag_over("done", Some(0));
        let request = session.drop_task(&board, "done").unwrap();
        board_ops::apply_move(&mut board, &request);
        board
    };
    let keyboard_board = {
        let mut board = board_with(&[("todo", &["a", "b", "c"]), ("done", &["x"])]);
        let mut drag = KeyboardDrag::default();
        drag.start(&board, "b");
        drag.move_target(&board, Direction::Right);
        drag.move_target(&board, Direction::Up);
        let request = drag.commit(&board).unwrap();
        board_ops::apply_move(&mut board, &request);
        board
    };
    assert_eq!(
        ids(&pointer_board, "done"),
        ids(&keyboard_board, "done"),
        "pointer and keyboard paths must produce identical order"
    );
    assert_eq!(ids(&pointer_board, "todo"), ids(&keyboard_board, "todo"));
}

// ---------------------------------------------------------------------------
// Deleted-task races
// ---------------------------------------------------------------------------

#[test]
fn pointer_drop_after_external_delete_is_a_noop() {
    let mut board = board_with(&[("todo", &["a", "b"]), ("done", &[])]);
    let mut session = DragSession::default();
    session.start_task("a");
    session.drag_over("done", Some(0));

    board_ops::delete_task(&mut board, "a");

    assert!(session.drop_task(&board, "done").is_none());
    assert!(!session.is_active());
    assert_eq!(ids(&board, "todo"), vec!["b"]);
    assert!(check_board(&board).valid);
}

#[test]
fn keyboard_commit_after_external_delete_is_a_noop() {
    let mut board = board_with(&[("todo", &["a", "b"]), ("done", &[])]);
    let mut drag = KeyboardDrag::default();
    drag.start(&board, "a");
    drag.move_target(&board, Direction::Right);

    board_ops::delete_task(&mut board, "a");

    assert!(drag.commit(&board).is_none());
    assert!(!drag.is_active());
    assert!(check_board(&board).valid);
}

// ---------------------------------------------------------------------------
// Virtualization reference scenario
// ---------------------------------------------------------------------------

#[test]
fn virtual_window_reference_scenario() {
    let w = VirtualWindow::compute(100, 120, 600, 1200, 2);
    assert_eq!(w.first, 8);
    assert_eq!(w.last, 17);
    assert_eq!(w.offset_y, 960);
    assert_eq!(w.total_height, 12000);
}
