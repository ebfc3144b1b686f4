//! Board mutations.
//!
//! Every writer goes through here. Moves that cannot apply — stale drag
//! sessions, unknown columns, deleted tasks — return `false` and leave the
//! board untouched; those are expected UI-event races, not errors.

use crate::model::board::Board;
use crate::model::task::{Priority, Task};
use crate::ops::ordered;

/// A move computed by either drag front end. Both the pointer and keyboard
/// paths produce one of these and hand it to [`move_task`], so the two input
/// modalities cannot drift apart on index math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: String,
    pub from_column: String,
    pub to_column: String,
    pub index: usize,
}

/// Fields a form submit or external caller may change on a task.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<Option<chrono::NaiveDate>>,
}

/// Apply a move request. See [`move_task`].
pub fn apply_move(board: &mut Board, request: &MoveRequest) -> bool {
    move_task(
        board,
        &request.task_id,
        &request.from_column,
        &request.to_column,
        request.index,
    )
}

/// Move `task_id` from `from_column` to `to_column`, landing at
/// `dest_index` (pre-removal for same-column moves, clamped for
/// cross-column ones).
///
/// The claimed source is validated against actual membership before
/// anything is touched; column lists and the task's `status` change in the
/// same synchronous scope, so no caller can observe them disagreeing.
/// Returns `false` (board unchanged) when the move is stale or a no-op.
pub fn move_task(
    board: &mut Board,
    task_id: &str,
    from_column: &str,
    to_column: &str,
    dest_index: usize,
) -> bool {
    if !board.tasks.contains_key(task_id) || board.column(to_column).is_none() {
        return false;
    }
    let Some(source_index) = board.column(from_column).and_then(|c| c.index_of(task_id)) else {
        return false;
    };

    if from_column == to_column {
        let column = match board.column(from_column) {
            Some(c) => c,
            None => return false,
        };
        let Some(reordered) = ordered::move_within(&column.task_ids, source_index, dest_index)
        else {
            return false;
        };
        if let Some(column) = board.column_mut(from_column) {
            column.task_ids = reordered;
        }
        if let Some(task) = board.task_mut(task_id) {
            task.record(format!("Reordered within {}", to_column));
        }
        return true;
    }

    let source_ids = match board.column(from_column) {
        Some(c) => c.task_ids.clone(),
        None => return false,
    };
    let dest_ids = match board.column(to_column) {
        Some(c) => c.task_ids.clone(),
        None => return false,
    };
    let Some(moved) = ordered::move_between(&source_ids, &dest_ids, source_index, dest_index)
    else {
        return false;
    };

    if let Some(column) = board.column_mut(from_column) {
        column.task_ids = moved.source;
    }
    if let Some(column) = board.column_mut(to_column) {
        column.task_ids = moved.destination;
    }
    if let Some(task) = board.task_mut(task_id) {
        task.status = to_column.to_string();
        task.record(format!("Moved from {} to {}", from_column, to_column));
    }
    true
}

/// Create a task at the end of `column_id`. The draft's id is ignored in
/// favor of a fresh allocation. Returns the new id, or `None` for an
/// unknown column.
pub fn create_task(board: &mut Board, column_id: &str, mut draft: Task) -> Option<String> {
    board.column(column_id)?;
    let id = board.next_task_id();
    draft.id = id.clone();
    draft.status = column_id.to_string();
    draft.record("Created");
    board.tasks.insert(id.clone(), draft);
    if let Some(column) = board.column_mut(column_id) {
        column.task_ids.push(id.clone());
    }
    Some(id)
}

/// Merge a patch into a task. A `status` change re-homes the id: removed
/// from its current column, appended to the new one. Returns `false` when
/// the task or a requested target column does not exist.
pub fn update_task(board: &mut Board, task_id: &str, patch: TaskPatch) -> bool {
    if !board.tasks.contains_key(task_id) {
        return false;
    }
    // Validate the column change up front so a bad patch changes nothing
    let status_change = match &patch.status {
        Some(new_status) => {
            if board.column(new_status).is_none() {
                return false;
            }
            let current = board.task(task_id).map(|t| t.status.clone());
            match current {
                Some(current) if current != *new_status => Some((current, new_status.clone())),
                _ => None,
            }
        }
        None => None,
    };

    if let Some((from, to)) = status_change {
        // Membership search, not status trust: strip the id wherever it is
        for column in &mut board.columns {
            column.task_ids.retain(|id| id != task_id);
        }
        if let Some(column) = board.column_mut(&to) {
            column.task_ids.push(task_id.to_string());
        }
        if let Some(task) = board.task_mut(task_id) {
            task.status = to.clone();
            task.record(format!("Moved from {} to {}", from, to));
        }
    }

    let Some(task) = board.task_mut(task_id) else {
        return false;
    };
    let mut changed = false;
    if let Some(title) = patch.title {
        if task.title != title {
            task.title = title;
            changed = true;
        }
    }
    if let Some(description) = patch.description {
        if task.description != description {
            task.description = description;
            changed = true;
        }
    }
    if let Some(priority) = patch.priority {
        if task.priority != priority {
            task.priority = priority;
            changed = true;
        }
    }
    if let Some(assignee) = patch.assignee {
        if task.assignee != assignee {
            task.assignee = assignee;
            changed = true;
        }
    }
    if let Some(tags) = patch.tags {
        if task.tags != tags {
            task.tags = tags;
            changed = true;
        }
    }
    if let Some(due_date) = patch.due_date {
        if task.due_date != due_date {
            task.due_date = due_date;
            changed = true;
        }
    }
    if changed {
        task.record("Updated");
    }
    true
}

/// Remove a task record and its id from every column that lists it.
/// Returns `false` when nothing referenced the id at all.
pub fn delete_task(board: &mut Board, task_id: &str) -> bool {
    let had_record = board.tasks.shift_remove(task_id).is_some();
    let mut was_listed = false;
    for column in &mut board.columns {
        let before = column.task_ids.len();
        column.task_ids.retain(|id| id != task_id);
        was_listed |= column.task_ids.len() != before;
    }
    had_record || was_listed
}

/// Replace the column order wholesale. `new_order` must be a permutation of
/// the current column ids; anything else is a no-op. Task lists and task
/// records are untouched.
pub fn reorder_columns(board: &mut Board, new_order: &[String]) -> bool {
    if new_order.len() != board.columns.len() {
        return false;
    }
    let mut remaining = std::mem::take(&mut board.columns);
    let mut reordered = Vec::with_capacity(remaining.len());
    for id in new_order {
        match remaining.iter().position(|c| &c.id == id) {
            Some(pos) => reordered.push(remaining.remove(pos)),
            None => {
                // Not a permutation — restore and bail
                reordered.append(&mut remaining);
                board.columns = reordered;
                return false;
            }
        }
    }
    board.columns = reordered;
    true
}

/// Move a single column to `dest_index` in the board's column order
/// (pre-removal indexing, as for tasks).
pub fn move_column(board: &mut Board, column_id: &str, dest_index: usize) -> bool {
    let Some(from) = board.column_index(column_id) else {
        return false;
    };
    let dest = ordered::adjusted_destination(from, dest_index).min(board.columns.len() - 1);
    if dest == from {
        return false;
    }
    let column = board.columns.remove(from);
    board.columns.insert(dest, column);
    true
}
