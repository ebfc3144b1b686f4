//! Keyboard-driven drag.
//!
//! The full reorder surface without a pointer: pick a card up, walk the
//! target position around with discrete commands, then commit or cancel.
//! Structurally parallel to [`DragSession`](crate::tui::drag::DragSession);
//! both paths end in the same [`MoveRequest`], so the index math cannot
//! diverge between input modalities.

use crate::model::board::Board;
use crate::ops::board_ops::MoveRequest;
use crate::ops::ordered;

/// Target-navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    task_id: String,
    target_column: String,
    /// Insertion index into the target column; `column.len()` means append
    target_index: usize,
}

/// State machine: `Idle ⇄ Dragging`. At most one keyboard drag exists
/// board-wide; a second start while dragging is rejected rather than
/// silently discarding the first drag's source.
#[derive(Debug, Clone, Default)]
pub struct KeyboardDrag {
    active: Option<ActiveDrag>,
}

impl KeyboardDrag {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_task(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.task_id.as_str())
    }

    /// Current target position, for the drop indicator
    pub fn target(&self) -> Option<(&str, usize)> {
        self.active
            .as_ref()
            .map(|a| (a.target_column.as_str(), a.target_index))
    }

    /// Pick up a task. The source position is resolved from the board at
    /// call time and becomes the initial target. Returns `false` when a
    /// drag is already active or the task is not on the board.
    pub fn start(&mut self, board: &Board, task_id: &str) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some((column_id, index)) = board.find_task_position(task_id) else {
            return false;
        };
        self.active = Some(ActiveDrag {
            task_id: task_id.to_string(),
            target_column: column_id.to_string(),
            target_index: index,
        });
        true
    }

    /// Walk the target. Up/Down move within the target column, clamped to
    /// `[0, len]` — one past the last card means insert at end. Left/Right
    /// switch to the adjacent column (no-op at the edges) and reset the
    /// index to that column's end. No-op while idle.
    pub fn move_target(&mut self, board: &Board, direction: Direction) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let Some(column_index) = board.column_index(&active.target_column) else {
            return;
        };
        let column_len = board
            .column(&active.target_column)
            .map_or(0, |c| c.task_ids.len());

        match direction {
            Direction::Up => {
                active.target_index = active.target_index.saturating_sub(1);
            }
            Direction::Down => {
                active.target_index = (active.target_index + 1).min(column_len);
            }
            Direction::Left => {
                if column_index > 0 {
                    let prev = &board.columns[column_index - 1];
                    active.target_column = prev.id.clone();
                    active.target_index = prev.task_ids.len();
                }
            }
            Direction::Right => {
                if column_index + 1 < board.columns.len() {
                    let next = &board.columns[column_index + 1];
                    active.target_column = next.id.clone();
                    active.target_index = next.task_ids.len();
                }
            }
        }
    }

    /// Commit the drag. The source is re-resolved from the board — a task
    /// deleted or moved externally since `start` yields `None` rather than
    /// a bogus move. Same goes for a target that matches the source after
    /// index adjustment. The machine returns to idle in every case.
    pub fn commit(&mut self, board: &Board) -> Option<MoveRequest> {
        let active = self.active.take()?;
        let (from_column, source_index) = board.find_task_position(&active.task_id)?;
        board.column(&active.target_column)?;

        if from_column == active.target_column
            && ordered::adjusted_destination(source_index, active.target_index) == source_index
        {
            return None;
        }

        Some(MoveRequest {
            task_id: active.task_id,
            from_column: from_column.to_string(),
            to_column: active.target_column,
            index: active.target_index,
        })
    }

    /// Back to idle, board untouched
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
