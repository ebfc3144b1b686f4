//! Pointer drag session.
//!
//! Ephemeral state between mouse-down and mouse-up. Holds *which* card or
//! column is in flight and where the pointer is hovering; it never touches
//! the board. The drop handler re-resolves positions from the board at
//! commit time, so a board that changed mid-drag (task deleted, cards
//! reordered) degrades to a no-op instead of corrupting order.

use crate::model::board::Board;
use crate::ops::board_ops::MoveRequest;
use crate::ops::ordered;

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    dragged_task: Option<String>,
    dragged_column: Option<String>,
    over_column: Option<String>,
    over_index: Option<usize>,
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        self.dragged_task.is_some() || self.dragged_column.is_some()
    }

    pub fn dragged_task(&self) -> Option<&str> {
        self.dragged_task.as_deref()
    }

    pub fn dragged_column(&self) -> Option<&str> {
        self.dragged_column.as_deref()
    }

    /// Hover target while a task drag is live: column id plus the recorded
    /// insertion index, if any.
    pub fn hover(&self) -> Option<(&str, Option<usize>)> {
        self.over_column.as_deref().map(|c| (c, self.over_index))
    }

    /// Begin dragging a card. Restarting with another card overwrites the
    /// session (a second mouse-down means the first drag is dead).
    pub fn start_task(&mut self, task_id: impl Into<String>) {
        self.dragged_task = Some(task_id.into());
        self.dragged_column = None;
        self.over_column = None;
        self.over_index = None;
    }

    /// Begin dragging a column header. Refused while a card drag is live —
    /// a grab that started on a card must not also register as a column
    /// grab.
    pub fn start_column(&mut self, column_id: impl Into<String>) -> bool {
        if self.dragged_task.is_some() {
            return false;
        }
        self.dragged_column = Some(column_id.into());
        self.over_column = None;
        self.over_index = None;
        true
    }

    /// Update the hover target. Advisory only — drives the drop indicator,
    /// mutates nothing.
    pub fn drag_over(&mut self, column_id: impl Into<String>, index: Option<usize>) {
        if !self.is_active() {
            return;
        }
        self.over_column = Some(column_id.into());
        self.over_index = index;
    }

    /// Drop the dragged card onto `column_id`. Returns the move to apply,
    /// or `None` when there is nothing to do; the session resets either
    /// way.
    ///
    /// The source column comes from the board, not from the session: cards
    /// may have moved since the drag started. The target index is the
    /// recorded hover index when the hover matches the drop column,
    /// end-of-column otherwise.
    pub fn drop_task(&mut self, board: &Board, column_id: &str) -> Option<MoveRequest> {
        let task_id = self.dragged_task.clone();
        let hover = (self.over_column.clone(), self.over_index);
        self.clear();

        let task_id = task_id?;
        let (from_column, source_index) = board.find_task_position(&task_id)?;
        let destination = board.column(column_id)?;

        let index = match hover {
            (Some(over), Some(index)) if over == column_id => index.min(destination.len()),
            _ => destination.len(),
        };

        if from_column == column_id
            && ordered::adjusted_destination(source_index, index) == source_index
        {
            return None;
        }

        Some(MoveRequest {
            task_id,
            from_column: from_column.to_string(),
            to_column: column_id.to_string(),
            index,
        })
    }

    /// Drop the dragged column header onto the column at `dest_index`.
    /// Returns the column id to move; the session resets either way.
    pub fn drop_column(&mut self) -> Option<String> {
        let column = self.dragged_column.take();
        self.clear();
        column
    }

    /// Drag ended without a drop (left the window, button released over
    /// nothing). Board untouched.
    pub fn clear(&mut self) {
        self.dragged_task = None;
        self.dragged_column = None;
        self.over_column = None;
        self.over_index = None;
    }
}
