//! Board integrity validation.
//!
//! The board's structural invariant: every task id is listed in exactly one
//! column's `task_ids`, and that column's id equals the task's `status`.
//! `check_board` reports violations; it never repairs them.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::board::Board;

/// Structured result from `pk check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// An invariant violation (something that should be impossible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// A column lists an id with no task record
    #[serde(rename = "dangling_id")]
    DanglingId { column_id: String, task_id: String },
    /// A task record no column lists
    #[serde(rename = "orphan_task")]
    OrphanTask { task_id: String },
    /// An id listed by more than one column (or twice in one)
    #[serde(rename = "duplicate_listing")]
    DuplicateListing {
        task_id: String,
        column_ids: Vec<String>,
    },
    /// A task's status disagrees with the column listing it
    #[serde(rename = "status_mismatch")]
    StatusMismatch {
        task_id: String,
        status: String,
        listed_in: String,
    },
}

/// A non-critical issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Column holds more tasks than its WIP limit
    #[serde(rename = "over_wip_limit")]
    OverWipLimit {
        column_id: String,
        count: usize,
        max_tasks: usize,
    },
    /// Assignee present but blank
    #[serde(rename = "blank_assignee")]
    BlankAssignee { task_id: String },
    /// Due date earlier than the creation date
    #[serde(rename = "due_before_created")]
    DueBeforeCreated { task_id: String },
}

/// Validate a board and return structured results.
///
/// Read-only. Checks performed:
/// 1. Every listed id has a task record
/// 2. Every task record is listed exactly once
/// 3. Each task's `status` equals the id of the column listing it
/// 4. Warnings: WIP limits, blank assignees, due-before-created dates
pub fn check_board(board: &Board) -> CheckResult {
    let mut result = CheckResult::default();

    // Where is each id listed?
    let mut listings: HashMap<&str, Vec<&str>> = HashMap::new();
    for column in &board.columns {
        for task_id in &column.task_ids {
            listings
                .entry(task_id.as_str())
                .or_default()
                .push(column.id.as_str());
        }
    }

    for column in &board.columns {
        for task_id in &column.task_ids {
            if board.task(task_id).is_none() {
                result.errors.push(CheckError::DanglingId {
                    column_id: column.id.clone(),
                    task_id: task_id.clone(),
                });
            }
        }
        if let Some(max_tasks) = column.max_tasks {
            if column.task_ids.len() > max_tasks {
                result.warnings.push(CheckWarning::OverWipLimit {
                    column_id: column.id.clone(),
                    count: column.task_ids.len(),
                    max_tasks,
                });
            }
        }
    }

    for (task_id, columns) in &listings {
        if columns.len() > 1 {
            result.errors.push(CheckError::DuplicateListing {
                task_id: task_id.to_string(),
                column_ids: columns.iter().map(|c| c.to_string()).collect(),
            });
        }
    }

    for (task_id, task) in &board.tasks {
        match listings.get(task_id.as_str()) {
            None => result.errors.push(CheckError::OrphanTask {
                task_id: task_id.clone(),
            }),
            Some(columns) => {
                if columns.len() == 1 && columns[0] != task.status {
                    result.errors.push(CheckError::StatusMismatch {
                        task_id: task_id.clone(),
                        status: task.status.clone(),
                        listed_in: columns[0].to_string(),
                    });
                }
            }
        }
        if task.assignee.as_deref().is_some_and(|a| a.trim().is_empty()) {
            result.warnings.push(CheckWarning::BlankAssignee {
                task_id: task_id.clone(),
            });
        }
        if let Some(due) = task.due_date {
            if due < task.created_at.date_naive() {
                result.warnings.push(CheckWarning::DueBeforeCreated {
                    task_id: task_id.clone(),
                });
            }
        }
    }

    result.valid = result.errors.is_empty();
    result
}
