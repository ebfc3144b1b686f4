//! Search and priority filtering.
//!
//! A filter is a pure derived view: it narrows what each column *renders*,
//! never what it stores. Stored order is preserved in the filtered
//! subsequence.

use regex::Regex;

use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::task::{Priority, Task};

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Settled search text (post-debounce)
    pub query: String,
    pub priority: Option<Priority>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.priority.is_some()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.priority = None;
    }

    /// Compile the query, case-insensitive. Invalid regex syntax falls back
    /// to a literal match on the escaped text.
    pub fn matcher(&self) -> Option<Regex> {
        if self.query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", self.query))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(&self.query))))
            .ok()
    }

    /// Whether a task passes the current predicate
    pub fn matches(&self, task: &Task, re: Option<&Regex>) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        let Some(re) = re else {
            return true;
        };
        re.is_match(&task.title)
            || task.description.as_deref().is_some_and(|d| re.is_match(d))
            || task.assignee.as_deref().is_some_and(|a| re.is_match(a))
            || task.tags.iter().any(|t| re.is_match(t))
    }

    /// The subsequence of a column's task ids whose tasks match, in stored
    /// order. Ids without a task record are dropped from the view (the
    /// check op reports them; rendering should not crash on them).
    pub fn visible_ids(&self, board: &Board, column: &Column) -> Vec<String> {
        let re = self.matcher();
        column
            .task_ids
            .iter()
            .filter(|id| {
                board
                    .task(id)
                    .is_some_and(|task| self.matches(task, re.as_ref()))
            })
            .cloned()
            .collect()
    }
}
