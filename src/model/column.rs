use serde::{Deserialize, Serialize};

/// A workflow stage: a named, ordered bucket of task ids.
///
/// `task_ids` is the single source of within-column order. Tasks themselves
/// live in the board's task map; a column never embeds task records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Hex color like `#3b82f6`, used for the column accent
    pub color: String,
    #[serde(default)]
    pub task_ids: Vec<String>,
    /// Advisory WIP limit — rendered as a warning, never enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tasks: Option<usize>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Column {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            task_ids: Vec::new(),
            max_tasks: None,
        }
    }

    pub fn with_limit(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Position of a task id within this column
    pub fn index_of(&self, task_id: &str) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Whether the column holds more tasks than its WIP limit allows
    pub fn is_over_limit(&self) -> bool {
        self.max_tasks.is_some_and(|max| self.task_ids.len() > max)
    }
}
