use serde::Serialize;

use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::task::{Priority, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Serialize)]
pub struct ColumnJson {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tasks: Option<usize>,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub name: String,
    pub columns: Vec<ColumnJson>,
}

impl TaskJson {
    pub fn from_task(task: &Task) -> Self {
        TaskJson {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status.clone(),
            priority: task.priority,
            assignee: task.assignee.clone(),
            tags: task.tags.clone(),
            due_date: task.due_date.map(|d| d.to_string()),
        }
    }
}

impl ColumnJson {
    pub fn from_column(board: &Board, column: &Column) -> Self {
        ColumnJson {
            id: column.id.clone(),
            title: column.title.clone(),
            max_tasks: column.max_tasks,
            tasks: column
                .task_ids
                .iter()
                .filter_map(|id| board.task(id))
                .map(TaskJson::from_task)
                .collect(),
        }
    }
}

impl BoardJson {
    pub fn from_board(board: &Board, columns: &[&Column]) -> Self {
        BoardJson {
            name: board.name.clone(),
            columns: columns
                .iter()
                .map(|c| ColumnJson::from_column(board, c))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Plain-text printers
// ---------------------------------------------------------------------------

/// One task line: `  T-001 [high  ] Implement drag and drop  @John Doe  #frontend`
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!("  {} [{:<6}] {}", task.id, task.priority.as_str(), task.title);
    if let Some(assignee) = &task.assignee {
        line.push_str(&format!("  @{}", assignee));
    }
    for tag in &task.tags {
        line.push_str(&format!("  #{}", tag));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!("  due {}", due));
    }
    line
}

/// Column header line: `To Do (2)` or `In Progress (3/2) !` when over limit
pub fn format_column_header(column: &Column) -> String {
    match column.max_tasks {
        Some(max) => {
            let flag = if column.task_ids.len() > max { " !" } else { "" };
            format!("{} ({}/{}){}", column.title, column.task_ids.len(), max, flag)
        }
        None => format!("{} ({})", column.title, column.task_ids.len()),
    }
}

pub fn print_board(board: &Board, columns: &[&Column]) {
    for column in columns {
        println!("{}", format_column_header(column));
        for id in &column.task_ids {
            if let Some(task) = board.task(id) {
                println!("{}", format_task_line(task));
            }
        }
        println!();
    }
}
