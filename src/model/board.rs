use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::column::Column;
use crate::model::config::BoardConfig;
use crate::model::task::{Priority, Task};

/// The whole board: an ordered column sequence plus the task records they
/// reference. Lives for the session; mutated only through `ops::board_ops`.
#[derive(Debug, Clone)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
    /// Task records keyed by id, in creation order
    pub tasks: IndexMap<String, Task>,
    /// Next number to try for allocated ids
    next_id: usize,
}

impl Board {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Board {
            name: name.into(),
            columns,
            tasks: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Build a board from a parsed config: columns first, then seed tasks
    /// appended to their columns in declaration order. Seeds pointing at
    /// unknown columns are skipped.
    pub fn from_config(config: &BoardConfig) -> Self {
        let columns = config
            .columns
            .iter()
            .map(|c| {
                let mut col = Column::new(&c.id, &c.title, &c.color);
                col.max_tasks = c.max_tasks;
                col
            })
            .collect();
        let mut board = Board::new(&config.board.name, columns);

        for seed in &config.tasks {
            if board.column(&seed.status).is_none() {
                continue;
            }
            let id = match &seed.id {
                Some(id) if !board.tasks.contains_key(id) => id.clone(),
                _ => board.next_task_id(),
            };
            let mut task = Task::new(&id, &seed.title, &seed.status);
            task.description = seed.description.clone();
            task.priority = seed.priority;
            task.assignee = seed.assignee.clone();
            task.tags = seed.tags.clone();
            task.due_date = seed.due_date;
            board.tasks.insert(id.clone(), task);
            if let Some(col) = board.column_mut(&seed.status) {
                col.task_ids.push(id);
            }
        }
        board
    }

    /// Demo board used when no config file exists
    pub fn sample() -> Self {
        let columns = vec![
            Column::new("todo", "To Do", "#6b7280"),
            Column::new("in-progress", "In Progress", "#3b82f6").with_limit(3),
            Column::new("review", "Review", "#f59e0b").with_limit(2),
            Column::new("done", "Done", "#10b981"),
        ];
        let mut board = Board::new("plank demo", columns);

        let seeds: [(&str, &str, Priority, Option<&str>, &[&str], Option<(i32, u32, u32)>); 5] = [
            (
                "todo",
                "Implement drag and drop",
                Priority::High,
                Some("John Doe"),
                &["frontend", "feature"],
                Some((2026, 8, 20)),
            ),
            (
                "todo",
                "Design task modal",
                Priority::Medium,
                Some("Jane Smith"),
                &["design"],
                None,
            ),
            (
                "in-progress",
                "Set up keyboard navigation",
                Priority::Urgent,
                Some("John Doe"),
                &[],
                None,
            ),
            (
                "done",
                "Create project structure",
                Priority::Low,
                Some("Jane Smith"),
                &[],
                None,
            ),
            ("done", "Install dependencies", Priority::Low, None, &[], None),
        ];

        for (status, title, priority, assignee, tags, due) in seeds {
            let id = board.next_task_id();
            let mut task = Task::new(&id, title, status);
            task.priority = priority;
            task.assignee = assignee.map(String::from);
            task.tags = tags.iter().map(|t| t.to_string()).collect();
            task.due_date = due.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
            board.tasks.insert(id.clone(), task);
            if let Some(col) = board.column_mut(status) {
                col.task_ids.push(id);
            }
        }
        board
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.get_mut(task_id)
    }

    /// Locate a task by scanning column membership. This — not the task's
    /// `status` field and not any cached drag state — is the source of truth
    /// drag commits must re-resolve against.
    pub fn find_task_position(&self, task_id: &str) -> Option<(&str, usize)> {
        for column in &self.columns {
            if let Some(index) = column.index_of(task_id) {
                return Some((column.id.as_str(), index));
            }
        }
        None
    }

    /// Allocate the next free `T-NNN` id
    pub fn next_task_id(&mut self) -> String {
        loop {
            let id = format!("T-{:03}", self.next_id);
            self.next_id += 1;
            if !self.tasks.contains_key(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_is_consistent() {
        let board = Board::sample();
        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.tasks.len(), 5);
        for (id, task) in &board.tasks {
            let (column_id, _) = board.find_task_position(id).expect("task listed somewhere");
            assert_eq!(column_id, task.status);
        }
    }

    #[test]
    fn find_task_position_scans_columns() {
        let board = Board::sample();
        let (col, idx) = board.find_task_position("T-002").unwrap();
        assert_eq!(col, "todo");
        assert_eq!(idx, 1);
        assert!(board.find_task_position("T-999").is_none());
    }

    #[test]
    fn next_task_id_skips_taken_ids() {
        let mut board = Board::new("t", vec![Column::new("todo", "To Do", "#888888")]);
        board
            .tasks
            .insert("T-001".into(), Task::new("T-001", "seeded", "todo"));
        assert_eq!(board.next_task_id(), "T-002");
        assert_eq!(board.next_task_id(), "T-003");
    }

    #[test]
    fn from_config_skips_unknown_columns() {
        let config: BoardConfig = toml::from_str(
            r#"[board]
name = "demo"

[[columns]]
id = "todo"
title = "To Do"

[[tasks]]
title = "kept"
status = "todo"

[[tasks]]
title = "dropped"
status = "nowhere"
"#,
        )
        .unwrap();
        let board = Board::from_config(&config);
        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.column("todo").unwrap().len(), 1);
    }

    #[test]
    fn from_config_keeps_explicit_ids() {
        let config: BoardConfig = toml::from_str(
            r#"[board]
name = "demo"

[[columns]]
id = "todo"
title = "To Do"

[[tasks]]
id = "PAY-7"
title = "explicit id"
status = "todo"
"#,
        )
        .unwrap();
        let board = Board::from_config(&config);
        assert!(board.task("PAY-7").is_some());
    }
}
