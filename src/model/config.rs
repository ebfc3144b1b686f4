use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::task::Priority;

/// Configuration from plank.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub board: BoardInfo,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub tasks: Vec<TaskSeed>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardInfo {
    pub name: String,
}

/// A column definition from `[[columns]]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: String,
    pub title: String,
    #[serde(default = "default_column_color")]
    pub color: String,
    #[serde(default)]
    pub max_tasks: Option<usize>,
}

fn default_column_color() -> String {
    "#6b7280".to_string()
}

/// A task seeded from `[[tasks]]`. Ids are optional; missing ones are
/// allocated when the board is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    /// Column id this task starts in
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// "dark" (default) or "light"
    #[serde(default)]
    pub theme: Option<String>,
    /// Palette overrides, e.g. `background = "#0C001B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub show_key_hints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: BoardConfig = toml::from_str(
            r#"[board]
name = "demo"
"#,
        )
        .unwrap();
        assert_eq!(config.board.name, "demo");
        assert!(config.columns.is_empty());
        assert!(config.tasks.is_empty());
        assert!(config.ui.theme.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: BoardConfig = toml::from_str(
            r##"[board]
name = "demo"

[[columns]]
id = "todo"
title = "To Do"

[[columns]]
id = "doing"
title = "In Progress"
color = "#3b82f6"
max_tasks = 3

[[tasks]]
title = "Wire up the board"
status = "todo"
priority = "high"
tags = ["feature"]
due_date = "2026-09-01"

[ui]
theme = "light"

[ui.colors]
background = "#000000"
"##,
        )
        .unwrap();
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].color, "#6b7280");
        assert_eq!(config.columns[1].max_tasks, Some(3));
        assert_eq!(config.tasks[0].priority, Priority::High);
        assert_eq!(
            config.tasks[0].due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
    }
}
