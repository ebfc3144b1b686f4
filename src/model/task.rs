use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Card priority, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Stable lowercase name, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Parse a lowercase priority name
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }

    /// The next priority in the low→urgent cycle, wrapping around
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Urgent,
            Priority::Urgent => Priority::Low,
        }
    }
}

/// One entry in a task's activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn now(message: impl Into<String>) -> Self {
        HistoryEntry {
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// A card on the board. Owned by the [`Board`](crate::model::Board) task map;
/// columns reference it by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, immutable id like `T-014`
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Id of the column currently holding this task.
    /// Must always agree with column membership — see `ops::check`.
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
}

impl Task {
    /// Create a new task in the given column with defaults everywhere else
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            description: None,
            status: status.into(),
            priority: Priority::default(),
            assignee: None,
            tags: Vec::new(),
            created_at: Local::now(),
            updated_at: None,
            due_date: None,
            history: Vec::new(),
        }
    }

    /// Whether the due date has passed relative to `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| today > due)
    }

    /// Up to two initials from the assignee name, uppercased, for the avatar cell
    pub fn initials(&self) -> Option<String> {
        let name = self.assignee.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        let initials: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect();
        Some(initials)
    }

    /// Append a history entry and stamp `updated_at`
    pub fn record(&mut self, message: impl Into<String>) {
        self.history.push(HistoryEntry::now(message));
        self.updated_at = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_cycle_wraps() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Urgent.next(), Priority::Low);
    }

    #[test]
    fn priority_parse_round_trip() {
        for p in Priority::ALL {
            assert_eq!(Priority::parse(p.as_str()), Some(p));
        }
        assert_eq!(Priority::parse("critical"), None);
    }

    #[test]
    fn priority_serde_lowercase() {
        let json = serde_json::to_string(&Priority::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn initials_from_full_name() {
        let mut task = Task::new("T-001", "test", "todo");
        task.assignee = Some("John Doe".into());
        assert_eq!(task.initials(), Some("JD".into()));
    }

    #[test]
    fn initials_take_at_most_two() {
        let mut task = Task::new("T-001", "test", "todo");
        task.assignee = Some("ana maria dos santos".into());
        assert_eq!(task.initials(), Some("AM".into()));
    }

    #[test]
    fn initials_absent_for_blank_assignee() {
        let mut task = Task::new("T-001", "test", "todo");
        assert_eq!(task.initials(), None);
        task.assignee = Some("   ".into());
        assert_eq!(task.initials(), None);
    }

    #[test]
    fn overdue_is_strictly_after_due() {
        let mut task = Task::new("T-001", "test", "todo");
        let due = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        task.due_date = Some(due);
        assert!(!task.is_overdue(due));
        assert!(task.is_overdue(due.succ_opt().unwrap()));
        assert!(!task.is_overdue(due.pred_opt().unwrap()));
    }

    #[test]
    fn record_appends_history_and_stamps() {
        let mut task = Task::new("T-001", "test", "todo");
        assert!(task.updated_at.is_none());
        task.record("Moved to done");
        assert_eq!(task.history.len(), 1);
        assert_eq!(task.history[0].message, "Moved to done");
        assert!(task.updated_at.is_some());
    }
}
