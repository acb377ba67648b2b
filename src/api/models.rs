use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tasks::Task;

/// One task row as reported by the daily-plan endpoint. The server may
/// omit `completed` (treated as pending) and, for freshly generated
/// plans, the id.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        let mut task = match row.id {
            Some(id) => Task::new(id, row.text),
            None => Task::with_local_id(row.text),
        };
        task.completed = row.completed;
        task
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyPlanResponse {
    pub tasks: Vec<TaskRow>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveUrlRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Ready,
    Failed,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Pending => write!(f, "pending"),
            ItemStatus::Ready => write!(f, "ready"),
            ItemStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoredItemResponse {
    pub id: String,
    pub source_type: String,
    #[serde(default)]
    pub title: Option<String>,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<StoredItemResponse>,
}
