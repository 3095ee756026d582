use serde::{Deserialize, Serialize};

/// Reminder task returned by the checklist endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    #[serde(default)]
    pub checklist_id: Option<i64>,
    pub task: String,
}

impl TaskItem {
    /// The one task whose completion triggers a backend side effect.
    pub fn is_quote_request(&self) -> bool {
        self.task == "Request Quote"
    }
}

/// Admin-side checklist definition (list screens / builder).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}
