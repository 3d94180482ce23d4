use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModCaseComment {
    pub id: u64,
    pub guild_id: u64,
    pub case_id: u64,
    /// Author of the comment.
    pub user_id: u64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
