use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Links two accounts believed to belong to the same person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserMapping {
    pub id: u64,
    pub guild_id: u64,
    pub user_a: u64,
    pub user_b: u64,
    pub creator_id: u64,
    pub reason: String,
    pub updated_at: DateTime<Utc>,
}
