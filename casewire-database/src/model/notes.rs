use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserNote {
    pub id: u64,
    pub guild_id: u64,
    /// The user the note is about.
    pub user_id: u64,
    pub creator_id: u64,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}
