use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentType {
    Warn,
    Mute,
    Kick,
    Ban,
}

impl PunishmentType {
    pub fn display_name(self) -> &'static str {
        match self {
            PunishmentType::Warn => "Warn",
            PunishmentType::Mute => "Mute",
            PunishmentType::Kick => "Kick",
            PunishmentType::Ban => "Ban",
        }
    }
}

/// Why a notification fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestAction {
    Created,
    Updated,
    Deleted,
}

impl RestAction {
    pub fn past_tense(self) -> &'static str {
        match self {
            RestAction::Created => "created",
            RestAction::Updated => "updated",
            RestAction::Deleted => "deleted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModCase {
    pub id: u64,
    /// Per-guild case number shown to users.
    pub case_id: u64,
    pub guild_id: u64,
    pub user_id: u64,
    pub mod_id: u64,
    pub title: String,
    pub description: String,
    pub punishment_type: PunishmentType,
    /// `None` means the punishment does not expire.
    pub punished_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ModCase {
    pub fn is_temporary(&self) -> bool {
        self.punished_until.is_some()
    }
}
