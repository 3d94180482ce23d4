use serde::{Deserialize, Serialize};

/// Language used for direct messages sent on behalf of a guild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub public_webhook_url: Option<String>,
    pub internal_webhook_url: Option<String>,
    pub language: Language,
}

impl GuildConfig {
    /// Settings used for guilds that never stored a config row.
    pub fn unconfigured(guild_id: u64) -> Self {
        Self {
            guild_id,
            ..Self::default()
        }
    }

    pub fn public_webhook(&self) -> Option<&str> {
        non_blank(self.public_webhook_url.as_deref())
    }

    pub fn internal_webhook(&self) -> Option<&str> {
        non_blank(self.internal_webhook_url.as_deref())
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|value| !value.is_empty())
}
