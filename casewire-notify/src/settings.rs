use chrono_tz::Tz;

pub const DEFAULT_COMMAND_PREFIX: &str = "$";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Process-wide notification settings, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct NotifySettings {
    /// Prefix users type in front of bot commands; quoted in direct messages.
    pub command_prefix: String,
    /// Public URL of the case dashboard, without a trailing slash.
    pub base_url: String,
    /// Zone used to print expiry times in direct messages.
    pub timezone: Tz,
}

impl NotifySettings {
    pub fn new(
        command_prefix: impl Into<String>,
        base_url: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        let command_prefix = command_prefix.into();
        let command_prefix = if command_prefix.trim().is_empty() {
            DEFAULT_COMMAND_PREFIX.to_owned()
        } else {
            command_prefix.trim().to_owned()
        };

        Self {
            command_prefix,
            base_url: base_url.into().trim().trim_end_matches('/').to_owned(),
            timezone,
        }
    }

    pub fn case_url(&self, guild_id: u64, case_id: u64) -> String {
        format!("{}/guilds/{}/cases/{}", self.base_url, guild_id, case_id)
    }
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_PREFIX, DEFAULT_BASE_URL, Tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use chrono_tz::Tz;

    use super::NotifySettings;

    #[test]
    fn normalizes_prefix_and_base_url() {
        let settings = NotifySettings::new("  ", "https://cases.example.org/ ", Tz::UTC);
        assert_eq!(settings.command_prefix, "$");
        assert_eq!(settings.base_url, "https://cases.example.org");
        assert_eq!(
            settings.case_url(1, 42),
            "https://cases.example.org/guilds/1/cases/42"
        );
    }
}
