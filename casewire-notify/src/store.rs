use async_trait::async_trait;

use casewire_database::Database;
use casewire_database::impls::guild_config::get_guild_config;
use casewire_database::model::guild_config::GuildConfig;

/// Source of per-guild notification settings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildConfigStore: Send + Sync {
    async fn guild_config(&self, guild_id: u64) -> anyhow::Result<GuildConfig>;
}

#[async_trait]
impl GuildConfigStore for Database {
    async fn guild_config(&self, guild_id: u64) -> anyhow::Result<GuildConfig> {
        get_guild_config(self, guild_id).await
    }
}
