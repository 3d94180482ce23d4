use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use serde::{Deserialize, Serialize};
use tracing::debug;

use casewire_database::CacheService;
use casewire_database::cache::{PROFILE_CACHE_TTL, discord_guild_key, discord_user_key};
use casewire_utils::ApiError;

/// How a profile lookup may use the profile cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheBehavior {
    /// Serve from cache, falling back to Discord on a miss.
    #[default]
    Default,
    /// Always ask Discord and refresh the cached copy.
    IgnoreCache,
    /// Never call Discord; a miss is [`ApiError::ResourceNotFound`].
    OnlyCache,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bot: bool,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

impl From<&serenity::User> for UserProfile {
    fn from(user: &serenity::User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name.clone(),
            global_name: user.global_name.clone(),
            avatar_url: Some(user.face()),
            bot: user.bot,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuildProfile {
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
}

impl From<&serenity::PartialGuild> for GuildProfile {
    fn from(guild: &serenity::PartialGuild) -> Self {
        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
        }
    }
}

/// The slice of the Discord API the notification flow depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscordApi: Send + Sync {
    async fn fetch_user_info(
        &self,
        user_id: u64,
        cache: CacheBehavior,
    ) -> anyhow::Result<UserProfile>;

    async fn fetch_guild_info(
        &self,
        guild_id: u64,
        cache: CacheBehavior,
    ) -> anyhow::Result<GuildProfile>;

    async fn send_dm_message(&self, user_id: u64, content: &str) -> anyhow::Result<()>;

    /// Post `embed` to a webhook, optionally with plain `content` (used for mentions).
    async fn execute_webhook(
        &self,
        url: &str,
        embed: serenity::CreateEmbed,
        content: Option<String>,
    ) -> anyhow::Result<()>;
}

/// [`DiscordApi`] over serenity's REST client, with profiles cached through
/// the shared [`CacheService`].
#[derive(Clone)]
pub struct SerenityDiscordApi {
    http: Arc<serenity::Http>,
    cache: CacheService,
}

impl SerenityDiscordApi {
    pub fn new(http: Arc<serenity::Http>, cache: CacheService) -> Self {
        Self { http, cache }
    }

    async fn load_user(&self, user_id: u64) -> anyhow::Result<UserProfile> {
        debug!(user_id, "fetching user from discord");
        let user = self
            .http
            .get_user(serenity::UserId::new(user_id))
            .await
            .map_err(|source| map_not_found(source, ApiError::InvalidDiscordUser))?;

        Ok(UserProfile::from(&user))
    }

    async fn load_guild(&self, guild_id: u64) -> anyhow::Result<GuildProfile> {
        debug!(guild_id, "fetching guild from discord");
        let guild = self
            .http
            .get_guild(serenity::GuildId::new(guild_id))
            .await
            .map_err(|source| map_not_found(source, ApiError::ResourceNotFound))?;

        Ok(GuildProfile::from(&guild))
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn fetch_user_info(
        &self,
        user_id: u64,
        cache: CacheBehavior,
    ) -> anyhow::Result<UserProfile> {
        let key = discord_user_key(&self.cache, user_id);
        match cache {
            CacheBehavior::Default => {
                self.cache
                    .get_or_load_json(&key, PROFILE_CACHE_TTL, || self.load_user(user_id))
                    .await
            }
            CacheBehavior::IgnoreCache => {
                self.cache
                    .load_and_store_json(&key, PROFILE_CACHE_TTL, || self.load_user(user_id))
                    .await
            }
            CacheBehavior::OnlyCache => self
                .cache
                .get_json::<UserProfile>(&key)
                .await?
                .ok_or_else(|| anyhow::Error::new(ApiError::ResourceNotFound)),
        }
    }

    async fn fetch_guild_info(
        &self,
        guild_id: u64,
        cache: CacheBehavior,
    ) -> anyhow::Result<GuildProfile> {
        let key = discord_guild_key(&self.cache, guild_id);
        match cache {
            CacheBehavior::Default => {
                self.cache
                    .get_or_load_json(&key, PROFILE_CACHE_TTL, || self.load_guild(guild_id))
                    .await
            }
            CacheBehavior::IgnoreCache => {
                self.cache
                    .load_and_store_json(&key, PROFILE_CACHE_TTL, || self.load_guild(guild_id))
                    .await
            }
            CacheBehavior::OnlyCache => self
                .cache
                .get_json::<GuildProfile>(&key)
                .await?
                .ok_or_else(|| anyhow::Error::new(ApiError::ResourceNotFound)),
        }
    }

    async fn send_dm_message(&self, user_id: u64, content: &str) -> anyhow::Result<()> {
        let http = self.http.as_ref();
        let dm_channel = serenity::UserId::new(user_id)
            .create_dm_channel(http)
            .await?;

        dm_channel
            .send_message(http, serenity::CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn execute_webhook(
        &self,
        url: &str,
        embed: serenity::CreateEmbed,
        content: Option<String>,
    ) -> anyhow::Result<()> {
        let http = self.http.as_ref();
        let webhook = serenity::Webhook::from_url(http, url).await?;

        let mut builder = serenity::ExecuteWebhook::new().embed(embed);
        if let Some(content) = content {
            builder = builder.content(content);
        }

        webhook.execute(http, false, builder).await?;

        Ok(())
    }
}

fn map_not_found(source: serenity::Error, not_found: ApiError) -> anyhow::Error {
    if is_not_found_error(&source) {
        anyhow::Error::new(not_found).context(source.to_string())
    } else {
        source.into()
    }
}

fn is_not_found_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}
