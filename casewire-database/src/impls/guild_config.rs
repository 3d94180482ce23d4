use anyhow::Context as _;

use crate::cache::{CONFIG_CACHE_TTL, guild_config_key, invalidate_guild_config};
use crate::database::Database;
use crate::model::guild_config::{GuildConfig, Language};

#[derive(sqlx::FromRow)]
struct GuildConfigRow {
    guild_id: i64,
    public_webhook_url: Option<String>,
    internal_webhook_url: Option<String>,
    language: String,
}

/// Which configured webhook a write targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebhookKind {
    Public,
    Internal,
}

impl WebhookKind {
    fn column(self) -> &'static str {
        match self {
            WebhookKind::Public => "public_webhook_url",
            WebhookKind::Internal => "internal_webhook_url",
        }
    }
}

/// Load notification settings for a guild. Guilds without a stored row get
/// [`GuildConfig::unconfigured`].
pub async fn get_guild_config(db: &Database, guild_id: u64) -> anyhow::Result<GuildConfig> {
    let cache_key = guild_config_key(db.cache(), guild_id);
    db.cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

            let row: Option<GuildConfigRow> = sqlx::query_as(
                "SELECT guild_id, public_webhook_url, internal_webhook_url, language
                 FROM guild_notification_config
                 WHERE guild_id = $1",
            )
            .bind(guild_id_i64)
            .fetch_optional(db.pool())
            .await?;

            match row {
                Some(row) => to_guild_config(row),
                None => Ok(GuildConfig::unconfigured(guild_id)),
            }
        })
        .await
}

/// Store (`Some`) or clear (`None`) one of the guild's webhook URLs.
pub async fn set_webhook_url(
    db: &Database,
    guild_id: u64,
    kind: WebhookKind,
    url: Option<&str>,
) -> anyhow::Result<()> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;
    let column = kind.column();

    // column comes from a closed enum, never from user input
    let statement = format!(
        "INSERT INTO guild_notification_config (guild_id, {column})
         VALUES ($1, $2)
         ON CONFLICT (guild_id) DO UPDATE SET {column} = EXCLUDED.{column}"
    );

    sqlx::query(&statement)
        .bind(guild_id_i64)
        .bind(url)
        .execute(db.pool())
        .await?;

    invalidate_guild_config(db.cache(), guild_id).await?;

    Ok(())
}

pub async fn set_language(db: &Database, guild_id: u64, language: Language) -> anyhow::Result<()> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

    sqlx::query(
        "INSERT INTO guild_notification_config (guild_id, language)
         VALUES ($1, $2)
         ON CONFLICT (guild_id) DO UPDATE SET language = EXCLUDED.language",
    )
    .bind(guild_id_i64)
    .bind(language.code())
    .execute(db.pool())
    .await?;

    invalidate_guild_config(db.cache(), guild_id).await?;

    Ok(())
}

pub async fn clear_webhooks(db: &Database, guild_id: u64) -> anyhow::Result<()> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

    sqlx::query(
        "UPDATE guild_notification_config
         SET public_webhook_url = NULL, internal_webhook_url = NULL
         WHERE guild_id = $1",
    )
    .bind(guild_id_i64)
    .execute(db.pool())
    .await?;

    invalidate_guild_config(db.cache(), guild_id).await?;

    Ok(())
}

fn to_guild_config(row: GuildConfigRow) -> anyhow::Result<GuildConfig> {
    Ok(GuildConfig {
        guild_id: u64::try_from(row.guild_id).context("guild_id row out of u64 range")?,
        public_webhook_url: row.public_webhook_url,
        internal_webhook_url: row.internal_webhook_url,
        language: Language::from_code(&row.language).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::{GuildConfigRow, WebhookKind, to_guild_config};
    use crate::model::guild_config::Language;

    #[test]
    fn webhook_kinds_map_to_columns() {
        assert_eq!(WebhookKind::Public.column(), "public_webhook_url");
        assert_eq!(WebhookKind::Internal.column(), "internal_webhook_url");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let config = to_guild_config(GuildConfigRow {
            guild_id: 10,
            public_webhook_url: None,
            internal_webhook_url: Some("https://discord.com/api/webhooks/1/t".to_owned()),
            language: "xx".to_owned(),
        })
        .unwrap();

        assert_eq!(config.guild_id, 10);
        assert_eq!(config.language, Language::En);
        assert!(config.internal_webhook().is_some());
    }

    #[test]
    fn negative_guild_ids_are_rejected() {
        let result = to_guild_config(GuildConfigRow {
            guild_id: -1,
            public_webhook_url: None,
            internal_webhook_url: None,
            language: "en".to_owned(),
        });

        assert!(result.is_err());
    }
}
