use std::env;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;
use sqlx::postgres::PgPoolOptions;

use casewire_core::{Data, Error};
use casewire_database::{CacheService, Database, MIGRATOR};
use casewire_notify::settings::{DEFAULT_BASE_URL, DEFAULT_COMMAND_PREFIX};
use casewire_notify::{Announcer, DefaultEmbedCreator, NotifySettings, SerenityDiscordApi};
use casewire_utils::embed::DEFAULT_EMBED_COLOR;
use casewire_utils::time::parse_timezone;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;
    let database_url = env::var("DATABASE_URL")?;
    let guild_id = env::var("DISCORD_GUILD_ID")?.parse::<u64>()?;

    let settings = load_notify_settings()?;
    info!(
        prefix = %settings.command_prefix,
        base_url = %settings.base_url,
        timezone = %settings.timezone.name(),
        "Notification settings loaded."
    );

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    info!("PostgreSQL connection established.");

    let cache = build_cache().await;
    let db = Database::with_cache(db_pool, cache);

    let auto_run_migrations = env_bool("AUTO_RUN_MIGRATIONS", true);
    if auto_run_migrations {
        MIGRATOR.run(db.pool()).await?;
        info!("Database migrations applied.");
    } else {
        info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
    }

    let http = Arc::new(serenity::Http::new(&token));
    let announcer = Announcer::new(
        Arc::new(SerenityDiscordApi::new(http, db.cache().clone())),
        Arc::new(db.clone()),
        Arc::new(DefaultEmbedCreator::new(settings.clone())),
        settings.clone(),
    );

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: casewire_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.command_prefix.clone()),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let db = db.clone();
            let announcer = announcer.clone();
            Box::pin(async move {
                info!("casewire is ready.");

                poise::builtins::register_in_guild(
                    ctx,
                    &framework.options().commands,
                    serenity::GuildId::new(guild_id),
                )
                .await?;

                Ok(Data { db, announcer })
            })
        })
        .build();

    info!("casewire is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

fn load_notify_settings() -> anyhow::Result<NotifySettings> {
    let prefix = env_string("DISCORD_PREFIX", DEFAULT_COMMAND_PREFIX);
    let base_url = env_string("CASEWIRE_BASE_URL", DEFAULT_BASE_URL);
    let timezone_name = env_string("CASEWIRE_TIMEZONE", "UTC");
    let timezone = parse_timezone(&timezone_name).ok_or_else(|| {
        anyhow::anyhow!("CASEWIRE_TIMEZONE `{timezone_name}` is not a known IANA timezone")
    })?;

    Ok(NotifySettings::new(prefix, base_url, timezone))
}

async fn build_cache() -> CacheService {
    let redis_enabled = env_bool("REDIS_ENABLED", false);
    let redis_key_prefix = env_string("REDIS_KEY_PREFIX", "casewire:prod");

    let cache = if redis_enabled {
        match env::var("REDIS_URL") {
            Ok(redis_url) => match CacheService::redis(&redis_url, redis_key_prefix.clone()) {
                Ok(cache) => {
                    info!(key_prefix = %redis_key_prefix, "Redis cache enabled.");
                    cache
                }
                Err(err) => {
                    warn!(
                        ?err,
                        key_prefix = %redis_key_prefix,
                        "Failed to initialize Redis cache; continuing with in-process cache."
                    );
                    CacheService::in_memory(redis_key_prefix.clone())
                }
            },
            Err(_) => {
                warn!(
                    key_prefix = %redis_key_prefix,
                    "REDIS_ENABLED=true but REDIS_URL is missing; continuing with in-process cache."
                );
                CacheService::in_memory(redis_key_prefix.clone())
            }
        }
    } else {
        info!("Redis cache disabled (set REDIS_ENABLED=true to enable); using in-process cache.");
        CacheService::in_memory(redis_key_prefix.clone())
    };

    if cache.is_redis_enabled() {
        if let Err(err) = cache.ping().await {
            warn!(
                ?err,
                "Redis cache ping failed; cache operations will continue with fallback behavior."
            );
        } else {
            info!("Redis cache health check passed.");
        }
    }

    cache
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = format!(
                "Usage: `{}{}`",
                ctx.data().announcer.settings().command_prefix,
                ctx.command().qualified_name
            );
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\n{}", input, usage)
            } else {
                format!("Missing required argument.\n{}", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}
