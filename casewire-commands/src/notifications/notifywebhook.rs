use tracing::info;

use crate::CommandMeta;
use crate::notifications::{manage_guild_context, usage_message};
use casewire_core::{Context, Error};
use casewire_database::impls::guild_config::{
    WebhookKind, clear_webhooks, get_guild_config, set_webhook_url,
};
use casewire_utils::parse::{parse_webhook_url, redact_webhook_url};

pub const META: CommandMeta = CommandMeta {
    name: "notifywebhook",
    desc: "View or set the public/internal notification webhooks.",
    category: "notifications",
    usage: "[public|internal|clear] [url|clear]",
};

#[poise::command(prefix_command, slash_command, category = "Notifications")]
pub async fn notifywebhook(
    ctx: Context<'_>,
    #[description = "public, internal, or clear"] target: Option<String>,
    #[description = "Webhook URL, or 'clear'"]
    #[rest]
    value: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = manage_guild_context(&ctx).await? else {
        return Ok(());
    };

    let target = target
        .as_deref()
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    let Some(target) = target else {
        let config = get_guild_config(&ctx.data().db, guild_id.get()).await?;
        ctx.say(format!(
            "Public webhook: {}\nInternal webhook: {}",
            describe(config.public_webhook()),
            describe(config.internal_webhook())
        ))
        .await?;
        return Ok(());
    };

    if target.eq_ignore_ascii_case("clear") {
        clear_webhooks(&ctx.data().db, guild_id.get()).await?;
        info!(guild_id = guild_id.get(), "notification webhooks cleared");
        ctx.say("Both notification webhooks cleared.").await?;
        return Ok(());
    }

    let Some(kind) = parse_kind(target) else {
        ctx.say(usage_message(META.name, META.usage)).await?;
        return Ok(());
    };

    let Some(value) = value
        .as_deref()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
    else {
        ctx.say(usage_message(META.name, META.usage)).await?;
        return Ok(());
    };

    if value.eq_ignore_ascii_case("clear") {
        set_webhook_url(&ctx.data().db, guild_id.get(), kind, None).await?;
        info!(guild_id = guild_id.get(), ?kind, "notification webhook cleared");
        ctx.say(format!("{} webhook cleared.", kind_label(kind))).await?;
        return Ok(());
    }

    let Some(url) = parse_webhook_url(value) else {
        ctx.say(
            "Provide a Discord webhook URL (https://discord.com/api/webhooks/<id>/<token>), \
             or `clear`.",
        )
        .await?;
        return Ok(());
    };

    set_webhook_url(&ctx.data().db, guild_id.get(), kind, Some(&url)).await?;
    info!(guild_id = guild_id.get(), ?kind, "notification webhook set");
    ctx.say(format!(
        "{} webhook set to {}.",
        kind_label(kind),
        redact_webhook_url(&url)
    ))
    .await?;

    Ok(())
}

fn parse_kind(raw: &str) -> Option<WebhookKind> {
    if raw.eq_ignore_ascii_case("public") {
        Some(WebhookKind::Public)
    } else if raw.eq_ignore_ascii_case("internal") {
        Some(WebhookKind::Internal)
    } else {
        None
    }
}

fn kind_label(kind: WebhookKind) -> &'static str {
    match kind {
        WebhookKind::Public => "Public",
        WebhookKind::Internal => "Internal",
    }
}

fn describe(url: Option<&str>) -> String {
    url.map(redact_webhook_url)
        .unwrap_or_else(|| "not configured".to_owned())
}

#[cfg(test)]
mod tests {
    use super::{describe, parse_kind};
    use casewire_database::impls::guild_config::WebhookKind;

    #[test]
    fn parses_webhook_targets() {
        assert_eq!(parse_kind("PUBLIC"), Some(WebhookKind::Public));
        assert_eq!(parse_kind("internal"), Some(WebhookKind::Internal));
        assert_eq!(parse_kind("staff"), None);
    }

    #[test]
    fn describes_without_leaking_tokens() {
        assert_eq!(describe(None), "not configured");
        assert_eq!(
            describe(Some("https://discord.com/api/webhooks/1/secret")),
            "https://discord.com/api/webhooks/1/…"
        );
    }
}
