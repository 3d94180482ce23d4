use tracing::info;

use crate::CommandMeta;
use crate::notifications::{manage_guild_context, usage_message};
use casewire_core::{Context, Error};
use casewire_database::impls::guild_config::{get_guild_config, set_language};
use casewire_database::model::guild_config::Language;

pub const META: CommandMeta = CommandMeta {
    name: "notifylanguage",
    desc: "View or set the language of direct message notifications.",
    category: "notifications",
    usage: "[en|de]",
};

#[poise::command(prefix_command, slash_command, category = "Notifications")]
pub async fn notifylanguage(
    ctx: Context<'_>,
    #[description = "Language code (en, de)"] language: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = manage_guild_context(&ctx).await? else {
        return Ok(());
    };

    let Some(raw) = language
        .as_deref()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
    else {
        let config = get_guild_config(&ctx.data().db, guild_id.get()).await?;
        ctx.say(format!(
            "Notification language: `{}`",
            config.language.code()
        ))
        .await?;
        return Ok(());
    };

    let Some(language) = Language::from_code(raw) else {
        ctx.say(usage_message(META.name, META.usage)).await?;
        return Ok(());
    };

    set_language(&ctx.data().db, guild_id.get(), language).await?;
    info!(guild_id = guild_id.get(), language = language.code(), "notification language set");
    ctx.say(format!("Notification language set to `{}`.", language.code()))
        .await?;

    Ok(())
}
