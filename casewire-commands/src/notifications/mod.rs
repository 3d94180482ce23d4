pub mod notifylanguage;
pub mod notifytest;
pub mod notifywebhook;

use poise::serenity_prelude as serenity;

use casewire_core::{Context, Error};
use casewire_utils::permissions::has_user_permission;

pub(crate) fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub(crate) fn permission_denied_message() -> &'static str {
    "You need the Manage Server permission to change notification settings."
}

pub(crate) fn usage_message(name: &str, usage: &str) -> String {
    format!("Usage: `{name} {usage}`")
}

/// Resolve the invoking guild and require `MANAGE_GUILD`, replying on failure.
pub(crate) async fn manage_guild_context(
    ctx: &Context<'_>,
) -> Result<Option<serenity::GuildId>, Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(None);
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_GUILD,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(None);
    }

    Ok(Some(guild_id))
}
