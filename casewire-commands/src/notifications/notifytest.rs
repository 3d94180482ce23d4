use chrono::Utc;
use tracing::error;

use crate::CommandMeta;
use crate::notifications::manage_guild_context;
use casewire_core::{Context, Error};
use casewire_database::impls::guild_config::get_guild_config;
use casewire_database::model::cases::RestAction;
use casewire_database::model::notes::UserNote;
use casewire_notify::UserProfile;

pub const META: CommandMeta = CommandMeta {
    name: "notifytest",
    desc: "Send a test notification to the internal webhook.",
    category: "notifications",
    usage: "",
};

#[poise::command(prefix_command, slash_command, category = "Notifications")]
pub async fn notifytest(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = manage_guild_context(&ctx).await? else {
        return Ok(());
    };

    let config = get_guild_config(&ctx.data().db, guild_id.get()).await?;
    if config.internal_webhook().is_none() {
        ctx.say("No internal webhook configured. Set one with `notifywebhook internal <url>`.")
            .await?;
        return Ok(());
    }

    let actor = UserProfile::from(ctx.author());
    let note = UserNote {
        id: 0,
        guild_id: guild_id.get(),
        user_id: actor.id,
        creator_id: actor.id,
        description: "Test notification. Webhook delivery works.".to_owned(),
        updated_at: Utc::now(),
    };

    if let Err(source) = ctx
        .data()
        .announcer
        .announce_user_note(&note, &actor, RestAction::Created)
        .await
    {
        error!(?source, guild_id = guild_id.get(), "test notification failed");
        ctx.say("The test notification could not be delivered. Check the webhook URL.")
            .await?;
        return Ok(());
    }

    ctx.say("Test notification sent.").await?;
    Ok(())
}
