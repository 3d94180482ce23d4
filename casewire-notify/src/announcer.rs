use std::fmt;
use std::sync::Arc;

use tracing::info;

use casewire_database::model::cases::{ModCase, RestAction};
use casewire_database::model::comments::ModCaseComment;
use casewire_database::model::mappings::UserMapping;
use casewire_database::model::notes::UserNote;
use casewire_utils::formatting::user_mention;
use casewire_utils::parse::redact_webhook_url;

use crate::discord::{CacheBehavior, DiscordApi, UserProfile};
use crate::embeds::NotificationEmbedCreator;
use crate::settings::NotifySettings;
use crate::store::GuildConfigStore;
use crate::templates::{DmContext, DmTemplate, Translator};

/// Turns moderation events into direct messages and webhook posts.
///
/// Every step is awaited in order. The first failing collaborator call
/// aborts the announcement and its error is returned unchanged.
#[derive(Clone)]
pub struct Announcer {
    discord: Arc<dyn DiscordApi>,
    configs: Arc<dyn GuildConfigStore>,
    embeds: Arc<dyn NotificationEmbedCreator>,
    settings: NotifySettings,
}

impl fmt::Debug for Announcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Announcer {
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        configs: Arc<dyn GuildConfigStore>,
        embeds: Arc<dyn NotificationEmbedCreator>,
        settings: NotifySettings,
    ) -> Self {
        Self {
            discord,
            configs,
            embeds,
            settings,
        }
    }

    pub fn settings(&self) -> &NotifySettings {
        &self.settings
    }

    /// Announce a case to the punished user (DM), the public webhook and the
    /// internal webhook.
    ///
    /// No DM is sent for deleted cases. The internal webhook fires whenever it
    /// is configured, regardless of `announce_public` and `announce_dm`.
    pub async fn announce_mod_case(
        &self,
        case: &ModCase,
        action: RestAction,
        actor: &UserProfile,
        announce_public: bool,
        announce_dm: bool,
    ) -> anyhow::Result<()> {
        info!(
            case_id = case.case_id,
            guild_id = case.guild_id,
            ?action,
            "announcing mod case"
        );

        let subject = self
            .discord
            .fetch_user_info(case.user_id, CacheBehavior::Default)
            .await?;
        let config = self.configs.guild_config(case.guild_id).await?;

        if announce_dm && action != RestAction::Deleted {
            info!(user_id = case.user_id, "sending dm notification");

            let guild = self
                .discord
                .fetch_guild_info(case.guild_id, CacheBehavior::Default)
                .await?;
            let ctx = DmContext {
                case,
                guild: &guild,
                prefix: &self.settings.command_prefix,
                case_url: self.settings.case_url(case.guild_id, case.case_id),
                timezone: self.settings.timezone,
            };
            let template = DmTemplate::for_case(case);
            let message = Translator::new(config.language).render_dm(template, &ctx);

            self.discord.send_dm_message(case.user_id, &message).await?;
            info!(user_id = case.user_id, "sent dm notification");
        }

        if announce_public {
            if let Some(url) = config.public_webhook() {
                info!(webhook = %redact_webhook_url(url), "sending public webhook");

                let embed = self
                    .embeds
                    .mod_case_embed(case, action, actor, &subject, false);
                self.discord
                    .execute_webhook(url, embed, Some(user_mention(case.user_id)))
                    .await?;
                info!("sent public webhook");
            }
        }

        if let Some(url) = config.internal_webhook() {
            info!(webhook = %redact_webhook_url(url), "sending internal webhook");

            let embed = self
                .embeds
                .mod_case_embed(case, action, actor, &subject, true);
            self.discord
                .execute_webhook(url, embed, Some(user_mention(case.user_id)))
                .await?;
            info!("sent internal webhook");
        }

        Ok(())
    }

    pub async fn announce_comment(
        &self,
        comment: &ModCaseComment,
        actor: &UserProfile,
        action: RestAction,
    ) -> anyhow::Result<()> {
        info!(
            comment_id = comment.id,
            case_id = comment.case_id,
            guild_id = comment.guild_id,
            ?action,
            "announcing comment"
        );

        let config = self.configs.guild_config(comment.guild_id).await?;
        let Some(url) = config.internal_webhook() else {
            return Ok(());
        };

        info!(webhook = %redact_webhook_url(url), "sending internal webhook");
        let embed = self.embeds.comment_embed(comment, action, actor);
        self.discord.execute_webhook(url, embed, None).await?;
        info!("sent internal webhook");

        Ok(())
    }

    pub async fn announce_file(
        &self,
        filename: &str,
        case: &ModCase,
        actor: &UserProfile,
        action: RestAction,
    ) -> anyhow::Result<()> {
        info!(
            filename,
            case_id = case.case_id,
            guild_id = case.guild_id,
            ?action,
            "announcing file"
        );

        let config = self.configs.guild_config(case.guild_id).await?;
        let Some(url) = config.internal_webhook() else {
            return Ok(());
        };

        info!(webhook = %redact_webhook_url(url), "sending internal webhook");
        let embed = self.embeds.file_embed(filename, case, action, actor);
        self.discord.execute_webhook(url, embed, None).await?;
        info!("sent internal webhook");

        Ok(())
    }

    pub async fn announce_user_note(
        &self,
        note: &UserNote,
        actor: &UserProfile,
        action: RestAction,
    ) -> anyhow::Result<()> {
        info!(
            note_id = note.id,
            guild_id = note.guild_id,
            ?action,
            "announcing user note"
        );

        let config = self.configs.guild_config(note.guild_id).await?;
        let Some(url) = config.internal_webhook() else {
            return Ok(());
        };

        info!(webhook = %redact_webhook_url(url), "sending internal webhook");
        let subject = self
            .discord
            .fetch_user_info(note.user_id, CacheBehavior::Default)
            .await?;
        let embed = self.embeds.user_note_embed(note, action, actor, &subject);
        self.discord.execute_webhook(url, embed, None).await?;
        info!("sent internal webhook");

        Ok(())
    }

    pub async fn announce_user_mapping(
        &self,
        mapping: &UserMapping,
        actor: &UserProfile,
        action: RestAction,
    ) -> anyhow::Result<()> {
        info!(
            mapping_id = mapping.id,
            guild_id = mapping.guild_id,
            ?action,
            "announcing user mapping"
        );

        let config = self.configs.guild_config(mapping.guild_id).await?;
        let Some(url) = config.internal_webhook() else {
            return Ok(());
        };

        info!(webhook = %redact_webhook_url(url), "sending internal webhook");
        let embed = self.embeds.user_mapping_embed(mapping, action, actor);
        self.discord.execute_webhook(url, embed, None).await?;
        info!("sent internal webhook");

        Ok(())
    }
}
