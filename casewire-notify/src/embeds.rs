use poise::serenity_prelude as serenity;

use casewire_database::model::cases::{ModCase, RestAction};
use casewire_database::model::comments::ModCaseComment;
use casewire_database::model::mappings::UserMapping;
use casewire_database::model::notes::UserNote;
use casewire_utils::embed::{CREATED_EMBED_COLOR, DELETED_EMBED_COLOR, UPDATED_EMBED_COLOR};
use casewire_utils::formatting::{
    discord_timestamp, embed_field_text, format_case_label, sanitize_mentions,
    truncate_with_ellipsis, user_mention,
};

use crate::discord::UserProfile;
use crate::settings::NotifySettings;

const EMBED_TITLE_LIMIT: usize = 256;

/// Builds the rich payloads posted to webhooks.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationEmbedCreator: Send + Sync {
    /// `is_internal` selects the staff variant, which names the moderator.
    fn mod_case_embed(
        &self,
        case: &ModCase,
        action: RestAction,
        actor: &UserProfile,
        subject: &UserProfile,
        is_internal: bool,
    ) -> serenity::CreateEmbed;

    fn comment_embed(
        &self,
        comment: &ModCaseComment,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed;

    fn file_embed(
        &self,
        filename: &str,
        case: &ModCase,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed;

    fn user_note_embed(
        &self,
        note: &UserNote,
        action: RestAction,
        actor: &UserProfile,
        subject: &UserProfile,
    ) -> serenity::CreateEmbed;

    fn user_mapping_embed(
        &self,
        mapping: &UserMapping,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed;
}

#[derive(Clone, Debug)]
pub struct DefaultEmbedCreator {
    settings: NotifySettings,
}

impl DefaultEmbedCreator {
    pub fn new(settings: NotifySettings) -> Self {
        Self { settings }
    }
}

pub fn action_color(action: RestAction) -> u32 {
    match action {
        RestAction::Created => CREATED_EMBED_COLOR,
        RestAction::Updated => UPDATED_EMBED_COLOR,
        RestAction::Deleted => DELETED_EMBED_COLOR,
    }
}

fn base_embed(action: RestAction, actor: &UserProfile) -> serenity::CreateEmbed {
    let mut author = serenity::CreateEmbedAuthor::new(actor.display_name());
    if let Some(url) = actor.avatar_url.as_deref() {
        author = author.icon_url(url);
    }

    serenity::CreateEmbed::new()
        .color(action_color(action))
        .author(author)
}

fn title(text: String) -> String {
    truncate_with_ellipsis(&text, EMBED_TITLE_LIMIT)
}

impl NotificationEmbedCreator for DefaultEmbedCreator {
    fn mod_case_embed(
        &self,
        case: &ModCase,
        action: RestAction,
        actor: &UserProfile,
        subject: &UserProfile,
        is_internal: bool,
    ) -> serenity::CreateEmbed {
        let description = format!(
            "A **{}** case for {} has been {}.",
            case.punishment_type.display_name(),
            user_mention(case.user_id),
            action.past_tense()
        );

        let mut embed = if is_internal {
            base_embed(action, actor)
        } else {
            serenity::CreateEmbed::new().color(action_color(action))
        };

        embed = embed
            .title(title(format!(
                "{} {}",
                format_case_label(case.case_id),
                sanitize_mentions(&case.title)
            )))
            .url(self.settings.case_url(case.guild_id, case.case_id))
            .description(description)
            .field("Punishment", case.punishment_type.display_name(), true);

        if let Some(until) = case.punished_until {
            embed = embed.field("Until", discord_timestamp(until.timestamp(), 'f'), true);
        }

        embed = embed.field("Description", embed_field_text(&case.description), false);

        if is_internal {
            embed = embed
                .field("Moderator", user_mention(actor.id), true)
                .field("Target", format!("{} ({})", user_mention(subject.id), subject.id), true);
        }

        if let Some(url) = subject.avatar_url.as_deref() {
            embed = embed.thumbnail(url);
        }

        embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Case {}",
            format_case_label(case.case_id)
        )))
    }

    fn comment_embed(
        &self,
        comment: &ModCaseComment,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed {
        base_embed(action, actor)
            .title(title(format!(
                "Comment {} on case {}",
                action.past_tense(),
                format_case_label(comment.case_id)
            )))
            .url(self.settings.case_url(comment.guild_id, comment.case_id))
            .field("Comment", embed_field_text(&comment.message), false)
            .field("Author", user_mention(comment.user_id), true)
    }

    fn file_embed(
        &self,
        filename: &str,
        case: &ModCase,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed {
        base_embed(action, actor)
            .title(title(format!(
                "File {} on case {}",
                action.past_tense(),
                format_case_label(case.case_id)
            )))
            .url(self.settings.case_url(case.guild_id, case.case_id))
            .field("File", embed_field_text(filename), false)
    }

    fn user_note_embed(
        &self,
        note: &UserNote,
        action: RestAction,
        actor: &UserProfile,
        subject: &UserProfile,
    ) -> serenity::CreateEmbed {
        let mut embed = base_embed(action, actor)
            .title(title(format!(
                "User note {} for {}",
                action.past_tense(),
                sanitize_mentions(subject.display_name())
            )))
            .description(format!("{} ({})", user_mention(note.user_id), note.user_id))
            .field("Note", embed_field_text(&note.description), false);

        if let Some(url) = subject.avatar_url.as_deref() {
            embed = embed.thumbnail(url);
        }

        embed
    }

    fn user_mapping_embed(
        &self,
        mapping: &UserMapping,
        action: RestAction,
        actor: &UserProfile,
    ) -> serenity::CreateEmbed {
        base_embed(action, actor)
            .title(title(format!("User mapping {}", action.past_tense())))
            .description(format!(
                "{} ↔ {}",
                user_mention(mapping.user_a),
                user_mention(mapping.user_b)
            ))
            .field("Reason", embed_field_text(&mapping.reason), false)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use super::{DefaultEmbedCreator, NotificationEmbedCreator, action_color};
    use crate::discord::UserProfile;
    use crate::settings::NotifySettings;
    use casewire_database::model::cases::{ModCase, PunishmentType, RestAction};
    use casewire_database::model::mappings::UserMapping;
    use casewire_utils::embed::{CREATED_EMBED_COLOR, DELETED_EMBED_COLOR};

    fn profile(id: u64, name: &str) -> UserProfile {
        UserProfile {
            id,
            username: name.to_owned(),
            global_name: None,
            avatar_url: Some(format!("https://cdn.example.org/{id}.png")),
            bot: false,
        }
    }

    fn ban_case() -> ModCase {
        ModCase {
            id: 1,
            case_id: 4,
            guild_id: 100,
            user_id: 200,
            mod_id: 300,
            title: "Raid".to_owned(),
            description: "Joined with alts".to_owned(),
            punishment_type: PunishmentType::Ban,
            punished_until: Some(Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(),
        }
    }

    fn creator() -> DefaultEmbedCreator {
        DefaultEmbedCreator::new(NotifySettings::new(
            "$",
            "https://cases.example.org",
            chrono_tz::Tz::UTC,
        ))
    }

    fn field_names(embed: &Value) -> Vec<String> {
        embed["fields"]
            .as_array()
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|field| field["name"].as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn internal_case_embed_names_the_moderator() {
        let embed = creator().mod_case_embed(
            &ban_case(),
            RestAction::Created,
            &profile(300, "mod"),
            &profile(200, "target"),
            true,
        );
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["author"]["name"], "mod");
        assert_eq!(json["title"], "#4 Raid");
        assert_eq!(json["url"], "https://cases.example.org/guilds/100/cases/4");
        assert_eq!(json["color"], CREATED_EMBED_COLOR);
        let names = field_names(&json);
        assert!(names.contains(&"Moderator".to_owned()));
        assert!(names.contains(&"Until".to_owned()));
    }

    #[test]
    fn public_case_embed_hides_the_moderator() {
        let embed = creator().mod_case_embed(
            &ban_case(),
            RestAction::Updated,
            &profile(300, "mod"),
            &profile(200, "target"),
            false,
        );
        let json = serde_json::to_value(&embed).unwrap();

        assert!(json.get("author").is_none_or(Value::is_null));
        assert!(!field_names(&json).contains(&"Moderator".to_owned()));
    }

    #[test]
    fn mapping_embed_mentions_both_users() {
        let mapping = UserMapping {
            id: 9,
            guild_id: 100,
            user_a: 1,
            user_b: 2,
            creator_id: 300,
            reason: "same IP".to_owned(),
            updated_at: Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(creator().user_mapping_embed(
            &mapping,
            RestAction::Deleted,
            &profile(300, "mod"),
        ))
        .unwrap();

        assert_eq!(json["description"], "<@1> ↔ <@2>");
        assert_eq!(json["color"], DELETED_EMBED_COLOR);
        assert_eq!(action_color(RestAction::Deleted), DELETED_EMBED_COLOR);
    }
}
