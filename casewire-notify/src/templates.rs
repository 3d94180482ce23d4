use chrono_tz::Tz;

use casewire_database::model::cases::{ModCase, PunishmentType};
use casewire_database::model::guild_config::Language;
use casewire_utils::formatting::{format_case_label, sanitize_mentions, truncate_with_ellipsis};
use casewire_utils::time::format_in_timezone;

use crate::discord::GuildProfile;

/// Discord rejects direct messages longer than this.
pub const DM_MESSAGE_LIMIT: usize = 2000;
const DM_TITLE_LIMIT: usize = 256;

/// Direct message variants, one per punishment/expiry combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DmTemplate {
    Warn,
    MuteTemp,
    MutePerm,
    Kick,
    BanTemp,
    BanPerm,
}

impl DmTemplate {
    /// Pick the template for a case. Kicks and warnings have no expiry
    /// concept, so the expiry is ignored for them.
    pub fn select(punishment_type: PunishmentType, has_expiry: bool) -> Self {
        match (punishment_type, has_expiry) {
            (PunishmentType::Mute, true) => DmTemplate::MuteTemp,
            (PunishmentType::Mute, false) => DmTemplate::MutePerm,
            (PunishmentType::Ban, true) => DmTemplate::BanTemp,
            (PunishmentType::Ban, false) => DmTemplate::BanPerm,
            (PunishmentType::Kick, _) => DmTemplate::Kick,
            (PunishmentType::Warn, _) => DmTemplate::Warn,
        }
    }

    pub fn for_case(case: &ModCase) -> Self {
        Self::select(case.punishment_type, case.is_temporary())
    }
}

/// Everything a direct message may reference.
#[derive(Clone, Debug)]
pub struct DmContext<'a> {
    pub case: &'a ModCase,
    pub guild: &'a GuildProfile,
    pub prefix: &'a str,
    pub case_url: String,
    pub timezone: Tz,
}

impl DmContext<'_> {
    fn until(&self) -> String {
        self.case
            .punished_until
            .map(|until| format_in_timezone(until, self.timezone))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn render_dm(&self, template: DmTemplate, ctx: &DmContext<'_>) -> String {
        let guild = sanitize_mentions(&ctx.guild.name);
        let label = format_case_label(ctx.case.case_id);
        let title = truncate_with_ellipsis(&sanitize_mentions(&ctx.case.title), DM_TITLE_LIMIT);

        let headline = match self.language {
            Language::En => english_headline(template, &guild, &ctx.until()),
            Language::De => german_headline(template, &guild, &ctx.until()),
        };

        let footer = match self.language {
            Language::En => format!(
                "Case {label}: {title}\nDetails: {url}\n\
                 Use `{prefix}report` in the server if you want to appeal.",
                url = ctx.case_url,
                prefix = ctx.prefix,
            ),
            Language::De => format!(
                "Fall {label}: {title}\nDetails: {url}\n\
                 Nutze `{prefix}report` auf dem Server, um Einspruch einzulegen.",
                url = ctx.case_url,
                prefix = ctx.prefix,
            ),
        };

        truncate_with_ellipsis(&format!("{headline}\n\n{footer}"), DM_MESSAGE_LIMIT)
    }
}

fn english_headline(template: DmTemplate, guild: &str, until: &str) -> String {
    match template {
        DmTemplate::Warn => format!("You have been warned in **{guild}**."),
        DmTemplate::MuteTemp => format!("You have been muted in **{guild}** until {until}."),
        DmTemplate::MutePerm => format!("You have been muted in **{guild}**."),
        DmTemplate::Kick => format!("You have been kicked from **{guild}**."),
        DmTemplate::BanTemp => format!("You have been banned from **{guild}** until {until}."),
        DmTemplate::BanPerm => format!("You have been permanently banned from **{guild}**."),
    }
}

fn german_headline(template: DmTemplate, guild: &str, until: &str) -> String {
    match template {
        DmTemplate::Warn => format!("Du wurdest auf **{guild}** verwarnt."),
        DmTemplate::MuteTemp => format!("Du wurdest auf **{guild}** bis {until} stummgeschaltet."),
        DmTemplate::MutePerm => format!("Du wurdest auf **{guild}** stummgeschaltet."),
        DmTemplate::Kick => format!("Du wurdest von **{guild}** gekickt."),
        DmTemplate::BanTemp => format!("Du wurdest von **{guild}** bis {until} gebannt."),
        DmTemplate::BanPerm => format!("Du wurdest dauerhaft von **{guild}** gebannt."),
    }
}
