//! Moderation notification delivery: direct messages to affected users and
//! webhook announcements to a guild's public and internal channels.

pub mod announcer;
pub mod discord;
pub mod embeds;
pub mod settings;
pub mod store;
pub mod templates;

pub use announcer::Announcer;
pub use discord::{CacheBehavior, DiscordApi, GuildProfile, SerenityDiscordApi, UserProfile};
pub use embeds::{DefaultEmbedCreator, NotificationEmbedCreator};
pub use settings::NotifySettings;
pub use store::GuildConfigStore;
pub use templates::{DmContext, DmTemplate, Translator};
