use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_55_30;

/// Color for notifications about newly created records.
pub const CREATED_EMBED_COLOR: u32 = 0x43_B5_81;

/// Color for notifications about edited records.
pub const UPDATED_EMBED_COLOR: u32 = 0xF0_A2_32;

/// Color for notifications about removed records.
pub const DELETED_EMBED_COLOR: u32 = 0xD8_3C_3E;

/// Build a plain reply embed with the default styling.
pub fn build_reply_embed(title: &str, description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
}
