pub mod cases;
pub mod comments;
pub mod guild_config;
pub mod mappings;
pub mod notes;
