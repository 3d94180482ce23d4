pub mod notifications;
pub mod utility;

use casewire_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    /// Arguments after the command name.
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    notifications::notifywebhook::META,
    notifications::notifylanguage::META,
    notifications::notifytest::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        notifications::notifywebhook::notifywebhook(),
        notifications::notifylanguage::notifylanguage(),
        notifications::notifytest::notifytest(),
    ]
}
