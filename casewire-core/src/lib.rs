use casewire_database::Database;
use casewire_notify::Announcer;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub announcer: Announcer,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
