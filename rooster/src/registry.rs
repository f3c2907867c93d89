use std::sync::Arc;

use crate::config::RoosterConfig;
use crate::handler::Handler;
use crate::module::{Actions, Fights, Logs, Skills, States, Stats};
use crate::rooster::Rooster;

/// One handler per entity kind, sharing a single configuration
#[derive(Clone)]
pub struct Roosters {
    pub fights: Handler<Fights>,
    pub logs: Handler<Logs>,
    pub states: Handler<States>,
    pub actions: Handler<Actions>,
    pub stats: Handler<Stats>,
    pub skills: Handler<Skills>,
}

/// Store implementations backing a [`Roosters`] registry
pub struct Stores {
    pub fights: Arc<dyn Rooster<Fights>>,
    pub logs: Arc<dyn Rooster<Logs>>,
    pub states: Arc<dyn Rooster<States>>,
    pub actions: Arc<dyn Rooster<Actions>>,
    pub stats: Arc<dyn Rooster<Stats>>,
    pub skills: Arc<dyn Rooster<Skills>>,
}

impl Roosters {
    pub fn new(stores: Stores, config: RoosterConfig) -> Self {
        Self {
            fights: Handler::new(stores.fights, config.clone()),
            logs: Handler::new(stores.logs, config.clone()),
            states: Handler::new(stores.states, config.clone()),
            actions: Handler::new(stores.actions, config.clone()),
            stats: Handler::new(stores.stats, config.clone()),
            skills: Handler::new(stores.skills, config),
        }
    }
}
