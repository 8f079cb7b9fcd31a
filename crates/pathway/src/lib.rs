#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate nanoid;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

mod result;
pub use result::*;

pub mod config;
pub mod database;
pub mod events;
pub mod r#impl;
pub mod models;
pub mod util;

#[cfg(test)]
pub mod test;

pub use config::Config;
pub use database::Database;
pub use events::PathwayEvent;

use async_std::channel::Sender;
use futures::lock::Mutex;
use std::sync::Arc;

use models::Profile;

/// Pathway state
///
/// The application context every store operation goes through: the
/// configuration, the backing database, an optional event channel, and
/// the slot holding the active session record.
#[derive(Default, Clone)]
pub struct Pathway {
    pub config: Config,
    pub database: Database,
    pub event_channel: Option<Sender<PathwayEvent>>,
    pub session: Arc<Mutex<Option<Profile>>>,
}

impl Pathway {
    pub async fn publish_event(&self, event: PathwayEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish a Pathway event: {:?}", err);
            }
        }
    }
}
