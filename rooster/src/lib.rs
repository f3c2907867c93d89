//! Per-entity CRUD contract with validated inputs
//!
//! Every entity kind (fights, logs, states, actions, stats, skills) is served
//! through the same [`Rooster`] trait. Stores implement the trait; callers go
//! through a [`Handler`], which validates raw JSON with the `validation` crate
//! before a store is ever touched.
//!
//! # Overview
//!
//! 1. **Modules** - the closed set of entity kinds and their associated types
//! 2. **DTOs** - add/update payloads with their field rules
//! 3. **Rooster** - the async storage contract implemented per kind
//! 4. **Handler** - raw JSON in, validated calls to a rooster out
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use rooster::{module::Logs, Handler, RoosterConfig};
//!
//! let logs = Handler::<Logs>::new(Arc::new(my_log_store), RoosterConfig::from_env()?);
//! let id = logs.add(serde_json::json!({ "message": "Slash hits", "target": "goblin" })).await?;
//! let entry = logs.get(&serde_json::json!(id.as_str())).await?;
//! ```
//!
//! A rejected payload yields [`RoosterError::Validation`] carrying the first
//! rule that failed.

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod module;
pub mod registry;
pub mod rooster;

pub use config::{ConfigError, RoosterConfig};
pub use dto::{parse, Validate};
pub use error::RoosterError;
pub use handler::Handler;
pub use module::{Module, ModuleKind};
pub use registry::{Roosters, Stores};
pub use rooster::{Page, Rooster};
