//! Input payloads for each entity kind
//!
//! Every kind has a create DTO (the entity minus its id and server managed
//! timestamps) and an update DTO (every create field optional). Raw JSON is
//! checked field by field with the `validation` crate before serde decodes it,
//! so a client gets the first broken rule rather than a serde message.

mod actions;
mod fights;
mod logs;
pub(crate) mod rules;
mod skills;
mod states;
mod stats;
mod whole;

use serde::de::DeserializeOwned;
use tracing::debug;
use validation::{ValidationError, Value};

use crate::error::RoosterError;

pub use actions::{CreateActionDto, UpdateActionDto};
pub use fights::{CreateFightDto, UpdateFightDto};
pub use logs::{CreateLogDto, UpdateLogDto};
pub use skills::{CreateSkillsDto, UpdateSkillsDto};
pub use states::{CreateStateDto, UpdateStateDto};
pub use stats::{CreateStatsDto, UpdateStatsDto};

/// Field rules a payload must satisfy before it is decoded.
pub trait Validate {
    /// Fail-fast check of a raw payload; the first violated rule is returned.
    fn validate(payload: &Value) -> Result<(), ValidationError>;
}

/// Validate `raw` against `D`'s rules, then decode it.
pub fn parse<D>(raw: serde_json::Value) -> Result<D, RoosterError>
where
    D: Validate + DeserializeOwned,
{
    D::validate(&Value::from(&raw))?;
    let data = serde_json::from_value(raw)?;
    debug!("Payload accepted as {}", std::any::type_name::<D>());
    Ok(data)
}
