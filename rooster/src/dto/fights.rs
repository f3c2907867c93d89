use serde::{Deserialize, Serialize};
use shared::ObjectId;
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, count, optional, required, text};
use super::Validate;

/// Maximum length for the attacker reference
const MAX_ATTACKER_LENGTH: usize = 100;
/// Highest fight phase
const MAX_PHASE: u32 = 10_000;
/// Maximum number of states attached to a fight
const MAX_FIGHT_STATES: usize = 20;

const FIELDS: [&str; 4] = ["attacker", "phase", "active", "states"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateFightDto {
    pub attacker: String,
    #[serde(deserialize_with = "super::whole::u32")]
    pub phase: u32,
    pub active: bool,
    pub states: Vec<ObjectId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateFightDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub phase: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<ObjectId>>,
}

fn attacker(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_ATTACKER_LENGTH, Some(1))
}

fn phase(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_PHASE)
}

fn active(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_boolean()?;
    Ok(())
}

fn states(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_object_id_array()?.max_elements(MAX_FIGHT_STATES)?;
    Ok(())
}

impl Validate for CreateFightDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "attacker", attacker)?;
        required(payload, "phase", phase)?;
        required(payload, "active", active)?;
        required(payload, "states", states)
    }
}

impl Validate for UpdateFightDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "attacker", attacker)?;
        optional(payload, "phase", phase)?;
        optional(payload, "active", active)?;
        optional(payload, "states", states)
    }
}
