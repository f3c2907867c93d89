use serde::{Deserialize, Serialize};
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, count, optional, required, text};
use super::Validate;

const MAX_OWNER_LENGTH: usize = 100;
/// Upper bound for strength, intelligence and initiative
const MAX_ATTRIBUTE: u32 = 1_000;
/// Upper bound for hp and mp pools
const MAX_POOL: u32 = 1_000_000;

const FIELDS: [&str; 6] = ["owner", "strength", "intelligence", "initiative", "hp", "mp"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateStatsDto {
    pub owner: String,
    #[serde(deserialize_with = "super::whole::u32")]
    pub strength: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub intelligence: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub initiative: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub hp: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub mp: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateStatsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub strength: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub intelligence: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub initiative: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub hp: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub mp: Option<u32>,
}

fn owner(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_OWNER_LENGTH, Some(1))
}

fn attribute(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_ATTRIBUTE)
}

fn pool(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_POOL)
}

impl Validate for CreateStatsDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "owner", owner)?;
        required(payload, "strength", attribute)?;
        required(payload, "intelligence", attribute)?;
        required(payload, "initiative", attribute)?;
        required(payload, "hp", pool)?;
        required(payload, "mp", pool)
    }
}

impl Validate for UpdateStatsDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "owner", owner)?;
        optional(payload, "strength", attribute)?;
        optional(payload, "intelligence", attribute)?;
        optional(payload, "initiative", attribute)?;
        optional(payload, "hp", pool)?;
        optional(payload, "mp", pool)
    }
}
