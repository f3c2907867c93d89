use serde::{Deserialize, Serialize};
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, count, optional, required, text};
use super::Validate;

/// Maximum length for the character reference
const MAX_CHARACTER_LENGTH: usize = 100;
/// Upper bound for hp and mp pools
const MAX_POOL: u32 = 1_000_000;
/// Upper bound for initiative
const MAX_INITIATIVE: u32 = 1_000;

const FIELDS: [&str; 4] = ["character", "hp", "mp", "initiative"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateStateDto {
    pub character: String,
    #[serde(deserialize_with = "super::whole::u32")]
    pub hp: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub mp: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub initiative: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateStateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
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
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub initiative: Option<u32>,
}

fn character(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_CHARACTER_LENGTH, Some(1))
}

fn pool(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_POOL)
}

fn initiative(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_INITIATIVE)
}

impl Validate for CreateStateDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "character", character)?;
        required(payload, "hp", pool)?;
        required(payload, "mp", pool)?;
        required(payload, "initiative", initiative)
    }
}

impl Validate for UpdateStateDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "character", character)?;
        optional(payload, "hp", pool)?;
        optional(payload, "mp", pool)?;
        optional(payload, "initiative", initiative)
    }
}
