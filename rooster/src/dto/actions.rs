use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared::{ActionEffect, ActionTarget};
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, count, optional, required, text};
use super::Validate;

lazy_static! {
    /// Letters, digits, spaces, dashes and underscores
    static ref ACTION_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9 _-]+$").unwrap();
}

const MAX_NAME_LENGTH: usize = 30;
const MIN_NAME_LENGTH: usize = 2;
const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Upper bound for power and mana cost
const MAX_POWER: u32 = 1_000;

const FIELDS: [&str; 6] = ["name", "description", "target", "effect", "power", "mana_cost"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateActionDto {
    pub name: String,
    pub description: String,
    pub target: ActionTarget,
    pub effect: ActionEffect,
    #[serde(deserialize_with = "super::whole::u32")]
    pub power: u32,
    #[serde(deserialize_with = "super::whole::u32")]
    pub mana_cost: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateActionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ActionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ActionEffect>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub power: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::whole::option_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub mana_cost: Option<u32>,
}

fn name(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_string()?
        .has_length(MAX_NAME_LENGTH, Some(MIN_NAME_LENGTH))?
        .is_regex_compatible(
            &ACTION_NAME_REGEX,
            "name may only contain letters, digits, spaces, dashes and underscores",
        )?;
    Ok(())
}

fn description(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_DESCRIPTION_LENGTH, None)
}

fn target(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_string()?.is_part_of_enum(ActionTarget::ALL)?;
    Ok(())
}

fn effect(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_string()?.is_part_of_enum(ActionEffect::ALL)?;
    Ok(())
}

fn power(v: &Validator<'_>) -> Result<(), ValidationError> {
    count(v, MAX_POWER)
}

impl Validate for CreateActionDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "name", name)?;
        required(payload, "description", description)?;
        required(payload, "target", target)?;
        required(payload, "effect", effect)?;
        required(payload, "power", power)?;
        required(payload, "mana_cost", power)
    }
}

impl Validate for UpdateActionDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "name", name)?;
        optional(payload, "description", description)?;
        optional(payload, "target", target)?;
        optional(payload, "effect", effect)?;
        optional(payload, "power", power)?;
        optional(payload, "mana_cost", power)
    }
}
