use serde::{Deserialize, Serialize};
use shared::ObjectId;
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, optional, required, text};
use super::Validate;

const MAX_NAME_LENGTH: usize = 30;
const MIN_NAME_LENGTH: usize = 2;
const MIN_ACTIONS: usize = 1;
const MAX_ACTIONS: usize = 10;

const FIELDS: [&str; 2] = ["name", "actions"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateSkillsDto {
    pub name: String,
    pub actions: Vec<ObjectId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateSkillsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ObjectId>>,
}

fn name(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_NAME_LENGTH, Some(MIN_NAME_LENGTH))
}

fn actions(v: &Validator<'_>) -> Result<(), ValidationError> {
    v.is_object_id_array()?
        .min_elements(MIN_ACTIONS)?
        .max_elements(MAX_ACTIONS)?;
    Ok(())
}

impl Validate for CreateSkillsDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "name", name)?;
        required(payload, "actions", actions)
    }
}

impl Validate for UpdateSkillsDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "name", name)?;
        optional(payload, "actions", actions)
    }
}
