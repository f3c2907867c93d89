use serde::{Deserialize, Serialize};
use validation::{ValidationError, Validator, Value};

use super::rules::{any_present, optional, required, text};
use super::Validate;

/// Maximum length for a log message
const MAX_MESSAGE_LENGTH: usize = 500;
/// Maximum length for the log target reference
const MAX_TARGET_LENGTH: usize = 100;

const FIELDS: [&str; 2] = ["message", "target"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateLogDto {
    pub message: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateLogDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

fn message(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_MESSAGE_LENGTH, Some(1))
}

fn target(v: &Validator<'_>) -> Result<(), ValidationError> {
    text(v, MAX_TARGET_LENGTH, Some(1))
}

impl Validate for CreateLogDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        required(payload, "message", message)?;
        required(payload, "target", target)
    }
}

impl Validate for UpdateLogDto {
    fn validate(payload: &Value) -> Result<(), ValidationError> {
        any_present(payload, &FIELDS)?;
        optional(payload, "message", message)?;
        optional(payload, "target", target)
    }
}
