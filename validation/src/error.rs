//! Validation failure taxonomy
//!
//! Every variant names the offending field and carries enough parameters to
//! rebuild its message. The checked value itself is never stored, so errors
//! are safe to log and return to clients.

use std::fmt;

use thiserror::Error;

/// What a [`ValidationError::WrongType`] expected to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    String,
    Number,
    Boolean,
    ObjectId,
    Array,
    StringElements,
    NumberElements,
    EnumMember,
    /// Pattern mismatch reported with the caller's own message.
    Pattern(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::String => write!(f, "string"),
            Expected::Number => write!(f, "number"),
            Expected::Boolean => write!(f, "boolean"),
            Expected::ObjectId => write!(f, "objectId"),
            Expected::Array => write!(f, "array"),
            Expected::StringElements => write!(f, "elements not string"),
            Expected::NumberElements => write!(f, "elements not number"),
            Expected::EnumMember => write!(f, "incorrect type"),
            Expected::Pattern(message) => write!(f, "{}", message),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{name} is missing")]
    MissingValue { name: String },

    #[error("{}", wrong_type_message(.name, .expected))]
    WrongType { name: String, expected: Expected },

    #[error("{}", out_of_length_message(.name, .min, .max))]
    OutOfLength {
        name: String,
        min: Option<f64>,
        max: f64,
    },

    #[error("{name} should have at least {min} elements")]
    TooShort { name: String, min: usize },

    #[error("{name} should have at most {max} elements")]
    TooLong { name: String, max: usize },
}

impl ValidationError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingValue { name: name.into() }
    }

    pub fn wrong_type(name: impl Into<String>, expected: Expected) -> Self {
        Self::WrongType {
            name: name.into(),
            expected,
        }
    }

    pub fn out_of_length(name: impl Into<String>, min: Option<f64>, max: f64) -> Self {
        Self::OutOfLength {
            name: name.into(),
            min,
            max,
        }
    }

    pub fn too_short(name: impl Into<String>, min: usize) -> Self {
        Self::TooShort {
            name: name.into(),
            min,
        }
    }

    pub fn too_long(name: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            name: name.into(),
            max,
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingValue { name }
            | Self::WrongType { name, .. }
            | Self::OutOfLength { name, .. }
            | Self::TooShort { name, .. }
            | Self::TooLong { name, .. } => name,
        }
    }
}

fn wrong_type_message(name: &str, expected: &Expected) -> String {
    match expected {
        Expected::String => format!("{} should be a string", name),
        Expected::Number => format!("{} should be number", name),
        Expected::Boolean => format!("{} should be boolean", name),
        Expected::ObjectId => format!("{} should be objectId", name),
        Expected::Array => format!("{} should be array", name),
        Expected::StringElements => format!("{} elements are not typeof string", name),
        Expected::NumberElements => format!("{} elements are not typeof number", name),
        Expected::EnumMember => format!("{} has incorrect type", name),
        Expected::Pattern(message) => message.clone(),
    }
}

fn out_of_length_message(name: &str, min: &Option<f64>, max: &f64) -> String {
    match min {
        Some(min) => format!("{} should be between {} and {}", name, min, max),
        None => format!("{} should be at most {}", name, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::missing("age").to_string(), "age is missing");
        assert_eq!(
            ValidationError::wrong_type("id", Expected::ObjectId).to_string(),
            "id should be objectId"
        );
        assert_eq!(
            ValidationError::wrong_type("tags", Expected::StringElements).to_string(),
            "tags elements are not typeof string"
        );
        assert_eq!(
            ValidationError::out_of_length("title", None, 50.0).to_string(),
            "title should be at most 50"
        );
        assert_eq!(
            ValidationError::out_of_length("hp", Some(1.0), 2.5).to_string(),
            "hp should be between 1 and 2.5"
        );
        assert_eq!(
            ValidationError::too_short("actions", 1).to_string(),
            "actions should have at least 1 elements"
        );
        assert_eq!(
            ValidationError::too_long("actions", 10).to_string(),
            "actions should have at most 10 elements"
        );
    }

    #[test]
    fn test_expected_labels() {
        assert_eq!(Expected::String.to_string(), "string");
        assert_eq!(Expected::ObjectId.to_string(), "objectId");
        assert_eq!(Expected::NumberElements.to_string(), "elements not number");
        assert_eq!(Expected::EnumMember.to_string(), "incorrect type");
    }

    #[test]
    fn test_pattern_message_is_verbatim() {
        let err = ValidationError::wrong_type("name", Expected::Pattern("name is odd".into()));
        assert_eq!(err.to_string(), "name is odd");
        assert_eq!(err.field(), "name");
    }
}
