//! Chainable field validator
//!
//! Each predicate returns the same validator on success so calls compose with
//! `?`. The first failure ends the chain; later predicates never run.

use regex::Regex;

use crate::error::{Expected, ValidationError};
use crate::identifiers::is_object_id;
use crate::value::Value;

/// One labelled value under validation.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    value: &'a Value,
    name: &'a str,
}

/// Start a validation chain for `value`, reported as `name` on failure.
pub fn make<'a>(value: &'a Value, name: &'a str) -> Validator<'a> {
    Validator::new(value, name)
}

impl<'a> Validator<'a> {
    pub fn new(value: &'a Value, name: &'a str) -> Self {
        Self { value, name }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    fn wrong_type(&self, expected: Expected) -> ValidationError {
        ValidationError::wrong_type(self.name, expected)
    }

    /// Fails with `MissingValue` when the value is absent.
    pub fn is_defined(&self) -> Result<Self, ValidationError> {
        if self.value.is_absent() {
            return Err(ValidationError::missing(self.name));
        }
        Ok(*self)
    }

    pub fn is_string(&self) -> Result<Self, ValidationError> {
        match self.value {
            Value::Text(_) => Ok(*self),
            _ => Err(self.wrong_type(Expected::String)),
        }
    }

    pub fn is_number(&self) -> Result<Self, ValidationError> {
        match self.value {
            Value::Number(_) => Ok(*self),
            _ => Err(self.wrong_type(Expected::Number)),
        }
    }

    pub fn is_boolean(&self) -> Result<Self, ValidationError> {
        match self.value {
            Value::Bool(_) => Ok(*self),
            _ => Err(self.wrong_type(Expected::Boolean)),
        }
    }

    /// Text in the 24 lowercase hex character identifier format.
    pub fn is_object_id(&self) -> Result<Self, ValidationError> {
        match self.value {
            Value::Text(s) if is_object_id(s) => Ok(*self),
            _ => Err(self.wrong_type(Expected::ObjectId)),
        }
    }

    pub fn is_array(&self) -> Result<Self, ValidationError> {
        self.sequence().map(|_| *self)
    }

    /// Sequence whose elements are all text. Empty sequences pass.
    pub fn is_string_array(&self) -> Result<Self, ValidationError> {
        self.every_element(
            |item| matches!(item, Value::Text(_)),
            Expected::StringElements,
        )
    }

    /// Sequence whose elements are all numbers. Empty sequences pass.
    pub fn is_number_array(&self) -> Result<Self, ValidationError> {
        self.every_element(
            |item| matches!(item, Value::Number(_)),
            Expected::NumberElements,
        )
    }

    /// Sequence whose elements are all identifiers. Empty sequences pass.
    pub fn is_object_id_array(&self) -> Result<Self, ValidationError> {
        self.every_element(
            |item| item.as_str().is_some_and(is_object_id),
            Expected::ObjectId,
        )
    }

    /// Legacy identifier-sequence check that fails when an element IS a
    /// valid identifier. Only for callers that still depend on that contract;
    /// everything else should use [`Validator::is_object_id_array`].
    pub fn is_object_id_array_inverted(&self) -> Result<Self, ValidationError> {
        self.every_element(
            |item| !item.as_str().is_some_and(is_object_id),
            Expected::ObjectId,
        )
    }

    /// Text (or sequence) length at most `max`, and at least `min` when given.
    pub fn has_length(&self, max: usize, min: Option<usize>) -> Result<Self, ValidationError> {
        let len = self
            .value
            .len()
            .ok_or_else(|| self.wrong_type(Expected::String))?;

        if out_of_bounds(len, max, min) {
            return Err(ValidationError::out_of_length(
                self.name,
                min.map(|m| m as f64),
                max as f64,
            ));
        }
        Ok(*self)
    }

    /// Number at most `max`, and at least `min` when given. Bounds are inclusive.
    pub fn is_between(&self, max: f64, min: Option<f64>) -> Result<Self, ValidationError> {
        let n = self
            .value
            .as_f64()
            .ok_or_else(|| self.wrong_type(Expected::Number))?;

        if out_of_bounds(n, max, min) {
            return Err(ValidationError::out_of_length(self.name, min, max));
        }
        Ok(*self)
    }

    /// Value equal to one of `allowed`. Members may be text or numbers.
    pub fn is_part_of_enum<I, S>(&self, allowed: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        let member = allowed
            .into_iter()
            .any(|candidate| Into::<Value>::into(candidate) == *self.value);

        if !member {
            return Err(self.wrong_type(Expected::EnumMember));
        }
        Ok(*self)
    }

    /// Text matching `regex`; otherwise fails with `message` as the error text.
    pub fn is_regex_compatible(
        &self,
        regex: &Regex,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let matched = self.value.as_str().is_some_and(|v| regex.is_match(v));

        if !matched {
            return Err(self.wrong_type(Expected::Pattern(message.to_string())));
        }
        Ok(*self)
    }

    pub fn min_elements(&self, amount: usize) -> Result<Self, ValidationError> {
        if self.length_for_count()? < amount {
            return Err(ValidationError::too_short(self.name, amount));
        }
        Ok(*self)
    }

    pub fn max_elements(&self, amount: usize) -> Result<Self, ValidationError> {
        if self.length_for_count()? > amount {
            return Err(ValidationError::too_long(self.name, amount));
        }
        Ok(*self)
    }

    /// Runs a caller supplied rule as one more link of the chain.
    pub fn check<F>(&self, rule: F) -> Result<Self, ValidationError>
    where
        F: FnOnce(&Self) -> Result<(), ValidationError>,
    {
        rule(self)?;
        Ok(*self)
    }

    fn sequence(&self) -> Result<&'a [Value], ValidationError> {
        self.value
            .as_sequence()
            .ok_or_else(|| self.wrong_type(Expected::Array))
    }

    fn every_element<P>(&self, predicate: P, expected: Expected) -> Result<Self, ValidationError>
    where
        P: Fn(&Value) -> bool,
    {
        let items = self.sequence()?;
        if items.iter().all(predicate) {
            Ok(*self)
        } else {
            Err(self.wrong_type(expected))
        }
    }

    fn length_for_count(&self) -> Result<usize, ValidationError> {
        self.value
            .len()
            .ok_or_else(|| self.wrong_type(Expected::Array))
    }
}

fn out_of_bounds<T: PartialOrd>(actual: T, max: T, min: Option<T>) -> bool {
    match min {
        Some(min) => actual < min || actual > max,
        None => actual > max,
    }
}
