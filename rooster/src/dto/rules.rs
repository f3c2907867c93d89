//! Reusable field rules shared by the create and update DTOs

use validation::{make, Expected, ValidationError, Validator, Value};

/// Field must be present, then satisfy `rule`.
pub(crate) fn required<F>(payload: &Value, key: &str, rule: F) -> Result<(), ValidationError>
where
    F: FnOnce(&Validator<'_>) -> Result<(), ValidationError>,
{
    make(payload.get(key), key).is_defined()?.check(rule)?;
    Ok(())
}

/// Field may be absent; when present it must satisfy `rule`.
pub(crate) fn optional<F>(payload: &Value, key: &str, rule: F) -> Result<(), ValidationError>
where
    F: FnOnce(&Validator<'_>) -> Result<(), ValidationError>,
{
    let value = payload.get(key);
    if value.is_absent() {
        return Ok(());
    }
    make(value, key).check(rule)?;
    Ok(())
}

/// An update must carry at least one of `keys`.
pub(crate) fn any_present(payload: &Value, keys: &[&str]) -> Result<(), ValidationError> {
    if keys.iter().all(|key| payload.get(key).is_absent()) {
        return Err(ValidationError::missing("data"));
    }
    Ok(())
}

pub(crate) fn text(v: &Validator<'_>, max: usize, min: Option<usize>) -> Result<(), ValidationError> {
    v.is_string()?.has_length(max, min)?;
    Ok(())
}

/// Whole number in `0..=max`.
pub(crate) fn count(v: &Validator<'_>, max: u32) -> Result<(), ValidationError> {
    v.is_number()?
        .is_between(f64::from(max), Some(0.0))?
        .check(whole_number)?;
    Ok(())
}

pub(crate) fn whole_number(v: &Validator<'_>) -> Result<(), ValidationError> {
    match v.value().as_f64() {
        Some(n) if n.fract() == 0.0 => Ok(()),
        _ => Err(ValidationError::wrong_type(v.name(), Expected::Number)),
    }
}
