//! Document identifier format

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Store identifier: 24 lowercase hexadecimal characters
    static ref OBJECT_ID_REGEX: Regex = Regex::new(r"^[0-9a-f]{24}$").unwrap();
}

/// Returns true when `candidate` has the store's identifier shape.
pub fn is_object_id(candidate: &str) -> bool {
    OBJECT_ID_REGEX.is_match(candidate)
}
