//! Fluent field validation
//!
//! This crate checks a single named value against a chain of type, shape and
//! range predicates. The first violated predicate ends the chain with a
//! [`ValidationError`]; nothing is collected or repaired.
//!
//! # Usage
//!
//! ```ignore
//! use validation::{make, Value};
//!
//! let title = Value::from("Arena opening");
//! make(&title, "title")
//!     .is_defined()?
//!     .is_string()?
//!     .has_length(50, None)?;
//! ```
//!
//! Raw JSON payloads convert into [`Value`] so each field of an incoming
//! record gets its own chain:
//!
//! ```ignore
//! let payload = Value::from(serde_json::json!({ "name": "Slash", "power": 12 }));
//! make(payload.get("name"), "name").is_defined()?.is_string()?;
//! make(payload.get("power"), "power").is_defined()?.is_number()?.is_between(1000.0, Some(0.0))?;
//! ```

pub mod error;
pub mod identifiers;
pub mod validator;
pub mod value;

pub use error::{Expected, ValidationError};
pub use identifiers::is_object_id;
pub use validator::{make, Validator};
pub use value::Value;
