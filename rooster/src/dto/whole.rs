//! Serde helpers for counted fields
//!
//! JSON does not tell `40` from `40.0` apart once the rules have run, so
//! counted fields decode from any whole number that fits a `u32`.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

fn to_u32<E: Error>(n: f64) -> Result<u32, E> {
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return Err(E::custom(format!("expected a whole number in 0..={}", u32::MAX)));
    }
    Ok(n as u32)
}

pub(crate) fn u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    to_u32(f64::deserialize(deserializer)?)
}

pub(crate) fn option_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(to_u32)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Counted {
        #[serde(deserialize_with = "super::u32")]
        power: u32,
        #[serde(default, deserialize_with = "super::option_u32")]
        cost: Option<u32>,
    }

    #[test]
    fn test_accepts_whole_floats() {
        let counted: Counted = serde_json::from_value(json!({ "power": 40.0, "cost": 5 })).unwrap();
        assert_eq!(counted.power, 40);
        assert_eq!(counted.cost, Some(5));

        let counted: Counted = serde_json::from_value(json!({ "power": 1, "cost": null })).unwrap();
        assert_eq!(counted.cost, None);

        let counted: Counted = serde_json::from_value(json!({ "power": 1 })).unwrap();
        assert_eq!(counted.cost, None);
    }

    #[test]
    fn test_rejects_fractions_and_negatives() {
        assert!(serde_json::from_value::<Counted>(json!({ "power": 40.5 })).is_err());
        assert!(serde_json::from_value::<Counted>(json!({ "power": -1 })).is_err());
        assert!(serde_json::from_value::<Counted>(json!({ "power": 1, "cost": 4_294_967_296u64 })).is_err());
    }
}
