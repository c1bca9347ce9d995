//! Loosely typed write parameters
//!
//! Request bodies are forwarded to the store as a single JSON record and
//! expanded with `jsonb_populate_record`, so each value is parsed by the
//! target column's own input function. `"40"` lands in a numeric column and
//! `1234` in a text column exactly as the store would coerce them.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A JSON scalar as received from a client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_strings_numbers_and_bools() {
        let values: Vec<Scalar> = serde_json::from_value(json!(["AB12", 42, 37.5, true])).unwrap();
        assert_eq!(values[0], Scalar::from("AB12"));
        assert_eq!(values[1], Scalar::from(42));
        assert_eq!(values[3], Scalar::Bool(true));
    }

    #[test]
    fn rejects_structured_values() {
        assert!(serde_json::from_value::<Scalar>(json!({ "code": "AB12" })).is_err());
        assert!(serde_json::from_value::<Scalar>(json!([1, 2])).is_err());
    }

    #[test]
    fn serializes_back_unchanged() {
        let value = serde_json::to_value(Scalar::from(1234)).unwrap();
        assert_eq!(value, json!(1234));
        let value = serde_json::to_value(Scalar::from("40")).unwrap();
        assert_eq!(value, json!("40"));
    }
}
