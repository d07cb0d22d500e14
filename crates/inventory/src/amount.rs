//! Quantity coercion at the input boundary.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::command::messages;

/// An amount as it arrives from a caller, before integer coercion.
///
/// JSON clients may send either `10` or `"10"`; HTML forms always send text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Integer(i64),
    Text(String),
}

impl RawAmount {
    /// Coerce to the stored integer representation.
    pub fn coerce(&self) -> DomainResult<i64> {
        match self {
            RawAmount::Integer(v) => Ok(*v),
            RawAmount::Text(s) => parse_amount(s),
        }
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Integer(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

/// Parse a base-10 integer, tolerating surrounding whitespace and a leading sign.
pub fn parse_amount(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(messages::INVALID_AMOUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_padded_and_signed_text() {
        assert_eq!(parse_amount(" 10 ").unwrap(), 10);
        assert_eq!(parse_amount("+5").unwrap(), 5);
        assert_eq!(parse_amount("-3").unwrap(), -3);
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["", "abc", "1.5", "10 apples", "0x10"] {
            let err = parse_amount(bad).unwrap_err();
            assert_eq!(err, DomainError::validation(messages::INVALID_AMOUNT), "input {bad:?}");
        }
    }

    #[test]
    fn deserializes_number_or_string() {
        let n: RawAmount = serde_json::from_str("10").unwrap();
        let s: RawAmount = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(n.coerce().unwrap(), 10);
        assert_eq!(s.coerce().unwrap(), 10);

        assert!(serde_json::from_str::<RawAmount>("1.5").is_err());
        assert!(serde_json::from_str::<RawAmount>("true").is_err());
        assert!(serde_json::from_str::<RawAmount>("[1]").is_err());
    }

    proptest! {
        #[test]
        fn any_i64_survives_text_coercion(v in any::<i64>()) {
            prop_assert_eq!(RawAmount::Text(v.to_string()).coerce().unwrap(), v);
        }
    }
}
