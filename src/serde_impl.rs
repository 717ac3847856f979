//! Serde support for faults (feature-gated)
//!
//! `Optional` and `Outcome` derive their serde impls. This module provides
//! `Serialize` and `Deserialize` for [`Fault`], which keeps only its kind,
//! message and context trail: the cause is an arbitrary error and is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use manganese::{Fault, Outcome};
//!
//! let outcome = Outcome::<i32>::from_fault(Fault::msg("disk full").context("saving"));
//! let json = serde_json::to_string(&outcome).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"fault":{"kind":"raised","message":"disk full","context":["saving"]}}"#
//! );
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fault::{Fault, FaultKind};

#[derive(Serialize)]
struct FaultRef<'a> {
    kind: FaultKind,
    message: &'a str,
    context: &'a [String],
}

#[derive(Deserialize)]
struct FaultOwned {
    kind: FaultKind,
    message: String,
    #[serde(default)]
    context: Vec<String>,
}

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FaultRef {
            kind: self.kind,
            message: &self.message,
            context: &self.context,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fault {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let owned = FaultOwned::deserialize(deserializer)?;
        Ok(Fault {
            kind: owned.kind,
            message: owned.message,
            cause: None,
            context: owned.context,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fault, FaultKind, Optional, Outcome};

    #[test]
    fn test_outcome_serialization_shape() {
        let value = Outcome::from_value(3);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"value":3}"#);

        let empty = Outcome::<i32>::empty();
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#""empty""#);

        let fault = Outcome::<i32>::from_fault(Fault::msg("disk full").context("saving"));
        assert_eq!(
            serde_json::to_string(&fault).unwrap(),
            r#"{"fault":{"kind":"raised","message":"disk full","context":["saving"]}}"#
        );
    }

    #[test]
    fn test_fault_deserialize_drops_cause() {
        let original = Fault::from_error(std::io::Error::other("gone"));
        let json = serde_json::to_string(&original).unwrap();
        let restored: Fault = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
        assert!(restored.cause().is_none());
    }

    #[test]
    fn test_fault_context_defaults_to_empty() {
        let restored: Fault =
            serde_json::from_str(r#"{"kind":"no_result","message":"nothing"}"#).unwrap();
        assert_eq!(restored.kind(), FaultKind::NoResult);
        assert!(restored.context_trail().is_empty());
    }

    #[test]
    fn test_optional_serialization_shape() {
        let value: Optional<&str> = Optional::from_value("x");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"value":"x"}"#);

        let parsed: Optional<u8> = serde_json::from_str(r#""empty""#).unwrap();
        assert!(parsed.is_empty());
    }
}
