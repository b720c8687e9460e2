//! Arbitrary key-value documents (inventory `variables`, job `extra_vars`).
//!
//! A [`Document`] is always a JSON object. Clients may send either an object
//! or a string containing an encoded object; both are accepted and anything
//! else is rejected before it reaches the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// A validated JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Validate a raw JSON value as a document.
    ///
    /// `field` names the offending input in the error message.
    pub fn parse(field: &str, value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::String(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => Ok(Self(map)),
                _ => Err(CoreError::Validation(format!(
                    "{field} must be a JSON object"
                ))),
            },
            _ => Err(CoreError::Validation(format!(
                "{field} must be a JSON object"
            ))),
        }
    }

    /// Lenient variant of [`Document::parse`]: absent or malformed input
    /// becomes `None`.
    pub fn parse_lenient(value: Option<Value>) -> Option<Self> {
        value.and_then(|v| Self::parse("document", v).ok())
    }

    /// Like [`Document::parse_lenient`] but falls back to `{}`.
    pub fn or_empty(value: Option<Value>) -> Self {
        Self::parse_lenient(value).unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn object_is_accepted_verbatim() {
        let doc = Document::parse("variables", json!({"region": "eu", "count": 2})).unwrap();
        assert_eq!(doc.into_value(), json!({"region": "eu", "count": 2}));
    }

    #[test]
    fn encoded_object_string_is_decoded() {
        let doc = Document::parse("variables", json!("{\"a\": 1}")).unwrap();
        assert_eq!(doc.into_value(), json!({"a": 1}));
    }

    #[test]
    fn encoded_non_object_string_is_rejected() {
        assert_matches!(
            Document::parse("variables", json!("[1, 2]")),
            Err(CoreError::Validation(msg)) if msg == "variables must be a JSON object"
        );
        assert_matches!(
            Document::parse("variables", json!("not json")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn scalars_and_arrays_are_rejected() {
        for value in [json!(1), json!(true), json!(null), json!([{"a": 1}])] {
            assert_matches!(
                Document::parse("extra_vars", value),
                Err(CoreError::Validation(_))
            );
        }
    }

    #[test]
    fn or_empty_normalizes_bad_input() {
        assert_eq!(Document::or_empty(None), Document::default());
        assert_eq!(Document::or_empty(Some(json!(42))), Document::default());
        assert_eq!(Document::or_empty(Some(json!("oops"))), Document::default());
        assert_eq!(
            Document::or_empty(Some(json!({"env": "prod"}))).into_value(),
            json!({"env": "prod"})
        );
    }

    #[test]
    fn serializes_as_plain_object() {
        let doc = Document::parse("x", json!({"k": "v"})).unwrap();
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"k": "v"}));
        assert_eq!(serde_json::to_value(Document::default()).unwrap(), json!({}));
    }
}
