//! Required-field validation for create payloads.
//!
//! Create DTOs declare their rules with `#[derive(Validate)]`; [`check`]
//! flattens the resulting errors into a single [`CoreError::Validation`].

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validator rules and map failures to a
/// field-naming message.
///
/// When a field has several failing rules only the first message is kept.
/// Fields are reported in alphabetical order.
pub fn check<T: Validate>(input: &T) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let field = field.to_string();
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{field} is invalid"));
            (field, message)
        })
        .collect();
    messages.sort();

    let joined = messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ");
    Err(CoreError::Validation(joined))
}

/// Treat an empty string the same as an absent field.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
