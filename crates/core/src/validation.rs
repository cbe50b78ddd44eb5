//! Field rules for todo payloads.
//!
//! The rules are plain functions so they can be attached to request DTOs
//! through `#[validate(custom(...))]` and also called directly. Failures are
//! folded into [`CoreError::Validation`] with a short human-readable message.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Message returned when a sparse update names no fields at all.
pub const EMPTY_UPDATE_MESSAGE: &str = "At least one field must be provided";

/// Rejects todo content that is empty or whitespace only.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Fails unless at least one updatable field was supplied.
pub fn require_any_field(any_present: bool) -> Result<(), CoreError> {
    if any_present {
        Ok(())
    } else {
        Err(CoreError::Validation(EMPTY_UPDATE_MESSAGE.to_string()))
    }
}

/// Flatten `validator` field errors into a single [`CoreError::Validation`].
///
/// Messages are `field: reason` pairs joined by `"; "`, sorted by field name
/// so the output is stable.
pub fn into_core_error(errors: &ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid ({})", e.code),
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}
