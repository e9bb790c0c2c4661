//! Field validation for data job input.
//!
//! Explicit validation functions returning a structured result rather
//! than attribute-driven runtime reflection. The API layer also runs
//! `validator` on its DTOs; this check keeps the service safe for
//! non-HTTP callers.

use datajobs_core::{AppError, AppResult};

/// Validate the required fields shared by create and update.
///
/// Collects every failing field so the caller receives a complete list
/// in one pass.
pub fn require_fields(name: &str, file_path_to_process: &str) -> AppResult<()> {
    let mut field_errors: Vec<(&str, &str)> = Vec::new();

    if name.trim().is_empty() {
        field_errors.push(("name", "name must not be empty"));
    }
    if file_path_to_process.trim().is_empty() {
        field_errors.push((
            "filePathToProcess",
            "filePathToProcess must not be empty",
        ));
    }

    if field_errors.is_empty() {
        return Ok(());
    }

    let details = serde_json::Value::Object(
        field_errors
            .into_iter()
            .map(|(field, message)| {
                (
                    field.to_string(),
                    serde_json::Value::Array(vec![serde_json::Value::String(
                        message.to_string(),
                    )]),
                )
            })
            .collect(),
    );

    Err(AppError::validation("Required fields are missing").with_details(details))
}
