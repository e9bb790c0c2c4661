//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create data job request body.
///
/// A caller-supplied `status` or `results` field is silently ignored;
/// created jobs always start as `New` with empty results.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataJobRequest {
    /// Display label.
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Path of the input to process.
    #[serde(default)]
    #[validate(length(min = 1, message = "filePathToProcess is required"))]
    pub file_path_to_process: String,
}

/// Update data job request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataJobRequest {
    /// New display label.
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// New input path.
    #[serde(default)]
    #[validate(length(min = 1, message = "filePathToProcess is required"))]
    pub file_path_to_process: String,
}
