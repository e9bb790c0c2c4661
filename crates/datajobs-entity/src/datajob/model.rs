//! Data job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use datajobs_core::types::DataJobId;

use super::status::DataJobStatus;

/// A tracked unit of work over an input file.
///
/// The store is the sole owner of `DataJob` values; callers receive
/// clones, never shared references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataJob {
    /// Unique job identifier, assigned at creation and immutable.
    pub id: DataJobId,
    /// Display label.
    pub name: String,
    /// Path of the input to process. Never validated or opened here.
    pub file_path_to_process: String,
    /// Current lifecycle status.
    pub status: DataJobStatus,
    /// Output lines produced by processing. Always empty until a real
    /// background worker exists.
    pub results: Vec<String>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl DataJob {
    /// Build a fresh job from creation data.
    ///
    /// Assigns a new identifier and forces status to [`DataJobStatus::New`]
    /// with empty results, regardless of anything the caller supplied.
    pub fn create(new: NewDataJob) -> Self {
        let now = Utc::now();
        Self {
            id: DataJobId::new(),
            name: new.name,
            file_path_to_process: new.file_path_to_process,
            status: DataJobStatus::New,
            results: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place. Status and results are untouched.
    pub fn apply(&mut self, changes: DataJobChanges) {
        self.name = changes.name;
        self.file_path_to_process = changes.file_path_to_process;
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDataJob {
    /// Display label.
    pub name: String,
    /// Path of the input to process.
    pub file_path_to_process: String,
}

/// Mutable fields of an existing job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataJobChanges {
    /// New display label.
    pub name: String,
    /// New input path.
    pub file_path_to_process: String,
}
