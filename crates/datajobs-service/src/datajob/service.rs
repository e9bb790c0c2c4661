//! Data job lifecycle management.

use std::sync::Arc;

use datajobs_core::types::DataJobId;
use datajobs_core::{AppError, AppResult};
use datajobs_entity::{DataJob, DataJobChanges, DataJobStatus, NewDataJob};
use datajobs_store::DataJobRepository;

use super::validate::require_fields;

/// Manages data job CRUD and the background-process stub surface.
///
/// Collapses the repository's absent-result cases into `NotFound`
/// errors so handlers can rely on a single lookup per request.
#[derive(Clone)]
pub struct DataJobService {
    /// Data job repository.
    repo: Arc<dyn DataJobRepository>,
}

impl DataJobService {
    /// Creates a new data job service.
    pub fn new(repo: Arc<dyn DataJobRepository>) -> Self {
        Self { repo }
    }

    /// Lists all data jobs.
    pub async fn list(&self) -> AppResult<Vec<DataJob>> {
        self.repo.find_all().await
    }

    /// Lists data jobs with the given status.
    pub async fn list_by_status(&self, status: DataJobStatus) -> AppResult<Vec<DataJob>> {
        self.repo.find_by_status(status).await
    }

    /// Gets a specific data job.
    pub async fn get(&self, id: DataJobId) -> AppResult<DataJob> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("DataJob not found"))
    }

    /// Creates a new data job.
    ///
    /// Assigns a fresh identifier and forces status `New` with empty
    /// results; any status a caller might supply is ignored upstream.
    pub async fn create(&self, new: NewDataJob) -> AppResult<DataJob> {
        require_fields(&new.name, &new.file_path_to_process)?;

        let job = DataJob::create(new);
        tracing::debug!(id = %job.id, name = %job.name, "Creating data job");
        self.repo.insert(job).await
    }

    /// Updates the name and file path of an existing data job.
    pub async fn update(&self, id: DataJobId, changes: DataJobChanges) -> AppResult<DataJob> {
        require_fields(&changes.name, &changes.file_path_to_process)?;

        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("DataJob not found"))
    }

    /// Deletes a data job.
    ///
    /// The repository removal is a silent no-op for unknown ids; the
    /// existence probe here is what surfaces 404 to API callers.
    pub async fn delete(&self, id: DataJobId) -> AppResult<()> {
        self.get(id).await?;
        tracing::debug!(id = %id, "Deleting data job");
        self.repo.remove(id).await
    }

    /// Starts a background process for a data job.
    ///
    /// Stub: no worker exists yet, so this only verifies the job and
    /// leaves status and results untouched.
    pub async fn start_process(&self, id: DataJobId) -> AppResult<()> {
        self.get(id).await?;

        let started = self.repo.start_process(id).await?;
        if !started {
            // The job vanished between probe and start, or a future real
            // implementation declined the request.
            return Err(AppError::validation(
                "Could not start the background process",
            ));
        }

        tracing::info!(id = %id, "Background process start requested (stub)");
        Ok(())
    }

    /// Gets the background-process status for a data job.
    pub async fn process_status(&self, id: DataJobId) -> AppResult<DataJobStatus> {
        self.get(id).await?;
        self.repo.process_status(id).await
    }

    /// Gets the background-process results for a data job.
    pub async fn process_results(&self, id: DataJobId) -> AppResult<Vec<String>> {
        self.get(id).await?;
        self.repo.process_results(id).await
    }
}
