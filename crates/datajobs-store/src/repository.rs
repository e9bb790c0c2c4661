//! Repository trait for data job storage backends.

use async_trait::async_trait;

use datajobs_core::AppResult;
use datajobs_core::types::DataJobId;
use datajobs_entity::{DataJob, DataJobChanges, DataJobStatus};

/// Storage backend for data jobs.
///
/// The trait is async so that database-backed implementations can be
/// substituted for the in-memory store without changing callers.
/// Entity-level validation is not a repository concern; callers pass
/// fully-built entities.
#[async_trait]
pub trait DataJobRepository: Send + Sync + 'static {
    /// Return all jobs in arbitrary order. Never fails.
    async fn find_all(&self) -> AppResult<Vec<DataJob>>;

    /// Return jobs whose status equals `status`; empty if none match.
    async fn find_by_status(&self, status: DataJobStatus) -> AppResult<Vec<DataJob>>;

    /// Find a job by its identifier.
    async fn find_by_id(&self, id: DataJobId) -> AppResult<Option<DataJob>>;

    /// Store a fully-built job.
    async fn insert(&self, job: DataJob) -> AppResult<DataJob>;

    /// Overwrite the mutable fields of an existing job.
    ///
    /// Returns `None` when no job with `id` exists; status and results
    /// are never touched.
    async fn update(&self, id: DataJobId, changes: DataJobChanges) -> AppResult<Option<DataJob>>;

    /// Remove the job with `id`. An absent id is a silent no-op.
    async fn remove(&self, id: DataJobId) -> AppResult<()>;

    /// Start a background process for the job.
    ///
    /// Stub surface for future background execution: reports whether the
    /// job exists and has **no side effect** on status or results.
    async fn start_process(&self, id: DataJobId) -> AppResult<bool>;

    /// Return the job's current status.
    ///
    /// Known gap carried over from the original system: an unknown id
    /// yields the default [`DataJobStatus::New`], indistinguishable from
    /// a genuinely new job. The service layer probes existence first so
    /// the HTTP surface still reports 404.
    async fn process_status(&self, id: DataJobId) -> AppResult<DataJobStatus>;

    /// Return the job's result lines, or an empty vec for an unknown id.
    async fn process_results(&self, id: DataJobId) -> AppResult<Vec<String>>;
}
