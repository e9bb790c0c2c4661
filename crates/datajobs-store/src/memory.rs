//! In-memory data job store.

use async_trait::async_trait;
use dashmap::DashMap;

use datajobs_core::AppResult;
use datajobs_core::types::DataJobId;
use datajobs_entity::{DataJob, DataJobChanges, DataJobStatus};

use crate::repository::DataJobRepository;

/// In-memory implementation of [`DataJobRepository`].
///
/// Jobs live in a concurrent map keyed by id; all data is lost on
/// process restart. Values are cloned out so the map remains the sole
/// owner of stored entities.
#[derive(Debug, Default)]
pub struct InMemoryDataJobStore {
    jobs: DashMap<DataJobId, DataJob>,
}

impl InMemoryDataJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the store holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl DataJobRepository for InMemoryDataJobStore {
    async fn find_all(&self) -> AppResult<Vec<DataJob>> {
        Ok(self.jobs.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_by_status(&self, status: DataJobStatus) -> AppResult<Vec<DataJob>> {
        Ok(self
            .jobs
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: DataJobId) -> AppResult<Option<DataJob>> {
        Ok(self.jobs.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, job: DataJob) -> AppResult<DataJob> {
        self.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn update(&self, id: DataJobId, changes: DataJobChanges) -> AppResult<Option<DataJob>> {
        match self.jobs.get_mut(&id) {
            Some(mut entry) => {
                entry.value_mut().apply(changes);
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: DataJobId) -> AppResult<()> {
        self.jobs.remove(&id);
        Ok(())
    }

    async fn start_process(&self, id: DataJobId) -> AppResult<bool> {
        // Stub: no worker is dispatched and no state changes.
        Ok(self.jobs.contains_key(&id))
    }

    async fn process_status(&self, id: DataJobId) -> AppResult<DataJobStatus> {
        Ok(self
            .jobs
            .get(&id)
            .map(|entry| entry.value().status)
            .unwrap_or_default())
    }

    async fn process_results(&self, id: DataJobId) -> AppResult<Vec<String>> {
        Ok(self
            .jobs
            .get(&id)
            .map(|entry| entry.value().results.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datajobs_entity::NewDataJob;

    fn job(name: &str, path: &str) -> DataJob {
        DataJob::create(NewDataJob {
            name: name.to_string(),
            file_path_to_process: path.to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let store = InMemoryDataJobStore::new();
        let created = store.insert(job("job1", "/in/a.csv")).await.expect("insert");

        let found = store
            .find_by_id(created.id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found.name, "job1");
        assert_eq!(found.file_path_to_process, "/in/a.csv");
    }

    #[tokio::test]
    async fn test_find_by_status_returns_matching_jobs() {
        let store = InMemoryDataJobStore::new();
        store.insert(job("a", "/a")).await.expect("insert");
        store.insert(job("b", "/b")).await.expect("insert");

        let new_jobs = store
            .find_by_status(DataJobStatus::New)
            .await
            .expect("find");
        assert_eq!(new_jobs.len(), 2);

        let running = store
            .find_by_status(DataJobStatus::Running)
            .await
            .expect("find");
        assert!(running.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none_and_changes_nothing() {
        let store = InMemoryDataJobStore::new();
        store.insert(job("a", "/a")).await.expect("insert");

        let result = store
            .update(
                DataJobId::new(),
                DataJobChanges {
                    name: "x".to_string(),
                    file_path_to_process: "/x".to_string(),
                },
            )
            .await
            .expect("update");

        assert!(result.is_none());
        assert_eq!(store.len(), 1);
        let all = store.find_all().await.expect("find_all");
        assert_eq!(all[0].name, "a");
    }

    #[tokio::test]
    async fn test_update_overwrites_name_and_path_only() {
        let store = InMemoryDataJobStore::new();
        let created = store.insert(job("a", "/a")).await.expect("insert");

        let updated = store
            .update(
                created.id,
                DataJobChanges {
                    name: "renamed".to_string(),
                    file_path_to_process: "/b".to_string(),
                },
            )
            .await
            .expect("update")
            .expect("present");

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.file_path_to_process, "/b");
        assert_eq!(updated.status, DataJobStatus::New);
        assert!(updated.results.is_empty());
    }

    #[tokio::test]
    async fn test_remove_is_silent_for_unknown_id() {
        let store = InMemoryDataJobStore::new();
        store.remove(DataJobId::new()).await.expect("remove");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_remove_deletes_permanently() {
        let store = InMemoryDataJobStore::new();
        let created = store.insert(job("a", "/a")).await.expect("insert");

        store.remove(created.id).await.expect("remove");

        assert!(
            store
                .find_by_id(created.id)
                .await
                .expect("find")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_start_process_reports_existence_without_side_effects() {
        let store = InMemoryDataJobStore::new();
        let created = store.insert(job("a", "/a")).await.expect("insert");

        assert!(store.start_process(created.id).await.expect("start"));
        assert!(!store.start_process(DataJobId::new()).await.expect("start"));

        let after = store
            .find_by_id(created.id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(after.status, DataJobStatus::New);
        assert!(after.results.is_empty());
    }

    #[tokio::test]
    async fn test_process_status_defaults_to_new_for_unknown_id() {
        let store = InMemoryDataJobStore::new();
        let status = store
            .process_status(DataJobId::new())
            .await
            .expect("status");
        assert_eq!(status, DataJobStatus::New);
    }

    #[tokio::test]
    async fn test_process_results_empty_for_unknown_id() {
        let store = InMemoryDataJobStore::new();
        let results = store
            .process_results(DataJobId::new())
            .await
            .expect("results");
        assert!(results.is_empty());
    }
}
