//! Response DTOs with explicit, hand-written entity conversions.

use serde::{Deserialize, Serialize};

use datajobs_core::types::DataJobId;
use datajobs_entity::{DataJob, DataJobStatus};

/// Hypermedia link placeholder.
///
/// Part of the published wire shape; no endpoint populates it yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Link relation.
    pub rel: String,
    /// Target URL.
    pub href: String,
}

/// Data job wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataJobResponse {
    /// Unique job identifier.
    pub id: DataJobId,
    /// Display label.
    pub name: String,
    /// Path of the input to process.
    pub file_path_to_process: String,
    /// Current lifecycle status.
    pub status: DataJobStatus,
    /// Output lines produced by processing.
    pub results: Vec<String>,
    /// Hypermedia links (always empty in practice).
    pub links: Vec<Link>,
}

impl From<&DataJob> for DataJobResponse {
    fn from(job: &DataJob) -> Self {
        Self {
            id: job.id,
            name: job.name.clone(),
            file_path_to_process: job.file_path_to_process.clone(),
            status: job.status,
            results: job.results.clone(),
            links: Vec::new(),
        }
    }
}

impl From<DataJob> for DataJobResponse {
    fn from(job: DataJob) -> Self {
        Self::from(&job)
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use datajobs_entity::NewDataJob;

    #[test]
    fn test_response_shape_is_camel_case_with_empty_links() {
        let job = DataJob::create(NewDataJob {
            name: "job1".to_string(),
            file_path_to_process: "/in/a.csv".to_string(),
        });

        let response = DataJobResponse::from(&job);
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(json["name"], "job1");
        assert_eq!(json["filePathToProcess"], "/in/a.csv");
        assert_eq!(json["status"], "New");
        assert_eq!(json["results"], serde_json::json!([]));
        assert_eq!(json["links"], serde_json::json!([]));
        assert!(json.get("createdAt").is_none());
    }
}
