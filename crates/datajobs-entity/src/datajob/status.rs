//! Data job status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a data job.
///
/// `New` is the initial value. No operation in this service transitions a
/// job out of `New`; the remaining variants exist for the background
/// process surface, which is currently a stub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataJobStatus {
    /// Freshly created, not yet processed.
    #[default]
    New,
    /// Currently being processed.
    Running,
    /// Processing finished successfully.
    Completed,
    /// Processing finished with an error.
    Failed,
}

impl DataJobStatus {
    /// Return the status as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for DataJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataJobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Running" => Ok(Self::Running),
            "Completed" => Ok(Self::Completed),
            "Failed" => Ok(Self::Failed),
            other => Err(format!("Unknown data job status: {other}")),
        }
    }
}
