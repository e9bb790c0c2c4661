//! Newtype wrapper around [`uuid::Uuid`] for data job identifiers.
//!
//! Using a distinct type prevents accidentally passing an arbitrary UUID
//! where a `DataJobId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a data job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataJobId(pub Uuid);

impl DataJobId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Return a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DataJobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DataJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DataJobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for DataJobId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<DataJobId> for Uuid {
    fn from(id: DataJobId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_job_id_new() {
        let id1 = DataJobId::new();
        let id2 = DataJobId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_data_job_id_display() {
        let uuid = Uuid::new_v4();
        let id = DataJobId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_data_job_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: DataJobId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = DataJobId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: DataJobId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
