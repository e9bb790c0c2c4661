//! # datajobs-entity
//!
//! Domain entity models for the DataJobs service. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod datajob;

pub use datajob::{DataJob, DataJobChanges, DataJobStatus, NewDataJob};
