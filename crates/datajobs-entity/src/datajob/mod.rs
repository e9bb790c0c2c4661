//! Data job domain entities.

pub mod model;
pub mod status;

pub use model::{DataJob, DataJobChanges, NewDataJob};
pub use status::DataJobStatus;
