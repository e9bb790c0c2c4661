//! Data job use cases.

pub mod service;
pub mod validate;

pub use service::DataJobService;
