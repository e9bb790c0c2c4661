//! # datajobs-service
//!
//! Business logic service layer for DataJobs. The service orchestrates
//! the repository to implement application-level use cases: field
//! validation, id assignment, and the not-found mapping the HTTP layer
//! relies on.
//!
//! Services follow constructor injection — dependencies are provided at
//! construction time via `Arc` references.

pub mod datajob;

pub use datajob::DataJobService;
