//! # datajobs-store
//!
//! Storage layer for the DataJobs service. Defines the
//! [`DataJobRepository`] trait so persistence backends can be swapped
//! without touching the service or API layers, and provides the
//! in-memory implementation used by the server.

pub mod memory;
pub mod repository;

pub use memory::InMemoryDataJobStore;
pub use repository::DataJobRepository;
