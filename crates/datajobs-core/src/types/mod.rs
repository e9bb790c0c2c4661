//! Shared domain-neutral types.

pub mod id;

pub use id::DataJobId;
