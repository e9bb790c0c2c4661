//! HTTP request handlers.

pub mod datajob;
pub mod health;
