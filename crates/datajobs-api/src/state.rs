//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use datajobs_core::config::AppConfig;
use datajobs_service::DataJobService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Data job service.
    pub datajob_service: Arc<DataJobService>,
}
