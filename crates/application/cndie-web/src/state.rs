//! Application state for the storefront server
//!
//! The catalogs are `static`, so the only thing the server tracks is when
//! it started.

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
