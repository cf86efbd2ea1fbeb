use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::DataStore;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only datasets, shared by every request
    pub store: Arc<DataStore>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
