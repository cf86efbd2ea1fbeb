use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::TeamFilter;

// ============================================================================
// Query Types
// ============================================================================

/// `?team=` selector shared by the per-team endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TeamQuery {
    pub team: Option<String>,
}

impl TeamQuery {
    pub fn filter(&self) -> TeamFilter {
        TeamFilter::from_param(self.team.as_deref())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: i64,
    pub loaded_at: DateTime<Utc>,
    pub matches: usize,
    pub deliveries: usize,
    pub extras_type: bool,
}
