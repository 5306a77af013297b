//! Types for the service health endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service liveness report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceHealth {
    /// Service status label (e.g. `ok`)
    pub status: String,
    /// Server time the report was produced
    pub timestamp: DateTime<Utc>,
    /// Service uptime in seconds
    pub uptime: f64,
}
