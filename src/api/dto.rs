//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::SiteOption;
use crate::query::OutcomeRate;

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the success pie chart
#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    /// Site selector, `ALL` when absent
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the payload scatter chart
#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    /// Site selector, `ALL` when absent
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (kg), dataset minimum when absent
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound (kg), dataset maximum when absent
    #[serde(default)]
    pub high: Option<f64>,
}

// ============================================
// WIDGET DTOs
// ============================================

/// Dropdown options response
#[derive(Debug, Serialize)]
pub struct SiteOptionsResponse {
    /// Initially selected value
    pub default: String,
    pub options: Vec<SiteOption>,
}

// ============================================
// STATS DTOs
// ============================================

/// Query parameters for the payload bucket breakdown
#[derive(Debug, Default, Deserialize)]
pub struct BucketParams {
    /// Bucket width in kg, slider step when absent
    #[serde(default)]
    pub bucket_kg: Option<f64>,
}

/// Success-rate breakdown response
#[derive(Debug, Serialize)]
pub struct RatesResponse {
    /// What the groups are keyed by: "site", "booster" or "payload"
    pub group_by: String,
    pub rates: Vec<OutcomeRate>,
    /// Group with the highest success rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_rate: Option<String>,
    /// Group with the lowest success rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_rate: Option<String>,
    /// Group with the most successful launches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_successes: Option<String>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Loaded dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetSummaryResponse {
    /// File the records were loaded from
    pub source: String,
    /// When the records were loaded (ISO 8601)
    pub loaded_at: String,
    pub records: usize,
    pub launch_sites: Vec<String>,
    pub min_payload_kg: f64,
    pub max_payload_kg: f64,
    pub successes: usize,
    pub failures: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status, "healthy" while serving
    pub status: String,
    /// File the launch records were loaded from
    pub source: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
