//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::dataset::Dataset;
use crate::query::QueryEngine;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Query engine over the loaded launch table
    pub engine: QueryEngine,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Where the dataset was loaded from
    pub source: String,
    /// When the dataset was loaded
    pub loaded_at: DateTime<Utc>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, source: impl Into<String>, config: ApiConfig) -> Self {
        Self {
            engine: QueryEngine::new(dataset),
            config: Arc::new(config),
            source: source.into(),
            loaded_at: Utc::now(),
            start_time: Instant::now(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.engine.dataset()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
