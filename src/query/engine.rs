//! Query Engine
//!
//! The two chart queries over the launch table. Both are pure functions of
//! their inputs; `QueryEngine` only binds them to a shared dataset.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use super::selector::{PayloadRange, SiteSelector};
use crate::dataset::{Dataset, LaunchRecord, Outcome};

/// Success/failure counts for one site selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SiteAggregate {
    pub failure: usize,
    pub success: usize,
}

impl SiteAggregate {
    /// Count for a single outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Failure => self.failure,
            Outcome::Success => self.success,
        }
    }

    pub fn total(&self) -> usize {
        self.failure + self.success
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Labeled buckets, `Failure` first
    pub fn buckets(&self) -> [(Outcome, usize); 2] {
        Outcome::ALL.map(|outcome| (outcome, self.count(outcome)))
    }

    /// Fraction of successful launches, `None` when there are no launches
    pub fn success_rate(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.success as f64 / self.total() as f64)
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Failure => self.failure += 1,
            Outcome::Success => self.success += 1,
        }
    }
}

/// Count launches by outcome within the selector's scope.
///
/// A site with no launches yields an all-zero aggregate.
pub fn aggregate_by_site(dataset: &Dataset, selector: &SiteSelector) -> SiteAggregate {
    dataset
        .records()
        .iter()
        .filter(|r| selector.matches(r))
        .fold(SiteAggregate::default(), |mut agg, r| {
            agg.record(r.outcome);
            agg
        })
}

/// Select the launches whose payload lies in `range` (inclusive), optionally
/// restricted to one site. Records come back in dataset order.
pub fn select_by_payload_and_site<'a>(
    dataset: &'a Dataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selector.matches(r))
        .collect()
}

/// Runs chart queries against a shared, immutable dataset
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
}

impl QueryEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Success/failure counts for the pie chart
    pub fn aggregate_by_site(&self, selector: &SiteSelector) -> SiteAggregate {
        let start = Instant::now();
        let aggregate = aggregate_by_site(&self.dataset, selector);

        tracing::debug!(
            site = %selector,
            success = aggregate.success,
            failure = aggregate.failure,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Aggregated outcomes by site"
        );

        aggregate
    }

    /// Points for the payload/outcome scatter chart
    pub fn select_by_payload_and_site(
        &self,
        selector: &SiteSelector,
        range: PayloadRange,
    ) -> Vec<&LaunchRecord> {
        let start = Instant::now();

        if range.is_inverted() {
            tracing::debug!(
                low = range.low,
                high = range.high,
                "Inverted payload range selects no launches"
            );
        }

        let records = select_by_payload_and_site(&self.dataset, selector, range);

        tracing::debug!(
            site = %selector,
            low = range.low,
            high = range.high,
            selected = records.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Selected launches by payload and site"
        );

        records
    }
}
