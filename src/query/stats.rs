//! Success-rate breakdowns
//!
//! Answers the dashboard's analysis questions: which site launches most
//! successfully, which payload ranges fare best or worst, and which booster
//! version category has the highest success rate.

use serde::Serialize;

use super::error::{QueryError, QueryResult};
use crate::dataset::{Dataset, LaunchRecord};

/// Launch totals and success rate for one group of launches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRate {
    /// Group label: site name, booster category, or `"lo-hi"` payload bucket
    pub key: String,
    pub total: usize,
    pub successes: usize,
    pub success_rate: f64,
}

impl OutcomeRate {
    fn new(key: String) -> Self {
        Self {
            key,
            total: 0,
            successes: 0,
            success_rate: 0.0,
        }
    }

    fn add(&mut self, record: &LaunchRecord) {
        self.total += 1;
        if record.outcome.is_success() {
            self.successes += 1;
        }
        self.success_rate = self.successes as f64 / self.total as f64;
    }

    pub fn failures(&self) -> usize {
        self.total - self.successes
    }
}

/// Group launches by `key_of`, keeping groups in first-seen order
fn group_by_key<F>(dataset: &Dataset, key_of: F) -> Vec<OutcomeRate>
where
    F: Fn(&LaunchRecord) -> &str,
{
    let mut groups: Vec<OutcomeRate> = Vec::new();
    for record in dataset.records() {
        let key = key_of(record);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.add(record),
            None => {
                let mut group = OutcomeRate::new(key.to_string());
                group.add(record);
                groups.push(group);
            }
        }
    }
    groups
}

/// Success rate per launch site, in first-seen site order
pub fn success_rate_by_site(dataset: &Dataset) -> Vec<OutcomeRate> {
    group_by_key(dataset, |r| r.launch_site.as_str())
}

/// Success rate per booster version category, in first-seen order
pub fn success_rate_by_booster(dataset: &Dataset) -> Vec<OutcomeRate> {
    group_by_key(dataset, |r| r.booster_version_category.as_str())
}

/// Upper bound on the number of buckets spanning the dataset's payloads
pub const MAX_PAYLOAD_BUCKETS: f64 = 100_000.0;

/// Success rate per payload bucket of `bucket_kg` width.
///
/// Bucket `k` covers `[k * bucket_kg, (k + 1) * bucket_kg)`. Buckets come back
/// in ascending payload order; buckets without launches are omitted. A width
/// so small that the payload range spans more than `MAX_PAYLOAD_BUCKETS`
/// buckets is rejected.
pub fn success_rate_by_payload_bucket(
    dataset: &Dataset,
    bucket_kg: f64,
) -> QueryResult<Vec<OutcomeRate>> {
    if !bucket_kg.is_finite() || bucket_kg <= 0.0 {
        return Err(QueryError::InvalidBucket(bucket_kg));
    }

    let first = (dataset.min_payload() / bucket_kg).floor();
    let last = (dataset.max_payload() / bucket_kg).floor();
    // bucket indices must stay exactly representable and the span bounded
    let extent = first.abs().max(last.abs());
    if !extent.is_finite()
        || extent > i64::MAX as f64 / 2.0
        || last - first >= MAX_PAYLOAD_BUCKETS
    {
        return Err(QueryError::InvalidBucket(bucket_kg));
    }

    let mut buckets: Vec<(i64, OutcomeRate)> = Vec::new();
    for record in dataset.records() {
        let index = (record.payload_mass_kg / bucket_kg).floor() as i64;
        match buckets.iter_mut().find(|(i, _)| *i == index) {
            Some((_, bucket)) => bucket.add(record),
            None => {
                let low = index as f64 * bucket_kg;
                let mut bucket = OutcomeRate::new(format!("{}-{}", low, low + bucket_kg));
                bucket.add(record);
                buckets.push((index, bucket));
            }
        }
    }

    buckets.sort_by_key(|(i, _)| *i);
    Ok(buckets.into_iter().map(|(_, bucket)| bucket).collect())
}

/// Group with the highest success rate; ties go to the group with more launches
pub fn best_by_success_rate(rates: &[OutcomeRate]) -> Option<&OutcomeRate> {
    rates.iter().max_by(|a, b| {
        a.success_rate
            .total_cmp(&b.success_rate)
            .then(a.total.cmp(&b.total))
    })
}

/// Group with the lowest success rate; ties go to the group with more launches
pub fn worst_by_success_rate(rates: &[OutcomeRate]) -> Option<&OutcomeRate> {
    rates.iter().min_by(|a, b| {
        a.success_rate
            .total_cmp(&b.success_rate)
            .then(b.total.cmp(&a.total))
    })
}

/// Group with the most successful launches
pub fn most_successes(rates: &[OutcomeRate]) -> Option<&OutcomeRate> {
    rates.iter().max_by_key(|r| r.successes)
}
