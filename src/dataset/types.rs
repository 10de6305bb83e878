//! Core data types for the launch records table
//!
//! - `Outcome`: binary launch result
//! - `LaunchRecord`: one row of the table
//! - `Dataset`: the full, immutable table with its derived payload bounds

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{LoadError, LoadResult};

/// Binary launch result, stored as `class` in the source table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure = 0,
    Success = 1,
}

impl Outcome {
    /// Both outcomes, in chart bucket order
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// Numeric class value as it appears in the source table
    pub fn class(self) -> u8 {
        self as u8
    }

    /// Map a numeric class value back to an outcome
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Chart label for this outcome
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single launch record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name, e.g. `CCAFS LC-40`
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Launch result
    pub outcome: Outcome,
    /// Booster version family, e.g. `FT` or `B5`
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// The loaded launch records table
///
/// Built once and never mutated. `min_payload <= max_payload` always holds
/// because construction rejects empty tables and non-finite payloads.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Build a dataset from already-parsed records, keeping their order
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (idx, record) in records.iter().enumerate() {
            if !record.payload_mass_kg.is_finite() {
                return Err(LoadError::InvalidRow {
                    // header is line 1
                    line: idx as u64 + 2,
                    reason: format!("payload mass is not finite: {}", record.payload_mass_kg),
                });
            }
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    /// All records in source order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully built dataset
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-seen order
    pub fn launch_sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Whether any record was launched from `site`
    pub fn has_site(&self, site: &str) -> bool {
        self.records.iter().any(|r| r.launch_site == site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
        ]
    }

    #[test]
    fn test_outcome_class_mapping() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.label(), "Failure");
    }

    #[test]
    fn test_payload_bounds() {
        let dataset = Dataset::from_records(sample()).unwrap();
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
        assert!(dataset.min_payload() <= dataset.max_payload());
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_single_record_bounds_are_equal() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            2500.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        assert_eq!(dataset.min_payload(), dataset.max_payload());
    }

    #[test]
    fn test_launch_sites_first_seen_order() {
        let dataset = Dataset::from_records(sample()).unwrap();
        assert_eq!(
            dataset.launch_sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert!(dataset.has_site("KSC LC-39A"));
        assert!(!dataset.has_site("CCAFS SLC-40"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Dataset::from_records(Vec::new()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn test_non_finite_payload_rejected() {
        let mut records = sample();
        records[2].payload_mass_kg = f64::NAN;
        let err = Dataset::from_records(records).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { line: 4, .. }));
    }
}
