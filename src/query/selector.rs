//! Query inputs: site selector and payload range

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{QueryError, QueryResult};
use crate::dataset::LaunchRecord;

/// Wire value of the "every site" sentinel
pub const ALL_SITES: &str = "ALL";

/// Lower end of the payload slider domain (kg)
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper end of the payload slider domain (kg)
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
/// Slider step and default bucket width (kg)
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Scope of a query: every site, or one exact site name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// Parse a dropdown value.
    ///
    /// `"ALL"` selects every site. Any other non-blank string is taken as an
    /// exact site name, whether or not the dataset contains it.
    pub fn parse(value: &str) -> QueryResult<Self> {
        if value == ALL_SITES {
            return Ok(SiteSelector::All);
        }
        if value.trim().is_empty() {
            return Err(QueryError::InvalidSelector(value.to_string()));
        }
        Ok(SiteSelector::Site(value.to_string()))
    }

    pub fn site(name: impl Into<String>) -> Self {
        SiteSelector::Site(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// Whether `record` falls inside this selector's scope
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => record.launch_site == *site,
        }
    }

    /// Dropdown value for this selector
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(site) => site,
        }
    }
}

impl FromStr for SiteSelector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload interval in kilograms
///
/// Bounds are taken as given: nothing is clamped to the slider domain and
/// `low > high` is allowed (it selects nothing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The full slider domain, `[0, 10000]`
    pub fn slider_domain() -> Self {
        Self::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    /// True when no value can satisfy the range
    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Outcome;

    #[test]
    fn test_parse_selector() {
        assert_eq!(SiteSelector::parse("ALL").unwrap(), SiteSelector::All);
        assert_eq!(
            SiteSelector::parse("KSC LC-39A").unwrap(),
            SiteSelector::site("KSC LC-39A")
        );
        // exact match only, no case folding
        assert_eq!(
            SiteSelector::parse("all").unwrap(),
            SiteSelector::site("all")
        );
        assert!(matches!(
            SiteSelector::parse(""),
            Err(QueryError::InvalidSelector(_))
        ));
        assert!(SiteSelector::parse("   ").is_err());
    }

    #[test]
    fn test_selector_matches() {
        let record = LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1");
        assert!(SiteSelector::All.matches(&record));
        assert!(SiteSelector::site("VAFB SLC-4E").matches(&record));
        assert!(!SiteSelector::site("KSC LC-39A").matches(&record));
    }

    #[test]
    fn test_selector_display_round_trips_wire_value() {
        assert_eq!(SiteSelector::All.to_string(), "ALL");
        assert_eq!(SiteSelector::site("CCAFS LC-40").to_string(), "CCAFS LC-40");
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }
}
