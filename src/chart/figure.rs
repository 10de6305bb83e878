//! Pie and scatter figures

use serde::Serialize;

use crate::dataset::{LaunchRecord, Outcome};
use crate::query::{SiteAggregate, SiteSelector};

/// Hole ratio for the all-sites donut chart
const ALL_SITES_HOLE: f64 = 0.3;

pub const PIE_ALL_TITLE: &str = "Total Launch Success (All Sites)";
pub const SCATTER_TITLE: &str = "Launch Success vs Payload Mass";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Launch Success (0=Failure, 1=Success)";

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub class: u8,
    pub value: usize,
}

/// Success pie chart for one site selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    pub total: usize,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn success_by_site(aggregate: &SiteAggregate, selector: &SiteSelector) -> Self {
        let (title, hole) = match selector {
            SiteSelector::All => (PIE_ALL_TITLE.to_string(), Some(ALL_SITES_HOLE)),
            SiteSelector::Site(site) => (format!("Launch Success for {}", site), None),
        };

        let slices = aggregate
            .buckets()
            .iter()
            .map(|(outcome, count)| PieSlice {
                label: outcome.label().to_string(),
                class: outcome.class(),
                value: *count,
            })
            .collect();

        Self {
            title,
            site: selector.to_string(),
            hole,
            total: aggregate.total(),
            slices,
        }
    }

    /// Nothing to draw when no launch matched the selector
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// One scatter point, coloured by booster version category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version_category: String,
    pub launch_site: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            class: record.outcome.class(),
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
        }
    }
}

/// Payload vs outcome scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Order of the y categories, failure first
    pub category_order: Vec<u8>,
    /// Booster categories in first-seen order, for the legend
    pub color_keys: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterFigure {
    pub fn payload_vs_outcome(records: &[&LaunchRecord]) -> Self {
        let mut color_keys: Vec<String> = Vec::new();
        for record in records {
            if !color_keys.contains(&record.booster_version_category) {
                color_keys.push(record.booster_version_category.clone());
            }
        }

        Self {
            title: SCATTER_TITLE.to_string(),
            x_label: SCATTER_X_LABEL.to_string(),
            y_label: SCATTER_Y_LABEL.to_string(),
            category_order: Outcome::ALL.iter().map(|o| o.class()).collect(),
            color_keys,
            points: records.iter().map(|r| ScatterPoint::from(*r)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_all_sites() {
        let agg = SiteAggregate { failure: 1, success: 2 };
        let fig = PieFigure::success_by_site(&agg, &SiteSelector::All);

        assert_eq!(fig.title, PIE_ALL_TITLE);
        assert_eq!(fig.site, "ALL");
        assert_eq!(fig.hole, Some(0.3));
        assert_eq!(fig.total, 3);
        assert_eq!(fig.slices[0].label, "Failure");
        assert_eq!(fig.slices[0].value, 1);
        assert_eq!(fig.slices[1].label, "Success");
        assert_eq!(fig.slices[1].value, 2);
    }

    #[test]
    fn test_pie_single_site() {
        let agg = SiteAggregate { failure: 0, success: 0 };
        let fig = PieFigure::success_by_site(&agg, &SiteSelector::site("KSC LC-39A"));

        assert_eq!(fig.title, "Launch Success for KSC LC-39A");
        assert_eq!(fig.hole, None);
        assert!(fig.is_empty());
        assert_eq!(fig.slices.len(), 2);
    }

    #[test]
    fn test_scatter_points_and_legend() {
        let records = [
            LaunchRecord::new("siteA", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("siteA", 1500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("siteB", 3000.0, Outcome::Success, "FT"),
        ];
        let refs: Vec<&LaunchRecord> = records.iter().collect();
        let fig = ScatterFigure::payload_vs_outcome(&refs);

        assert_eq!(fig.title, SCATTER_TITLE);
        assert_eq!(fig.category_order, vec![0, 1]);
        assert_eq!(fig.color_keys, vec!["FT", "v1.1"]);
        assert_eq!(fig.points.len(), 3);
        assert_eq!(fig.points[1].payload_mass_kg, 1500.0);
        assert_eq!(fig.points[1].class, 0);
    }

    #[test]
    fn test_scatter_empty() {
        let fig = ScatterFigure::payload_vs_outcome(&[]);
        assert!(fig.points.is_empty());
        assert!(fig.color_keys.is_empty());
    }
}
