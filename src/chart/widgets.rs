//! Dropdown and range slider descriptions

use serde::Serialize;

use crate::dataset::Dataset;
use crate::query::{ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

pub const ALL_SITES_LABEL: &str = "All Sites";

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown options: `All Sites` first, then each site in first-seen order
pub fn site_options(dataset: &Dataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.launch_sites().into_iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}

/// Payload range slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Labeled tick positions
    pub marks: Vec<f64>,
    /// Initial selection: the dataset's payload bounds
    pub value: [f64; 2],
}

impl SliderSpec {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let steps = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP).round() as usize;
        let marks = (0..=steps)
            .map(|i| PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_STEP)
            .collect();

        Self {
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            marks,
            value: [dataset.min_payload(), dataset.max_payload()],
        }
    }
}
