//! Chart Figures
//!
//! Serializable descriptions of the dashboard widgets and charts. The page
//! script renders these directly; nothing here knows about HTTP.
//!
//! - **figure**: pie and scatter chart payloads
//! - **widgets**: dropdown options and payload slider spec

mod figure;
mod widgets;

pub use figure::{PieFigure, PieSlice, ScatterFigure, ScatterPoint};
pub use widgets::{site_options, SiteOption, SliderSpec, ALL_SITES_LABEL};
