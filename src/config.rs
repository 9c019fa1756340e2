use std::path::PathBuf;

use clap::Parser;

use crate::data::model::{ALL_SITES, LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Command-line configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Parser)]
#[command(name = "launch-dash")]
#[command(about = "SpaceX launch records dashboard", long_about = None)]
pub struct DashboardConfig {
    /// Launch table to load (.csv, .json or .parquet)
    #[arg(short, long, env = "LAUNCH_DASH_DATA", default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Initially selected launch site; "ALL" selects every site
    #[arg(long, default_value = ALL_SITES)]
    pub site: String,

    /// Lower bound of the payload slider (kg)
    #[arg(long, default_value_t = 0.0)]
    pub slider_min: f64,

    /// Upper bound of the payload slider (kg)
    #[arg(long, default_value_t = 10_000.0)]
    pub slider_max: f64,

    /// Slider step (kg)
    #[arg(long, default_value_t = 1_000.0)]
    pub slider_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("spacex_launch_dash.csv"),
            site: ALL_SITES.to_string(),
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
        }
    }
}

/// Payload slider bounds and step used by the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DashboardConfig {
    pub fn initial_site(&self) -> SiteSelection {
        SiteSelection::from_value(&self.site)
    }

    /// Configured bounds, widened so `[min_payload, max_payload]` always fits.
    pub fn slider_bounds(&self, dataset: &LaunchDataset) -> SliderBounds {
        let (mut min, mut max) = (self.slider_min, self.slider_max);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        if !dataset.is_empty() {
            min = min.min(dataset.min_payload);
            max = max.max(dataset.max_payload);
        }
        SliderBounds {
            min,
            max,
            step: if self.slider_step > 0.0 { self.slider_step } else { 1.0 },
        }
    }
}
