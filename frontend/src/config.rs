use log::{debug, warn, Level};
use serde::Deserialize;

use crate::error::SliderError;

/// `data-slider-config` on `<body>`, as seen through `dataset`.
const CONFIG_DATASET_KEY: &str = "sliderConfig";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than `below` show `slides` cards at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Breakpoint {
    pub below: f64,
    pub slides: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub breakpoints: Vec<Breakpoint>,
    /// Used when the viewport is wider than every breakpoint.
    pub max_slides_per_view: usize,
    /// Pixels a drag must travel before it commits a step.
    pub commit_threshold: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint { below: 576.0, slides: 1 },
                Breakpoint { below: 992.0, slides: 2 },
            ],
            max_slides_per_view: 3,
            commit_threshold: 50.0,
        }
    }
}

impl SliderConfig {
    pub fn from_json(raw: &str) -> Result<Self, SliderError> {
        let mut config: SliderConfig = serde_json::from_str(raw)?;
        config.breakpoints.sort_by(|a, b| a.below.total_cmp(&b.below));
        Ok(config)
    }

    pub fn slides_per_view(&self, viewport_width: f64) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width < bp.below)
            .map_or(self.max_slides_per_view, |bp| bp.slides)
            .max(1)
    }
}

/// Reads overrides from the page, falling back to defaults.
pub fn load() -> SliderConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.dataset().get(CONFIG_DATASET_KEY));

    let Some(raw) = raw else {
        return SliderConfig::default();
    };

    match SliderConfig::from_json(&raw) {
        Ok(config) => {
            debug!("Loaded slider config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            SliderConfig::default()
        }
    }
}
