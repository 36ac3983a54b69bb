use std::path::PathBuf;

/// Compiled-in dashboard settings.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV loaded once at startup.
    pub dataset_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Payload slider bounds and step in kg.
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
        }
    }
}
