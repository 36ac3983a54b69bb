use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::model::LaunchDataset;
use crate::data::query::{
    payload_outcome, success_distribution, PayloadRange, PieSlice, SiteSelector,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Query results are cached and only recomputed when the control they depend
/// on changes.
pub struct AppState {
    /// Dataset loaded at startup. Read-only.
    pub dataset: LaunchDataset,

    /// Slider bounds and step.
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,

    /// Current dropdown selection.
    pub selector: SiteSelector,

    /// Current payload slider range.
    pub payload_range: PayloadRange,

    /// Success-distribution result for `selector`.
    pub pie: Vec<PieSlice>,

    /// Indices of records passing the payload/site filter.
    pub scatter_indices: Vec<usize>,

    /// Booster version category colours.
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: LaunchDataset, config: &DashboardConfig) -> Self {
        let payload_range = PayloadRange::new(dataset.min_payload, dataset.max_payload);
        let color_map = ColorMap::new(&dataset.booster_categories);

        let mut state = Self {
            dataset,
            slider_min: config.slider_min,
            slider_max: config.slider_max,
            slider_step: config.slider_step,
            selector: SiteSelector::All,
            payload_range,
            pie: Vec::new(),
            scatter_indices: Vec::new(),
            color_map,
        };
        state.refresh_pie();
        state.refresh_scatter();
        state
    }

    /// Dropdown changed: both charts depend on the selector.
    pub fn set_selector(&mut self, selector: SiteSelector) {
        if selector == self.selector {
            return;
        }
        if let SiteSelector::Site(site) = &selector {
            if !self.dataset.has_site(site) {
                log::warn!("Unknown launch site {site:?}; charts will be empty");
            }
        }
        self.selector = selector;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider moved: only the scatter plot depends on the payload range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = success_distribution(&self.dataset, &self.selector);
        log::debug!("pie: selector={} -> {} slices", self.selector, self.pie.len());
    }

    fn refresh_scatter(&mut self) {
        self.scatter_indices = payload_outcome(&self.dataset, self.payload_range, &self.selector);
        log::debug!(
            "scatter: selector={} range=[{}, {}] -> {} records",
            self.selector,
            self.payload_range.min,
            self.payload_range.max,
            self.scatter_indices.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::two_site_dataset;

    fn state() -> AppState {
        AppState::new(two_site_dataset(), &DashboardConfig::default())
    }

    #[test]
    fn starts_with_all_sites_and_full_payload_range() {
        let st = state();
        assert_eq!(st.selector, SiteSelector::All);
        assert_eq!(st.payload_range, PayloadRange::new(0.0, 9600.0));
        assert_eq!(st.pie.len(), 2);
        assert_eq!(st.scatter_indices.len(), st.dataset.len());
        assert_eq!(st.slider_max, 10000.0);
        assert_eq!(st.slider_step, 1000.0);
    }

    #[test]
    fn selector_change_refreshes_both_charts() {
        let mut st = state();
        st.set_selector(SiteSelector::parse("B"));
        assert_eq!(st.pie.iter().map(|s| s.count).sum::<usize>(), 2);
        assert_eq!(st.scatter_indices, vec![1, 4]);
    }

    #[test]
    fn range_change_refreshes_scatter_only() {
        let mut st = state();
        let pie_before = st.pie.clone();
        st.set_payload_range(PayloadRange::new(1000.0, 5000.0));
        assert_eq!(st.pie, pie_before);
        assert_eq!(st.scatter_indices, vec![1, 2]);
    }

    #[test]
    fn unknown_site_empties_both_charts() {
        let mut st = state();
        st.set_selector(SiteSelector::parse("Z"));
        assert!(st.pie.is_empty());
        assert!(st.scatter_indices.is_empty());
    }
}
