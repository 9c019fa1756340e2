use crate::color::ColorMap;
use crate::config::SliderBounds;
use crate::data::aggregate::{PieChart, aggregate_outcomes};
use crate::data::filter::filtered_indices;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::data::scatter::{ScatterChart, project};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The two user-controlled inputs driving both charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub range: PayloadRange,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never replaced.
    pub dataset: LaunchDataset,

    pub slider: SliderBounds,

    pub selection: SelectionState,

    /// Pie chart for the current site (cached).
    pub pie: PieChart,

    /// Scatter chart for the current site and range (cached).
    pub scatter: ScatterChart,

    /// Indices of records in the scatter chart, for the records table.
    pub visible_indices: Vec<usize>,

    /// Booster category → colour.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Start with every site selected and the full payload range.
    pub fn new(dataset: LaunchDataset, slider: SliderBounds) -> Self {
        let selection = SelectionState {
            site: SiteSelection::All,
            range: dataset.full_range(),
        };
        let booster_colors = ColorMap::new(dataset.booster_categories.iter());
        let mut state = Self {
            pie: aggregate_outcomes(&dataset.records, &selection.site),
            scatter: project(&dataset.records, &selection.site, selection.range),
            visible_indices: Vec::new(),
            dataset,
            slider,
            selection,
            booster_colors,
        };
        state.refilter();
        state
    }

    /// Site changed: both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.selection.site {
            return;
        }
        log::debug!("Site selection: {site}");
        self.selection.site = site;
        self.pie = aggregate_outcomes(&self.dataset.records, &self.selection.site);
        self.refilter();
    }

    /// Range changed: only the scatter chart depends on it.
    pub fn set_range(&mut self, range: PayloadRange) {
        if range == self.selection.range {
            return;
        }
        log::debug!("Payload range: [{}, {}]", range.lo, range.hi);
        self.selection.range = range;
        self.refilter();
    }

    /// Recompute the scatter chart and `visible_indices`.
    fn refilter(&mut self) {
        let sel = &self.selection;
        self.scatter = project(&self.dataset.records, &sel.site, sel.range);
        self.visible_indices = filtered_indices(&self.dataset.records, &sel.site, sel.range);
        log::debug!(
            "{} of {} launches visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::model::fixtures::four_launches;

    fn state() -> AppState {
        let ds = four_launches();
        let slider = DashboardConfig::default().slider_bounds(&ds);
        AppState::new(ds, slider)
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let st = state();
        assert_eq!(st.selection.site, SiteSelection::All);
        assert_eq!(st.selection.range, PayloadRange::new(500.0, 9000.0));
        assert_eq!(st.scatter.points.len(), 4);
        assert_eq!(st.visible_indices, vec![0, 1, 2, 3]);
        assert_eq!(st.pie.slices.len(), 2);
    }

    #[test]
    fn range_change_leaves_pie_untouched() {
        let mut st = state();
        for site in [SiteSelection::All, SiteSelection::Site("siteA".into())] {
            st.set_site(site);
            let pie_before = st.pie.clone();
            st.set_range(PayloadRange::new(1000.0, 3000.0));
            assert_eq!(st.pie, pie_before);
            st.set_range(PayloadRange::new(0.0, 0.0));
            assert_eq!(st.pie, pie_before);
        }
    }

    #[test]
    fn range_change_updates_scatter() {
        let mut st = state();
        st.set_range(PayloadRange::new(1000.0, 3000.0));
        let payloads: Vec<f64> = st.scatter.points.iter().map(|p| p.payload_mass).collect();
        assert_eq!(payloads, vec![1500.0, 2500.0]);
        assert_eq!(st.visible_indices, vec![1, 2]);
    }

    #[test]
    fn site_change_updates_both_charts() {
        let mut st = state();
        st.set_site(SiteSelection::Site("siteA".into()));
        assert_eq!(st.pie.title, "Total Success Launches for Site siteA");
        assert_eq!(st.scatter.points.len(), 2);
        assert_eq!(st.visible_indices, vec![0, 1]);
    }
}
