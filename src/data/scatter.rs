use super::filter::filter;
use super::model::{LaunchRecord, Outcome, PayloadRange, SiteSelection};

/// One plotted launch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Group points by booster category, categories in order of first
    /// appearance and points in input order within each group.
    pub fn series_by_category(&self) -> Vec<(&str, Vec<&ScatterPoint>)> {
        let mut series: Vec<(&str, Vec<&ScatterPoint>)> = Vec::new();
        for p in &self.points {
            match series.iter_mut().find(|(cat, _)| *cat == p.booster_category) {
                Some((_, pts)) => pts.push(p),
                None => series.push((p.booster_category.as_str(), vec![p])),
            }
        }
        series
    }
}

/// Project the site/range-filtered records onto (payload, outcome, booster)
/// triples. One point per record, input order, nothing merged.
pub fn project(records: &[LaunchRecord], site: &SiteSelection, range: PayloadRange) -> ScatterChart {
    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Launch Success for {name}"),
    };

    let points = filter(records, site, range)
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass: r.payload_mass,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    ScatterChart { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::four_launches;

    #[test]
    fn range_selects_middle_launches() {
        let ds = four_launches();
        let chart = project(&ds.records, &SiteSelection::All, PayloadRange::new(1000.0, 3000.0));
        assert_eq!(chart.title, "Correlation between Payload and Success for all Sites");
        assert_eq!(
            chart.points,
            vec![
                ScatterPoint {
                    payload_mass: 1500.0,
                    outcome: Outcome::Failure,
                    booster_category: "boosterY".into(),
                },
                ScatterPoint {
                    payload_mass: 2500.0,
                    outcome: Outcome::Success,
                    booster_category: "boosterX".into(),
                },
            ]
        );
    }

    #[test]
    fn site_selection_restricts_points_and_titles_chart() {
        let ds = four_launches();
        let chart = project(&ds.records, &SiteSelection::Site("siteB".into()), ds.full_range());
        assert_eq!(chart.title, "Payload vs. Launch Success for siteB");
        let payloads: Vec<f64> = chart.points.iter().map(|p| p.payload_mass).collect();
        assert_eq!(payloads, vec![2500.0, 9000.0]);
    }

    #[test]
    fn series_group_by_first_seen_category() {
        let ds = four_launches();
        let chart = project(&ds.records, &SiteSelection::All, ds.full_range());
        let series = chart.series_by_category();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "boosterX");
        assert_eq!(series[0].1.len(), 3);
        assert_eq!(series[1].0, "boosterY");
        assert_eq!(series[1].1[0].payload_mass, 1500.0);
    }
}
