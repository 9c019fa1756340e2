use std::collections::BTreeMap;

use super::filter::filter_by_site;
use super::model::{LaunchRecord, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Pie chart data
// ---------------------------------------------------------------------------

/// One labelled wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Build the pie chart for a site selection.
///
/// * `All`: each site's share of the dataset-wide success total, as a
///   percentage. Sites without successes are left out. Slices are ordered by
///   site label.
/// * `Site(s)`: raw outcome counts for that site, labelled `"1"` / `"0"`,
///   largest count first. An outcome that never occurs gets no slice.
///
/// The payload range is deliberately not an input.
pub fn aggregate_outcomes(records: &[LaunchRecord], site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => PieChart {
            title: "Total Success Launches by Site".to_string(),
            slices: success_share_by_site(records),
        },
        SiteSelection::Site(name) => PieChart {
            title: format!("Total Success Launches for Site {name}"),
            slices: outcome_counts(records, site),
        },
    }
}

fn success_share_by_site(records: &[LaunchRecord]) -> Vec<PieSlice> {
    let mut successes: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records.iter().filter(|r| r.outcome.is_success()) {
        *successes.entry(r.site.as_str()).or_default() += 1;
    }

    let total: usize = successes.values().sum();
    if total == 0 {
        log::warn!("No successful launches in {} records; pie chart left empty", records.len());
        return Vec::new();
    }

    successes
        .into_iter()
        .map(|(site, count)| PieSlice {
            label: site.to_string(),
            value: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

fn outcome_counts(records: &[LaunchRecord], site: &SiteSelection) -> Vec<PieSlice> {
    // First-appearance order, so the stable sort below breaks ties the same way.
    let mut counts: Vec<(Outcome, usize)> = Vec::with_capacity(2);
    for r in filter_by_site(records, site) {
        match counts.iter_mut().find(|(o, _)| *o == r.outcome) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.outcome, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(outcome, n)| PieSlice {
            label: outcome.to_string(),
            value: n as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::four_launches;

    fn slice(label: &str, value: f64) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn all_sites_is_share_of_global_successes() {
        let ds = four_launches();
        let pie = aggregate_outcomes(&ds.records, &SiteSelection::All);
        assert_eq!(pie.title, "Total Success Launches by Site");
        assert_eq!(pie.slices, vec![slice("siteA", 50.0), slice("siteB", 50.0)]);
    }

    #[test]
    fn single_site_counts_both_outcomes() {
        let ds = four_launches();
        let pie = aggregate_outcomes(&ds.records, &SiteSelection::Site("siteA".into()));
        assert_eq!(pie.title, "Total Success Launches for Site siteA");
        // Tied counts keep first-appearance order.
        assert_eq!(pie.slices, vec![slice("1", 1.0), slice("0", 1.0)]);
    }

    #[test]
    fn single_site_sorts_by_count_without_zero_fill() {
        let records = vec![
            LaunchRecord::new("s", 1.0, Outcome::Failure, "b"),
            LaunchRecord::new("s", 2.0, Outcome::Success, "b"),
            LaunchRecord::new("s", 3.0, Outcome::Success, "b"),
            LaunchRecord::new("t", 4.0, Outcome::Failure, "b"),
        ];
        let pie = aggregate_outcomes(&records, &SiteSelection::Site("s".into()));
        assert_eq!(pie.slices, vec![slice("1", 2.0), slice("0", 1.0)]);

        let pie = aggregate_outcomes(&records, &SiteSelection::Site("t".into()));
        assert_eq!(pie.slices, vec![slice("0", 1.0)]);
    }

    #[test]
    fn percentages_sum_to_hundred_and_skip_sites_without_success() {
        let records = vec![
            LaunchRecord::new("CCAFS LC-40", 100.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 200.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 300.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 400.0, Outcome::Failure, "FT"),
        ];
        let pie = aggregate_outcomes(&records, &SiteSelection::All);
        assert_eq!(pie.slices.len(), 2);
        assert!((pie.total() - 100.0).abs() < 1e-9);
        assert!((pie.slices[0].value - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_successes_gives_empty_pie() {
        let records = vec![
            LaunchRecord::new("a", 1.0, Outcome::Failure, "b"),
            LaunchRecord::new("b", 2.0, Outcome::Failure, "b"),
        ];
        let pie = aggregate_outcomes(&records, &SiteSelection::All);
        assert!(pie.is_empty());
        assert!(aggregate_outcomes(&[], &SiteSelection::All).is_empty());
    }

    #[test]
    fn unknown_site_gives_empty_pie() {
        let ds = four_launches();
        assert!(aggregate_outcomes(&ds.records, &SiteSelection::Site("nowhere".into())).is_empty());
    }
}
