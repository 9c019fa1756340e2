use super::model::{LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Site / payload-range filter
// ---------------------------------------------------------------------------

/// Return indices of records that pass both the site and the payload filter.
///
/// A record passes when:
/// * `site` is [`SiteSelection::All`], or the record's site equals it exactly
/// * its payload mass lies in `range` (inclusive)
///
/// Indices come out in input order. An unknown site or an inverted range
/// yields an empty vector.
pub fn filtered_indices(
    records: &[LaunchRecord],
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| site.matches(&r.site) && range.contains(r.payload_mass))
        .map(|(i, _)| i)
        .collect()
}

/// Borrow the records that pass both filters, in input order.
pub fn filter<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| site.matches(&r.site) && range.contains(r.payload_mass))
        .collect()
}

/// Site predicate only; the pie chart ignores the payload range.
pub fn filter_by_site<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    records.iter().filter(|r| site.matches(&r.site)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::four_launches;

    fn site(s: &str) -> SiteSelection {
        SiteSelection::from_value(s)
    }

    #[test]
    fn every_kept_record_satisfies_both_predicates() {
        let ds = four_launches();
        for sel in [SiteSelection::All, site("siteA"), site("siteB")] {
            let range = PayloadRange::new(1000.0, 9000.0);
            for r in filter(&ds.records, &sel, range) {
                assert!(range.contains(r.payload_mass));
                assert!(sel.matches(&r.site));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = four_launches();
        let sel = site("siteB");
        let range = PayloadRange::new(0.0, 5000.0);

        let once: Vec<LaunchRecord> =
            filter(&ds.records, &sel, range).into_iter().cloned().collect();
        let twice: Vec<LaunchRecord> =
            filter(&once, &sel, range).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }

    #[test]
    fn full_range_and_all_sites_returns_everything_in_order() {
        let ds = four_launches();
        let kept = filter(&ds.records, &SiteSelection::All, ds.full_range());
        assert_eq!(kept.len(), ds.len());
        for (kept, original) in kept.iter().zip(&ds.records) {
            assert_eq!(*kept, original);
        }
        assert_eq!(
            filtered_indices(&ds.records, &SiteSelection::All, ds.full_range()),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = four_launches();
        let idx = filtered_indices(&ds.records, &SiteSelection::All, PayloadRange::new(1500.0, 2500.0));
        assert_eq!(idx, vec![1, 2]);
    }

    #[test]
    fn unknown_site_yields_empty() {
        let ds = four_launches();
        assert!(filter(&ds.records, &site("siteC"), ds.full_range()).is_empty());
        assert!(filter(&ds.records, &site("sitea"), ds.full_range()).is_empty());
    }

    #[test]
    fn inverted_range_yields_empty() {
        let ds = four_launches();
        let kept = filter(&ds.records, &SiteSelection::All, PayloadRange::new(9000.0, 500.0));
        assert!(kept.is_empty());
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(filter(&[], &SiteSelection::All, PayloadRange::new(0.0, 1.0)).is_empty());
    }

    #[test]
    fn site_only_filter_ignores_payload() {
        let ds = four_launches();
        let kept = filter_by_site(&ds.records, &site("siteB"));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].payload_mass, 9000.0);
    }
}
