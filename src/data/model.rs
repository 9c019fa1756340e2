use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column names as they appear in the source table
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Columns every source file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER_CATEGORY];

/// Wire value of the all-sites sentinel.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the numeric `class` value. Only 0 and 1 are accepted.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// Renders as the stringified class value (`"1"` / `"0"`), which is also the
/// pie-chart label for single-site breakdowns.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Kilograms; finite and non-negative after loading.
    pub payload_mass: f64,
    pub outcome: Outcome,
    /// Only used for grouping / colouring in the scatter chart.
    pub booster_category: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            outcome,
            booster_category: booster_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection values
// ---------------------------------------------------------------------------

/// The site dropdown value: every site, or exactly one label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Map a dropdown value to a selection; `"ALL"` is the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

/// Closed payload interval `[lo, hi]` in kilograms.
///
/// Never validated: a range with `lo > hi` simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass: f64) -> bool {
        self.lo <= payload_mass && payload_mass <= self.hi
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full record set with values derived once at load time.
///
/// Built a single time at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All records in source order.
    pub records: Vec<LaunchRecord>,
    /// Known launch-site labels.
    pub sites: BTreeSet<String>,
    pub booster_categories: BTreeSet<String>,
    pub min_payload: f64,
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Derive the site set and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites: BTreeSet<String> = records.iter().map(|r| r.site.clone()).collect();
        let booster_categories: BTreeSet<String> =
            records.iter().map(|r| r.booster_category.clone()).collect();

        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass), hi.max(r.payload_mass))
            })
        };

        LaunchDataset {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        }
    }

    /// `[min_payload, max_payload]`: the initial slider selection.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The four-record dataset used across the transformation tests.
    pub fn four_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("siteA", 500.0, Outcome::Success, "boosterX"),
            LaunchRecord::new("siteA", 1500.0, Outcome::Failure, "boosterY"),
            LaunchRecord::new("siteB", 2500.0, Outcome::Success, "boosterX"),
            LaunchRecord::new("siteB", 9000.0, Outcome::Failure, "boosterX"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_derives_sites_and_payload_bounds() {
        let ds = fixtures::four_launches();
        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.sites.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["siteA", "siteB"]
        );
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 9000.0);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.full_range(), PayloadRange::new(0.0, 0.0));
    }

    #[test]
    fn site_selection_matches_exactly() {
        let sel = SiteSelection::from_value("KSC LC-39A");
        assert!(sel.matches("KSC LC-39A"));
        assert!(!sel.matches("ksc lc-39a"));
        assert!(!sel.matches("KSC LC-39"));
        assert!(SiteSelection::from_value(ALL_SITES).matches("anything"));
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 3000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(3000.0));
        assert!(!range.contains(999.9));
        assert!(!PayloadRange::new(3000.0, 1000.0).contains(2000.0));
    }

    #[test]
    fn outcome_parses_only_binary_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.to_string(), "1");
    }
}
