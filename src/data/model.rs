use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome as encoded in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure = 0,
    Success = 1,
}

impl Outcome {
    /// Decode the 0/1 class value. Anything else is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        self as u8
    }

    /// Y coordinate in the payload/outcome scatter plot.
    pub fn as_f64(self) -> f64 {
        f64::from(self.class())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All launch records plus the summary values that parameterise the controls.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// Records in file order. Never mutated after construction.
    records: Vec<LaunchRecord>,
    pub min_payload: f64,
    pub max_payload: f64,
    /// Sorted distinct launch sites (dropdown entries).
    pub launch_sites: Vec<String>,
    /// Sorted distinct booster version categories (scatter colours).
    pub booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build the derived summaries from the loaded records.
    ///
    /// Returns `None` for an empty record list since payload bounds are
    /// undefined there.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut min_payload = first.payload_mass_kg;
        let mut max_payload = first.payload_mass_kg;
        let mut sites: BTreeSet<String> = BTreeSet::new();
        let mut booster_categories: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
            sites.insert(rec.launch_site.clone());
            booster_categories.insert(rec.booster_version_category.clone());
        }

        Some(LaunchDataset {
            records,
            min_payload,
            max_payload,
            launch_sites: sites.into_iter().collect(),
            booster_categories,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.launch_sites
            .binary_search_by(|s| s.as_str().cmp(site))
            .is_ok()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
            outcome: Outcome::from_class(class).unwrap(),
        }
    }

    /// Sites A and B: A has 3 successes and 1 failure, B has 2 successes.
    pub(crate) fn two_site_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, "v1.0", 1),
            record("B", 2500.0, "FT", 1),
            record("A", 4000.0, "FT", 0),
            record("A", 5300.0, "B4", 1),
            record("B", 9600.0, "B5", 1),
            record("A", 0.0, "v1.0", 1),
        ])
        .unwrap()
    }

    #[test]
    fn summaries_are_derived_from_records() {
        let ds = two_site_dataset();
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert_eq!(ds.launch_sites, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(
            ds.booster_categories.iter().cloned().collect::<Vec<_>>(),
            vec!["B4", "B5", "FT", "v1.0"]
        );
    }

    #[test]
    fn site_list_is_sorted_and_distinct() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 1.0, "FT", 1),
            record("CCAFS LC-40", 2.0, "FT", 1),
            record("VAFB SLC-4E", 3.0, "FT", 0),
            record("KSC LC-39A", 4.0, "FT", 1),
        ])
        .unwrap();
        assert_eq!(
            ds.launch_sites,
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert!(ds.has_site("KSC LC-39A"));
        assert!(!ds.has_site("Z"));
    }

    #[test]
    fn empty_records_have_no_dataset() {
        assert!(LaunchDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn outcome_decodes_only_zero_and_one() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.to_string(), "1");
        assert!(Outcome::Failure < Outcome::Success);
    }
}
