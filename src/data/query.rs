use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, Outcome};

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// The site dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// Interpret a raw dropdown value; `"ALL"` is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => write!(f, "{ALL_SITES}"),
            SiteSelector::Site(s) => write!(f, "{s}"),
        }
    }
}

/// Inclusive payload mass interval in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        PayloadRange { min, max }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.min <= payload_kg && payload_kg <= self.max
    }
}

// ---------------------------------------------------------------------------
// Success-distribution query (pie chart)
// ---------------------------------------------------------------------------

/// What a pie slice counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SliceKey {
    /// Successful launches from this site.
    Site(String),
    /// Launches with this outcome at the selected site.
    Outcome(Outcome),
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceKey::Site(s) => write!(f, "{s}"),
            SliceKey::Outcome(o) => write!(f, "{o}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub key: SliceKey,
    pub count: usize,
}

/// Count launches for the pie chart.
///
/// * `All` → successful launches grouped by site.
/// * `Site(s)` → launches at `s` grouped by outcome.
///
/// Groups come back ordered by key; empty groups are not listed. An unknown
/// site yields no slices.
pub fn success_distribution(dataset: &LaunchDataset, selector: &SiteSelector) -> Vec<PieSlice> {
    let mut counts: BTreeMap<SliceKey, usize> = BTreeMap::new();

    match selector {
        SiteSelector::All => {
            for rec in dataset.records() {
                if rec.outcome == Outcome::Success {
                    *counts.entry(SliceKey::Site(rec.launch_site.clone())).or_default() += 1;
                }
            }
        }
        SiteSelector::Site(site) => {
            for rec in dataset.records() {
                if rec.launch_site == *site {
                    *counts.entry(SliceKey::Outcome(rec.outcome)).or_default() += 1;
                }
            }
        }
    }

    counts
        .into_iter()
        .map(|(key, count)| PieSlice { key, count })
        .collect()
}

// ---------------------------------------------------------------------------
// Payload/outcome query (scatter plot)
// ---------------------------------------------------------------------------

/// Return indices of records whose payload lies in `range` (inclusive) and
/// whose site matches `selector`, in dataset order.
pub fn payload_outcome(
    dataset: &LaunchDataset,
    range: PayloadRange,
    selector: &SiteSelector,
) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && selector.matches(&rec.launch_site))
        .map(|(i, _)| i)
        .collect()
}
