//! Historical reference data for feature resolution and trend rendering

use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// One historical price record for a (province, commodity) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Province name, possibly with incidental surrounding whitespace
    pub province: String,
    /// Commodity name, possibly with incidental surrounding whitespace
    pub commodity: String,
    /// Calendar year of the observation
    pub year: i32,
    /// Calendar month of the observation (1-12)
    pub month: u32,
    /// Observed price
    pub price: f64,
}

impl Observation {
    /// The (year, month) period this observation belongs to
    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }
}

/// A (year, month) period, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Synthetic date for charting: the first day of the period.
    ///
    /// Returns `None` when the stored month is outside 1-12.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Central normalization for category strings. Stored data and query
/// arguments must go through the same trimming, never ad hoc per call site.
pub(crate) fn normalize(s: &str) -> &str {
    s.trim()
}

/// In-memory table of historical observations, immutable after load
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    rows: Vec<Observation>,
}

impl ReferenceStore {
    /// Create a store from already-loaded rows
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    /// Load a store from a CSV file with the columns
    /// `province,commodity,year,month,price`
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: Observation = record?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Number of observations in the store
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the store holds no observations
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All observations in insertion order
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// All observations matching the pair, sorted descending by (year, month).
    ///
    /// Comparison happens on trimmed values. The sort is stable, so rows
    /// sharing a period keep their insertion order.
    pub fn query(&self, province: &str, commodity: &str) -> Vec<Observation> {
        let province = normalize(province);
        let commodity = normalize(commodity);

        let mut matches: Vec<Observation> = self
            .rows
            .iter()
            .filter(|o| normalize(&o.province) == province && normalize(&o.commodity) == commodity)
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.period().cmp(&a.period()));
        matches
    }

    /// Observations matching the pair and the exact (year, month), in
    /// insertion order. Duplicates are possible; the first row is
    /// authoritative.
    pub fn query_exact(
        &self,
        province: &str,
        commodity: &str,
        year: i32,
        month: u32,
    ) -> Vec<Observation> {
        let province = normalize(province);
        let commodity = normalize(commodity);

        self.rows
            .iter()
            .filter(|o| {
                o.year == year
                    && o.month == month
                    && normalize(&o.province) == province
                    && normalize(&o.commodity) == commodity
            })
            .cloned()
            .collect()
    }

    /// Up to `limit` distinct (province, commodity) pairs, trimmed, in
    /// first-seen order. Used as a discovery aid when a query matches
    /// nothing.
    pub fn sample_known_pairs(&self, limit: usize) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();

        for row in &self.rows {
            if pairs.len() >= limit {
                break;
            }
            let pair = (
                normalize(&row.province).to_string(),
                normalize(&row.commodity).to_string(),
            );
            if seen.insert(pair.clone()) {
                pairs.push(pair);
            }
        }

        pairs
    }
}
