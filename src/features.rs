//! Lag-feature reconstruction for price prediction queries

use crate::data::{normalize, Observation, ReferenceStore};
use crate::encoder::CategoryEncoder;
use crate::error::{PredictError, Result};
use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt::Debug;

/// Assembled input row for the trained estimator.
///
/// The field order is the artifact's training-time schema:
/// `last_price, last_year_price, target_month, province_id, commodity_id`.
/// Reordering produces silently wrong predictions, so `as_row` is the only
/// place the row is flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Most recent observed price for the pair
    pub last_price: f64,
    /// Same-month price one year before the latest observation, or the
    /// seasonal fallback estimate
    pub last_year_price: f64,
    /// Month being predicted (1-12)
    pub target_month: u32,
    /// Encoded province ID
    pub province_id: u32,
    /// Encoded commodity ID
    pub commodity_id: u32,
}

impl FeatureVector {
    /// Flatten to the numeric row shape the estimator expects.
    pub fn as_row(&self) -> [f64; 5] {
        [
            self.last_price,
            self.last_year_price,
            f64::from(self.target_month),
            f64::from(self.province_id),
            f64::from(self.commodity_id),
        ]
    }
}

/// Estimate a stand-in for the same-month-prior-year price when no such
/// observation exists.
pub trait SeasonalFallback: Debug {
    /// Produce the estimate from the full filtered history (never just its
    /// most recent element).
    fn estimate(&self, history: &[Observation]) -> f64;

    /// Name of the strategy
    fn name(&self) -> &str;
}

/// Default fallback: arithmetic mean over the entire filtered history
#[derive(Debug, Clone, Default)]
pub struct HistoricalMean;

impl SeasonalFallback for HistoricalMean {
    fn estimate(&self, history: &[Observation]) -> f64 {
        history.iter().map(|o| o.price).mean()
    }

    fn name(&self) -> &str {
        "historical mean"
    }
}

/// A successfully resolved query: the model input plus the filtered history
/// (descending by period) used to derive it
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub features: FeatureVector,
    pub history: Vec<Observation>,
}

/// Outcome of feature resolution
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Features were assembled from at least one matching observation
    Resolved(ResolvedQuery),
    /// No observation matches the (province, commodity) pair
    NotFound,
}

/// Derives the model's input features from the reference data
#[derive(Debug)]
pub struct FeatureResolver<'a> {
    store: &'a ReferenceStore,
    encoder: &'a CategoryEncoder,
    fallback: &'a dyn SeasonalFallback,
}

impl<'a> FeatureResolver<'a> {
    /// Create a resolver over the bundle's store and encoders
    pub fn new(
        store: &'a ReferenceStore,
        encoder: &'a CategoryEncoder,
        fallback: &'a dyn SeasonalFallback,
    ) -> Self {
        Self {
            store,
            encoder,
            fallback,
        }
    }

    /// Produce the feature vector and the filtered history for a query, or
    /// signal that the pair has no historical data.
    pub fn resolve(
        &self,
        province: &str,
        commodity: &str,
        target_month: u32,
    ) -> Result<Resolution> {
        if !(1..=12).contains(&target_month) {
            return Err(PredictError::InvalidMonth(target_month));
        }

        let history = self.store.query(province, commodity);
        if history.is_empty() {
            return Ok(Resolution::NotFound);
        }

        let latest = &history[0];
        let last_price = latest.price;

        // Seasonality reference: same target month, one year before the
        // latest observation. Falls back to an aggregate estimate when the
        // exact record is missing.
        let ref_year = latest.year - 1;
        let prior = self
            .store
            .query_exact(province, commodity, ref_year, target_month);
        let last_year_price = match prior.first() {
            Some(obs) => obs.price,
            None => self.fallback.estimate(&history),
        };

        let (province_id, commodity_id) = self.encode_pair(province, commodity)?;

        Ok(Resolution::Resolved(ResolvedQuery {
            features: FeatureVector {
                last_price,
                last_year_price,
                target_month,
                province_id,
                commodity_id,
            },
            history,
        }))
    }

    /// Dual-path categorical encoding: the selected labels normally come
    /// straight from the trained vocabulary, so the raw strings are tried
    /// first (the vocabulary itself may hold untrimmed entries). Only on
    /// failure are the trimmed forms tried, and only then does the query
    /// fail as a whole.
    fn encode_pair(&self, province: &str, commodity: &str) -> Result<(u32, u32)> {
        if let Ok(ids) = self.try_encode(province, commodity) {
            return Ok(ids);
        }

        self.try_encode(normalize(province), normalize(commodity))
            .map_err(|_| {
                PredictError::EncodingFailure(format!(
                    "cannot map province '{}' / commodity '{}' to model IDs",
                    normalize(province),
                    normalize(commodity)
                ))
            })
    }

    fn try_encode(&self, province: &str, commodity: &str) -> Result<(u32, u32)> {
        let province_id = self.encoder.encode_province(province)?;
        let commodity_id = self.encoder.encode_commodity(commodity)?;
        Ok((province_id, commodity_id))
    }
}
