//! Query orchestration: feature resolution, model inference, result assembly

use crate::data::{Period, ReferenceStore};
use crate::encoder::CategoryEncoder;
use crate::error::{PredictError, Result};
use crate::features::{FeatureResolver, HistoricalMean, Resolution, SeasonalFallback};
use crate::predictor::{compute_delta, PriceDelta, PriceModel, PricePredictor};
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

/// Number of distinct pairs surfaced as a discovery aid on NotFound
const DISCOVERY_SAMPLE: usize = 10;

/// The immutable context loaded once at startup from the external model
/// bundle: trained estimator, category encoders, and the reference table.
#[derive(Debug)]
pub struct ModelBundle {
    model: Box<dyn PriceModel>,
    encoder: CategoryEncoder,
    reference: ReferenceStore,
}

impl ModelBundle {
    /// Assemble a bundle from its loaded components. An empty reference
    /// table means the bundle was only partially loaded, which is fatal.
    pub fn new(
        model: Box<dyn PriceModel>,
        encoder: CategoryEncoder,
        reference: ReferenceStore,
    ) -> Result<Self> {
        if reference.is_empty() {
            return Err(PredictError::DataError(
                "model bundle carries no reference observations".to_string(),
            ));
        }

        Ok(Self {
            model,
            encoder,
            reference,
        })
    }
}

/// One point of the ascending trend series handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Synthetic date: first day of the observation's (year, month)
    pub period: NaiveDate,
    /// Observed price
    pub price: f64,
}

/// Outcome of a single prediction query
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Month that was predicted (1-12)
    pub target_month: u32,
    /// Most recent observed price for the pair
    pub last_price: f64,
    /// Period of that most recent observation
    pub last_price_period: Period,
    /// The model's point estimate
    pub predicted_price: f64,
    /// Change of the prediction against the last observed price
    pub delta: PriceDelta,
}

impl PredictionResult {
    /// Serialize the result to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What a query produced: a prediction with its trend series, or a
/// user-correctable miss with a sample of pairs that do exist
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// The pair has history and the model produced an estimate
    Predicted {
        result: PredictionResult,
        /// Filtered history, ascending by period, for trend charting
        trend: Vec<TrendPoint>,
    },
    /// No observations match the pair
    NotFound {
        /// Up to ten distinct (province, commodity) pairs that do exist
        available: Vec<(String, String)>,
    },
}

/// Orchestrates resolve → predict → delta for single queries against an
/// immutable bundle. Safe to share across threads serving concurrent
/// queries; nothing here mutates after construction.
#[derive(Debug)]
pub struct PredictionPipeline {
    predictor: PricePredictor,
    encoder: CategoryEncoder,
    reference: ReferenceStore,
    fallback: Box<dyn SeasonalFallback>,
}

impl PredictionPipeline {
    /// Build a pipeline over a loaded bundle with the default
    /// historical-mean seasonal fallback
    pub fn new(bundle: ModelBundle) -> Self {
        Self::with_fallback(bundle, Box::new(HistoricalMean))
    }

    /// Build a pipeline with a custom seasonal fallback strategy
    pub fn with_fallback(bundle: ModelBundle, fallback: Box<dyn SeasonalFallback>) -> Self {
        Self {
            predictor: PricePredictor::new(bundle.model),
            encoder: bundle.encoder,
            reference: bundle.reference,
            fallback,
        }
    }

    /// Province labels known to the model
    pub fn known_provinces(&self) -> &[String] {
        self.encoder.known_provinces()
    }

    /// Commodity labels known to the model
    pub fn known_commodities(&self) -> &[String] {
        self.encoder.known_commodities()
    }

    /// Up to `limit` distinct (province, commodity) pairs present in the
    /// reference data
    pub fn sample_known_pairs(&self, limit: usize) -> Vec<(String, String)> {
        self.reference.sample_known_pairs(limit)
    }

    /// Run one prediction query. Failures are typed: a missing pair is a
    /// `NotFound` outcome, an unencodable label an `EncodingFailure` error.
    /// Nothing is retried internally.
    pub fn run_prediction(
        &self,
        province: &str,
        commodity: &str,
        target_month: u32,
    ) -> Result<QueryOutcome> {
        debug!(
            "run_prediction: province='{}' commodity='{}' target_month={}",
            province.trim(),
            commodity.trim(),
            target_month
        );

        let resolver = FeatureResolver::new(&self.reference, &self.encoder, self.fallback.as_ref());
        let resolved = match resolver.resolve(province, commodity, target_month)? {
            Resolution::Resolved(resolved) => resolved,
            Resolution::NotFound => {
                debug!("run_prediction: no history for pair");
                return Ok(QueryOutcome::NotFound {
                    available: self.reference.sample_known_pairs(DISCOVERY_SAMPLE),
                });
            }
        };

        let predicted_price = self.predictor.predict_one(&resolved.features)?;
        let delta = compute_delta(predicted_price, resolved.features.last_price);

        // History arrives descending; the first element is the latest
        // observation and the trend wants the same rows ascending.
        let latest_period = resolved.history[0].period();
        let mut ascending = resolved.history;
        ascending.reverse();

        let trend = ascending
            .iter()
            .map(|obs| {
                let period = obs.period().first_day().ok_or_else(|| {
                    PredictError::DataError(format!(
                        "observation holds invalid month {} in year {}",
                        obs.month, obs.year
                    ))
                })?;
                Ok(TrendPoint {
                    period,
                    price: obs.price,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "run_prediction: predicted={:.2} last={:.2} model='{}'",
            predicted_price,
            resolved.features.last_price,
            self.predictor.model_name()
        );

        Ok(QueryOutcome::Predicted {
            result: PredictionResult {
                target_month,
                last_price: resolved.features.last_price,
                last_price_period: latest_period,
                predicted_price,
                delta,
            },
            trend,
        })
    }
}
