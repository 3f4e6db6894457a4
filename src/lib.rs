//! # Commodity Forecast
//!
//! A Rust library for predicting next-period commodity prices from a
//! pre-trained regression model and a historical reference table.
//!
//! ## Features
//!
//! - Historical reference data with whitespace-tolerant (province, commodity) queries
//! - Lag-feature reconstruction: previous-month price and same-month-prior-year
//!   price with a pluggable seasonality fallback
//! - Closed-vocabulary category encoding matching the model's training-time IDs
//! - Typed query outcomes (prediction, not-found with a discovery sample)
//!   and absolute/percentage delta against the last observed price
//! - An ascending trend series ready for chart rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use commodity_forecast::data::{Observation, ReferenceStore};
//! use commodity_forecast::encoder::CategoryEncoder;
//! use commodity_forecast::features::FeatureVector;
//! use commodity_forecast::pipeline::{ModelBundle, PredictionPipeline, QueryOutcome};
//! use commodity_forecast::predictor::PriceModel;
//!
//! // The trained estimator arrives from the external model bundle; any
//! // type implementing `PriceModel` fits the boundary.
//! #[derive(Debug)]
//! struct CarryForward;
//!
//! impl PriceModel for CarryForward {
//!     fn predict(&self, batch: &[FeatureVector]) -> commodity_forecast::Result<Vec<f64>> {
//!         Ok(batch.iter().map(|row| row.last_price).collect())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "carry-forward"
//!     }
//! }
//!
//! # fn main() -> commodity_forecast::Result<()> {
//! let reference = ReferenceStore::from_rows(vec![Observation {
//!     province: "Jawa Barat".to_string(),
//!     commodity: "Beras".to_string(),
//!     year: 2024,
//!     month: 5,
//!     price: 12_500.0,
//! }]);
//! let encoder = CategoryEncoder::from_vocabularies(
//!     vec!["Jawa Barat".to_string()],
//!     vec!["Beras".to_string()],
//! );
//!
//! let bundle = ModelBundle::new(Box::new(CarryForward), encoder, reference)?;
//! let pipeline = PredictionPipeline::new(bundle);
//!
//! match pipeline.run_prediction("Jawa Barat", "Beras", 6)? {
//!     QueryOutcome::Predicted { result, trend } => {
//!         println!("predicted {:.0} over {} points", result.predicted_price, trend.len());
//!     }
//!     QueryOutcome::NotFound { available } => {
//!         println!("no history for that pair; available: {:?}", available);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod encoder;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod predictor;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{Observation, Period, ReferenceStore};
pub use crate::encoder::{CategoryEncoder, LabelEncoder};
pub use crate::error::{PredictError, Result};
pub use crate::features::{FeatureVector, HistoricalMean, SeasonalFallback};
pub use crate::pipeline::{
    ModelBundle, PredictionPipeline, PredictionResult, QueryOutcome, TrendPoint,
};
pub use crate::predictor::{compute_delta, PriceDelta, PriceModel, PricePredictor};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
