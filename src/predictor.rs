//! Trained-estimator boundary and delta computation

use crate::error::{PredictError, Result};
use crate::features::FeatureVector;
use serde::Serialize;
use std::fmt::Debug;

/// The opaque trained estimator from the model bundle. The contract is
/// batch-in/batch-out: one prediction per input row, in input order.
pub trait PriceModel: Debug {
    /// Predict a price for each feature row
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Change between the predicted price and the last observed price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceDelta {
    /// Absolute difference, predicted minus last observed
    pub abs: f64,
    /// Percentage difference relative to the last observed price; `0.0`
    /// when undefined
    pub pct: f64,
    /// `false` when the last observed price is zero and the percentage is
    /// therefore meaningless
    pub pct_defined: bool,
}

/// Compute the delta of a prediction against the last observed price.
///
/// A zero last price makes the percentage undefined; it is reported as
/// `0.0` with `pct_defined = false` so no NaN or infinity reaches callers.
pub fn compute_delta(predicted: f64, last_price: f64) -> PriceDelta {
    let abs = predicted - last_price;

    if last_price == 0.0 {
        return PriceDelta {
            abs,
            pct: 0.0,
            pct_defined: false,
        };
    }

    PriceDelta {
        abs,
        pct: (abs / last_price) * 100.0,
        pct_defined: true,
    }
}

/// Wraps the trained estimator for single-query use
#[derive(Debug)]
pub struct PricePredictor {
    model: Box<dyn PriceModel>,
}

impl PricePredictor {
    /// Wrap a trained estimator
    pub fn new(model: Box<dyn PriceModel>) -> Self {
        Self { model }
    }

    /// Name of the wrapped model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Predict the price for one feature row, checking the batch contract
    pub fn predict_one(&self, features: &FeatureVector) -> Result<f64> {
        let batch = [features.clone()];
        let predictions = self.model.predict(&batch)?;

        match predictions.as_slice() {
            [value] => Ok(*value),
            other => Err(PredictError::ModelError(format!(
                "estimator returned {} predictions for 1 input row",
                other.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn delta_with_positive_last_price() {
        let delta = compute_delta(1100.0, 1000.0);
        assert_approx_eq!(delta.abs, 100.0);
        assert_approx_eq!(delta.pct, 10.0);
        assert!(delta.pct_defined);
    }

    #[test]
    fn delta_with_zero_last_price_is_flagged() {
        let delta = compute_delta(900.0, 0.0);
        assert_approx_eq!(delta.abs, 900.0);
        assert_eq!(delta.pct, 0.0);
        assert!(!delta.pct_defined);
        assert!(delta.pct.is_finite());
    }

    #[test]
    fn delta_can_be_negative() {
        let delta = compute_delta(900.0, 1000.0);
        assert_approx_eq!(delta.abs, -100.0);
        assert_approx_eq!(delta.pct, -10.0);
        assert!(delta.pct_defined);
    }
}
