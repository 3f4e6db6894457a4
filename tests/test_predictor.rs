use assert_approx_eq::assert_approx_eq;
use commodity_forecast::error::{PredictError, Result};
use commodity_forecast::features::FeatureVector;
use commodity_forecast::predictor::{compute_delta, PriceModel, PricePredictor};

fn features() -> FeatureVector {
    FeatureVector {
        last_price: 12000.0,
        last_year_price: 11000.0,
        target_month: 6,
        province_id: 1,
        commodity_id: 0,
    }
}

/// Estimator stub that offsets the last price by a fixed amount
#[derive(Debug)]
struct OffsetModel {
    offset: f64,
}

impl PriceModel for OffsetModel {
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>> {
        Ok(batch.iter().map(|row| row.last_price + self.offset).collect())
    }

    fn name(&self) -> &str {
        "offset"
    }
}

/// Estimator stub that violates the batch contract
#[derive(Debug)]
struct BrokenModel;

impl PriceModel for BrokenModel {
    fn predict(&self, _batch: &[FeatureVector]) -> Result<Vec<f64>> {
        Ok(vec![1.0, 2.0])
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[test]
fn test_predict_one_delegates_to_model() {
    let predictor = PricePredictor::new(Box::new(OffsetModel { offset: 500.0 }));
    let predicted = predictor.predict_one(&features()).unwrap();
    assert_approx_eq!(predicted, 12500.0);
    assert_eq!(predictor.model_name(), "offset");
}

#[test]
fn test_predict_one_checks_batch_length() {
    let predictor = PricePredictor::new(Box::new(BrokenModel));
    let err = predictor.predict_one(&features()).unwrap_err();
    assert!(matches!(err, PredictError::ModelError(_)));
}

#[test]
fn test_delta_reference_values() {
    let delta = compute_delta(1100.0, 1000.0);
    assert_approx_eq!(delta.abs, 100.0);
    assert_approx_eq!(delta.pct, 10.0);
    assert!(delta.pct_defined);
}

#[test]
fn test_delta_undefined_percentage_on_zero_base() {
    let delta = compute_delta(900.0, 0.0);
    assert_approx_eq!(delta.abs, 900.0);
    assert_eq!(delta.pct, 0.0);
    assert!(!delta.pct_defined);
}
