use commodity_forecast::data::{Observation, ReferenceStore};
use commodity_forecast::encoder::CategoryEncoder;
use commodity_forecast::features::FeatureVector;
use commodity_forecast::pipeline::{ModelBundle, PredictionPipeline, QueryOutcome};
use commodity_forecast::predictor::PriceModel;
use commodity_forecast::utils::month_name;

/// Stand-in for the trained regression artifact. In deployment the model,
/// the encoders and the reference table all come from the externally
/// loaded bundle.
#[derive(Debug)]
struct BlendModel;

impl PriceModel for BlendModel {
    fn predict(&self, batch: &[FeatureVector]) -> commodity_forecast::Result<Vec<f64>> {
        Ok(batch
            .iter()
            .map(|row| 0.6 * row.last_price + 0.4 * row.last_year_price)
            .collect())
    }

    fn name(&self) -> &str {
        "blend"
    }
}

fn obs(province: &str, commodity: &str, year: i32, month: u32, price: f64) -> Observation {
    Observation {
        province: province.to_string(),
        commodity: commodity.to_string(),
        year,
        month,
        price,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reference = ReferenceStore::from_rows(vec![
        obs("Jawa Barat", "Beras", 2023, 6, 11000.0),
        obs("Jawa Barat", "Beras", 2024, 3, 11800.0),
        obs("Jawa Barat", "Beras", 2024, 4, 12000.0),
        obs("Jawa Barat", "Beras", 2024, 5, 12400.0),
        obs("Aceh", "Cabai Merah", 2024, 5, 41000.0),
    ]);
    let encoder = CategoryEncoder::from_vocabularies(
        vec!["Aceh".to_string(), "Jawa Barat".to_string()],
        vec!["Beras".to_string(), "Cabai Merah".to_string()],
    );

    let bundle = ModelBundle::new(Box::new(BlendModel), encoder, reference)?;
    let pipeline = PredictionPipeline::new(bundle);

    let target_month = 6;
    match pipeline.run_prediction("Jawa Barat", "Beras", target_month)? {
        QueryOutcome::Predicted { result, trend } => {
            println!(
                "Last observed price ({}): Rp {:.0}",
                result.last_price_period, result.last_price
            );
            println!(
                "Prediction for {}: Rp {:.0}",
                month_name(target_month).unwrap_or("?"),
                result.predicted_price
            );
            if result.delta.pct_defined {
                println!("Change: {:.0} ({:.1}%)", result.delta.abs, result.delta.pct);
            } else {
                println!("Change: {:.0} (n/a%)", result.delta.abs);
            }

            println!("Trend:");
            for point in trend {
                println!("  {}  Rp {:.0}", point.period, point.price);
            }
        }
        QueryOutcome::NotFound { available } => {
            println!("No history for that pair. Available pairs:");
            for (province, commodity) in available {
                println!("  {} / {}", province, commodity);
            }
        }
    }

    Ok(())
}
