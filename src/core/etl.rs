use crate::domain::ports::Pipeline;
use crate::utils::error::{FuelError, Result};

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub fetched: usize,
    pub estimated: usize,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        println!("Fetching fuel prices for Indian states and UTs...");

        let prices = self.pipeline.extract().await?;
        if prices.is_empty() {
            return Err(FuelError::NoData {
                message: "aggregation produced no price records".to_string(),
            });
        }
        println!("Collected {} price records", prices.len());

        let result = self.pipeline.transform(prices).await?;
        let summary = result.summary.clone();
        println!(
            "{} fetched live, {} estimated",
            summary.fetched, summary.estimated
        );

        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        Ok(RunReport {
            output_path,
            fetched: summary.fetched,
            estimated: summary.estimated,
        })
    }
}
