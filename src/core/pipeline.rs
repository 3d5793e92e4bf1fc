use crate::core::resolver::Resolver;
use crate::core::{fallback, regions};
use crate::domain::model::{
    FetchSummary, PriceRecord, PriceSource, StatePrice, TransformResult,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub struct FuelPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    resolver: Resolver,
}

impl<S: Storage, C: ConfigProvider> FuelPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let resolver = Resolver::from_config(&config)?;
        Ok(Self {
            storage,
            config,
            resolver,
        })
    }

    fn selected_states(&self) -> Vec<String> {
        if self.config.states().is_empty() {
            regions::STATES.iter().map(|s| s.to_string()).collect()
        } else {
            self.config.states().to_vec()
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FuelPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<StatePrice>> {
        let states = self.selected_states();
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let state_delay = Duration::from_millis(self.config.state_delay_ms());
        let mut prices = Vec::with_capacity(states.len());

        for (index, state) in states.iter().enumerate() {
            if index > 0 && !state_delay.is_zero() {
                tokio::time::sleep(state_delay).await;
            }

            let quote = match self.resolver.resolve(state).await {
                Some(quote) => {
                    tracing::info!(
                        "✓ {}: petrol ₹{}, diesel ₹{} ({})",
                        state,
                        quote.petrol,
                        quote.diesel,
                        quote.source
                    );
                    quote
                }
                None => {
                    let estimate = fallback::estimate_prices(state);
                    tracing::warn!(
                        "✗ {}: all sources failed, estimating petrol ₹{}, diesel ₹{}",
                        state,
                        estimate.petrol,
                        estimate.diesel
                    );
                    estimate
                }
            };

            prices.push(StatePrice {
                state: state.clone(),
                petrol: quote.petrol,
                diesel: quote.diesel,
                updated: today.clone(),
                source: quote.source,
            });
        }

        Ok(prices)
    }

    async fn transform(&self, data: Vec<StatePrice>) -> Result<TransformResult> {
        let mut summary = FetchSummary::default();
        let mut records = Vec::with_capacity(data.len());

        for price in data {
            if price.source == PriceSource::Estimated {
                summary.estimated += 1;
            } else {
                summary.fetched += 1;
            }
            records.push(PriceRecord {
                state: price.state,
                petrol: price.petrol,
                diesel: price.diesel,
                updated: price.updated,
            });
        }

        Ok(TransformResult { records, summary })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let json = serde_json::to_string_pretty(&result.records)?;
        self.storage
            .write_file(self.config.output_file(), json.as_bytes())
            .await?;

        let output_path = format!("{}/{}", self.config.output_path(), self.config.output_file());
        tracing::debug!("wrote {} records to {}", result.records.len(), output_path);
        Ok(output_path)
    }
}
