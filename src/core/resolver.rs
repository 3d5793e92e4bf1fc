//! Per-state multi-source resolution: try each source once, in priority
//! order, and stop at the first that yields both prices.

use crate::core::regions;
use crate::core::sources::{DriveSpark, GoodReturns, Ndtv};
use crate::domain::model::FuelQuote;
use crate::domain::ports::{ConfigProvider, FuelSource};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct Resolver {
    client: Client,
    sources: Vec<Box<dyn FuelSource>>,
    source_delay: Duration,
}

impl Resolver {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        // Priority order matters: city pages first, the combined table next,
        // free-text matching last.
        let sources: Vec<Box<dyn FuelSource>> = vec![
            Box::new(GoodReturns::new(config.goodreturns_base())),
            Box::new(Ndtv::new(config.ndtv_base())),
            Box::new(DriveSpark::new(config.drivespark_base())),
        ];

        Ok(Self {
            client,
            sources,
            source_delay: Duration::from_millis(config.source_delay_ms()),
        })
    }

    /// Resolve prices for one state, or `None` when every source failed.
    /// Attempts are separated by a politeness delay and never retried.
    pub async fn resolve(&self, state: &str) -> Option<FuelQuote> {
        let city = regions::city_slug(state);

        for (index, source) in self.sources.iter().enumerate() {
            if index > 0 && !self.source_delay.is_zero() {
                tokio::time::sleep(self.source_delay).await;
            }

            if let Some(quote) = source.fetch_prices(&self.client, state, &city).await {
                tracing::debug!("{} resolved via {}", state, quote.source);
                return Some(quote);
            }
            tracing::debug!("{}: {} attempt produced no data", state, source.tag());
        }

        None
    }
}
