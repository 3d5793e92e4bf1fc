use crate::domain::model::{FuelQuote, PriceSource, StatePrice, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn goodreturns_base(&self) -> &str;
    fn ndtv_base(&self) -> &str;
    fn drivespark_base(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn states(&self) -> &[String];
    fn request_timeout_secs(&self) -> u64;
    fn source_delay_ms(&self) -> u64;
    fn state_delay_ms(&self) -> u64;
}

/// One external price source. A failed attempt is `None`, never an error:
/// the resolver chain just moves on to the next source.
#[async_trait]
pub trait FuelSource: Send + Sync {
    fn tag(&self) -> PriceSource;

    async fn fetch_prices(
        &self,
        client: &reqwest::Client,
        state: &str,
        city: &str,
    ) -> Option<FuelQuote>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<StatePrice>>;
    async fn transform(&self, data: Vec<StatePrice>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
