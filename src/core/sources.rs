//! Clients for the three external price sources, tried in priority order by
//! the resolver. Every failure mode (transport error, bad status, pattern
//! miss) collapses to `None` with a debug log line.

use crate::core::extract;
use crate::domain::model::{FuelQuote, PriceSource};
use crate::domain::ports::FuelSource;
use async_trait::async_trait;
use reqwest::Client;

// Class-name anchor for the price figure on GoodReturns city pages.
const GOODRETURNS_PRICE_MARKER: &str = "fuel-price";

async fn get_page(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("request to {} failed: {}", url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("{} returned status {}", url, response.status());
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::debug!("failed to read body from {}: {}", url, e);
            None
        }
    }
}

/// GoodReturns publishes one page per fuel type per city; both pages must
/// yield a number for the attempt to count.
pub struct GoodReturns {
    base: String,
}

impl GoodReturns {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn city_price(&self, client: &Client, fuel: &str, city: &str) -> Option<String> {
        let url = format!("{}/{}-price-in-{}.html", self.base, fuel, city);
        let body = get_page(client, &url).await?;
        let price = extract::price_near_marker(&body, GOODRETURNS_PRICE_MARKER);
        if price.is_none() {
            tracing::debug!("no {} price found on {}", fuel, url);
        }
        price
    }
}

#[async_trait]
impl FuelSource for GoodReturns {
    fn tag(&self) -> PriceSource {
        PriceSource::GoodReturns
    }

    async fn fetch_prices(&self, client: &Client, _state: &str, city: &str) -> Option<FuelQuote> {
        let petrol = self.city_price(client, "petrol", city).await?;
        let diesel = self.city_price(client, "diesel", city).await?;
        Some(FuelQuote {
            petrol,
            diesel,
            source: PriceSource::GoodReturns,
        })
    }
}

/// NDTV publishes one table page covering every state; the row is located by
/// a case-insensitive substring match on the state name.
pub struct Ndtv {
    base: String,
}

impl Ndtv {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl FuelSource for Ndtv {
    fn tag(&self) -> PriceSource {
        PriceSource::Ndtv
    }

    async fn fetch_prices(&self, client: &Client, state: &str, _city: &str) -> Option<FuelQuote> {
        let url = format!("{}/fuel-prices", self.base);
        let body = get_page(client, &url).await?;
        match extract::row_prices(&body, state) {
            Some((petrol, diesel)) => Some(FuelQuote {
                petrol,
                diesel,
                source: PriceSource::Ndtv,
            }),
            None => {
                tracing::debug!("no table row for {} on {}", state, url);
                None
            }
        }
    }
}

/// DriveSpark city pages carry both prices as currency-prefixed numbers in
/// free text; the first is petrol, the second diesel.
pub struct DriveSpark {
    base: String,
}

impl DriveSpark {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl FuelSource for DriveSpark {
    fn tag(&self) -> PriceSource {
        PriceSource::DriveSpark
    }

    async fn fetch_prices(&self, client: &Client, _state: &str, city: &str) -> Option<FuelQuote> {
        let url = format!("{}/fuel-price/{}.html", self.base, city);
        let body = get_page(client, &url).await?;
        let amounts = extract::rupee_amounts(&body);
        if amounts.len() < 2 {
            tracing::debug!("found {} currency amounts on {}, need 2", amounts.len(), url);
            return None;
        }
        Some(FuelQuote {
            petrol: amounts[0].clone(),
            diesel: amounts[1].clone(),
            source: PriceSource::DriveSpark,
        })
    }
}
