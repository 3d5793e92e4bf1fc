use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a price pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    GoodReturns,
    Ndtv,
    DriveSpark,
    Estimated,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriceSource::GoodReturns => "goodreturns",
            PriceSource::Ndtv => "ndtv",
            PriceSource::DriveSpark => "drivespark",
            PriceSource::Estimated => "estimated",
        };
        f.write_str(name)
    }
}

/// One petrol/diesel pair as produced by a source attempt or the fallback.
/// Prices stay decimal strings exactly as extracted from the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelQuote {
    pub petrol: String,
    pub diesel: String,
    pub source: PriceSource,
}

/// Resolved prices for one state, including where they came from.
#[derive(Debug, Clone, Serialize)]
pub struct StatePrice {
    pub state: String,
    pub petrol: String,
    pub diesel: String,
    pub updated: String,
    pub source: PriceSource,
}

/// The on-disk record shape. The source tag is stripped before writing so
/// the output schema stays the same regardless of how a value was obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub state: String,
    pub petrol: String,
    pub diesel: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default)]
pub struct FetchSummary {
    pub fetched: usize,
    pub estimated: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<PriceRecord>,
    pub summary: FetchSummary,
}
