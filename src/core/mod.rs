pub mod etl;
pub mod extract;
pub mod fallback;
pub mod pipeline;
pub mod regions;
pub mod resolver;
pub mod sources;

pub use crate::domain::model::{
    FetchSummary, FuelQuote, PriceRecord, PriceSource, StatePrice, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, FuelSource, Pipeline, Storage};
pub use crate::utils::error::Result;
