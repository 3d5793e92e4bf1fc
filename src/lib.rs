pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{etl::Engine, pipeline::FuelPipeline};
pub use crate::utils::error::{FuelError, Result};
