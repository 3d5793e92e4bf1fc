pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fuel-prices")]
#[command(about = "Fetch petrol and diesel prices for Indian states and UTs")]
pub struct CliConfig {
    #[arg(long, default_value = "https://www.goodreturns.in")]
    pub goodreturns_base: String,

    #[arg(long, default_value = "https://www.ndtv.com")]
    pub ndtv_base: String,

    #[arg(long, default_value = "https://www.drivespark.com")]
    pub drivespark_base: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "data.json")]
    pub output_file: String,

    /// Subset of states to fetch; empty means all of them.
    #[arg(long, value_delimiter = ',')]
    pub states: Vec<String>,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    /// Politeness delay between source attempts for one state.
    #[arg(long, default_value = "500")]
    pub source_delay_ms: u64,

    /// Politeness delay between consecutive states.
    #[arg(long, default_value = "1500")]
    pub state_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn goodreturns_base(&self) -> &str {
        &self.goodreturns_base
    }

    fn ndtv_base(&self) -> &str {
        &self.ndtv_base
    }

    fn drivespark_base(&self) -> &str {
        &self.drivespark_base
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn states(&self) -> &[String] {
        &self.states
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn source_delay_ms(&self) -> u64 {
        self.source_delay_ms
    }

    fn state_delay_ms(&self) -> u64 {
        self.state_delay_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("goodreturns_base", &self.goodreturns_base)?;
        validate_url("ndtv_base", &self.ndtv_base)?;
        validate_url("drivespark_base", &self.drivespark_base)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}
