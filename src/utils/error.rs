use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No price data produced: {message}")]
    NoData { message: String },
}

pub type Result<T> = std::result::Result<T, FuelError>;
