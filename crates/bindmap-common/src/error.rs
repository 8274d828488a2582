use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindmapError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No data received from {endpoint} (status {status})")]
    NoData { endpoint: String, status: u16 },

    #[error("Accession {accession} not present in {endpoint} response")]
    AccessionMissing { accession: String, endpoint: String },

    #[error("Security error: {0}")]
    Security(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BindmapError>;
