/// Error types for loading the temperature dataset
use thiserror::Error;

/// Failure while fetching or decoding the dataset.
///
/// The UI treats every variant as the same transport failure; the variant
/// only matters for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never produced a response
    #[error("Network request failed: {0}")]
    Network(String),

    /// The body was not a valid dataset document
    #[error("Failed to decode dataset: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user in place of the chart.
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch data"
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
