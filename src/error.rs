use thiserror::Error;

pub const MISSING_API_URL: &str = "API URL is not defined. Check your environment variables.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Unspecified(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    SerializationError(String),
    #[error("{0}")]
    NetworkError(String),
    #[error("HTTP error! status: {0}")]
    ApiError(u16, String),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// The single message shown in place of the map. Fetch failures are not
    /// attributed to a particular source.
    pub fn user_message(&self) -> String {
        match self {
            Error::Configuration(message) => message.clone(),
            err => format!(
                "Failed to fetch data: {}. Please check the API URL and try again.",
                err
            ),
        }
    }
}
