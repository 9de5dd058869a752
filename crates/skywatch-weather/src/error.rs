//! Gateway error type.

use reqwest::StatusCode;
use thiserror::Error;

use skywatch_core::error::{AppError, ErrorKind};

/// Failure modes of a weather fetch. The display strings are shown to end
/// users as-is.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing API key or unusable base URL.
    #[error("{0}")]
    Configuration(String),
    /// The provider does not know the city.
    #[error("City '{city}' not found.")]
    NotFound {
        /// The query that was sent.
        city: String,
    },
    /// The provider answered with an unexpected status.
    #[error("Weather service error.")]
    Service(StatusCode),
    /// The provider answered 200 with a body we could not read.
    #[error("Weather service error.")]
    Payload(String),
    /// Transport failure or timeout.
    #[error("Network error.")]
    Network(#[from] reqwest::Error),
}

impl GatewayError {
    /// The error raised before any request when no API key is set.
    pub fn missing_api_key() -> Self {
        Self::Configuration("API Key is missing in settings.".to_string())
    }

    /// Matching application error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Service(_) | Self::Payload(_) => ErrorKind::ExternalService,
            Self::Network(_) => ErrorKind::Network,
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            GatewayError::missing_api_key().to_string(),
            "API Key is missing in settings."
        );
        assert_eq!(
            GatewayError::NotFound {
                city: "Atlantis".to_string()
            }
            .to_string(),
            "City 'Atlantis' not found."
        );
        assert_eq!(
            GatewayError::Service(StatusCode::BAD_GATEWAY).to_string(),
            "Weather service error."
        );
    }

    #[test]
    fn converts_into_matching_app_error() {
        let err: AppError = GatewayError::NotFound {
            city: "Atlantis".to_string(),
        }
        .into();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "City 'Atlantis' not found.");
    }
}
