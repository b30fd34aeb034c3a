//! Error shape shared by every connector.

use http::StatusCode;
use thiserror::Error;

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    Timeout,
    PermissionDenied,
    /// Connection, I/O or unexpected upstream status.
    TransportFailure,
    /// The location could not be parsed or no connector handles it.
    Routing,
}

/// Failure to fetch a template from a repository.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unable to get template {location} from the repository: not found")]
    NotFound { location: String },

    #[error("Unable to get template {location} from the repository: permission denied")]
    PermissionDenied { location: String },

    #[error("Unable to get template {location} from the repository: timed out")]
    Timeout { location: String },

    #[error("Unable to get template {location} from the repository: {message}")]
    Transport { location: String, message: String },

    /// Upstream answered with a status that maps to no other variant.
    #[error("Unable to get template {location} from the repository: HTTP {status}")]
    Upstream { location: String, status: StatusCode },

    #[error("no repository connector handles {location}")]
    Unroutable { location: String },

    #[error("invalid location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::NotFound { .. } => FetchErrorKind::NotFound,
            FetchError::PermissionDenied { .. } => FetchErrorKind::PermissionDenied,
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::Transport { .. } | FetchError::Upstream { .. } => {
                FetchErrorKind::TransportFailure
            }
            FetchError::Unroutable { .. } | FetchError::InvalidLocation { .. } => {
                FetchErrorKind::Routing
            }
        }
    }

    /// Status a gateway should answer with when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::NotFound { .. } => StatusCode::NOT_FOUND,
            FetchError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            FetchError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            FetchError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FetchError::Upstream { status, .. } => *status,
            FetchError::Unroutable { .. } | FetchError::InvalidLocation { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// The location this error concerns, as rendered in the message.
    pub fn location(&self) -> &str {
        match self {
            FetchError::NotFound { location }
            | FetchError::PermissionDenied { location }
            | FetchError::Timeout { location }
            | FetchError::Transport { location, .. }
            | FetchError::Upstream { location, .. }
            | FetchError::Unroutable { location }
            | FetchError::InvalidLocation { location, .. } => location,
        }
    }

    pub fn transport(location: impl Into<String>, message: impl ToString) -> Self {
        FetchError::Transport {
            location: location.into(),
            message: message.to_string(),
        }
    }
}
