//! # Bot Error Type
//!
//! Unified error type for command handling and the HTTP adapter.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /interactions                                                     │
//! │         │                                                               │
//! │         ├── bad signature ─────────► InvalidSignature ──► HTTP 401     │
//! │         ├── unparseable body ──────► MalformedInteraction ► HTTP 400   │
//! │         ▼                                                               │
//! │  Dispatcher                                                             │
//! │         ├── role missing ──────────► PermissionDenied ─┐               │
//! │         ├── bad options ───────────► MissingOption ────┤               │
//! │         ├── ValidationError ───────► Validation ───────┤               │
//! │         ▼                                              ▼               │
//! │  Reply embed                                   ephemeral error embed   │
//! │                                                (still HTTP 200)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use barcode_core::ValidationError;

/// Errors raised while handling an interaction.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// User input failed core validation. The message is shown verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("You need the \"{role}\" role to use this command")]
    PermissionDenied { role: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing required option: {0}")]
    MissingOption(String),

    #[error("Option {name} must be {expected}")]
    InvalidOption { name: String, expected: String },

    #[error("Invalid request signature: {0}")]
    InvalidSignature(String),

    #[error("Malformed interaction: {0}")]
    MalformedInteraction(String),

    #[error("Discord API error: {status}: {body}")]
    Discord { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BotError {
    /// HTTP status used when the error escapes to the interactions endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BotError::InvalidSignature(_) => StatusCode::UNAUTHORIZED,
            BotError::MalformedInteraction(_) => StatusCode::BAD_REQUEST,
            BotError::Validation(_)
            | BotError::MissingOption(_)
            | BotError::InvalidOption { .. }
            | BotError::UnknownCommand(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BotError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            BotError::Discord { .. } | BotError::Http(_) => StatusCode::BAD_GATEWAY,
            BotError::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err: BotError = ValidationError::PriceOutOfRange { pence: 0 }.into();
        assert_eq!(err.to_string(), "Price must be between 1p and £999.99");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BotError::InvalidSignature("bad".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BotError::MalformedInteraction("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BotError::PermissionDenied {
                role: "Staff".into()
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
