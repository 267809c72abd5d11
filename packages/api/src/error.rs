//! Error types for remote calls.

use crate::casing::CasingError;

/// Failure of a single API call.
///
/// Views never propagate these further: they render
/// [`ApiError::message_or`] and keep running.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}")]
    Server {
        status: u16,
        /// Message supplied by the server in the error body, if any.
        message: Option<String>,
    },

    #[error("invalid payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Casing(#[from] CasingError),

    #[error("not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// The server-supplied message, when the server rejected the request with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message, or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Looks at `message` first, then `error`; anything else yields `None`.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key)?.as_str())
        .find(|msg| !msg.trim().is_empty())
        .map(str::to_string)
}
