//! Error types for the page handlers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the hosting page. Every failure means "the
//! operation did not complete"; the `web` layer turns these values into
//! console diagnostics and leaves the page usable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of the background login request itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("element {element} is missing attribute {attribute}")]
    MissingAttribute { element: String, attribute: String },
    #[error("page is missing form field {0}")]
    MissingField(String),
    #[error("login request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("login response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed login response: {0}")]
    MalformedResponse(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid ui config: {0}")]
    Config(String),
}

impl PanelError {
    /// Whether the error comes from the server-rendered markup not matching
    /// the expected element roles, as opposed to a runtime failure.
    #[must_use]
    pub fn is_markup(&self) -> bool {
        matches!(
            self,
            Self::MissingElement(_) | Self::MissingAttribute { .. } | Self::MissingField(_) | Self::Config(_)
        )
    }
}
