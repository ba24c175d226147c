//! Login request body and response decoding.
//!
//! The server answers a background login with
//! `{"success": bool, "redirect_url"?: string, "message"?: string}`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Deserialize;

use crate::consts::LOGIN_REJECTED_FALLBACK;
use crate::error::PanelError;

/// Raw login response as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the server decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginVerdict {
    Accepted { redirect_url: String },
    Rejected { message: String },
}

impl LoginResponse {
    /// # Errors
    ///
    /// Returns [`PanelError::Decode`] if `body` is not a login response.
    pub fn parse(body: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(body)?)
    }

    /// # Errors
    ///
    /// Returns [`PanelError::MalformedResponse`] for an accepted login with no
    /// usable redirect target.
    pub fn verdict(self) -> Result<LoginVerdict, PanelError> {
        if self.success {
            let redirect_url = self
                .redirect_url
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| PanelError::MalformedResponse("success without redirect_url".to_owned()))?;
            Ok(LoginVerdict::Accepted { redirect_url })
        } else {
            let message = self
                .message
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| LOGIN_REJECTED_FALLBACK.to_owned());
            Ok(LoginVerdict::Rejected { message })
        }
    }
}

/// How a login submission ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Popup closed and the browser sent to this URL.
    Redirected(String),
    /// Server said no; the message was shown to the user.
    Rejected(String),
    /// A request was already in flight; nothing sent.
    Busy,
    /// The popup was closed while the request was in flight; response dropped.
    Stale,
}

/// Encode form fields as `application/x-www-form-urlencoded`.
#[must_use]
pub fn encode_form(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(name, value)| (name.as_str(), value.as_str())))
        .finish()
}
