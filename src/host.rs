//! Seams between the handlers and the hosting page.
//!
//! The `web` module implements these over `web-sys`; tests implement them
//! with recording fakes. Handlers receive them at construction time and never
//! reach for globals.

use futures::future::LocalBoxFuture;

use crate::error::{PanelError, TransportError};

/// Window-level side effects.
pub trait Browser {
    /// Full-page navigation.
    fn navigate(&self, url: &str);

    /// Blocking notification.
    fn alert(&self, message: &str);

    /// Blocking yes/no prompt. A prompt that cannot be shown counts as "no".
    fn confirm(&self, message: &str) -> bool;

    /// Build a hidden `POST` form from `fields`, attach it to the document and
    /// submit it.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Dom`] if the form cannot be built or submitted.
    fn submit_form(&self, action: &str, fields: &[(String, String)]) -> Result<(), PanelError>;
}

/// The popup container whose `display` property carries its visibility.
pub trait PopupView {
    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);
}

/// The login form inside the popup.
pub trait LoginFormView {
    /// Declared action URL.
    fn action(&self) -> String;

    /// Successful controls as name/value pairs, in document order.
    fn fields(&self) -> Vec<(String, String)>;

    /// Disable or re-enable the submit controls.
    fn set_busy(&self, busy: bool);
}

/// Values the logout flow copies out of the page. `None` means the element
/// is absent.
pub trait LogoutSource {
    /// Action of the form enclosing the logout button.
    fn action(&self) -> Option<String>;

    /// Page-wide security token field.
    fn security_token(&self) -> Option<String>;

    /// `next` field of the enclosing form.
    fn next(&self) -> Option<String>;
}

/// Background `POST` used by the login submission.
pub trait LoginTransport {
    /// Send an urlencoded `body` to `action`, marked as a background request,
    /// and resolve to the response body text.
    fn post_form(&self, action: &str, body: String) -> LocalBoxFuture<'static, Result<String, TransportError>>;
}

/// Where a page click landed relative to the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop container itself.
    Backdrop,
    /// Anything else, including the popup's own content.
    Other,
}
