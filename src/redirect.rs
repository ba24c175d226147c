//! Profile redirect button.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::rc::Rc;

use crate::consts::ID_PLACEHOLDER;
use crate::error::PanelError;
use crate::host::Browser;
use crate::markup::ElementRoles;

/// Navigates to a profile page built from the button's identifier attribute.
pub struct ProfileRedirector {
    browser: Rc<dyn Browser>,
    button_id: String,
    attribute: String,
    template: String,
}

impl ProfileRedirector {
    pub fn new(browser: Rc<dyn Browser>, roles: &ElementRoles) -> Self {
        Self {
            browser,
            button_id: roles.profile_button_id.clone(),
            attribute: roles.profile_id_attribute.clone(),
            template: roles.profile_url_template.clone(),
        }
    }

    /// Name of the attribute read on click.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Handle a click given the attribute value read from the button.
    ///
    /// Returns the URL navigated to.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingAttribute`] without navigating when the
    /// identifier is absent or blank.
    pub fn on_click(&self, identifier: Option<&str>) -> Result<String, PanelError> {
        let identifier = identifier.filter(|id| !id.trim().is_empty()).ok_or_else(|| {
            PanelError::MissingAttribute { element: format!("#{}", self.button_id), attribute: self.attribute.clone() }
        })?;
        let url = profile_url(&self.template, identifier);
        self.browser.navigate(&url);
        Ok(url)
    }
}

/// Substitute `identifier` into `template` as a single path segment.
///
/// The identifier is used as is, except that characters outside the URL
/// unreserved set are percent-encoded: `42` gives `/accounts/about-me/42/`,
/// `a?b` gives `/accounts/about-me/a%3Fb/`.
#[must_use]
pub fn profile_url(template: &str, identifier: &str) -> String {
    template.replace(ID_PLACEHOLDER, &urlencoding::encode(identifier))
}
