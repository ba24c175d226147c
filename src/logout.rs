//! Logout confirmation form.
//!
//! Logout posts a fresh form carrying only the security token and the `next`
//! target, both copied verbatim from the page. The form is assembled only
//! from a complete page; an incomplete one is an error, never a partial post.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::error::PanelError;
use crate::host::LogoutSource;
use crate::markup::ElementRoles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutForm {
    pub action: String,
    pub security_token: String,
    pub next: String,
}

impl LogoutForm {
    /// Read and validate everything the logout post needs.
    ///
    /// An empty token counts as missing. An empty `next` is forwarded as is.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingElement`] when the enclosing form has no
    /// action, or [`PanelError::MissingField`] naming the absent field.
    pub fn collect(source: &dyn LogoutSource, roles: &ElementRoles) -> Result<Self, PanelError> {
        let action = source
            .action()
            .filter(|action| !action.trim().is_empty())
            .ok_or_else(|| PanelError::MissingElement(format!("action of form enclosing #{}", roles.logout_button_id)))?;
        let security_token = source
            .security_token()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PanelError::MissingField(roles.csrf_field_name.clone()))?;
        let next = source.next().ok_or_else(|| PanelError::MissingField(roles.next_field_name.clone()))?;
        Ok(Self { action, security_token, next })
    }

    /// Hidden fields of the synthetic form, token first.
    #[must_use]
    pub fn hidden_fields(&self, roles: &ElementRoles) -> Vec<(String, String)> {
        vec![
            (roles.csrf_field_name.clone(), self.security_token.clone()),
            (roles.next_field_name.clone(), self.next.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// User said no; nothing sent.
    Declined,
    /// Form posted to this action.
    Submitted(String),
}
