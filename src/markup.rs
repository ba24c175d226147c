//! Markup contract between the server-rendered page and the handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server templates decide which elements exist on a given page. The
//! handlers never look elements up ad hoc: they go through [`ElementRoles`],
//! and installation is planned from a [`PageMarkup`] snapshot so that a
//! missing collaborator is reported once, up front, instead of deep inside an
//! event callback.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use serde::Deserialize;

use crate::consts;
use crate::error::PanelError;

/// Typed descriptor of every element role the handlers depend on.
///
/// Any subset can be overridden from a JSON blob on the page; missing keys
/// keep their defaults. Pages without open triggers simply match nothing with
/// `open_popup_selector`; a blank value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementRoles {
    pub profile_button_id: String,
    pub profile_id_attribute: String,
    pub profile_url_template: String,
    pub login_form_id: String,
    pub login_popup_id: String,
    pub open_popup_selector: String,
    pub popup_display: String,
    pub logout_button_id: String,
    pub csrf_field_name: String,
    pub next_field_name: String,
    pub logout_prompt: String,
}

impl Default for ElementRoles {
    fn default() -> Self {
        Self {
            profile_button_id: consts::PROFILE_BUTTON_ID.to_owned(),
            profile_id_attribute: consts::PROFILE_ID_ATTRIBUTE.to_owned(),
            profile_url_template: consts::PROFILE_URL_TEMPLATE.to_owned(),
            login_form_id: consts::LOGIN_FORM_ID.to_owned(),
            login_popup_id: consts::LOGIN_POPUP_ID.to_owned(),
            open_popup_selector: consts::OPEN_POPUP_SELECTOR.to_owned(),
            popup_display: consts::POPUP_OPEN_DISPLAY.to_owned(),
            logout_button_id: consts::LOGOUT_BUTTON_ID.to_owned(),
            csrf_field_name: consts::CSRF_FIELD_NAME.to_owned(),
            next_field_name: consts::NEXT_FIELD_NAME.to_owned(),
            logout_prompt: consts::LOGOUT_PROMPT.to_owned(),
        }
    }
}

impl ElementRoles {
    /// Build roles from the optional page config blob.
    ///
    /// An undecodable blob is logged and ignored. A decodable one that fails
    /// [`ElementRoles::validate`] is an error.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Config`] when the resulting roles are invalid.
    pub fn from_page_config(raw: Option<&str>) -> Result<Self, PanelError> {
        let roles = match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Self::default(),
            Some(raw) => match serde_json::from_str::<Self>(raw) {
                Ok(roles) => roles,
                Err(err) => {
                    log::warn!("ignoring undecodable ui config: {err}");
                    Self::default()
                }
            },
        };
        roles.validate()?;
        Ok(roles)
    }

    /// Check that every role names something usable.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Config`] naming the first offending role.
    pub fn validate(&self) -> Result<(), PanelError> {
        let required = [
            ("profile_button_id", &self.profile_button_id),
            ("profile_id_attribute", &self.profile_id_attribute),
            ("login_form_id", &self.login_form_id),
            ("login_popup_id", &self.login_popup_id),
            ("open_popup_selector", &self.open_popup_selector),
            ("popup_display", &self.popup_display),
            ("logout_button_id", &self.logout_button_id),
            ("csrf_field_name", &self.csrf_field_name),
            ("next_field_name", &self.next_field_name),
        ];
        if let Some((role, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(PanelError::Config(format!("{role} must not be empty")));
        }
        if !self.profile_url_template.contains(consts::ID_PLACEHOLDER) {
            return Err(PanelError::Config(format!(
                "profile_url_template must contain {}",
                consts::ID_PLACEHOLDER
            )));
        }
        if self.popup_display.trim() == "none" {
            return Err(PanelError::Config("popup_display must not be none".to_owned()));
        }
        Ok(())
    }
}

/// Which role-bearing elements the current page actually renders.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMarkup {
    pub profile_button: bool,
    pub login_form: bool,
    pub login_popup: bool,
    pub logout_button: bool,
    /// The logout button sits inside a `<form>`.
    pub logout_form: bool,
}

/// Handlers to install for a page, plus the markup problems that blocked
/// any of them.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default)]
pub struct InstallPlan {
    pub redirector: bool,
    pub login: bool,
    pub popup: bool,
    pub logout: bool,
    pub problems: Vec<PanelError>,
}

impl InstallPlan {
    /// Decide which handlers a page gets.
    ///
    /// Each handler is anchored on one element and is skipped silently when
    /// that anchor is absent. An anchor whose collaborators are missing is
    /// recorded in `problems` and its handler is not installed.
    #[must_use]
    pub fn for_page(markup: &PageMarkup, roles: &ElementRoles) -> Self {
        let mut plan = Self {
            redirector: markup.profile_button,
            login: markup.login_form,
            popup: markup.login_popup,
            ..Self::default()
        };
        if markup.logout_button {
            if markup.logout_form {
                plan.logout = true;
            } else {
                plan.problems
                    .push(PanelError::MissingElement(format!("form enclosing #{}", roles.logout_button_id)));
            }
        }
        plan
    }

    /// Record the result of binding one handler. A failed binding does not
    /// stop the remaining handlers from being bound.
    pub fn record(&mut self, bound: Result<(), PanelError>) {
        if let Err(err) = bound {
            self.problems.push(err);
        }
    }

    /// Whether the page needs a panel controller at all.
    #[must_use]
    pub fn needs_panel(&self) -> bool {
        self.login || self.popup || self.logout
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.redirector && !self.needs_panel()
    }
}
