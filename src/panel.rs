//! Login/logout panel controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the popup, the login form submission and the logout flow for one
//! page. The `web` layer forwards DOM events here; everything it needs from
//! the page arrives through the [`crate::host`] seams.
//!
//! CONCURRENCY
//! ===========
//! Handlers run on the page's single event loop. The login request is the
//! only suspension point: while it is in flight the form is marked busy and
//! further submissions are ignored. If the popup is closed before the response
//! arrives the response is dropped, so a late success never navigates away
//! from a page the user has moved on from.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::error::PanelError;
use crate::host::{Browser, ClickTarget, LoginFormView, LoginTransport, LogoutSource, PopupView};
use crate::login::{LoginOutcome, LoginResponse, LoginVerdict, encode_form};
use crate::logout::{LogoutForm, LogoutOutcome};
use crate::markup::ElementRoles;
use crate::popup::{Popup, PopupState};

pub struct PanelController {
    roles: ElementRoles,
    browser: Rc<dyn Browser>,
    transport: Rc<dyn LoginTransport>,
    popup: Option<Popup>,
    login_form: Option<Rc<dyn LoginFormView>>,
    logout: Option<Rc<dyn LogoutSource>>,
    in_flight: Cell<bool>,
}

impl PanelController {
    pub fn new(roles: ElementRoles, browser: Rc<dyn Browser>, transport: Rc<dyn LoginTransport>) -> Self {
        Self { roles, browser, transport, popup: None, login_form: None, logout: None, in_flight: Cell::new(false) }
    }

    #[must_use]
    pub fn with_popup(mut self, view: Rc<dyn PopupView>) -> Self {
        self.popup = Some(Popup::new(view));
        self
    }

    #[must_use]
    pub fn with_login_form(mut self, form: Rc<dyn LoginFormView>) -> Self {
        self.login_form = Some(form);
        self
    }

    #[must_use]
    pub fn with_logout(mut self, source: Rc<dyn LogoutSource>) -> Self {
        self.logout = Some(source);
        self
    }

    /// `None` when the page has no popup.
    #[must_use]
    pub fn popup_state(&self) -> Option<PopupState> {
        self.popup.as_ref().map(Popup::state)
    }

    /// External trigger: show the popup.
    pub fn open_popup(&self) {
        if let Some(popup) = &self.popup {
            popup.open();
        }
    }

    /// Any click on the page. Returns whether the popup closed.
    pub fn on_page_click(&self, target: ClickTarget) -> bool {
        self.popup.as_ref().is_some_and(|popup| popup.on_click(target))
    }

    /// Submit the login form in the background and act on the server's answer.
    ///
    /// On error the popup is left as it was and nothing navigates.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingElement`] when no login form is bound,
    /// [`PanelError::Transport`] when the request fails, and
    /// [`PanelError::Decode`] / [`PanelError::MalformedResponse`] when the body
    /// is not a usable login response.
    pub async fn submit_login(&self) -> Result<LoginOutcome, PanelError> {
        let form = self
            .login_form
            .as_ref()
            .ok_or_else(|| PanelError::MissingElement(format!("#{}", self.roles.login_form_id)))?;
        if self.in_flight.get() {
            log::info!("login submission ignored: request already in flight");
            return Ok(LoginOutcome::Busy);
        }

        let action = form.action();
        let body = encode_form(&form.fields());
        let generation = self.popup.as_ref().map(Popup::generation);

        self.in_flight.set(true);
        form.set_busy(true);
        let reply = self.transport.post_form(&action, body).await;
        self.in_flight.set(false);
        form.set_busy(false);

        if generation != self.popup.as_ref().map(Popup::generation) {
            log::info!("login response dropped: popup closed while request was in flight");
            return Ok(LoginOutcome::Stale);
        }

        match LoginResponse::parse(&reply?)?.verdict()? {
            LoginVerdict::Accepted { redirect_url } => {
                if let Some(popup) = &self.popup {
                    popup.close();
                }
                self.browser.navigate(&redirect_url);
                Ok(LoginOutcome::Redirected(redirect_url))
            }
            LoginVerdict::Rejected { message } => {
                self.browser.alert(&message);
                Ok(LoginOutcome::Rejected(message))
            }
        }
    }

    /// Confirm and post the logout form.
    ///
    /// The page is checked before the user is asked, so an incomplete page
    /// fails without a prompt.
    ///
    /// # Errors
    ///
    /// Returns a markup error when the logout source or one of its fields is
    /// missing, or [`PanelError::Dom`] if the form cannot be submitted.
    pub fn logout(&self) -> Result<LogoutOutcome, PanelError> {
        let source = self
            .logout
            .as_ref()
            .ok_or_else(|| PanelError::MissingElement(format!("#{}", self.roles.logout_button_id)))?;
        let form = LogoutForm::collect(source.as_ref(), &self.roles)?;
        if !self.browser.confirm(&self.roles.logout_prompt) {
            return Ok(LogoutOutcome::Declined);
        }
        self.browser.submit_form(&form.action, &form.hidden_fields(&self.roles))?;
        Ok(LogoutOutcome::Submitted(form.action))
    }
}
