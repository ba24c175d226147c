//! Browser entry point: finds the role-bearing elements and wires DOM events
//! to the handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. This is the one place where
//! handler errors become console diagnostics; handlers themselves only
//! return them.

mod dom;
mod fetch;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, Node, Window};

use self::dom::{DomLoginForm, DomLogoutSource, ElementPopup, WindowBrowser, enclosing_form, js_error};
use self::fetch::FetchTransport;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::PanelError;
use crate::host::{Browser, ClickTarget};
use crate::markup::{ElementRoles, InstallPlan, PageMarkup};
use crate::panel::PanelController;
use crate::redirect::ProfileRedirector;

/// WASM start hook. Installs handlers once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"mysite-ui: logger already initialised".into());
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; handlers not installed");
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once(move || install_page(&window, &document));
        if let Err(err) =
            target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("cannot wait for DOMContentLoaded: {err:?}");
        }
        on_ready.forget();
    } else {
        install_page(&window, &document);
    }
}

fn report(context: &str, err: &PanelError) {
    if err.is_markup() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}

fn install_page(window: &Window, document: &Document) {
    match install(window, document) {
        Ok(plan) => {
            for problem in &plan.problems {
                report("install", problem);
            }
            if plan.is_empty() {
                log::debug!("no page handlers on this page");
            }
        }
        Err(err) => report("install", &err),
    }
}

fn install(window: &Window, document: &Document) -> Result<InstallPlan, PanelError> {
    let config = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let roles = ElementRoles::from_page_config(config.as_deref())?;

    let profile_button = document.get_element_by_id(&roles.profile_button_id);
    let login_form: Option<HtmlFormElement> = cast(document.get_element_by_id(&roles.login_form_id));
    let login_popup: Option<HtmlElement> = cast(document.get_element_by_id(&roles.login_popup_id));
    let logout_button = document.get_element_by_id(&roles.logout_button_id);
    let logout_form = logout_button.as_ref().and_then(enclosing_form);

    let markup = PageMarkup {
        profile_button: profile_button.is_some(),
        login_form: login_form.is_some(),
        login_popup: login_popup.is_some(),
        logout_button: logout_button.is_some(),
        logout_form: logout_form.is_some(),
    };
    let mut plan = InstallPlan::for_page(&markup, &roles);
    let browser: Rc<dyn Browser> = Rc::new(WindowBrowser::new(window.clone(), document.clone()));

    if let (true, Some(button)) = (plan.redirector, profile_button) {
        plan.record(bind_redirector(button, ProfileRedirector::new(Rc::clone(&browser), &roles)));
    }
    if !plan.needs_panel() {
        return Ok(plan);
    }

    let mut panel = PanelController::new(roles.clone(), browser, Rc::new(FetchTransport));
    let popup = login_popup.filter(|_| plan.popup);
    let login_form = login_form.filter(|_| plan.login);
    let logout = logout_button.zip(logout_form).filter(|_| plan.logout);

    if let Some(popup) = &popup {
        panel = panel.with_popup(Rc::new(ElementPopup::new(window.clone(), popup.clone(), &roles.popup_display)));
    }
    if let Some(form) = &login_form {
        panel = panel.with_login_form(Rc::new(DomLoginForm::new(form.clone())));
    }
    if let Some((_, form)) = &logout {
        panel = panel.with_logout(Rc::new(DomLogoutSource::new(document.clone(), form.clone(), &roles)));
    }
    let panel = Rc::new(panel);

    if let Some(popup) = popup {
        plan.record(bind_popup(window, document, &roles, popup, &panel));
    }
    if let Some(form) = login_form {
        plan.record(bind_login(&form, &panel));
    }
    if let Some((button, _)) = logout {
        plan.record(bind_logout(&button, &panel));
    }
    Ok(plan)
}

/// Narrow a looked-up element to the type its role requires.
fn cast<T: JsCast>(element: Option<Element>) -> Option<T> {
    match element?.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(element) => {
            log::warn!("#{} is not the expected element type", element.id());
            None
        }
    }
}

/// Attach a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PanelError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()).map_err(js_error)?;
    callback.forget();
    Ok(())
}

fn bind_redirector(button: Element, redirector: ProfileRedirector) -> Result<(), PanelError> {
    let source = button.clone();
    listen(&button, "click", move |_| {
        let identifier = source.get_attribute(redirector.attribute());
        if let Err(err) = redirector.on_click(identifier.as_deref()) {
            report("profile redirect", &err);
        }
    })
}

fn bind_popup(
    window: &Window,
    document: &Document,
    roles: &ElementRoles,
    popup: HtmlElement,
    panel: &Rc<PanelController>,
) -> Result<(), PanelError> {
    let on_click = Rc::clone(panel);
    listen(window, "click", move |event| {
        let backdrop: &Node = &popup;
        let hit = event
            .target()
            .as_ref()
            .and_then(|target| target.dyn_ref::<Node>())
            .is_some_and(|node| node.is_same_node(Some(backdrop)));
        on_click.on_page_click(if hit { ClickTarget::Backdrop } else { ClickTarget::Other });
    })?;

    let triggers = document.query_selector_all(&roles.open_popup_selector).map_err(|err| {
        PanelError::Config(format!("open_popup_selector {:?} is not a valid selector: {err:?}", roles.open_popup_selector))
    })?;
    for index in 0..triggers.length() {
        let Some(trigger) = triggers.item(index) else {
            continue;
        };
        let on_open = Rc::clone(panel);
        listen(&trigger, "click", move |_| on_open.open_popup())?;
    }
    Ok(())
}

fn bind_login(form: &HtmlFormElement, panel: &Rc<PanelController>) -> Result<(), PanelError> {
    let panel = Rc::clone(panel);
    listen(form, "submit", move |event| {
        event.prevent_default();
        let panel = Rc::clone(&panel);
        wasm_bindgen_futures::spawn_local(async move {
            match panel.submit_login().await {
                Ok(outcome) => log::debug!("login finished: {outcome:?}"),
                Err(err) => report("login", &err),
            }
        });
    })
}

fn bind_logout(button: &Element, panel: &Rc<PanelController>) -> Result<(), PanelError> {
    let panel = Rc::clone(panel);
    listen(button, "click", move |event| {
        event.prevent_default();
        match panel.logout() {
            Ok(outcome) => log::debug!("logout finished: {outcome:?}"),
            Err(err) => report("logout", &err),
        }
    })
}
