//! `web-sys` implementations of the host seams.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

use crate::error::PanelError;
use crate::host::{Browser, LoginFormView, LogoutSource, PopupView};
use crate::markup::ElementRoles;

pub(super) fn js_error(err: JsValue) -> PanelError {
    PanelError::Dom(format!("{err:?}"))
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, PanelError> {
    document
        .create_element(tag)
        .map_err(js_error)?
        .dyn_into::<T>()
        .map_err(|_| PanelError::Dom(format!("<{tag}> has an unexpected type")))
}

fn name_selector(name: &str) -> String {
    format!("[name=\"{name}\"]")
}

/// Value of the first element matched by a field lookup.
fn field_value(found: Result<Option<Element>, JsValue>) -> Option<String> {
    match found {
        Ok(Some(element)) => match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => element.get_attribute("value"),
        },
        Ok(None) => None,
        Err(err) => {
            log::warn!("field lookup failed: {err:?}");
            None
        }
    }
}

pub struct WindowBrowser {
    window: Window,
    document: Document,
}

impl WindowBrowser {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Browser for WindowBrowser {
    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::error!("navigation to {url} failed: {err:?}");
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("alert failed: {err:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|err| {
            log::error!("confirm failed: {err:?}");
            false
        })
    }

    fn submit_form(&self, action: &str, fields: &[(String, String)]) -> Result<(), PanelError> {
        let form: HtmlFormElement = create(&self.document, "form")?;
        form.set_method("POST");
        form.set_action(action);
        for (name, value) in fields {
            let input: HtmlInputElement = create(&self.document, "input")?;
            input.set_type("hidden");
            input.set_name(name);
            input.set_value(value);
            form.append_child(&input).map_err(js_error)?;
        }
        let body = self.document.body().ok_or_else(|| PanelError::MissingElement("body".to_owned()))?;
        body.append_child(&form).map_err(js_error)?;
        form.submit().map_err(js_error)
    }
}

/// Popup whose visibility is its computed `display`.
pub struct ElementPopup {
    window: Window,
    element: HtmlElement,
    open_display: String,
}

impl ElementPopup {
    pub fn new(window: Window, element: HtmlElement, open_display: &str) -> Self {
        Self { window, element, open_display: open_display.to_owned() }
    }
}

impl PopupView for ElementPopup {
    fn is_visible(&self) -> bool {
        match self.window.get_computed_style(&self.element) {
            Ok(Some(style)) => style.get_property_value("display").is_ok_and(|display| display != "none"),
            Ok(None) => false,
            Err(err) => {
                log::warn!("computed style unavailable: {err:?}");
                false
            }
        }
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { self.open_display.as_str() } else { "none" };
        if let Err(err) = self.element.style().set_property("display", display) {
            log::error!("popup display update failed: {err:?}");
        }
    }
}

pub struct DomLoginForm {
    form: HtmlFormElement,
}

impl DomLoginForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl LoginFormView for DomLoginForm {
    fn action(&self) -> String {
        self.form.action()
    }

    fn fields(&self) -> Vec<(String, String)> {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(err) => {
                log::error!("form data unavailable: {err:?}");
                return Vec::new();
            }
        };
        let entries = match js_sys::try_iter(&data) {
            Ok(Some(entries)) => entries,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!("form data not iterable: {err:?}");
                return Vec::new();
            }
        };
        let mut fields = Vec::new();
        for entry in entries.flatten() {
            let pair = js_sys::Array::from(&entry);
            match (pair.get(0).as_string(), pair.get(1).as_string()) {
                (Some(name), Some(value)) => fields.push((name, value)),
                (name, _) => log::warn!("skipping non-text form field {}", name.unwrap_or_default()),
            }
        }
        fields
    }

    fn set_busy(&self, busy: bool) {
        let controls = match self.form.query_selector_all("[type=submit]") {
            Ok(controls) => controls,
            Err(err) => {
                log::warn!("submit controls lookup failed: {err:?}");
                return;
            }
        };
        for index in 0..controls.length() {
            let Some(node) = controls.item(index) else {
                continue;
            };
            if let Some(control) = node.dyn_ref::<Element>() {
                if let Err(err) = control.toggle_attribute_with_force("disabled", busy) {
                    log::warn!("toggling disabled failed: {err:?}");
                }
            }
        }
    }
}

/// Logout values read from the page at click time.
pub struct DomLogoutSource {
    document: Document,
    form: HtmlFormElement,
    csrf_field: String,
    next_field: String,
}

impl DomLogoutSource {
    pub fn new(document: Document, form: HtmlFormElement, roles: &ElementRoles) -> Self {
        Self {
            document,
            form,
            csrf_field: roles.csrf_field_name.clone(),
            next_field: roles.next_field_name.clone(),
        }
    }
}

impl LogoutSource for DomLogoutSource {
    fn action(&self) -> Option<String> {
        Some(self.form.action()).filter(|action| !action.is_empty())
    }

    fn security_token(&self) -> Option<String> {
        field_value(self.document.query_selector(&name_selector(&self.csrf_field)))
    }

    fn next(&self) -> Option<String> {
        field_value(self.form.query_selector(&name_selector(&self.next_field)))
    }
}

/// The `<form>` an element sits in, if any.
pub fn enclosing_form(element: &Element) -> Option<HtmlFormElement> {
    match element.closest("form") {
        Ok(Some(form)) => match form.dyn_into::<HtmlFormElement>() {
            Ok(form) => Some(form),
            Err(_) => None,
        },
        Ok(None) => None,
        Err(err) => {
            log::warn!("closest form lookup failed: {err:?}");
            None
        }
    }
}
