//! Shared constants: wire conventions and the default markup contract.

/// Placeholder substituted with the profile identifier in URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Profile page template used by the redirect button.
pub const PROFILE_URL_TEMPLATE: &str = "/accounts/about-me/{id}/";

/// Header marking a request as a background request so the server replies
/// with JSON instead of a rendered page.
pub const ASYNC_REQUEST_HEADER: &str = "X-Requested-With";
/// Value paired with [`ASYNC_REQUEST_HEADER`].
pub const ASYNC_REQUEST_VALUE: &str = "XMLHttpRequest";

/// Content type of the login request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Id of the optional `<script type="application/json">` element holding
/// [`crate::markup::ElementRoles`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "mysite-ui-config";

// Default element roles rendered by the server templates.
pub const PROFILE_BUTTON_ID: &str = "backToProfileBtn";
pub const PROFILE_ID_ATTRIBUTE: &str = "data-pk";
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const LOGIN_POPUP_ID: &str = "loginPopup";
pub const OPEN_POPUP_SELECTOR: &str = ".open-popup";
pub const LOGOUT_BUTTON_ID: &str = "logoutButton";
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
pub const NEXT_FIELD_NAME: &str = "next";

/// CSS `display` value applied when the popup opens.
pub const POPUP_OPEN_DISPLAY: &str = "flex";

pub const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";

/// Shown when the server rejects a login without saying why.
pub const LOGIN_REJECTED_FALLBACK: &str = "Invalid username or password.";
