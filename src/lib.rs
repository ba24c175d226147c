//! # mysite-ui
//!
//! Page handlers for the shop's server-rendered pages, compiled to
//! WebAssembly. The server owns rendering, authentication and sessions; this
//! crate only forwards user intent to it and reflects its answers.
//!
//! Two handlers exist:
//!
//! - the profile redirect button, which navigates to
//!   `/accounts/about-me/{id}/` using the button's `data-pk` attribute;
//! - the login/logout panel, which submits the login popup's form in the
//!   background and posts a confirmed logout with the page's security token.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Wire conventions and default element roles |
//! | [`error`] | [`error::PanelError`] and [`error::TransportError`] |
//! | [`markup`] | Element role descriptor and install planning |
//! | [`host`] | Seams to the page: browser, popup, forms, transport |
//! | [`redirect`] | Profile redirect button |
//! | [`popup`] | Popup open/closed state machine |
//! | [`login`] | Login body encoding and response decoding |
//! | [`logout`] | Logout form assembly |
//! | [`panel`] | Login/logout panel controller |
//! | `web` | `web-sys` bindings and the WASM start hook (`hydrate` feature) |

pub mod consts;
pub mod error;
pub mod host;
pub mod login;
pub mod logout;
pub mod markup;
pub mod panel;
pub mod popup;
pub mod redirect;

#[cfg(test)]
mod testkit;

#[cfg(feature = "hydrate")]
pub mod web;
