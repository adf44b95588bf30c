//! # auth-screens (client-side authentication forms)
//!
//! `auth-screens` drives the four authentication screens of a learning platform
//! (login, registration, forgot-password and reset-password) without owning any
//! authentication protocol. Each screen validates its fields locally, submits a
//! single request to the remote API and reacts to the outcome.
//!
//! ## Layers
//!
//! - **Field validation** ([`forms::validator`]): static rule tables per form. Every
//!   rule runs so all field errors surface at once. Validation is pure.
//! - **Form controller** ([`forms::FormController`]): owns field values, derived
//!   errors and the submission state (`Idle -> Submitting -> Succeeded | Failed`).
//!   Only one submission may be in flight per form; late responses after unmount
//!   are discarded.
//! - **API client** ([`api::AuthApi`]): one `POST` per operation against
//!   `/auth/register`, `/auth/login`, `/auth/forgot-password` and
//!   `/auth/reset-password/{token}`. Failures are classified into typed errors.
//! - **Screens** ([`screens`]): compose the layers, render a [`screens::ScreenView`]
//!   and perform navigation through the injected [`screens::Navigator`] port.
//!
//! ## Reset token failures
//!
//! A failed reset confirmation is either *expired* (stay on screen and offer a
//! "Request New Reset Link" action), *invalid* (redirect to `/forgot-password`
//! after 2000 ms) or anything else (generic message, no navigation). The API
//! client prefers a typed `code` in the failure body and falls back to matching
//! the message text.
//!
//! Passwords are held in [`secrecy::SecretString`] and are only exposed when the
//! request body is serialized. Callers must still avoid logging form values.

pub mod api;
pub mod cli;
pub mod forms;
pub mod screens;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
