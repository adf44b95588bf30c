//! Client side of the remote auth API.
//!
//! The [`AuthApi`] trait is the seam between form controllers and the network;
//! [`HttpAuthApi`] implements it over `reqwest`. Failures are classified per
//! endpoint into [`ApiError`] so screens switch on variants, not status codes.

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod types;

pub use client::{AuthApi, HttpAuthApi};
pub use config::{ApiConfig, ConfigError};
pub use errors::{
    classify, token_failure, ApiError, Endpoint, ServerFailure, TokenFailure, GENERIC_FAILURE,
};
