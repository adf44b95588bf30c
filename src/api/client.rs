//! The auth API port and its HTTP implementation. Every operation takes a
//! validated payload and issues exactly one request; payload contents are never
//! logged.

use super::{
    config::{ApiConfig, ConfigError},
    errors::{ApiError, Endpoint},
    http::{build_client, post_json},
    types::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest},
};
use crate::forms::{Credentials, Registration, ResetConfirmation, ResetRequest};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use tracing::instrument;

/// Remote auth operations. Success payloads are opaque to this crate.
pub trait AuthApi: Send + Sync {
    /// `POST /auth/register`
    fn register(&self, payload: Registration) -> impl Future<Output = Result<Value, ApiError>> + Send;

    /// `POST /auth/login`
    fn login(&self, credentials: Credentials)
        -> impl Future<Output = Result<Value, ApiError>> + Send;

    /// `POST /auth/forgot-password`
    fn request_password_reset(
        &self,
        request: ResetRequest,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;

    /// `POST /auth/reset-password/{token}`
    fn confirm_password_reset(
        &self,
        confirmation: ResetConfirmation,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// `reqwest`-backed client bound to one API base configuration.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, segments: &[&str]) -> Result<url::Url, ApiError> {
        self.config
            .endpoint(segments)
            .map_err(|err| ApiError::Request(err.to_string()))
    }
}

impl AuthApi for HttpAuthApi {
    #[instrument(skip_all)]
    async fn register(&self, payload: Registration) -> Result<Value, ApiError> {
        let url = self.url(&["auth", "register"])?;
        post_json(
            &self.client,
            Endpoint::Register,
            url,
            &RegisterRequest::from(&payload),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn login(&self, credentials: Credentials) -> Result<Value, ApiError> {
        let url = self.url(&["auth", "login"])?;
        post_json(
            &self.client,
            Endpoint::Login,
            url,
            &LoginRequest::from(&credentials),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn request_password_reset(&self, request: ResetRequest) -> Result<Value, ApiError> {
        let url = self.url(&["auth", "forgot-password"])?;
        post_json(
            &self.client,
            Endpoint::ForgotPassword,
            url,
            &ForgotPasswordRequest::from(&request),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn confirm_password_reset(
        &self,
        confirmation: ResetConfirmation,
    ) -> Result<Value, ApiError> {
        let url = self.url(&["auth", "reset-password", &confirmation.token])?;
        post_json(
            &self.client,
            Endpoint::ResetPassword,
            url,
            &ResetPasswordRequest::from(&confirmation),
        )
        .await
    }
}
