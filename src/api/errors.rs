//! Error taxonomy for the auth API client. Transport failures carry no server
//! message; every HTTP failure keeps its status, the server message and an
//! optional typed `code`, and is classified by the endpoint that produced it.

use std::fmt;
use thiserror::Error;

/// Message shown when a failure carries nothing the user can act on.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Failure codes a server may send instead of relying on message text.
pub const CODE_TOKEN_EXPIRED: &str = "token_expired";
pub const CODE_TOKEN_INVALID: &str = "token_invalid";

/// Auth endpoint that produced a response, used to classify failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    ForgotPassword,
    ResetPassword,
}

impl Endpoint {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::ForgotPassword => "forgot-password",
            Self::ResetPassword => "reset-password",
        }
    }
}

/// Status and message of a non-success HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerFailure {
    pub status: u16,
    pub message: String,
    pub code: Option<String>,
}

impl fmt::Display for ServerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ServerFailure),
    #[error("{0}")]
    Conflict(ServerFailure),
    #[error("{0}")]
    Auth(ServerFailure),
    #[error("{0}")]
    NotFound(ServerFailure),
    #[error("{0}")]
    TokenExpired(ServerFailure),
    #[error("{0}")]
    TokenInvalid(ServerFailure),
    #[error("Request failed ({}): {}", .0.status, .0.message)]
    Server(ServerFailure),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// The server failure behind this error, if the server answered at all.
    #[must_use]
    pub const fn failure(&self) -> Option<&ServerFailure> {
        match self {
            Self::Validation(failure)
            | Self::Conflict(failure)
            | Self::Auth(failure)
            | Self::NotFound(failure)
            | Self::TokenExpired(failure)
            | Self::TokenInvalid(failure)
            | Self::Server(failure) => Some(failure),
            Self::Network(_) | Self::Decode(_) | Self::Request(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// Message safe to render: the server message verbatim, or the generic text.
    #[must_use]
    pub fn user_message(&self) -> &str {
        self.failure()
            .map(|failure| failure.message.as_str())
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE)
    }
}

/// Typed reason a reset token was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenFailure {
    Expired,
    Invalid,
}

/// Decides whether a reset failure concerns the token.
///
/// A typed `code` wins. Without one, the message is matched: "expired" first,
/// then "Invalid" (case-sensitive, as servers phrase it "Invalid token").
#[must_use]
pub fn token_failure(code: Option<&str>, message: &str) -> Option<TokenFailure> {
    match code {
        Some(CODE_TOKEN_EXPIRED) => return Some(TokenFailure::Expired),
        Some(CODE_TOKEN_INVALID) => return Some(TokenFailure::Invalid),
        _ => {}
    }

    if message.contains("expired") {
        Some(TokenFailure::Expired)
    } else if message.contains("Invalid") {
        Some(TokenFailure::Invalid)
    } else {
        None
    }
}

/// Maps a server failure to the error variant the endpoint documents.
#[must_use]
pub fn classify(endpoint: Endpoint, failure: ServerFailure) -> ApiError {
    match (endpoint, failure.status) {
        (Endpoint::Register, 400 | 422) => ApiError::Validation(failure),
        (Endpoint::Register, 409) => ApiError::Conflict(failure),
        (Endpoint::Login, 401 | 403) => ApiError::Auth(failure),
        (Endpoint::ForgotPassword, 404) => ApiError::NotFound(failure),
        (Endpoint::ResetPassword, _) => {
            match token_failure(failure.code.as_deref(), &failure.message) {
                Some(TokenFailure::Expired) => ApiError::TokenExpired(failure),
                Some(TokenFailure::Invalid) => ApiError::TokenInvalid(failure),
                None => ApiError::Server(failure),
            }
        }
        _ => ApiError::Server(failure),
    }
}
