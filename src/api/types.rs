//! Request bodies for the auth endpoints. They borrow from validated payloads and
//! expose passwords only for serialization, so they must never be logged.

use crate::forms::{Credentials, Registration, ResetConfirmation, ResetRequest, Role};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(payload: &'a Registration) -> Self {
        Self {
            name: &payload.name,
            email: &payload.email,
            password: payload.password.expose_secret(),
            role: payload.role,
        }
    }
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(payload: &'a Credentials) -> Self {
        Self {
            email: &payload.email,
            password: payload.password.expose_secret(),
        }
    }
}

#[derive(Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

impl<'a> From<&'a ResetRequest> for ForgotPasswordRequest<'a> {
    fn from(payload: &'a ResetRequest) -> Self {
        Self {
            email: &payload.email,
        }
    }
}

/// Body of the reset confirmation; the token travels in the path.
#[derive(Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub password: &'a str,
}

impl<'a> From<&'a ResetConfirmation> for ResetPasswordRequest<'a> {
    fn from(payload: &'a ResetConfirmation) -> Self {
        Self {
            password: payload.password.expose_secret(),
        }
    }
}

/// Shape of a failure body. Every field is optional; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct FailureBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub code: Option<String>,
}
