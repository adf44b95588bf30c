//! Raw form inputs and the validated payloads produced from them. Raw inputs
//! mirror what a user typed; payloads only exist after validation succeeded.
//! Passwords stay wrapped in `SecretString` on both sides.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Account role offered by the registration screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Student, Self::Instructor, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Instructor => "Instructor",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| UnknownRole(value.to_string()))
    }
}

/// Form field that can carry a validation error.
/// Declaration order is the order errors are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Role,
    Name,
    Email,
    Password,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    /// Raw role value; `None` when nothing is selected.
    pub role: Option<String>,
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl RegisterForm {
    /// Initial values shown by the registration screen.
    #[must_use]
    pub fn with_default_role() -> Self {
        Self {
            role: Some(Role::Student.as_str().to_string()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

/// Reset confirmation input. The token comes from the navigation context and is
/// never interpreted.
#[derive(Clone, Debug, Default)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: SecretString,
}

/// Validated login payload.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Validated registration payload.
#[derive(Clone, Debug)]
pub struct Registration {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Validated forgot-password payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetRequest {
    pub email: String,
}

/// Validated reset confirmation payload.
#[derive(Clone, Debug)]
pub struct ResetConfirmation {
    pub token: String,
    pub password: SecretString,
}
