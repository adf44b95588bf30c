//! Form state for the authentication screens: raw inputs, validated payloads,
//! per-form rule tables and the submission controller.

pub mod controller;
pub mod types;
pub mod validator;

pub use controller::{FormController, SubmissionState, SubmitOutcome};
pub use types::{
    Credentials, Field, ForgotPasswordForm, LoginForm, RegisterForm, Registration,
    ResetConfirmation, ResetPasswordForm, ResetRequest, Role, UnknownRole,
};
pub use validator::{
    FieldErrors, ForgotPasswordSchema, LoginSchema, RegisterSchema, ResetPasswordSchema, Schema,
};
