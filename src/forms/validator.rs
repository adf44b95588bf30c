//! Field validation for the four authentication forms.
//!
//! Each form owns a static rule table of `field -> predicate -> message`. All
//! rules run on every call, so sibling fields report their errors together, and
//! only the first failing rule per field is kept. Validation never performs I/O.

use super::types::{
    Credentials, Field, ForgotPasswordForm, LoginForm, RegisterForm, Registration,
    ResetConfirmation, ResetPasswordForm, ResetRequest, Role,
};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::{collections::BTreeMap, fmt};

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const LOGIN_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const REGISTER_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const RESET_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const SELECT_ROLE: &str = "Please select a role";

/// Minimum password length for login and registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum password length when choosing a new password.
pub const MIN_RESET_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;

/// Field-scoped validation errors in `Field` declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error unless the field already has one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// A form's rule set together with the payload it yields when every rule passes.
pub trait Schema {
    type Input: Clone + Default + Send + 'static;
    type Payload: Send + 'static;

    /// Validates `input`, returning either the normalized payload or every field error.
    ///
    /// # Errors
    /// Returns the collected `FieldErrors` when at least one rule fails.
    fn validate(input: &Self::Input) -> Result<Self::Payload, FieldErrors>;
}

struct Rule<I> {
    field: Field,
    check: fn(&I) -> bool,
    message: &'static str,
}

fn check<I>(rules: &[Rule<I>], input: &I) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if !(rule.check)(input) {
            errors.insert(rule.field, rule.message);
        }
    }
    errors
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn min_secret_chars(value: &SecretString, min: usize) -> bool {
    min_chars(value.expose_secret(), min)
}

fn parse_role(value: Option<&str>) -> Option<Role> {
    value.and_then(|value| value.parse().ok())
}

const LOGIN_RULES: &[Rule<LoginForm>] = &[
    Rule {
        field: Field::Email,
        check: |form| valid_email(&form.email),
        message: INVALID_EMAIL,
    },
    Rule {
        field: Field::Password,
        check: |form| min_secret_chars(&form.password, MIN_PASSWORD_LENGTH),
        message: LOGIN_PASSWORD_TOO_SHORT,
    },
];

const REGISTER_RULES: &[Rule<RegisterForm>] = &[
    Rule {
        field: Field::Role,
        check: |form| parse_role(form.role.as_deref()).is_some(),
        message: SELECT_ROLE,
    },
    Rule {
        field: Field::Name,
        check: |form| min_chars(&form.name, MIN_NAME_LENGTH),
        message: NAME_TOO_SHORT,
    },
    Rule {
        field: Field::Email,
        check: |form| valid_email(&form.email),
        message: INVALID_EMAIL,
    },
    Rule {
        field: Field::Password,
        check: |form| min_secret_chars(&form.password, MIN_PASSWORD_LENGTH),
        message: REGISTER_PASSWORD_TOO_SHORT,
    },
];

const FORGOT_PASSWORD_RULES: &[Rule<ForgotPasswordForm>] = &[Rule {
    field: Field::Email,
    check: |form| valid_email(&form.email),
    message: INVALID_EMAIL,
}];

const RESET_PASSWORD_RULES: &[Rule<ResetPasswordForm>] = &[Rule {
    field: Field::Password,
    check: |form| min_secret_chars(&form.password, MIN_RESET_PASSWORD_LENGTH),
    message: RESET_PASSWORD_TOO_SHORT,
}];

pub struct LoginSchema;

impl Schema for LoginSchema {
    type Input = LoginForm;
    type Payload = Credentials;

    fn validate(input: &LoginForm) -> Result<Credentials, FieldErrors> {
        let errors = check(LOGIN_RULES, input);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials {
            email: input.email.clone(),
            password: input.password.clone(),
        })
    }
}

pub struct RegisterSchema;

impl Schema for RegisterSchema {
    type Input = RegisterForm;
    type Payload = Registration;

    fn validate(input: &RegisterForm) -> Result<Registration, FieldErrors> {
        let errors = check(REGISTER_RULES, input);
        match parse_role(input.role.as_deref()) {
            Some(role) if errors.is_empty() => Ok(Registration {
                role,
                name: input.name.clone(),
                email: input.email.clone(),
                password: input.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

pub struct ForgotPasswordSchema;

impl Schema for ForgotPasswordSchema {
    type Input = ForgotPasswordForm;
    type Payload = ResetRequest;

    fn validate(input: &ForgotPasswordForm) -> Result<ResetRequest, FieldErrors> {
        let errors = check(FORGOT_PASSWORD_RULES, input);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ResetRequest {
            email: input.email.clone(),
        })
    }
}

pub struct ResetPasswordSchema;

impl Schema for ResetPasswordSchema {
    type Input = ResetPasswordForm;
    type Payload = ResetConfirmation;

    fn validate(input: &ResetPasswordForm) -> Result<ResetConfirmation, FieldErrors> {
        let errors = check(RESET_PASSWORD_RULES, input);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ResetConfirmation {
            token: input.token.clone(),
            password: input.password.clone(),
        })
    }
}
