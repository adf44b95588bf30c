//! The four authentication screens.
//!
//! A screen composes a [`FormController`], an [`AuthApi`](crate::api::AuthApi)
//! and the hosting application's [`Navigator`] (plus [`Session`] for login). It
//! is the only layer allowed to navigate as a side effect of an outcome.
//! Screens return a [`ScreenView`] after every submit; nothing is rendered here.

pub mod forgot_password;
pub mod login;
pub mod ports;
pub mod register;
pub mod reset_password;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use forgot_password::ForgotPasswordScreen;
pub use login::LoginScreen;
pub use ports::{Navigator, Route, Session};
pub use register::RegisterScreen;
pub use reset_password::{classify_reset_failure, ResetFailure, ResetPasswordScreen};
pub use view::{Banner, BannerKind, CallToAction, ScreenView};

use crate::forms::{FormController, Schema};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Submit button text while idle and while a request is pending.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SubmitLabels {
    pub idle: &'static str,
    pub pending: &'static str,
}

#[derive(Clone, Debug, Default)]
struct FeedbackState {
    banner: Option<Banner>,
    action: Option<CallToAction>,
}

/// Banner and call-to-action shown below a form.
#[derive(Debug, Default)]
pub(crate) struct Feedback {
    inner: Mutex<FeedbackState>,
}

impl Feedback {
    fn lock(&self) -> MutexGuard<'_, FeedbackState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn clear(&self) {
        *self.lock() = FeedbackState::default();
    }

    pub fn error(&self, message: &str) {
        *self.lock() = FeedbackState {
            banner: Some(Banner::error(message)),
            action: None,
        };
    }

    pub fn success(&self, message: &str) {
        *self.lock() = FeedbackState {
            banner: Some(Banner::success(message)),
            action: None,
        };
    }

    pub fn offer(&self, action: CallToAction) {
        self.lock().action = Some(action);
    }
}

pub(crate) fn render<S: Schema>(
    title: &'static str,
    form: &FormController<S>,
    feedback: &Feedback,
    labels: SubmitLabels,
) -> ScreenView {
    let state = form.state();
    let submit_label = if state.is_pending() {
        labels.pending
    } else {
        labels.idle
    };
    let FeedbackState { banner, action } = feedback.lock().clone();

    ScreenView {
        title,
        submit_enabled: form.is_submit_enabled(),
        field_errors: form.errors(),
        state,
        banner,
        action,
        submit_label,
    }
}
