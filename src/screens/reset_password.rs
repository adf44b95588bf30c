//! Reset-password screen.
//!
//! The reset token comes from the navigation context and is passed through
//! untouched. Failures are split three ways:
//!
//! - expired token: show the message and a "Request New Reset Link" action; the
//!   user decides whether to leave.
//! - invalid token: show the message, then redirect to `/forgot-password` after
//!   [`REDIRECT_DELAY`]. The redirect is cancelled if the screen is unmounted or
//!   dropped first.
//! - anything else: show the message without navigating.

use super::{
    ports::{Navigator, Route},
    render,
    view::CallToAction,
    Feedback, ScreenView, SubmitLabels,
};
use crate::api::{ApiError, AuthApi};
use crate::forms::{FormController, ResetPasswordForm, ResetPasswordSchema, SubmitOutcome};
use secrecy::SecretString;
use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Delay before an invalid token sends the user back to `/forgot-password`.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const RESET_SUCCEEDED: &str =
    "Password reset successful! Please log in with your new password.";

pub const REQUEST_NEW_LINK: CallToAction = CallToAction {
    label: "Request New Reset Link",
    route: Route::ForgotPassword,
};

const TITLE: &str = "Reset Password";
const LABELS: SubmitLabels = SubmitLabels {
    idle: "Reset Password",
    pending: "Resetting Password...",
};

/// Recovery path chosen for a failed reset confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetFailure {
    Expired,
    Invalid,
    Other,
}

#[must_use]
pub const fn classify_reset_failure(err: &ApiError) -> ResetFailure {
    match err {
        ApiError::TokenExpired(_) => ResetFailure::Expired,
        ApiError::TokenInvalid(_) => ResetFailure::Invalid,
        _ => ResetFailure::Other,
    }
}

pub struct ResetPasswordScreen<A> {
    api: Arc<A>,
    navigator: Arc<dyn Navigator>,
    form: FormController<ResetPasswordSchema>,
    feedback: Feedback,
    redirect: Mutex<Option<JoinHandle<()>>>,
    redirect_delay: Duration,
}

impl<A: AuthApi> ResetPasswordScreen<A> {
    #[must_use]
    pub fn new(api: Arc<A>, navigator: Arc<dyn Navigator>, token: impl Into<String>) -> Self {
        Self {
            api,
            navigator,
            form: FormController::new(ResetPasswordForm {
                token: token.into(),
                password: SecretString::default(),
            }),
            feedback: Feedback::default(),
            redirect: Mutex::new(None),
            redirect_delay: REDIRECT_DELAY,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormController<ResetPasswordSchema> {
        &self.form
    }

    pub fn set_password(&self, password: SecretString) {
        self.form.update(|values| values.password = password);
    }

    /// Submits the new password. Must run inside a Tokio runtime, which hosts the
    /// delayed redirect.
    ///
    /// A redirect scheduled by an earlier failure is only cancelled once a new
    /// request is sent; local validation errors leave it running.
    pub async fn submit(&self) -> ScreenView {
        let outcome = self
            .form
            .submit(|confirmation| {
                self.cancel_redirect();
                self.api.confirm_password_reset(confirmation)
            })
            .await;

        match outcome {
            SubmitOutcome::Invalid(_) if self.redirect_pending() => {}
            SubmitOutcome::Invalid(_) => self.feedback.clear(),
            SubmitOutcome::Busy | SubmitOutcome::Discarded => {}
            SubmitOutcome::Succeeded(_) => {
                info!("password reset confirmed");
                self.feedback.success(RESET_SUCCEEDED);
                self.navigator.go_to(Route::Login);
                self.form.reset();
            }
            SubmitOutcome::Failed(err) => {
                self.feedback.error(err.user_message());
                match classify_reset_failure(&err) {
                    ResetFailure::Expired => self.feedback.offer(REQUEST_NEW_LINK),
                    ResetFailure::Invalid => self.schedule_redirect(),
                    ResetFailure::Other => {}
                }
            }
        }

        self.view()
    }

    #[must_use]
    pub fn view(&self) -> ScreenView {
        render(TITLE, &self.form, &self.feedback, LABELS)
    }

    /// Follows the call-to-action, if one is shown.
    pub fn press_action(&self) -> Option<Route> {
        let action = self.view().action?;
        self.navigator.go_to(action.route);
        Some(action.route)
    }

    #[must_use]
    pub fn redirect_pending(&self) -> bool {
        self.redirect_lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for a scheduled redirect to fire. Returns `false` when none was
    /// pending or it was cancelled.
    pub async fn follow_redirect(&self) -> bool {
        let handle = self.redirect_lock().take();
        match handle {
            Some(handle) => handle.await.is_ok(),
            None => false,
        }
    }

    pub fn unmount(&self) {
        self.form.unmount();
        self.cancel_redirect();
    }

    fn redirect_lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.redirect.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn schedule_redirect(&self) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        debug!(delay_ms = delay.as_millis(), "scheduling redirect to forgot-password");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.go_to(Route::ForgotPassword);
        });

        if let Some(previous) = self.redirect_lock().replace(handle) {
            previous.abort();
        }
    }

    fn cancel_redirect(&self) {
        if let Some(handle) = self.redirect_lock().take() {
            handle.abort();
        }
    }
}

impl<A> Drop for ResetPasswordScreen<A> {
    fn drop(&mut self) {
        let handle = self
            .redirect
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}
