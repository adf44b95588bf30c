//! Forgot-password screen. A successful request clears the form and sends the
//! user home.

use super::{
    ports::{Navigator, Route},
    render, Feedback, ScreenView, SubmitLabels,
};
use crate::api::AuthApi;
use crate::forms::{ForgotPasswordForm, ForgotPasswordSchema, FormController, SubmitOutcome};
use std::sync::Arc;
use tracing::info;

const TITLE: &str = "Forgot Password";
const LABELS: SubmitLabels = SubmitLabels {
    idle: "Send Reset Link",
    pending: "Sending...",
};

pub struct ForgotPasswordScreen<A> {
    api: Arc<A>,
    navigator: Arc<dyn Navigator>,
    form: FormController<ForgotPasswordSchema>,
    feedback: Feedback,
}

impl<A: AuthApi> ForgotPasswordScreen<A> {
    #[must_use]
    pub fn new(api: Arc<A>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            form: FormController::new(ForgotPasswordForm::default()),
            feedback: Feedback::default(),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormController<ForgotPasswordSchema> {
        &self.form
    }

    pub async fn submit(&self) -> ScreenView {
        let outcome = self
            .form
            .submit(|request| self.api.request_password_reset(request))
            .await;

        match outcome {
            SubmitOutcome::Invalid(_) => self.feedback.clear(),
            SubmitOutcome::Busy | SubmitOutcome::Discarded => {}
            SubmitOutcome::Succeeded(_) => {
                info!("password reset requested");
                self.feedback.clear();
                self.form.reset();
                self.navigator.go_to(Route::Home);
            }
            SubmitOutcome::Failed(err) => self.feedback.error(err.user_message()),
        }

        self.view()
    }

    #[must_use]
    pub fn view(&self) -> ScreenView {
        render(TITLE, &self.form, &self.feedback, LABELS)
    }

    pub fn unmount(&self) {
        self.form.unmount();
    }
}
