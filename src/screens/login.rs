//! Login screen. On success the session port receives the response and the user
//! is sent home.

use super::{
    ports::{Navigator, Route, Session},
    render, Feedback, ScreenView, SubmitLabels,
};
use crate::api::AuthApi;
use crate::forms::{FormController, LoginForm, LoginSchema, SubmitOutcome};
use std::sync::Arc;
use tracing::info;

const TITLE: &str = "Welcome Back";
const LABELS: SubmitLabels = SubmitLabels {
    idle: "Login",
    pending: "Signing in...",
};

pub struct LoginScreen<A> {
    api: Arc<A>,
    navigator: Arc<dyn Navigator>,
    session: Arc<dyn Session>,
    form: FormController<LoginSchema>,
    feedback: Feedback,
}

impl<A: AuthApi> LoginScreen<A> {
    #[must_use]
    pub fn new(api: Arc<A>, navigator: Arc<dyn Navigator>, session: Arc<dyn Session>) -> Self {
        Self {
            api,
            navigator,
            session,
            form: FormController::new(LoginForm::default()),
            feedback: Feedback::default(),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormController<LoginSchema> {
        &self.form
    }

    pub async fn submit(&self) -> ScreenView {
        let outcome = self
            .form
            .submit(|credentials| self.api.login(credentials))
            .await;

        match outcome {
            SubmitOutcome::Invalid(_) => self.feedback.clear(),
            SubmitOutcome::Busy | SubmitOutcome::Discarded => {}
            SubmitOutcome::Succeeded(profile) => {
                info!("login succeeded");
                self.feedback.clear();
                self.session.on_authenticated(&profile);
                self.navigator.go_to(Route::Home);
                self.form.reset();
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
