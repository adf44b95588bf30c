//! Registration screen. The role selector starts on `student`; a successful
//! registration resets the form and sends the user home.

use super::{
    ports::{Navigator, Route},
    render, Feedback, ScreenView, SubmitLabels,
};
use crate::api::AuthApi;
use crate::forms::{FormController, RegisterForm, RegisterSchema, Role, SubmitOutcome};
use std::sync::Arc;
use tracing::info;

const TITLE: &str = "Create Account";
const LABELS: SubmitLabels = SubmitLabels {
    idle: "Create Account",
    pending: "Creating account...",
};

pub struct RegisterScreen<A> {
    api: Arc<A>,
    navigator: Arc<dyn Navigator>,
    form: FormController<RegisterSchema>,
    feedback: Feedback,
}

impl<A: AuthApi> RegisterScreen<A> {
    #[must_use]
    pub fn new(api: Arc<A>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            form: FormController::new(RegisterForm::with_default_role()),
            feedback: Feedback::default(),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormController<RegisterSchema> {
        &self.form
    }

    /// Roles offered by the selector, in display order.
    #[must_use]
    pub const fn roles() -> [Role; 3] {
        Role::ALL
    }

    pub fn select_role(&self, role: Option<Role>) {
        self.form
            .update(|values| values.role = role.map(|role| role.as_str().to_string()));
    }

    pub async fn submit(&self) -> ScreenView {
        let outcome = self
            .form
            .submit(|payload| self.api.register(payload))
            .await;

        match outcome {
            SubmitOutcome::Invalid(_) => self.feedback.clear(),
            SubmitOutcome::Busy | SubmitOutcome::Discarded => {}
            SubmitOutcome::Succeeded(_) => {
                info!("registration succeeded");
                self.feedback.clear();
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
