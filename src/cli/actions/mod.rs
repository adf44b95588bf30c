pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod terminal;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    ForgotPassword(forgot_password::Args),
    ResetPassword(reset_password::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the input is rejected or the API reports a failure.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
