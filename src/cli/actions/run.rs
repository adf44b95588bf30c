use crate::cli::actions::{forgot_password, login, register, reset_password, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Register(args) => register::execute(args).await,
        Action::ForgotPassword(args) => forgot_password::execute(args).await,
        Action::ResetPassword(args) => reset_password::execute(args).await,
    }
}
