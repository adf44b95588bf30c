use crate::{
    cli::{
        actions::terminal::{connect, report, TerminalNavigator},
        globals::GlobalArgs,
    },
    screens::ResetPasswordScreen,
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub token: String,
    pub password: SecretString,
}

/// Execute the reset-password action. An invalid token waits for the redirect
/// to the forgot-password screen before reporting the failure.
/// # Errors
/// Returns an error if the password is invalid or the token is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let api = connect(&args.globals)?;
    let screen = ResetPasswordScreen::new(api, Arc::new(TerminalNavigator), args.token);
    screen.set_password(args.password);

    let view = screen.submit().await;
    debug!(state = %view.state, "password reset finished");

    if screen.redirect_pending() {
        screen.follow_redirect().await;
    }

    report(&view)
}
