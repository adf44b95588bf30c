use crate::{
    cli::{
        actions::terminal::{connect, report, TerminalNavigator},
        globals::GlobalArgs,
    },
    forms::ForgotPasswordForm,
    screens::ForgotPasswordScreen,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
}

/// Execute the forgot-password action.
/// # Errors
/// Returns an error if the email is invalid or the request fails.
pub async fn execute(args: Args) -> Result<()> {
    let api = connect(&args.globals)?;
    let screen = ForgotPasswordScreen::new(api, Arc::new(TerminalNavigator));

    screen
        .form()
        .set_values(ForgotPasswordForm { email: args.email });

    let view = screen.submit().await;
    debug!(state = %view.state, "reset link request finished");
    report(&view)
}
