use crate::{
    cli::{
        actions::terminal::{connect, report, TerminalNavigator, TerminalSession},
        globals::GlobalArgs,
    },
    forms::LoginForm,
    screens::LoginScreen,
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// Execute the login action.
/// # Errors
/// Returns an error if the input is invalid or the API rejects the credentials.
pub async fn execute(args: Args) -> Result<()> {
    let api = connect(&args.globals)?;
    let screen = LoginScreen::new(
        api,
        Arc::new(TerminalNavigator),
        Arc::new(TerminalSession),
    );

    screen.form().set_values(LoginForm {
        email: args.email,
        password: args.password,
    });

    let view = screen.submit().await;
    debug!(state = %view.state, "login finished");
    report(&view)
}
