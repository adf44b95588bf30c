use crate::{
    cli::{
        actions::terminal::{connect, report, TerminalNavigator},
        globals::GlobalArgs,
    },
    forms::RegisterForm,
    screens::RegisterScreen,
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
    pub password: SecretString,
    /// Passed through unparsed so an unknown role surfaces as a field error.
    pub role: Option<String>,
}

/// Execute the register action.
/// # Errors
/// Returns an error if the input is invalid or the API rejects the registration.
pub async fn execute(args: Args) -> Result<()> {
    let api = connect(&args.globals)?;
    let screen = RegisterScreen::new(api, Arc::new(TerminalNavigator));

    screen.form().set_values(RegisterForm {
        role: args.role,
        name: args.name,
        email: args.email,
        password: args.password,
    });

    let view = screen.submit().await;
    debug!(state = %view.state, "registration finished");
    report(&view)
}
