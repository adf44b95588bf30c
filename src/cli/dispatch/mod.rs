use crate::cli::{
    actions::{forgot_password, login, register, reset_password, Action},
    commands::{
        api::{ARG_API_URL, ARG_HEADER, ARG_TIMEOUT},
        screens::{
            ARG_EMAIL, ARG_NAME, ARG_PASSWORD, ARG_ROLE, ARG_TOKEN, CMD_FORGOT_PASSWORD,
            CMD_LOGIN, CMD_REGISTER, CMD_RESET_PASSWORD,
        },
    },
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn string(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(string(matches, id))
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;

    Ok(GlobalArgs {
        api_url,
        headers: matches
            .get_many::<String>(ARG_HEADER)
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        timeout: matches.get_one::<u64>(ARG_TIMEOUT).copied(),
    })
}

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    match matches.subcommand() {
        Some((CMD_LOGIN, sub)) => Ok(Action::Login(login::Args {
            globals,
            email: string(sub, ARG_EMAIL),
            password: secret(sub, ARG_PASSWORD),
        })),
        Some((CMD_REGISTER, sub)) => Ok(Action::Register(register::Args {
            globals,
            name: string(sub, ARG_NAME),
            email: string(sub, ARG_EMAIL),
            password: secret(sub, ARG_PASSWORD),
            role: sub.get_one::<String>(ARG_ROLE).cloned(),
        })),
        Some((CMD_FORGOT_PASSWORD, sub)) => {
            Ok(Action::ForgotPassword(forgot_password::Args {
                globals,
                email: string(sub, ARG_EMAIL),
            }))
        }
        Some((CMD_RESET_PASSWORD, sub)) => Ok(Action::ResetPassword(reset_password::Args {
            globals,
            token: sub
                .get_one::<String>(ARG_TOKEN)
                .cloned()
                .context("missing required argument: TOKEN")?,
            password: secret(sub, ARG_PASSWORD),
        })),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("a command is required")),
    }
}
