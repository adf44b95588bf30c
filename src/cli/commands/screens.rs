use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_FORGOT_PASSWORD: &str = "forgot-password";
pub const CMD_RESET_PASSWORD: &str = "reset-password";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_NAME: &str = "name";
pub const ARG_ROLE: &str = "role";
pub const ARG_TOKEN: &str = "token";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Email address")
        .env("AUTH_SCREENS_EMAIL")
        .default_value("")
        .hide_default_value(true)
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Password")
        .env("AUTH_SCREENS_PASSWORD")
        .hide_env_values(true)
        .default_value("")
        .hide_default_value(true)
}

#[must_use]
pub fn subcommands(command: Command) -> Command {
    command
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in with email and password")
                .arg(email())
                .arg(password()),
        )
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account")
                .arg(
                    Arg::new(ARG_NAME)
                        .short('n')
                        .long("name")
                        .help("Full name")
                        .default_value("")
                        .hide_default_value(true),
                )
                .arg(email())
                .arg(password())
                .arg(
                    Arg::new(ARG_ROLE)
                        .short('r')
                        .long("role")
                        .help("Account role: student, instructor or admin")
                        .default_value("student"),
                ),
        )
        .subcommand(
            Command::new(CMD_FORGOT_PASSWORD)
                .about("Request a password reset link")
                .arg(email()),
        )
        .subcommand(
            Command::new(CMD_RESET_PASSWORD)
                .about("Choose a new password using a reset token")
                .arg(
                    Arg::new(ARG_TOKEN)
                        .help("Reset token from the emailed link")
                        .required(true),
                )
                .arg(password()),
        )
}
