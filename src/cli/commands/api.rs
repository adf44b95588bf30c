use clap::{Arg, ArgAction, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_HEADER: &str = "header";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("Base URL of the auth API (required), example: https://api.example.com")
                .env("AUTH_SCREENS_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_HEADER)
                .short('H')
                .long("header")
                .help("Default header sent with every request, as NAME:VALUE")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds (default: none)")
                .env("AUTH_SCREENS_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
