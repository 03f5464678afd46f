use clap::{Arg, Command};

pub const NAME: &str = "validate";
pub const ARG_CODE: &str = "code";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Exchange a one-time code with the identity service")
        .arg(
            Arg::new(ARG_CODE)
                .short('c')
                .long("code")
                .help("One-time code returned on the callback URL")
                .env("RYOS_CODE")
                .hide_env_values(true)
                .required(true),
        )
}
