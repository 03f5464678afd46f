use crate::ryos::config::DEFAULT_COOKIE_NAME;
use clap::{Arg, Command};

pub const NAME: &str = "logout";
pub const ARG_COOKIE_NAME: &str = "cookie-name";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Print the Set-Cookie value that clears the session cookie")
        .arg(
            Arg::new(ARG_COOKIE_NAME)
                .long("cookie-name")
                .help("Session cookie name")
                .env("RYOS_COOKIE_NAME")
                .default_value(DEFAULT_COOKIE_NAME),
        )
}
