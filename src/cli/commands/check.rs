use clap::{Arg, Command};

pub const NAME: &str = "check";
pub const ARG_URL: &str = "url";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Print the one-time code carried by a callback URL")
        .arg(
            Arg::new(ARG_URL)
                .long("url")
                .help("Callback URL, example: https://app.example.com/cb?ryos=<code>")
                .required(true)
                .value_parser(url::Url::parse),
        )
}
