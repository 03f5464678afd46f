use clap::{Arg, ArgAction, Command};

pub const NAME: &str = "auth";
pub const ARG_DOMAIN: &str = "domain";
pub const ARG_SCOPE: &str = "scope";
pub const ARG_REDIRECT: &str = "redirect";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Print the login URL for a domain and set of scopes")
        .arg(
            Arg::new(ARG_DOMAIN)
                .short('d')
                .long("domain")
                .help("Host name of the calling application, example: app.example.com")
                .env("RYOS_DOMAIN")
                .required(true),
        )
        .arg(
            Arg::new(ARG_SCOPE)
                .short('s')
                .long("scope")
                .help("Scope to request, repeat or comma-separate for several")
                .default_value("identity")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_REDIRECT)
                .short('r')
                .long("redirect")
                .help("URL the identity service sends the user back to")
                .env("RYOS_REDIRECT")
                .required(true),
        )
}
