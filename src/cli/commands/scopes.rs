use clap::{Arg, ArgAction, Command};

pub const NAME: &str = "scopes";
pub const ARG_JSON: &str = "json";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME).about("List the scopes that can be requested").arg(
        Arg::new(ARG_JSON)
            .long("json")
            .help("Print the catalog as JSON")
            .action(ArgAction::SetTrue),
    )
}
