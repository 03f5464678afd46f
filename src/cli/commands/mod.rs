pub mod auth;
pub mod check;
pub mod logging;
pub mod logout;
pub mod scopes;
pub mod validate;

use crate::ryos::config::DEFAULT_BASE_URL;
use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_BASE_URL: &str = "base-url";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("ryos")
        .about("Client for the ryos identity service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_BASE_URL)
                .long("base-url")
                .help("Identity service URL")
                .env("RYOS_BASE_URL")
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .subcommand(auth::command())
        .subcommand(check::command())
        .subcommand(validate::command())
        .subcommand(scopes::command())
        .subcommand(logout::command());

    logging::with_args(command)
}
