//! Maps validated CLI matches to the action to run.

use crate::cli::actions::{Action, auth, check, logout, scopes, validate};
use crate::cli::commands::{self, ARG_BASE_URL};
use crate::ryos::Config;
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use url::Url;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let mut config = Config::default();
    if let Some(base_url) = matches.get_one::<String>(ARG_BASE_URL) {
        config = config.with_base_url(base_url.as_str());
    }

    let (name, sub_m) = matches
        .subcommand()
        .context("missing command, see --help")?;

    let required = |id: &str| -> Result<String> {
        sub_m
            .get_one::<String>(id)
            .cloned()
            .with_context(|| format!("missing required argument: --{id}"))
    };

    match name {
        commands::auth::NAME => Ok(Action::Auth(auth::Args {
            config,
            domain: required(commands::auth::ARG_DOMAIN)?,
            scopes: sub_m
                .get_many::<String>(commands::auth::ARG_SCOPE)
                .map(|scopes| scopes.cloned().collect())
                .unwrap_or_default(),
            redirect: required(commands::auth::ARG_REDIRECT)?,
        })),
        commands::check::NAME => Ok(Action::Check(check::Args {
            config,
            url: sub_m
                .get_one::<Url>(commands::check::ARG_URL)
                .cloned()
                .context("missing required argument: --url")?,
        })),
        commands::validate::NAME => Ok(Action::Validate(validate::Args {
            config,
            code: SecretString::from(required(commands::validate::ARG_CODE)?),
        })),
        commands::scopes::NAME => Ok(Action::Scopes(scopes::Args {
            json: sub_m.get_flag(commands::scopes::ARG_JSON),
        })),
        commands::logout::NAME => {
            let cookie_name = required(commands::logout::ARG_COOKIE_NAME)?;
            Ok(Action::Logout(logout::Args {
                config: config.with_cookie_name(cookie_name),
            }))
        }
        other => Err(anyhow!("unknown command: {other}")),
    }
}
