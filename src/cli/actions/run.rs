use crate::cli::actions::{Action, auth, check, logout, scopes, validate};
use anyhow::Result;
use std::io::{self, Write};

/// Execute the provided action, writing its output to stdout.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let mut out = io::stdout().lock();

    match action {
        Action::Auth(args) => auth::execute(args, &mut out),
        Action::Check(args) => check::execute(args, &mut out),
        Action::Validate(args) => validate::execute(args, &mut out).await,
        Action::Scopes(args) => scopes::execute(&args, &mut out),
        Action::Logout(args) => logout::execute(&args, &mut out),
    }?;

    out.flush()?;

    Ok(())
}
