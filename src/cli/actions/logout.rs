use crate::ryos::{Config, cookie};
use anyhow::Result;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub config: Config,
}

/// Print the `Set-Cookie` value that expires the session cookie. A native host
/// has no cookie store of its own, so the value is handed to whatever serves
/// the page.
/// # Errors
/// Returns an error if writing the output fails.
pub fn execute(args: &Args, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", cookie::removal(&args.config.cookie_name))?;

    Ok(())
}
