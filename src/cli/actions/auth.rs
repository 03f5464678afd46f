use crate::ryos::{AuthClient, Config, Headless};
use anyhow::Result;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub config: Config,
    pub domain: String,
    pub scopes: Vec<String>,
    pub redirect: String,
}

/// Print the login URL.
/// # Errors
/// Returns an error if the domain, scopes or redirect are rejected.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let client = AuthClient::with_config(args.config, Headless::new())?;
    let redirect = client.initiate_auth(&args.domain, &args.scopes, &args.redirect)?;

    writeln!(out, "{}", redirect.url())?;

    Ok(())
}
