use crate::ryos::{AuthClient, Config, Headless};
use anyhow::{Result, bail};
use secrecy::{ExposeSecret, SecretString};
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub config: Config,
    pub code: SecretString,
}

/// Validate the code and print `valid`.
/// # Errors
/// Returns an error if the identity service does not accept the code.
pub async fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let client = AuthClient::with_config(args.config, Headless::new())?;

    if !client.validate(args.code.expose_secret()).await {
        bail!("code was not accepted by {}", client.config().validate_url());
    }

    writeln!(out, "valid")?;

    Ok(())
}
