use crate::ryos::{AuthClient, Config, Headless};
use anyhow::{Result, bail};
use std::io::Write;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub config: Config,
    pub url: Url,
}

/// Print the one-time code found on the callback URL.
/// # Errors
/// Returns an error if the URL carries no code.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let client = AuthClient::with_config(args.config, Headless::new().with_url(args.url))?;

    let Some(code) = client.check()? else {
        bail!("no ryos code found in the URL");
    };

    writeln!(out, "{code}")?;

    Ok(())
}
