use crate::ryos::scope;
use anyhow::Result;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub json: bool,
}

/// Print the scope catalog.
/// # Errors
/// Returns an error if writing the output fails.
pub fn execute(args: &Args, out: &mut impl Write) -> Result<()> {
    let catalog = scope::catalog();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
    } else {
        for descriptor in catalog {
            writeln!(out, "{}\t{}", descriptor.name, descriptor.description)?;
        }
    }

    Ok(())
}
