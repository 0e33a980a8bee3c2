// src/bin/cli.rs
use team_slides::cli;

/// A run-ending error is reported once, by color-eyre, and exits with status 1.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
