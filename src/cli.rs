// src/cli.rs
use log::{info, LevelFilter};

use crate::config::options::AppOptions;
use crate::core::HttpSource;
use crate::error::Result;
use crate::runner::{self, RunSummary};

/// One full run with the compiled-in configuration. Takes no arguments.
pub fn run() -> Result<RunSummary> {
    crate::logging::init(LevelFilter::Info);

    let opts = AppOptions::default();
    let source = HttpSource::new(&opts.fetch)?;
    let summary = runner::run(&opts, &source)?;

    info!(
        "{} teams, {} files written ({} placeholder)",
        summary.teams,
        summary.files_written.len(),
        summary.placeholders
    );
    Ok(summary)
}
