// src/fetch.rs
//
// Fetcher: sheet export -> grid of trimmed string fields.
// Fails soft. Any problem is logged and yields an empty grid.

use log::{debug, error, info};

use crate::config::options::FetchOptions;
use crate::core::SheetSource;
use crate::csv::{self, Grid};
use crate::error::FetchError;

const PREVIEW_CHARS: usize = 200;

/// Markers of an HTML document; the export serves a login/error page
/// instead of CSV when the sheet is not shared publicly.
const MARKUP_MARKERS: [&str; 2] = ["<!DOCTYPE html>", "<html"];

pub fn looks_like_markup(text: &str) -> bool {
    MARKUP_MARKERS.iter().any(|m| text.contains(m))
}

/// Fetch the configured sheet and split it into rows. Never errors.
pub fn fetch_grid(source: &dyn SheetSource, opts: &FetchOptions) -> Grid {
    let sheet = &opts.sheet;
    let url = opts.export_url();
    info!("Fetching data from: {url}");

    match fetch_text(source, &url) {
        Ok(text) => {
            let rows = csv::parse_rows(&text, opts.sep);
            info!("Parsed {} rows from {}", rows.len(), sheet);
            rows
        }
        Err(e) => {
            error!("Error fetching {sheet}: {e}");
            Vec::new()
        }
    }
}

fn fetch_text(source: &dyn SheetSource, url: &str) -> Result<String, FetchError> {
    let text = source.get_text(url)?;
    info!("CSV text length: {}", text.len());
    debug!("First {} characters: {}", PREVIEW_CHARS, text.chars().take(PREVIEW_CHARS).collect::<String>());

    if looks_like_markup(&text) {
        return Err(FetchError::Markup);
    }
    Ok(text)
}
