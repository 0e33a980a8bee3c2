// src/runner.rs
use std::path::PathBuf;

use log::info;

use crate::{
    config::options::{AppOptions, RenderOptions},
    core::SheetSource,
    error::Result,
    fetch::fetch_grid,
    file::write_page,
    html::Renderer,
    specs,
    teams::{partition_by_alive, Team},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub teams: usize,
    pub alive: usize,
    pub eliminated: usize,
    /// Pages that got the "No Data Yet" stand-in
    pub placeholders: usize,
}

/// Fetch, parse, split and write both slideshow pages.
///
/// Fetch problems never surface here: they arrive as an empty grid, which
/// produces placeholder pages. Only rendering or file errors are returned.
pub fn run(opts: &AppOptions, source: &dyn SheetSource) -> Result<RunSummary> {
    let renderer = Renderer::new(&opts.render, &opts.parse.absent_name)?;
    let mut summary = RunSummary::default();

    info!("Fetching team data...");
    let grid = fetch_grid(source, &opts.fetch);

    let (alive, eliminated) = if grid.is_empty() {
        info!("No teams data found - creating placeholder pages");
        (Vec::new(), Vec::new())
    } else {
        let teams = specs::teams::parse_teams(&grid, &opts.parse);
        info!("Found {} teams", teams.len());
        summary.teams = teams.len();
        partition_by_alive(teams, &opts.parse.absent_name)
    };

    summary.alive = alive.len();
    summary.eliminated = eliminated.len();
    info!("Alive teams: {}, Eliminated teams: {}", summary.alive, summary.eliminated);

    let r = &opts.render;
    let pages = [
        (r.alive_path(), &r.alive_title, &alive),
        (r.eliminated_path(), &r.eliminated_title, &eliminated),
    ];
    for (path, title, teams) in pages {
        let html = render_page(&renderer, teams, title)?;
        if teams.is_empty() {
            summary.placeholders += 1;
        }
        let written = write_page(&path, &html)?;
        info!("Generated {}", written.display());
        summary.files_written.push(written);
    }

    info!("Slideshow generation complete!");
    Ok(summary)
}

fn render_page(renderer: &Renderer, teams: &[Team], title: &str) -> Result<String> {
    if teams.is_empty() {
        renderer.placeholder(&RenderOptions::placeholder_title(title))
    } else {
        renderer.slideshow(teams, title)
    }
}
