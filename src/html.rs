// src/html.rs
//
// Slideshow page rendering. Templates are compiled in; sheet-derived text is
// autoescaped by Tera (template names end in `.html`).

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::options::RenderOptions;
use crate::error::Result;
use crate::teams::{Member, Team, TeamStatus};

const BASE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/base.html"));
const SLIDESHOW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/slideshow.html"));
const PLACEHOLDER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/placeholder.html"));

#[derive(Serialize)]
struct Page<'a> {
    title: &'a str,
    updated: &'a str,
    slide_interval_ms: u64,
    poll_interval_ms: u64,
    team_count: usize,
    slides: Vec<Slide<'a>>,
}

#[derive(Serialize)]
struct Slide<'a> {
    number: &'a str,
    bird_name: &'a str,
    status: TeamStatus,
    background: &'a str,
    players: Vec<Line<'a>>,
    observers: Vec<Line<'a>>,
}

#[derive(Serialize)]
struct Line<'a> {
    label: &'a str,
    name: &'a str,
    handle: &'a str,
    eliminated: bool,
}

impl<'a> From<&'a Member> for Line<'a> {
    fn from(m: &'a Member) -> Self {
        Line {
            label: &m.label,
            name: &m.display_name,
            handle: &m.contact_handle,
            eliminated: m.eliminated,
        }
    }
}

pub struct Renderer {
    tera: Tera,
    opts: RenderOptions,
    absent_name: String,
}

impl Renderer {
    pub fn new(opts: &RenderOptions, absent_name: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("slideshow.html", SLIDESHOW),
            ("placeholder.html", PLACEHOLDER),
        ])?;
        Ok(Self { tera, opts: opts.clone(), absent_name: String::from(absent_name) })
    }

    pub fn background(&self, status: TeamStatus) -> &str {
        let bg = &self.opts.backgrounds;
        match status {
            TeamStatus::Alive => bg.alive.as_str(),
            TeamStatus::Partial => bg.partial.as_str(),
            TeamStatus::Eliminated => bg.eliminated.as_str(),
        }
    }

    fn slide<'a>(&'a self, team: &'a Team) -> Slide<'a> {
        let status = team.status(&self.absent_name);
        Slide {
            number: &team.number,
            bird_name: &team.bird_name,
            status,
            background: self.background(status),
            players: team.players.iter().map(Line::from).collect(),
            observers: team
                .observers
                .iter()
                .filter(|o| o.display_name != self.absent_name)
                .map(Line::from)
                .collect(),
        }
    }

    fn page<'a>(&self, title: &'a str, updated: &'a str, slides: Vec<Slide<'a>>) -> Page<'a> {
        Page {
            title,
            updated,
            slide_interval_ms: self.opts.slide_interval_ms,
            poll_interval_ms: self.opts.poll_interval_ms,
            team_count: slides.len(),
            slides,
        }
    }

    /// One slide per team, first slide shown initially.
    pub fn slideshow(&self, teams: &[Team], title: &str) -> Result<String> {
        let updated = now_label();
        let slides = teams.iter().map(|t| self.slide(t)).collect();
        let ctx = Context::from_serialize(self.page(title, &updated, slides))?;
        Ok(self.tera.render("slideshow.html", &ctx)?)
    }

    /// Stand-in page for when the sheet produced nothing to show.
    pub fn placeholder(&self, title: &str) -> Result<String> {
        let updated = now_label();
        let ctx = Context::from_serialize(self.page(title, &updated, Vec::new()))?;
        Ok(self.tera.render("placeholder.html", &ctx)?)
    }
}

fn now_label() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::Role;

    fn member(role: Role, label: &str, name: &str, eliminated: bool) -> Member {
        Member {
            role,
            label: String::from(label),
            display_name: String::from(name),
            contact_handle: format!("{name}_tw"),
            eliminated,
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(&RenderOptions::default(), "None").unwrap()
    }

    #[test]
    fn backgrounds_follow_status() {
        let r = renderer();
        assert_eq!(r.background(TeamStatus::Alive), "./backgrounds/alive.png");
        assert_eq!(r.background(TeamStatus::Partial), "./backgrounds/partial.png");
        assert_eq!(r.background(TeamStatus::Eliminated), "./backgrounds/eliminated.png");
    }

    #[test]
    fn slideshow_contents() {
        let team = Team {
            number: String::from("3"),
            bird_name: String::from("Falcon"),
            players: vec![
                member(Role::Player1, "Player 1", "Alice", true),
                member(Role::Player2, "Player 2", "Bob", false),
            ],
            observers: vec![
                member(Role::Observer1, "Observer", "Carol", false),
                member(Role::Observer2, "Observer 2", "None", false),
            ],
        };
        let html = renderer().slideshow(&[team], "Alive Teams").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Alive Teams</title>"));
        assert!(html.contains("Alive Teams (1 teams)"));
        assert!(html.contains("Team 3"));
        assert!(html.contains(r#"<div class="bird-name">Falcon</div>"#));
        assert!(html.contains(r#"<div class="player eliminated">Player 1: Alice (Alice_tw)</div>"#));
        assert!(html.contains(r#"<div class="player alive">Player 2: Bob (Bob_tw)</div>"#));
        assert!(html.contains("Observer: Carol (Carol_tw)"));
        assert!(!html.contains("Observer 2:"));
        assert!(html.contains("url('./backgrounds/partial.png')"));
        assert!(html.contains(r#"class="slide active""#));
        assert!(html.contains("setInterval(nextSlide, 5000)"));
        assert!(html.contains("setInterval(checkForUpdate, 30000)"));
    }

    #[test]
    fn only_first_slide_active_and_empty_bird_omitted() {
        let teams: Vec<Team> = ["1", "2", "3"]
            .iter()
            .map(|n| Team { number: String::from(*n), ..Team::default() })
            .collect();
        let html = renderer().slideshow(&teams, "Eliminated Teams").unwrap();
        assert_eq!(html.matches(r#"class="slide active""#).count(), 1);
        assert_eq!(html.matches(r#"class="slide ""#).count(), 2);
        assert!(!html.contains(r#"class="bird-name""#));
        assert!(html.contains("Eliminated Teams (3 teams)"));
    }

    #[test]
    fn sheet_text_is_escaped() {
        let team = Team {
            number: String::from("9"),
            bird_name: String::from("<script>alert(1)</script>"),
            ..Team::default()
        };
        let html = renderer().slideshow(&[team], "Alive Teams").unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn placeholder_page() {
        let html = renderer().placeholder("Alive Teams - No Data Yet").unwrap();
        assert!(html.contains("<title>Alive Teams - No Data Yet</title>"));
        assert!(html.contains("Waiting for team data"));
        assert!(html.contains("checkForUpdate"));
    }
}
