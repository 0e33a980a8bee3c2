// src/specs/teams.rs
//! Sheet *spec* for the Teams tab.
//!
//! Layout, as exported:
//! ```text
//! Team 3      | Falcon      |            |
//! Role        | Global Name | Twitch     | Status      <- optional sub-header (newer sheets)
//! Player 1    | Alice       | a_twitch   | Eliminated
//! Player 2    | Bob         | b_twitch   |
//! Observer    | Carol       | c_twitch   |
//!             |             |            |             <- terminator (or next "Team ..." row)
//! ```
//! Older sheets had a fixed six-row block with no sub-header; both shapes
//! are read by the same scan.
//!
//! Quirk kept on purpose: a member row whose role label is not one of the
//! four known labels is skipped without error.

use log::debug;

use crate::config::options::ParseOptions;
use crate::csv::Row;
use crate::teams::{Member, Role, Team};

// Header row
const COL_HEADER: usize = 0;
const COL_BIRD: usize = 1;

// Member row
const COL_ROLE: usize = 0;
const COL_NAME: usize = 1;
const COL_HANDLE: usize = 2;
const COL_STATUS: usize = 3;

/// Columns that must all be empty for a row to end a team block.
const TERMINATOR_COLS: [usize; 3] = [COL_ROLE, COL_NAME, COL_HANDLE];

const MAX_PER_KIND: usize = 2;

/// Bounds-checked cell read; short rows read as empty.
#[inline]
fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

fn is_team_header(row: &[String], opts: &ParseOptions) -> bool {
    cell(row, COL_HEADER).starts_with(opts.header_prefix.as_str())
}

fn is_subheader(row: &[String], opts: &ParseOptions) -> bool {
    cell(row, COL_NAME) == opts.subheader_label
}

fn is_terminator(row: &[String]) -> bool {
    TERMINATOR_COLS.iter().all(|&c| cell(row, c).is_empty())
}

fn role_for(label: &str, opts: &ParseOptions) -> Option<Role> {
    let l = &opts.role_labels;
    if label == l.player_1 { Some(Role::Player1) }
    else if label == l.player_2 { Some(Role::Player2) }
    else if label == l.observer_1 { Some(Role::Observer1) }
    else if label == l.observer_2 { Some(Role::Observer2) }
    else { None }
}

/// Missing name/handle fall back to the absent marker, missing status to "".
fn member_from_row(row: &[String], role: Role, opts: &ParseOptions) -> Member {
    let or_absent = |s: &str| if s.is_empty() { opts.absent_name.clone() } else { s.to_string() };
    Member {
        role,
        label: cell(row, COL_ROLE).to_string(),
        display_name: or_absent(cell(row, COL_NAME)),
        contact_handle: or_absent(cell(row, COL_HANDLE)),
        eliminated: cell(row, COL_STATUS) == opts.eliminated,
    }
}

fn team_from_header(row: &[String], opts: &ParseOptions) -> Team {
    let header = cell(row, COL_HEADER);
    Team {
        number: header[opts.header_prefix.len()..].to_string(),
        bird_name: cell(row, COL_BIRD).to_string(),
        players: Vec::new(),
        observers: Vec::new(),
    }
}

/// Scan the grid for team blocks, in sheet order.
pub fn parse_teams(rows: &[Row], opts: &ParseOptions) -> Vec<Team> {
    let mut teams = Vec::new();
    let mut i = 0usize;

    while i < rows.len() {
        if !is_team_header(&rows[i], opts) {
            i += 1;
            continue;
        }

        let mut team = team_from_header(&rows[i], opts);
        i += 1;

        if i < rows.len() && is_subheader(&rows[i], opts) {
            i += 1;
        }

        while i < rows.len() {
            let row = &rows[i];
            if is_team_header(row, opts) {
                break; // next block; outer loop picks it up
            }
            i += 1;
            if is_terminator(row) {
                break;
            }

            let label = cell(row, COL_ROLE);
            let Some(role) = role_for(label, opts) else {
                debug!("Team {}: skipping row with unknown role {:?}", team.number, label);
                continue;
            };

            let slot = if role.is_player() { &mut team.players } else { &mut team.observers };
            if slot.len() >= MAX_PER_KIND {
                debug!("Team {}: extra {:?} row ignored", team.number, label);
                continue;
            }
            slot.push(member_from_row(row, role, opts));
        }

        teams.push(team);
    }

    teams
}
