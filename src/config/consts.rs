// src/config/consts.rs

// Net config
pub const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";
pub const SPREADSHEET_ID: &str = "1xaj-khNOUoX8c8jFsutmW8oQtlJp5LCVCpYr7tIoZio";
pub const TEAMS_SHEET: &str = "Teams";
pub const USER_AGENT: &str = concat!("team_slides/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Sheet layout
pub const CSV_SEP: char = ',';
pub const TEAM_HEADER_PREFIX: &str = "Team ";
pub const MEMBER_SUBHEADER_LABEL: &str = "Global Name";
pub const ROLE_PLAYER_1: &str = "Player 1";
pub const ROLE_PLAYER_2: &str = "Player 2";
pub const ROLE_OBSERVER_1: &str = "Observer";
pub const ROLE_OBSERVER_2: &str = "Observer 2";
pub const ELIMINATED_LITERAL: &str = "Eliminated";
pub const ABSENT_NAME: &str = "None";

// Backgrounds (relative to the generated pages)
pub const BG_ALIVE: &str = "./backgrounds/alive.png";
pub const BG_PARTIAL: &str = "./backgrounds/partial.png";
pub const BG_ELIMINATED: &str = "./backgrounds/eliminated.png";

// Client-side timers
pub const SLIDE_INTERVAL_MS: u64 = 5_000;
pub const POLL_INTERVAL_MS: u64 = 30_000;

// Output
pub const DEFAULT_OUT_DIR: &str = ".";
pub const ALIVE_FILE: &str = "alive-teams.html";
pub const ELIMINATED_FILE: &str = "eliminated-teams.html";
pub const ALIVE_TITLE: &str = "Alive Teams";
pub const ELIMINATED_TITLE: &str = "Eliminated Teams";
pub const NO_DATA_SUFFIX: &str = " - No Data Yet";
