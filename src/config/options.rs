// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Everything one run needs. Built from compiled-in defaults; tests
/// construct their own to point at fixtures or temp dirs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub parse: ParseOptions,
    pub render: RenderOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub export_base: String,
    pub spreadsheet_id: String,
    pub sheet: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub sep: char,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            export_base: String::from(EXPORT_BASE),
            spreadsheet_id: String::from(SPREADSHEET_ID),
            sheet: String::from(TEAMS_SHEET),
            user_agent: String::from(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            sep: CSV_SEP,
        }
    }
}

impl FetchOptions {
    /// CSV export endpoint for the configured sheet.
    pub fn export_url(&self) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.export_base.trim_end_matches('/'),
            self.spreadsheet_id,
            self.sheet
        )
    }
}

/// Literals the team parser matches against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub header_prefix: String,
    pub subheader_label: String,
    pub role_labels: RoleLabels,
    pub eliminated: String,
    pub absent_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_prefix: String::from(TEAM_HEADER_PREFIX),
            subheader_label: String::from(MEMBER_SUBHEADER_LABEL),
            role_labels: RoleLabels::default(),
            eliminated: String::from(ELIMINATED_LITERAL),
            absent_name: String::from(ABSENT_NAME),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleLabels {
    pub player_1: String,
    pub player_2: String,
    pub observer_1: String,
    pub observer_2: String,
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self {
            player_1: String::from(ROLE_PLAYER_1),
            player_2: String::from(ROLE_PLAYER_2),
            observer_1: String::from(ROLE_OBSERVER_1),
            observer_2: String::from(ROLE_OBSERVER_2),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backgrounds {
    pub alive: String,
    pub partial: String,
    pub eliminated: String,
}

impl Default for Backgrounds {
    fn default() -> Self {
        Self {
            alive: String::from(BG_ALIVE),
            partial: String::from(BG_PARTIAL),
            eliminated: String::from(BG_ELIMINATED),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub backgrounds: Backgrounds,
    pub slide_interval_ms: u64,
    pub poll_interval_ms: u64,
    pub out_dir: PathBuf,
    pub alive_file: String,
    pub eliminated_file: String,
    pub alive_title: String,
    pub eliminated_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            backgrounds: Backgrounds::default(),
            slide_interval_ms: SLIDE_INTERVAL_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            alive_file: String::from(ALIVE_FILE),
            eliminated_file: String::from(ELIMINATED_FILE),
            alive_title: String::from(ALIVE_TITLE),
            eliminated_title: String::from(ELIMINATED_TITLE),
        }
    }
}

impl RenderOptions {
    pub fn alive_path(&self) -> PathBuf { self.out_dir.join(&self.alive_file) }
    pub fn eliminated_path(&self) -> PathBuf { self.out_dir.join(&self.eliminated_file) }

    /// "Alive Teams" -> "Alive Teams - No Data Yet"
    pub fn placeholder_title(title: &str) -> String {
        format!("{title}{NO_DATA_SUFFIX}")
    }
}
