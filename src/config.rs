use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level schedsync configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SchedSyncConfig {
    /// Target group settings.
    #[serde(default)]
    pub group: GroupToml,

    /// Semester window and timezone.
    #[serde(default)]
    pub semester: SemesterToml,

    /// Lesson slot times; the built-in table when absent.
    #[serde(default)]
    pub slots: Option<Vec<SlotToml>>,

    /// Lesson type markers; the built-in markers when absent.
    #[serde(default)]
    pub lexer: LexerToml,

    /// Calendar naming.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Notification settings.
    #[serde(default)]
    pub notify: NotifyToml,
}

impl SchedSyncConfig {
    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupToml {
    #[serde(default = "default_group_label")]
    pub label: String,
    #[serde(default = "default_marker_column")]
    pub marker_column: usize,
}

impl Default for GroupToml {
    fn default() -> Self {
        Self {
            label: default_group_label(),
            marker_column: default_marker_column(),
        }
    }
}

fn default_group_label() -> String {
    "ББИ-25-2".to_string()
}
fn default_marker_column() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemesterToml {
    #[serde(default = "default_semester_start")]
    pub start: String,
    #[serde(default = "default_semester_end")]
    pub end: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub default_location: Option<String>,
}

impl Default for SemesterToml {
    fn default() -> Self {
        Self {
            start: default_semester_start(),
            end: default_semester_end(),
            timezone: default_timezone(),
            utc_offset: default_utc_offset(),
            default_location: None,
        }
    }
}

fn default_semester_start() -> String {
    "2025-09-01".to_string()
}
fn default_semester_end() -> String {
    "2025-12-31".to_string()
}
fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}
fn default_utc_offset() -> String {
    "+03:00".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotToml {
    pub lesson: u8,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LexerToml {
    #[serde(default)]
    pub lecture: Option<Vec<String>>,
    #[serde(default)]
    pub practice: Option<Vec<String>>,
    #[serde(default)]
    pub lab: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Display name; the group label when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            name: None,
            uid_domain: default_uid_domain(),
        }
    }
}

fn default_uid_domain() -> String {
    "schedsync".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub source_url: Option<String>,
    /// Schedule page to discover the workbook link on.
    pub page_url: Option<String>,
    /// Block heading the link sits under on `page_url`.
    #[serde(default = "default_page_block")]
    pub page_block: String,
    pub sheet: Option<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_fingerprint")]
    pub fingerprint: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            source_url: None,
            page_url: None,
            page_block: default_page_block(),
            sheet: None,
            output: default_output(),
            fingerprint: default_fingerprint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_page_block() -> String {
    schedsync_io::DEFAULT_BLOCK.to_string()
}
fn default_output() -> PathBuf {
    PathBuf::from("schedule.ics")
}
fn default_fingerprint() -> PathBuf {
    PathBuf::from("last_hash.txt")
}
fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotifyToml {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
