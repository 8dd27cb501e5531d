//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Overrides;
use crate::error::{HolidayError, Result};
use crate::output::{OutputMode, RobotFormat};

/// Detect the active GitHub contribution-graph holiday theme.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "holiday", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for pipelines/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "HOLIDAY_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file (.toml, .yaml or .yml)
    #[arg(long, global = true, env = "HOLIDAY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and pipelines
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }

    /// Output mode selected by the flags.
    pub fn output_mode(&self, stdout_is_terminal: bool) -> OutputMode {
        if self.use_json() {
            let format = if self.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            OutputMode::Robot(format)
        } else {
            OutputMode::Human {
                color: !self.no_color && stdout_is_terminal,
            }
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the theme from the live profile, falling back to the calendar (default)
    Detect(DetectArgs),

    /// Guess the theme from the date only, without the network
    Calendar(CalendarArgs),

    /// List the holiday periods used by the calendar guess
    Holidays,

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug, Default)]
pub struct DetectArgs {
    /// GitHub username to inspect
    #[arg(env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Site root serving the profile page
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Profile page timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Theme stylesheet timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub content_timeout_secs: Option<u64>,

    /// User agent sent with requests
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Date used by the calendar fallback (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Append key=value results to this file
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<PathBuf>,
}

impl DetectArgs {
    /// Configuration overrides carried by these flags.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            username: self.username.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            content_timeout_secs: self.content_timeout_secs,
            user_agent: self.user_agent.clone(),
            github_output: self.github_output.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct CalendarArgs {
    /// Date to check (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Append key=value results to this file
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| HolidayError::InvalidDate(s.to_string()))
}
