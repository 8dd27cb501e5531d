//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::calendar::HolidayRange;
use crate::error::{HolidayError, Result, ResultExt};
use crate::model::DetectionResult;

pub mod human;
pub mod pipeline;
pub mod robot;

pub use human::HumanOutput;
pub use pipeline::{append_pipeline_output, pipeline_lines};
pub use robot::RobotOutput;

/// Build and toolchain metadata reported by `holiday version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON output for pipelines and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human { color: bool },
}

impl OutputMode {
    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { color } => Box::new(HumanOutput::new(color)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    /// Print a detection result for `identifier` (None for calendar-only runs).
    fn detection(&self, result: &DetectionResult, identifier: Option<&str>) -> Result<()>;

    /// Print the calendar table, marking the entry active on `today`'s match.
    fn holidays(&self, table: &[HolidayRange], active: Option<&str>) -> Result<()>;

    fn version_info(&self, info: &VersionInfo) -> Result<()>;

    /// Report a host-level failure on stderr.
    fn error(&self, error: &HolidayError);
}

/// Serialize `data` as pretty or compact JSON.
pub fn to_json<T: Serialize + ?Sized>(data: &T, format: RobotFormat) -> Result<String> {
    let json = match format {
        RobotFormat::Json => serde_json::to_string_pretty(data),
        RobotFormat::JsonCompact => serde_json::to_string(data),
    };
    json.with_context(|| "JSON serialization failed")
}
