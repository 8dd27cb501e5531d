//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::calendar::HolidayRange;
use crate::error::{HolidayError, Result};
use crate::model::DetectionResult;

use super::{Output, RobotFormat, VersionInfo, to_json};

/// JSON output for pipelines and scripting.
///
/// The detection result is printed exactly as serialized, with the pipeline
/// field names (`holiday_detected`, `theme_name`, ...).
pub struct RobotOutput {
    format: RobotFormat,
}

#[derive(Serialize)]
struct HolidayRow<'a> {
    label: &'a str,
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
    active: bool,
}

impl RobotOutput {
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Render a detection result.
    pub fn render_detection(&self, result: &DetectionResult) -> Result<String> {
        to_json(result, self.format)
    }

    /// Render the calendar table.
    pub fn render_holidays(&self, table: &[HolidayRange], active: Option<&str>) -> Result<String> {
        let rows: Vec<_> = table
            .iter()
            .map(|range| HolidayRow {
                label: range.label,
                start_month: range.start.0,
                start_day: range.start.1,
                end_month: range.end.0,
                end_day: range.end.1,
                active: active == Some(range.label),
            })
            .collect();
        to_json(&rows, self.format)
    }

    fn print<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = to_json(data, self.format)?;
        trace!(json_len = json.len(), "JSON serialized");
        println!("{json}");
        Ok(())
    }
}

impl Output for RobotOutput {
    #[instrument(skip(self, result), fields(method = %result.detection_method))]
    fn detection(&self, result: &DetectionResult, _identifier: Option<&str>) -> Result<()> {
        debug!("Robot: detection");
        self.print(result)
    }

    fn holidays(&self, table: &[HolidayRange], active: Option<&str>) -> Result<()> {
        let json = self.render_holidays(table, active)?;
        println!("{json}");
        Ok(())
    }

    fn version_info(&self, info: &VersionInfo) -> Result<()> {
        self.print(info)
    }

    fn error(&self, error: &HolidayError) {
        debug!(error = %error, "Robot: error");
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        // Errors stay pretty even in compact mode.
        match serde_json::to_string_pretty(&json) {
            Ok(text) => eprintln!("{text}"),
            Err(_) => eprintln!("{error}"),
        }
    }
}
