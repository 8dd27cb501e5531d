//! Human-friendly terminal output.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::{debug, instrument, trace};

use crate::calendar::HolidayRange;
use crate::error::{HolidayError, Result};
use crate::model::{DetectionMethod, DetectionResult, DisplayMode};
use crate::theme::OutputTheme;

use super::{Output, VersionInfo};

/// Styled terminal output for human users.
pub struct HumanOutput {
    theme: OutputTheme,
}

impl HumanOutput {
    pub fn new(color: bool) -> Self {
        debug!(color, "Creating HumanOutput");
        let theme = if color {
            OutputTheme::default()
        } else {
            OutputTheme::plain()
        };
        Self { theme }
    }

    /// Render a detection result as text.
    #[instrument(skip(self, result))]
    pub fn render_detection(&self, result: &DetectionResult, identifier: Option<&str>) -> String {
        let t = &self.theme;
        let mut out = String::new();

        match identifier {
            Some(id) => {
                let _ = writeln!(out, "{}", t.header.apply_to(format!("Holiday theme for {id}")));
            }
            None => {
                let _ = writeln!(out, "{}", t.header.apply_to("Holiday theme by date"));
            }
        }

        if result.holiday_detected {
            let _ = writeln!(
                out,
                "  {} Detected holiday: {}",
                t.success.apply_to("✓"),
                t.value.apply_to(&result.theme_name)
            );
        } else {
            let _ = writeln!(out, "  {} No holiday theme detected", t.warning.apply_to("✗"));
        }
        let guess = if result.detection_method.is_guess() {
            " (calendar guess)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {} {}{guess}",
            t.label.apply_to("Method:"),
            result.detection_method
        );

        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            let Some(grid) = result.grid(mode) else {
                continue;
            };
            trace!(%mode, levels = grid.len(), "Rendering grid");
            let _ = writeln!(out, "  {}", t.label.apply_to(format!("{mode} theme grid colors:")));
            for cell in grid {
                let color = cell.color.as_deref().unwrap_or("(none)");
                let _ = writeln!(
                    out,
                    "    {} {color}",
                    t.level.apply_to(format!("Level {}:", cell.level))
                );
            }
            if let Some(palette) = result.palette(mode) {
                let _ = writeln!(out, "    {} {palette}", t.label.apply_to("Palette:"));
            }
        }

        let note = match result.detection_method {
            DetectionMethod::DateFallback => Some("Live detection failed; theme guessed from the date"),
            DetectionMethod::Error => Some("Live detection failed and no holiday period matches"),
            _ => None,
        };
        if let Some(note) = note {
            let _ = writeln!(out, "  {}", t.muted.apply_to(note));
        }

        out
    }

    /// Render the calendar table as text.
    pub fn render_holidays(&self, table: &[HolidayRange], active: Option<&str>) -> String {
        let t = &self.theme;
        let mut out = String::new();
        let _ = writeln!(out, "{}", t.header.apply_to("Holiday calendar (first match wins)"));
        for range in table {
            let marker = if active == Some(range.label) {
                t.success.apply_to("*").to_string()
            } else {
                " ".to_string()
            };
            let _ = writeln!(
                out,
                "  {marker} {:<16} {} to {}",
                range.label,
                month_day(range.start),
                month_day(range.end)
            );
        }
        out
    }
}

fn month_day((month, day): (u32, u32)) -> String {
    // Leap year so Feb 29 formats too.
    NaiveDate::from_ymd_opt(2000, month, day)
        .map_or_else(|| format!("{month:02}-{day:02}"), |d| d.format("%b %-d").to_string())
}

impl Output for HumanOutput {
    fn detection(&self, result: &DetectionResult, identifier: Option<&str>) -> Result<()> {
        print!("{}", self.render_detection(result, identifier));
        Ok(())
    }

    fn holidays(&self, table: &[HolidayRange], active: Option<&str>) -> Result<()> {
        print!("{}", self.render_holidays(table, active));
        Ok(())
    }

    fn version_info(&self, info: &VersionInfo) -> Result<()> {
        println!("holiday {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
        Ok(())
    }

    fn error(&self, error: &HolidayError) {
        debug!(error = %error, recoverable = error.is_user_recoverable(), "Outputting error");
        eprintln!("{}: {error}", self.theme.error.apply_to("Error"));
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {suggestion}", self.theme.warning.apply_to("Hint"));
        }
    }
}
