//! `key=value` output for CI pipelines (the `GITHUB_OUTPUT` file format).
//!
//! One line per present result field, in field order. Booleans are
//! `true`/`false`, strings are written verbatim and grid arrays as compact
//! JSON.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{HolidayError, Result, ResultExt};
use crate::model::DetectionResult;

/// Render `result` as `key=value` lines.
pub fn pipeline_lines(result: &DetectionResult) -> Result<String> {
    let value = serde_json::to_value(result).with_context(|| "JSON serialization failed")?;
    let Value::Object(fields) = value else {
        return Err(HolidayError::Other("result is not an object".to_string()));
    };

    let mut out = String::new();
    for (key, value) in fields {
        let rendered = match value {
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s,
            other => other.to_string(),
        };
        out.push_str(&key);
        out.push('=');
        out.push_str(&rendered);
        out.push('\n');
    }
    Ok(out)
}

/// Append `result` to the pipeline output file, creating it if needed.
#[instrument(skip(result), fields(path = %path.display()))]
pub fn append_pipeline_output(path: &Path, result: &DetectionResult) -> Result<()> {
    let lines = pipeline_lines(result)?;
    let write_err = |e: std::io::Error| HolidayError::OutputWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(lines.as_bytes()).map_err(write_err)?;

    debug!(bytes = lines.len(), "Wrote pipeline output");
    Ok(())
}
