//! Tracing subscriber setup.
//!
//! Logs always go to stderr so stdout carries only the detection result.
//!
//! | Mode | TTY | Output |
//! |------|-----|--------|
//! | Robot | any | JSON lines |
//! | Human | yes | Pretty colored lines |
//! | Human | no | Compact plain lines |
//!
//! `RUST_LOG` overrides the verbosity flags (e.g. `holiday=debug,reqwest=warn`).

use std::io::{self, IsTerminal};

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Json,
    Pretty,
    Compact,
}

impl LogStyle {
    /// Pick a style for the current stderr.
    pub fn detect(robot_mode: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if io::stderr().is_terminal() {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Filter directive for the verbosity flags: 0 = info, 1 = debug, 2+ = trace.
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "holiday=error";
    }
    match verbose {
        0 => "holiday=info",
        1 => "holiday=debug",
        _ => "holiday=trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let registry = tracing_subscriber::registry().with(filter);
    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    let result = match LogStyle::detect(robot_mode) {
        LogStyle::Json => registry.with(base.json().with_target(true)).try_init(),
        LogStyle::Pretty => registry.with(base.with_target(false)).try_init(),
        LogStyle::Compact => registry
            .with(base.with_ansi(false).with_target(false).compact())
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
