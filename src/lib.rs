//! Holiday theme detection for GitHub contribution graphs.
//!
//! This library exposes the detection engine behind the `holiday` CLI so it
//! can be driven from tests and other programs.
//!
//! # Modules
//!
//! - `calendar`: Date-based holiday guess
//! - `normalize`: Builds the canonical result record
//! - `detector`: Live attempt with calendar fallback
//! - `fetcher`: Live theme sources (GitHub over HTTP, mock)
//! - `model`: Shared value types
//! - `config`: Configuration file and override handling
//! - `output`: Output mode abstraction (robot/human/pipeline)
//! - `error`: Error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod output;
pub mod theme;

pub use detector::Detector;
pub use error::{HolidayError, Result};
pub use model::{DetectionMethod, DetectionResult};
