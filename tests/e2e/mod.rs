//! End-to-end tests for the holiday CLI output modes.

#[path = "../common/mod.rs"]
mod common;


/// Port that refuses connections, for exercising the calendar fallback.
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";
