//! Scripted fetcher for testing without the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use holiday::fetcher::mock::MockFetcher;
//!
//! let fetcher = MockFetcher::themed("halloween");
//! let signal = fetcher.fetch("octocat").await?;
//! fetcher.assert_requested(&["octocat"]);
//! ```

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use super::SourceFetcher;
use crate::error::{FetchError, Result};
use crate::model::{ColorSamples, ThemeSignal};

/// What the mock answers with on every call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Signal(ThemeSignal),
    /// Fail with a timeout for the requested profile.
    Timeout,
    /// Fail with the given HTTP status.
    Status(u16),
    /// Fail because the calendar marker is missing.
    MissingContent,
}

/// Fetcher that replays a fixed outcome and records requests.
#[derive(Debug)]
pub struct MockFetcher {
    outcome: MockOutcome,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds with `theme` and the GitHub green palette in both modes.
    pub fn themed(theme: &str) -> Self {
        Self::new(MockOutcome::Signal(sample_signal(Some(theme))))
    }

    /// Succeeds with no theme attribute.
    pub fn unthemed() -> Self {
        Self::new(MockOutcome::Signal(sample_signal(None)))
    }

    /// Fails as if the page never loaded.
    pub fn failing() -> Self {
        Self::new(MockOutcome::Timeout)
    }

    /// Identifiers requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }

    /// Assert the exact sequence of requested identifiers.
    pub fn assert_requested(&self, expected: &[&str]) {
        let actual = self.requests();
        assert_eq!(actual, expected, "Unexpected fetch requests");
    }
}

#[async_trait]
impl SourceFetcher for MockFetcher {
    async fn fetch(&self, identifier: &str) -> Result<ThemeSignal> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(identifier.to_string());
        }
        debug!(identifier, outcome = ?self.outcome, "Mock fetch");

        let url = format!("https://github.com/{identifier}");
        match &self.outcome {
            MockOutcome::Signal(signal) => Ok(signal.clone()),
            MockOutcome::Timeout => Err(FetchError::Timeout { url }.into()),
            MockOutcome::Status(status) => Err(FetchError::Status {
                url,
                status: *status,
            }
            .into()),
            MockOutcome::MissingContent => Err(FetchError::MissingContent {
                url,
                marker: super::CALENDAR_MARKER.to_string(),
            }
            .into()),
        }
    }
}

/// A signal with GitHub's default light and dark greens.
pub fn sample_signal(theme: Option<&str>) -> ThemeSignal {
    let light = ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"];
    let dark = ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"];
    ThemeSignal {
        theme_name: theme.map(str::to_string),
        light_samples: ColorSamples::from_colors(theme, light.map(|c| Some(c.to_string()))),
        dark_samples: ColorSamples::from_colors(theme, dark.map(|c| Some(c.to_string()))),
    }
}
