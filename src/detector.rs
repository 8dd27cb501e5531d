//! Detection orchestrator: live attempt, calendar fallback, normalization.
//!
//! One call to [`Detector::detect`] walks
//! `LiveAttempt -> {theme | no theme | failure} -> result`:
//!
//! | Live outcome | Result |
//! |---|---|
//! | signal with a theme | `(theme, css-variable, colors)` |
//! | signal without a theme | `("default", css-variable, colors)` |
//! | error, calendar match | `(label, date-fallback)` |
//! | error, no calendar match | `("default", error)` |
//!
//! A confirmed absence of a theme never consults the calendar. Errors are
//! logged and absorbed; there are no retries and no state is kept between
//! calls.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::calendar::{self, Clock, SystemClock};
use crate::config::Config;
use crate::fetcher::SourceFetcher;
use crate::model::{DEFAULT_THEME, DetectionMethod, DetectionResult, DisplayMode, ThemeSignal};
use crate::normalize;

/// Resolves the active theme for one identifier.
pub struct Detector<F, C = SystemClock> {
    identifier: String,
    fetcher: F,
    clock: C,
}

impl<F: SourceFetcher> Detector<F, SystemClock> {
    /// Detector for the configured username, using the local date.
    pub fn from_config(config: &Config, fetcher: F) -> Self {
        Self::new(config.username.clone(), fetcher, SystemClock)
    }
}

impl<F: SourceFetcher, C: Clock> Detector<F, C> {
    pub fn new(identifier: impl Into<String>, fetcher: F, clock: C) -> Self {
        Self {
            identifier: identifier.into(),
            fetcher,
            clock,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Run detection. Always produces a result.
    #[instrument(skip(self), fields(identifier = %self.identifier))]
    pub async fn detect(&self) -> DetectionResult {
        match self.fetcher.fetch(&self.identifier).await {
            Ok(signal) => from_signal(&signal),
            Err(err) => {
                warn!(error = %err, "Live detection failed, falling back to calendar");
                self.fallback()
            }
        }
    }

    /// Calendar guess without a live attempt: `date` on a match, `none` otherwise.
    pub fn calendar_only(&self) -> DetectionResult {
        calendar_result(self.clock.today())
    }

    fn fallback(&self) -> DetectionResult {
        let today = self.clock.today();
        match calendar::match_naive_date(today) {
            Some(label) => {
                info!(%today, theme = label, "Date fallback matched");
                normalize::build(label, DetectionMethod::DateFallback, None)
            }
            None => {
                info!(%today, "No holiday theme detected");
                normalize::build(DEFAULT_THEME, DetectionMethod::Error, None)
            }
        }
    }
}

/// Normalize a successful live signal.
pub fn from_signal(signal: &ThemeSignal) -> DetectionResult {
    let theme = match signal.theme() {
        Some(theme) => {
            info!(theme, "Detected holiday");
            theme
        }
        None => {
            info!("No holiday attribute found, using default colors");
            DEFAULT_THEME
        }
    };

    for mode in [DisplayMode::Light, DisplayMode::Dark] {
        for sample in signal.samples(mode) {
            debug!(
                %mode,
                level = sample.level,
                color = ?sample.color,
                variable = %sample.variable,
                "Grid color"
            );
        }
    }

    normalize::build(
        theme,
        DetectionMethod::CssVariable,
        Some((&signal.light_samples, &signal.dark_samples)),
    )
}

/// Calendar-only result for `date`.
pub fn calendar_result(date: NaiveDate) -> DetectionResult {
    match calendar::match_naive_date(date) {
        Some(label) => {
            info!(%date, theme = label, "Current date matches holiday period");
            normalize::build(label, DetectionMethod::Date, None)
        }
        None => {
            info!(%date, "No holiday period matches");
            normalize::build(DEFAULT_THEME, DetectionMethod::None, None)
        }
    }
}
