//! Live theme sources.
//!
//! This module provides a trait-based abstraction over the real GitHub
//! profile fetcher and a scripted mock, so the detector can be tested
//! without the network.

pub mod github;
pub mod mock;

pub use github::{GithubFetcher, CALENDAR_MARKER};

use async_trait::async_trait;

use crate::error::Result;
use crate::model::ThemeSignal;

/// Extracts a [`ThemeSignal`] for an identifier.
///
/// # Implementation Notes
///
/// - Return `Ok` with `theme_name: None` when the page loads but carries no
///   theme attribute. That is a confident answer, not a failure.
/// - Return `Err` for anything that prevents reading the page: timeouts,
///   HTTP errors, missing page structure.
/// - Both sample lists hold exactly five levels in order.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<ThemeSignal>;
}

#[async_trait]
impl<F: SourceFetcher + ?Sized> SourceFetcher for Box<F> {
    async fn fetch(&self, identifier: &str) -> Result<ThemeSignal> {
        (**self).fetch(identifier).await
    }
}

#[async_trait]
impl<F: SourceFetcher + ?Sized> SourceFetcher for &F {
    async fn fetch(&self, identifier: &str) -> Result<ThemeSignal> {
        (**self).fetch(identifier).await
    }
}

/// Type alias for boxed trait object.
pub type BoxedFetcher = Box<dyn SourceFetcher>;
