//! GitHub profile fetcher.
//!
//! Loads `<base_url>/<user>`, reads the `data-holiday` attribute and resolves
//! the contribution colors from the light and dark theme stylesheets the page
//! links to. No script runs: a variable the stylesheet does not declare is
//! reported as an absent color, the same as an empty computed style.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, trace, warn};

use super::SourceFetcher;
use crate::config::FetcherConfig;
use crate::error::{FetchError, HolidayError, Result};
use crate::model::{ColorSamples, DisplayMode, ThemeSignal};

/// Class present on every cell of a rendered contribution calendar.
pub const CALENDAR_MARKER: &str = "ContributionCalendar-day";

static CALENDAR_DAY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(".{CALENDAR_MARKER}")).expect("valid calendar selector")
});

static HOLIDAY_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-holiday]").expect("valid holiday selector"));

static STYLESHEET_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("link[href], link[data-href]").expect("valid stylesheet selector")
});

static CUSTOM_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(--[\w-]+)\s*:\s*([^;}]+)").expect("valid custom property pattern")
});

/// What the detector reads from a profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePage {
    /// Whether the contribution calendar was rendered.
    pub has_calendar: bool,
    /// First `data-holiday` attribute in document order; `Some("")` when bare.
    pub holiday: Option<String>,
    pub stylesheets: ThemeStylesheets,
}

impl ProfilePage {
    /// Parse the page DOM. Comments and script text never match.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let page = Self {
            has_calendar: document.select(&CALENDAR_DAY).next().is_some(),
            holiday: holiday_attribute(&document),
            stylesheets: theme_stylesheets(&document),
        };
        trace!(?page, "Parsed profile page");
        page
    }
}

/// Stylesheet URLs (as written in the page) for each display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStylesheets {
    pub light: Option<String>,
    pub dark: Option<String>,
}

impl ThemeStylesheets {
    pub fn get(&self, mode: DisplayMode) -> Option<&str> {
        match mode {
            DisplayMode::Light => self.light.as_deref(),
            DisplayMode::Dark => self.dark.as_deref(),
        }
    }
}

/// HTTP-backed [`SourceFetcher`] for GitHub profile pages.
#[derive(Debug, Clone)]
pub struct GithubFetcher {
    http: Client,
    base_url: Url,
    navigation_timeout: Duration,
    content_timeout: Duration,
}

impl GithubFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let navigation_timeout = Duration::from_secs(config.timeout_secs);
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(navigation_timeout)
            .build()
            .map_err(FetchError::Http)?;

        debug!(%base_url, timeout_secs = config.timeout_secs, "Created GitHub fetcher");
        Ok(Self {
            http,
            base_url,
            navigation_timeout,
            content_timeout: Duration::from_secs(config.content_timeout_secs),
        })
    }

    /// Profile page URL for `identifier`.
    pub fn profile_url(&self, identifier: &str) -> Result<Url> {
        let user = identifier.trim().trim_matches('/');
        if user.is_empty() || user.contains(['/', '?', '#']) || user.contains(char::is_whitespace)
        {
            return Err(FetchError::InvalidUrl {
                url: identifier.to_string(),
                reason: "not a GitHub username".to_string(),
            }
            .into());
        }
        self.base_url.join(user).map_err(|e| {
            HolidayError::from(FetchError::InvalidUrl {
                url: identifier.to_string(),
                reason: e.to_string(),
            })
        })
    }

    /// GET `url` and return the body, bounded by `timeout`.
    #[instrument(skip(self, url), fields(url = %url))]
    async fn get_text(&self, url: &Url, timeout: Duration) -> Result<String> {
        let request = async {
            let response = self.http.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            Ok::<_, FetchError>(response.text().await?)
        };

        let body = match tokio::time::timeout(timeout, request).await {
            Ok(Ok(body)) => body,
            Ok(Err(FetchError::Http(e))) if e.is_timeout() => {
                return Err(FetchError::Timeout { url: url.to_string() }.into());
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(FetchError::Timeout { url: url.to_string() }.into()),
        };
        trace!(bytes = body.len(), "Received body");
        Ok(body)
    }

    /// Fetch the stylesheet for `mode`, if the page links one.
    async fn load_stylesheet(
        &self,
        page_url: &Url,
        sheets: &ThemeStylesheets,
        mode: DisplayMode,
    ) -> Result<Option<String>> {
        let Some(href) = sheets.get(mode) else {
            warn!(%mode, "No theme stylesheet linked; colors will be absent");
            return Ok(None);
        };

        let url = page_url.join(href).map_err(|e| FetchError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })?;
        debug!(%mode, %url, "Loading theme stylesheet");
        self.get_text(&url, self.content_timeout).await.map(Some)
    }
}

#[async_trait]
impl SourceFetcher for GithubFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, identifier: &str) -> Result<ThemeSignal> {
        let url = self.profile_url(identifier)?;
        info!(%url, "Fetching profile page");

        let html = self.get_text(&url, self.navigation_timeout).await?;
        let page = ProfilePage::parse(&html);
        if !page.has_calendar {
            return Err(FetchError::MissingContent {
                url: url.to_string(),
                marker: CALENDAR_MARKER.to_string(),
            }
            .into());
        }
        debug!(theme = ?page.holiday, "Read holiday attribute");

        let light_css = self
            .load_stylesheet(&url, &page.stylesheets, DisplayMode::Light)
            .await?;
        let dark_css = self
            .load_stylesheet(&url, &page.stylesheets, DisplayMode::Dark)
            .await?;

        let sample_theme = page.holiday.as_deref().filter(|t| !t.is_empty());
        let light_samples = sample_colors(sample_theme, light_css.as_deref());
        let dark_samples = sample_colors(sample_theme, dark_css.as_deref());
        Ok(ThemeSignal {
            theme_name: page.holiday,
            light_samples,
            dark_samples,
        })
    }
}

fn holiday_attribute(document: &Html) -> Option<String> {
    let element = document.select(&HOLIDAY_ELEMENT).next()?;
    element
        .value()
        .attr("data-holiday")
        .map(|value| value.trim().to_string())
}

/// Find the light and dark theme stylesheets linked from the page.
///
/// Links tagged `data-color-theme="light"`/`"dark"` win; otherwise a file
/// named `light-*.css`/`dark-*.css` is used. Lazily loaded themes carry their
/// URL in `data-href`.
fn theme_stylesheets(document: &Html) -> ThemeStylesheets {
    let mut tagged = ThemeStylesheets::default();
    let mut named = ThemeStylesheets::default();

    for link in document.select(&STYLESHEET_LINK) {
        let Some((href, path)) = stylesheet_href(link) else {
            continue;
        };

        match link.value().attr("data-color-theme") {
            Some("light") => {
                tagged.light.get_or_insert_with(|| href.to_string());
            }
            Some("dark") => {
                tagged.dark.get_or_insert_with(|| href.to_string());
            }
            _ => {}
        }

        let file = path.rsplit('/').next().unwrap_or(path);
        if file.starts_with("light-") {
            named.light.get_or_insert_with(|| href.to_string());
        } else if file.starts_with("dark-") {
            named.dark.get_or_insert_with(|| href.to_string());
        }
    }

    ThemeStylesheets {
        light: tagged.light.or(named.light),
        dark: tagged.dark.or(named.dark),
    }
}

/// The link target and its path, when it points at a `.css` file.
fn stylesheet_href(link: ElementRef<'_>) -> Option<(&str, &str)> {
    let element = link.value();
    let href = element.attr("href").or_else(|| element.attr("data-href"))?;
    let path = href.split(['?', '#']).next().unwrap_or_default();
    path.ends_with(".css").then_some((href, path))
}

/// Custom-property declarations in `css`, scanned once.
///
/// The first declaration of a name wins. `var(--x)` usages are not
/// declarations and are skipped.
pub fn custom_properties(css: &str) -> HashMap<&str, &str> {
    let mut declared = HashMap::new();
    for caps in CUSTOM_PROPERTY.captures_iter(css) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = value.as_str().trim();
        if !value.is_empty() {
            declared.entry(name.as_str()).or_insert(value);
        }
    }
    declared
}

/// Sample the five level variables of `theme` in `css`.
pub fn sample_colors(theme: Option<&str>, css: Option<&str>) -> ColorSamples {
    let declared = css.map(custom_properties).unwrap_or_default();
    let colors = ColorSamples::level_variables(theme)
        .map(|(_, variable)| declared.get(variable.as_str()).map(|v| (*v).to_string()));
    ColorSamples::from_colors(theme, colors)
}
