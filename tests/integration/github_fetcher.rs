//! HTTP fetcher against a local wiremock server.

use holiday::calendar::FixedClock;
use holiday::config::FetcherConfig;
use holiday::detector::Detector;
use holiday::error::{FetchError, HolidayError};
use holiday::fetcher::{GithubFetcher, SourceFetcher};
use holiday::model::{DetectionMethod, DisplayMode};
use wiremock::MockServer;

use crate::common::init_test_logging;
use crate::common::pages::{self, DARK_STYLESHEET, LIGHT_STYLESHEET};

fn fetcher_for(server: &MockServer) -> GithubFetcher {
    let config = FetcherConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        content_timeout_secs: 5,
        ..FetcherConfig::default()
    };
    GithubFetcher::new(&config).expect("fetcher")
}

fn colors(samples: &holiday::model::ColorSamples) -> Vec<Option<&str>> {
    samples.iter().map(|s| s.color.as_deref()).collect()
}

#[tokio::test]
async fn themed_profile_yields_theme_colors() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::mount_profile(&server, "octocat", Some("halloween")).await;

    let signal = fetcher_for(&server).fetch("octocat").await.unwrap();

    assert_eq!(signal.theme(), Some("halloween"));
    assert_eq!(
        colors(&signal.light_samples),
        vec![
            Some("#ebedf0"),
            Some("#ffee4a"),
            Some("#ffc501"),
            Some("#fe9600"),
            Some("#03001c")
        ]
    );
    assert_eq!(signal.dark_samples.as_slice()[4].color.as_deref(), Some("#fddf68"));
    assert_eq!(
        signal.light_samples.as_slice()[1].variable,
        "--contribution-halloween-bgColor-1"
    );
    assert_eq!(
        signal.light_samples.as_slice()[0].variable,
        "--contribution-default-bgColor-0"
    );
}

#[tokio::test]
async fn unthemed_profile_uses_default_variables() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::mount_profile(&server, "octocat", None).await;

    let signal = fetcher_for(&server).fetch("octocat").await.unwrap();

    assert_eq!(signal.theme(), None);
    assert_eq!(
        colors(&signal.dark_samples),
        vec![
            Some("#161b22"),
            Some("#0e4429"),
            Some("#006d32"),
            Some("#26a641"),
            Some("#39d353")
        ]
    );
}

#[tokio::test]
async fn undeclared_theme_variables_are_absent() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::mount_profile(&server, "octocat", Some("pride")).await;

    let signal = fetcher_for(&server).fetch("octocat").await.unwrap();

    assert_eq!(signal.theme(), Some("pride"));
    let light = colors(&signal.light_samples);
    assert_eq!(light[0], Some("#ebedf0"));
    assert!(light[1..].iter().all(Option::is_none));
}

#[tokio::test]
async fn missing_calendar_is_a_failure() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::serve(&server, "/ghost", pages::empty_page()).await;

    let err = fetcher_for(&server).fetch("ghost").await.unwrap_err();
    assert!(matches!(
        err,
        HolidayError::Fetch(FetchError::MissingContent { .. })
    ));
}

#[tokio::test]
async fn http_error_is_a_failure() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::serve_status(&server, "/octocat", 404).await;

    let err = fetcher_for(&server).fetch("octocat").await.unwrap_err();
    assert!(matches!(
        err,
        HolidayError::Fetch(FetchError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn stylesheet_error_is_a_failure() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::serve(&server, "/octocat", pages::profile_page(Some("halloween"))).await;
    pages::serve(&server, LIGHT_STYLESHEET, pages::LIGHT_CSS.to_string()).await;
    pages::serve_status(&server, DARK_STYLESHEET, 500).await;

    let err = fetcher_for(&server).fetch("octocat").await.unwrap_err();
    assert!(matches!(
        err,
        HolidayError::Fetch(FetchError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn page_without_stylesheets_has_absent_colors() {
    init_test_logging();
    let server = MockServer::start().await;
    let html = r#"<html><body><div data-holiday="christmas"><table><tr><td class="ContributionCalendar-day"></td></tr></table></div></body></html>"#;
    pages::serve(&server, "/octocat", html.to_string()).await;

    let signal = fetcher_for(&server).fetch("octocat").await.unwrap();
    assert_eq!(signal.theme(), Some("christmas"));
    assert!(signal.light_samples.iter().all(|s| s.color.is_none()));
    assert!(signal.dark_samples.iter().all(|s| s.color.is_none()));
}

#[tokio::test]
async fn detector_end_to_end_over_http() {
    init_test_logging();
    let server = MockServer::start().await;
    pages::mount_profile(&server, "octocat", Some("halloween")).await;

    let detector = Detector::new(
        "octocat",
        fetcher_for(&server),
        FixedClock::ymd(2024, 3, 1).unwrap(),
    );
    let result = detector.detect().await;

    assert!(result.holiday_detected);
    assert_eq!(result.detection_method, DetectionMethod::CssVariable);
    assert_eq!(
        result.palette(DisplayMode::Light),
        Some("#ebedf0, #ffee4a, #ffc501, #fe9600, #03001c")
    );
}

#[tokio::test]
async fn unreachable_server_falls_back_to_calendar() {
    init_test_logging();
    let server = MockServer::start().await;
    let fetcher = fetcher_for(&server);
    drop(server);

    let detector = Detector::new("octocat", fetcher, FixedClock::ymd(2024, 12, 25).unwrap());
    let result = detector.detect().await;

    assert_eq!(result.theme_name, "christmas");
    assert_eq!(result.detection_method, DetectionMethod::DateFallback);
    assert!(result.light_grid_colors.is_none());
}
