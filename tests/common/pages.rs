//! Canned profile pages and theme stylesheets served through wiremock.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIGHT_STYLESHEET: &str = "/assets/light-4f2a.css";
pub const DARK_STYLESHEET: &str = "/assets/dark-91bc.css";

pub const LIGHT_CSS: &str = r"
[data-color-mode=light][data-light-theme=light],[data-color-mode=auto][data-light-theme=light]{
  --contribution-default-bgColor-0: #ebedf0;
  --contribution-default-bgColor-1: #9be9a8;
  --contribution-default-bgColor-2: #40c463;
  --contribution-default-bgColor-3: #30a14e;
  --contribution-default-bgColor-4: #216e39;
  --contribution-halloween-bgColor-1: #ffee4a;
  --contribution-halloween-bgColor-2: #ffc501;
  --contribution-halloween-bgColor-3: #fe9600;
  --contribution-halloween-bgColor-4: #03001c;
}
";

pub const DARK_CSS: &str = r"
[data-color-mode=dark][data-dark-theme=dark]{
  --contribution-default-bgColor-0:#161b22;
  --contribution-default-bgColor-1:#0e4429;
  --contribution-default-bgColor-2:#006d32;
  --contribution-default-bgColor-3:#26a641;
  --contribution-default-bgColor-4:#39d353;
  --contribution-halloween-bgColor-1:#631c03;
  --contribution-halloween-bgColor-2:#bd561d;
  --contribution-halloween-bgColor-3:#fa7a18;
  --contribution-halloween-bgColor-4:#fddf68
}
";

/// A profile page with a rendered contribution calendar.
///
/// `holiday` sets the `data-holiday` attribute; `None` omits it.
pub fn profile_page(holiday: Option<&str>) -> String {
    let attr = holiday.map_or_else(String::new, |h| format!(r#" data-holiday="{h}""#));
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-color-mode="auto">
<head>
  <link crossorigin="anonymous" media="all" rel="stylesheet" data-color-theme="light" href="{LIGHT_STYLESHEET}" />
  <link crossorigin="anonymous" media="all" rel="stylesheet" data-color-theme="dark" data-href="{DARK_STYLESHEET}" />
</head>
<body>
  <div class="js-calendar-graph"{attr}>
    <table class="ContributionCalendar-grid">
      <tr><td class="ContributionCalendar-day" data-level="0"></td></tr>
    </table>
  </div>
</body>
</html>"#
    )
}

/// A profile page without a contribution calendar.
#[allow(dead_code)] // integration target only
pub fn empty_page() -> String {
    r#"<!DOCTYPE html><html><body><div class="blankslate">Not Found</div></body></html>"#
        .to_string()
}

/// Serve `body` at `route` with status 200.
pub async fn serve(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serve a status-only response at `route`.
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount a profile for `user` plus both theme stylesheets.
pub async fn mount_profile(server: &MockServer, user: &str, holiday: Option<&str>) {
    serve(server, &format!("/{user}"), profile_page(holiday)).await;
    serve(server, LIGHT_STYLESHEET, LIGHT_CSS.to_string()).await;
    serve(server, DARK_STYLESHEET, DARK_CSS.to_string()).await;
}
