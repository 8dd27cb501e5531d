//! Configuration files and override precedence.

use std::fs;
use std::path::PathBuf;

use holiday::config::{self, Config, DEFAULT_BASE_URL, Overrides};
use holiday::error::HolidayError;
use tempfile::TempDir;

#[cfg(target_os = "linux")]
fn config_home(dir: &TempDir) -> env_lock::EnvGuard<'static> {
    env_lock::lock_env([("XDG_CONFIG_HOME", dir.path().to_str())])
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn toml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "holiday.toml",
        r#"
username = "monalisa"

[fetcher]
base_url = "http://localhost:8080"
timeout_secs = 3
"#,
    );

    let file = config::load_optional(Some(&path)).unwrap();
    let config = Config::resolve(file, Overrides::default()).unwrap();
    assert_eq!(config.username, "monalisa");
    assert_eq!(config.fetcher.base_url, "http://localhost:8080");
    assert_eq!(config.fetcher.timeout_secs, 3);
    assert_eq!(config.fetcher.content_timeout_secs, 10);
}

#[test]
fn yaml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "holiday.yml",
        "username: hubot\ngithub_output: /tmp/holiday-out\n",
    );

    let config = Config::resolve(config::load_config(&path).unwrap(), Overrides::default()).unwrap();
    assert_eq!(config.username, "hubot");
    assert_eq!(config.github_output, Some(PathBuf::from("/tmp/holiday-out")));
    assert_eq!(config.fetcher.base_url, DEFAULT_BASE_URL);
}

#[test]
fn flags_override_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "holiday.toml", "username = \"from-file\"\n");

    let overrides = Overrides {
        username: Some("from-flag".to_string()),
        timeout_secs: Some(7),
        ..Overrides::default()
    };
    let config = Config::resolve(config::load_config(&path).unwrap(), overrides).unwrap();
    assert_eq!(config.username, "from-flag");
    assert_eq!(config.fetcher.timeout_secs, 7);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = config::load_optional(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, HolidayError::ConfigNotFound { .. }));
    assert!(err.is_user_recoverable());
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "holiday.ini", "username=x");
    let err = config::load_config(&path).unwrap_err();
    assert!(matches!(err, HolidayError::ConfigParse(_)));
}

#[test]
fn malformed_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "holiday.toml", "username = [");
    assert!(matches!(
        config::load_config(&path),
        Err(HolidayError::ConfigParse(_))
    ));
}

#[cfg(target_os = "linux")]
#[test]
fn default_location_is_used_when_present() {
    let dir = TempDir::new().unwrap();
    let app_dir = dir.path().join("holiday");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "username = \"from-default\"\n").unwrap();

    let _env = config_home(&dir);
    assert_eq!(config::default_config_path(), Some(app_dir.join("config.toml")));
    let file = config::load_optional(None).unwrap();
    assert_eq!(file.username.as_deref(), Some("from-default"));
}

#[cfg(target_os = "linux")]
#[test]
fn absent_default_location_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let _env = config_home(&dir);

    let config = Config::resolve(config::load_optional(None).unwrap(), Overrides::default()).unwrap();
    assert_eq!(config, Config::default());
}
