//! holiday - detect the active GitHub contribution-graph holiday theme.
//!
//! Prints JSON for pipelines (`--robot`) or text for humans, and appends
//! `key=value` lines to `$GITHUB_OUTPUT` when it is set.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use holiday::calendar::{self, Clock, FixedClock, HOLIDAYS, SystemClock};
use holiday::cli::{CalendarArgs, Cli, Commands, CompletionsArgs, DetectArgs};
use holiday::config::{self, Config, Overrides};
use holiday::detector::{self, Detector};
use holiday::error::HolidayError;
use holiday::fetcher::GithubFetcher;
use holiday::logging;
use holiday::output::{self, Output, OutputMode, VersionInfo};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        option_env!("VERGEN_GIT_DIRTY") == Some("true")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mode = cli.output_mode(io::stdout().is_terminal());
    let out = mode.into_output();

    match run(&cli, mode, out.as_ref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<HolidayError>() {
                Some(holiday_err) => out.error(holiday_err),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, mode: OutputMode, out: &dyn Output) -> anyhow::Result<()> {
    match &cli.command {
        None => {
            // Re-parse so GITHUB_USERNAME / GITHUB_OUTPUT still apply.
            let args = DetectArgs::try_parse_from(["holiday"])?;
            cmd_detect(cli, mode, &args, out).await
        }
        Some(Commands::Detect(args)) => cmd_detect(cli, mode, args, out).await,
        Some(Commands::Calendar(args)) => cmd_calendar(cli, args, out),
        Some(Commands::Holidays) => cmd_holidays(out),
        Some(Commands::Version) => cmd_version(out),
        Some(Commands::Completions(args)) => cmd_completions(args),
    }
}

async fn cmd_detect(
    cli: &Cli,
    mode: OutputMode,
    args: &DetectArgs,
    out: &dyn Output,
) -> anyhow::Result<()> {
    let file = config::load_optional(cli.config.as_deref())?;
    let config = Config::resolve(file, args.overrides())?;
    let fetcher = GithubFetcher::new(&config.fetcher)?;

    let clock: Box<dyn Clock> = match args.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let detector = Detector::new(config.username.clone(), fetcher, clock.as_ref());

    let progress = spinner(
        mode.is_robot() || cli.quiet,
        &format!("Detecting holiday theme for {}", config.username),
    );
    let result = detector.detect().await;
    progress.finish_and_clear();

    out.detection(&result, Some(detector.identifier()))?;
    write_pipeline_output(&config, &result)?;
    Ok(())
}

fn cmd_calendar(cli: &Cli, args: &CalendarArgs, out: &dyn Output) -> anyhow::Result<()> {
    let file = config::load_optional(cli.config.as_deref())?;
    let overrides = Overrides {
        github_output: args.github_output.clone(),
        ..Overrides::default()
    };
    let config = Config::resolve(file, overrides)?;

    let date = args.date.unwrap_or_else(|| SystemClock.today());
    let result = detector::calendar_result(date);

    out.detection(&result, None)?;
    write_pipeline_output(&config, &result)?;
    Ok(())
}

fn cmd_holidays(out: &dyn Output) -> anyhow::Result<()> {
    let active = calendar::match_naive_date(SystemClock.today());
    out.holidays(HOLIDAYS, active)?;
    Ok(())
}

fn cmd_version(out: &dyn Output) -> anyhow::Result<()> {
    out.version_info(&VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty(),
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
    })?;
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    clap_complete::generate(args.shell, &mut Cli::command(), "holiday", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

fn write_pipeline_output(
    config: &Config,
    result: &holiday::model::DetectionResult,
) -> anyhow::Result<()> {
    let Some(path) = &config.github_output else {
        return Ok(());
    };
    debug!(path = %path.display(), "Appending pipeline output");
    output::append_pipeline_output(path, result)
        .with_context(|| format!("writing results for {}", config.username))
}

/// Spinner on stderr for interactive runs; hidden when `silent` or piped.
fn spinner(silent: bool, message: &str) -> ProgressBar {
    if silent || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
