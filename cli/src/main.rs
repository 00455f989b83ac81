//! CLI for repolint.
//!
//! Scans the repositories of a GitHub account and prints one line per
//! hygiene warning to stdout. Logs and the run summary go to stderr.

use clap::Parser;
use repolint::{parse_checker_list, RunSummary, Runner, RunnerConfig, RunnerError, ScanSettings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File read for the token when neither `--token` nor `GITHUB_TOKEN` is set.
const TOKEN_FILE: &str = "token";

/// Errors that stop the CLI before or during a run.
#[derive(Debug, Error)]
enum CliError {
    /// No token in `--token`, `GITHUB_TOKEN` or the token file.
    #[error("No GitHub token: pass --token, set GITHUB_TOKEN, or create '{path}'")]
    MissingToken { path: String },

    /// Failed to read the token file.
    #[error("Failed to read token file '{path}': {source}")]
    TokenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// repolint - Report hygiene issues across a GitHub account's repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Account whose repositories are scanned.
    #[arg(long)]
    user: String,

    /// GitHub Personal Access Token (falls back to a `token` file).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum stargazer count.
    #[arg(long)]
    min_stars: Option<u32>,

    /// Skip forked repositories.
    #[arg(long)]
    skip_forks: Option<bool>,

    /// Skip archived repositories.
    #[arg(long)]
    skip_archived: Option<bool>,

    /// Skip repositories without recent pushes.
    #[arg(long)]
    skip_inactive: Option<bool>,

    /// Inactivity threshold in months.
    #[arg(long)]
    inactive_months: Option<u32>,

    /// Leave vendored paths out of the scan.
    #[arg(long)]
    skip_vendor: Option<bool>,

    /// Comma separated checkers to disable.
    #[arg(long)]
    disable: Option<String>,

    /// Maximum concurrent content fetches.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing on stderr with environment filter support.
///
/// Uses compact single-line formatting. `RUST_LOG` wins when set; otherwise
/// the level is "info", or "debug" with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, CliError> {
    let token = resolve_token(args.token.clone(), Path::new(TOKEN_FILE))?;
    let (mut settings, origin) = match &args.config {
        Some(path) => (
            ScanSettings::load(path).map_err(RunnerError::from)?,
            path.display().to_string(),
        ),
        None => (ScanSettings::default(), "command line".to_string()),
    };
    apply_overrides(&mut settings, &args);

    let config = RunnerConfig::new(args.user, token, settings).with_settings_origin(origin);
    let runner = Runner::new(config)?;
    runner.run().await.map_err(CliError::from)
}

/// Applies command line flags on top of file settings.
fn apply_overrides(settings: &mut ScanSettings, args: &Args) {
    if let Some(min_stars) = args.min_stars {
        settings.min_stars = min_stars;
    }
    if let Some(skip_forks) = args.skip_forks {
        settings.skip_forks = skip_forks;
    }
    if let Some(skip_archived) = args.skip_archived {
        settings.skip_archived = skip_archived;
    }
    if let Some(skip_inactive) = args.skip_inactive {
        settings.skip_inactive = skip_inactive;
    }
    if let Some(inactive_months) = args.inactive_months {
        settings.inactive_months = inactive_months;
    }
    if let Some(skip_vendor) = args.skip_vendor {
        settings.skip_vendor = skip_vendor;
    }
    if let Some(disable) = &args.disable {
        settings.disabled_checkers = parse_checker_list(disable);
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }
}

/// Picks the token from the flag or environment, else from `token_file`.
///
/// # Errors
///
/// Returns [`CliError`] when no non-empty token can be found.
fn resolve_token(token: Option<String>, token_file: &Path) -> Result<String, CliError> {
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        return Ok(token.trim().to_string());
    }

    let path = token_file.display().to_string();
    let contents = match std::fs::read_to_string(token_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::MissingToken { path });
        }
        Err(e) => return Err(CliError::TokenFile { path, source: e }),
    };

    let token = contents.trim();
    if token.is_empty() {
        return Err(CliError::MissingToken { path });
    }
    Ok(token.to_string())
}

/// Prints the final run summary to stderr.
fn print_summary(summary: &RunSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Repositories listed: {}", summary.repositories_listed);
    eprintln!("  Repositories skipped: {}", summary.repositories_skipped);
    eprintln!("  Repositories scanned: {}", summary.repositories_scanned);
    eprintln!("  Missing file trees: {}", summary.tree_failures);
    eprintln!("  Files fetched: {}", summary.files_materialized);
    eprintln!("  Warnings: {}", summary.warnings);
    eprintln!("  Requests: {}", summary.requests);
}
