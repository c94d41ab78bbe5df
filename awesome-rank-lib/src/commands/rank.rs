use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use super::{Host, ProgressReporter};
use crate::Result;
use crate::facts::hosting::Client;
use crate::pipeline::Pipeline;
use crate::ranking::RankedEntry;
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Args;
use core::time::Duration;
use ohno::IntoAppError;
use std::fs;
use std::io::{Write, stderr, stdout};

const LOG_TARGET: &str = "      rank";
const PROGRESS_DELAY: Duration = Duration::from_millis(300);

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Owner of the repository whose README is the index
    #[arg(value_name = "OWNER")]
    pub owner: String,

    /// Name of the repository whose README is the index
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `awesome.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Base URL of the GitHub API, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Only collect and rank the first N entries of the index
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Shorthand for `--log-level debug`
    #[arg(long)]
    pub debug: bool,

    /// Output the ranking to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the ranking to the console. If omitted, console output is shown only when no other report is generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

impl RankArgs {
    const fn effective_log_level(&self) -> LogLevel {
        if self.debug { LogLevel::Debug } else { self.log_level }
    }
}

pub async fn process_rank<H: Host>(host: &mut H, args: &RankArgs) -> Result<()> {
    let log_level = args.effective_log_level();
    init_logging(log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let api_url = args.api_url.as_deref().unwrap_or(&config.api_url);

    log::debug!(target: LOG_TARGET, "Using API at {api_url} with a {:?} request timeout", config.request_timeout);

    let client = Client::new(args.github_token.as_deref(), api_url, config.request_timeout)?;
    let pipeline = Pipeline::new(client, config.collection_config(), config.ranking_config(), config.host.clone());

    let progress = ProgressReporter::new(log_level == LogLevel::None, PROGRESS_DELAY, args.color.use_colors(&stderr()));

    let ranked = match pipeline.run(&args.owner, &args.repo, args.limit, Utc::now(), &progress).await {
        Ok(ranked) => ranked,
        Err(e) => {
            let _ = writeln!(host.error(), "{}: {e}", e.kind());
            host.exit(1);
            return Err(e).into_app_err_with(|| format!("ranking the entries of '{}/{}'", args.owner, args.repo));
        }
    };

    report(host, args, &ranked)
}

fn report<H: Host>(host: &mut H, args: &RankArgs, ranked: &[RankedEntry]) -> Result<()> {
    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(ranked, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
    }

    if args.console || args.json.is_none() {
        let mut console_output = String::new();
        generate_console(ranked, args.color.use_colors(&stdout()), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    Ok(())
}
