use clap::Parser;
use sponsordb_match::config::{LoggingSettings, Settings};
use sponsordb_match::core::Matcher;
use sponsordb_match::models::{FindMatchesResponse, MatchRequest, ScoringWeights};
use sponsordb_match::services::{JsonStore, StoreError};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[derive(Debug, Parser)]
#[command(
    name = "sponsordb-match",
    about = "Rank SponsorDB sponsors against a newsletter profile"
)]
struct Cli {
    /// JSON array of sponsor documents
    #[arg(long, env = "SPONSORDB_SPONSORS")]
    sponsors: PathBuf,

    /// JSON newsletter profile (topic, audience_demographics, sponsor_match_profile)
    #[arg(long, env = "SPONSORDB_PROFILE")]
    profile: PathBuf,

    /// Maximum number of sponsors to return
    #[arg(long)]
    limit: Option<u16>,

    /// Minimum match score (0-100)
    #[arg(long)]
    min_score: Option<u8>,

    /// Config file; defaults to config/default and config/local
    #[arg(long, env = "SPONSORDB_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to encode response: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is configured from settings, so this one goes straight to stderr
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.logging);

    match run(cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn run(cli: Cli, settings: Settings) -> Result<(), CliError> {
    let request = MatchRequest {
        limit: cli.limit.unwrap_or(settings.matching.default_limit),
        min_score: cli.min_score.unwrap_or(settings.matching.min_score),
    };
    request.validate()?;

    let options = request.options(settings.matching.max_limit);
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights, options);

    info!("Matcher initialized with weights: {:?}, options: {:?}", weights, options);

    let store = JsonStore::new(cli.sponsors, cli.profile);
    let sponsors = store.load_sponsors()?;
    let profile = store.load_profile()?;

    let report = matcher.find_matches(profile.as_ref(), &sponsors);

    info!(
        "Returning {} matches (from {} candidates)",
        report.matches.len(),
        report.total_candidates
    );

    let response = FindMatchesResponse {
        total_results: report.matches.len(),
        total_candidates: report.total_candidates,
        matches: report.matches,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
