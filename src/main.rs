use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use riasec_quiz::{Quiz, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML settings file (defaults to ./riasec-quiz.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the assessment service, e.g. http://localhost:5000/api
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// File to write logs to while the terminal UI is running
    #[arg(long, default_value = "riasec-quiz.log")]
    log_file: PathBuf,
}

fn init_logging(args: &Args, settings: &Settings) -> Result<()> {
    let file = File::create(&args.log_file)
        .with_context(|| format!("failed to create log file {}", args.log_file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = &args.api_url {
        settings.api_base_url = url.clone();
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout_secs = secs;
    }
    settings.normalize();

    init_logging(&args, &settings)?;

    let quiz = Quiz::from_settings(&settings)?;
    quiz.run().await?;
    Ok(())
}
