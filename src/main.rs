//! Server entry point for the speech evaluator.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use speech_evaluator_core::{
    AppState, EvaluationCriteria, EvaluationServer, FanOutDownloader, HttpFetcher, RecordSource,
};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Speech evaluator starting");

    let max_body_bytes =
        usize::try_from(args.max_body_bytes).context("--max-body-bytes does not fit in memory")?;
    let fetcher =
        HttpFetcher::with_settings(args.connect_timeout, args.request_timeout, max_body_bytes)
            .context("failed to build HTTP client")?;
    let source: Arc<dyn RecordSource> = Arc::new(fetcher);

    let downloader = FanOutDownloader::new(usize::from(args.concurrency))?;
    let criteria = EvaluationCriteria {
        year: args.year,
        topic: args.topic,
    };
    info!(year = criteria.year, topic = %criteria.topic, "evaluation criteria");

    let state = AppState::new(source, downloader, criteria);
    let server = EvaluationServer::start(args.bind, state)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    server.shutdown().await;
    Ok(())
}
