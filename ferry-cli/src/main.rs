//! Ferry CLI
//!
//! Interactive copier for delivery-pipeline configuration: walks the
//! operator from account to resource group to toolchain to a source/target
//! pipeline pair, then replicates the source pipeline's trigger
//! definitions and environment properties onto the target.

mod config;
mod locator;
mod prompt;
mod replicate;
mod workflow;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use ferry_client::{CdClient, Endpoints};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::prompt::StdinInput;
use crate::replicate::{ReplicationOutcome, ReplicationResult};
use crate::workflow::RunSummary;

#[derive(Parser)]
#[command(name = "ferry")]
#[command(about = "Copy delivery pipeline configuration between pipelines", long_about = None)]
struct Cli {
    /// API key used to authenticate against the cloud account
    #[arg(long, env = "FERRY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Region hosting the toolchain and delivery-pipeline services
    #[arg(long, env = "FERRY_REGION", default_value = "us-south")]
    region: String,

    /// Seconds to wait after each create call (remote API rate limit)
    #[arg(long, env = "FERRY_THROTTLE_SECS", default_value = "2")]
    throttle_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ferry_cli=info,ferry_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.api_key, Endpoints::for_region(&cli.region), cli.throttle_secs);
    config.validate()?;

    info!("Connecting to {}", config.endpoints.pipeline_url);
    let client = CdClient::connect(config.endpoints.clone(), config.api_key.clone())
        .await
        .context("Failed to authenticate with the identity service")?;

    let mut input = StdinInput::new();
    let summary = workflow::run(&client, &mut input, config.throttle).await?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let (definitions_copied, definitions_failed) = tally(&summary.definitions);
    let (properties_copied, properties_failed) = tally(&summary.properties);

    println!();
    println!("{}", "Copy complete.".green().bold());
    println!(
        "  Definitions: {} copied, {} failed",
        definitions_copied, definitions_failed
    );
    println!(
        "  Properties:  {} copied, {} failed",
        properties_copied, properties_failed
    );

    let failures: Vec<&ReplicationResult> = summary.failures().collect();
    if !failures.is_empty() {
        println!();
        println!("{}", "Needs manual follow-up:".yellow().bold());
        for result in failures {
            if let ReplicationOutcome::Failed(reason) = &result.outcome {
                println!("  {} {}: {}", "✗".red(), result.item, reason);
            }
        }
    }
}

fn tally(results: &[ReplicationResult]) -> (usize, usize) {
    let copied = results.iter().filter(|result| result.is_copied()).count();
    (copied, results.len() - copied)
}
