//! Command-line entry point: search news on a topic, summarize the
//! articles, and fact-check the summary.

mod console;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use newscheck_core::events::{Observer, ObserverSet};
use newscheck_llm::openai::{LlmConfig, OpenAiProvider};
use newscheck_tools::DdgSearchClient;

use crate::console::ConsoleObserver;
use crate::workflow::{build_pipeline, join_topic};

/// Research a news topic: search, summarize, fact-check.
#[derive(Parser, Debug)]
#[command(name = "newscheck", version, about)]
struct Cli {
    /// Topic to research; multiple words are joined with spaces.
    topic: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let Some(topic) = join_topic(&cli.topic) else {
        eprintln!("Usage: newscheck <topic>");
        return ExitCode::FAILURE;
    };

    let Ok(api_key) = std::env::var("OPENAI_API_KEY") else {
        eprintln!("Please set the OPENAI_API_KEY environment variable.");
        return ExitCode::FAILURE;
    };

    info!(%topic, "starting research pipeline");

    let mut observers = ObserverSet::new();
    observers.register(Arc::new(ConsoleObserver) as Arc<dyn Observer>);

    let client = Arc::new(OpenAiProvider::new(
        LlmConfig::new(api_key),
        observers.clone(),
    ));

    let backend = match std::env::var("DDG_BASE_URL") {
        Ok(url) => DdgSearchClient::new().with_base_url(url),
        Err(_) => DdgSearchClient::new(),
    };

    let mut pipeline = build_pipeline(&topic, client, Arc::new(backend), &observers);

    match pipeline.kickoff().await {
        Ok(report) => {
            println!("\n## Final Result\n");
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "pipeline failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
