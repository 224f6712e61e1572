use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reasoning_select::{
    config::{Config, LogFormat},
    llm::HttpLlmClient,
    nodes::ReasoningSelectionNode,
    pipeline::{ExecutionState, GraphNode, OutputFormat, QueryAnalysis, UserProfile},
};

/// Select a reasoning strategy for a research query
#[derive(Debug, Parser)]
#[command(name = "reasoning-select", version, about)]
struct Cli {
    /// The user query to route
    query: String,

    /// Intent category from upstream analysis (e.g. "comparison")
    #[arg(long)]
    intent: Option<String>,

    /// Profile domain tag (e.g. "academic")
    #[arg(long)]
    domain: Option<String>,

    /// Preferred output format (text, markdown, table, json)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Named profile preference to enable (repeatable)
    #[arg(long = "preference")]
    preferences: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    // Initialize the LLM client
    let client = match HttpLlmClient::new(&config.llm, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %config.llm.base_url, model = %config.llm.model, "LLM client initialized");
            Arc::new(c)
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize LLM client");
            return Err(e.into());
        }
    };

    let node = ReasoningSelectionNode::new(client);
    let state = build_state(cli);

    info!(session_id = %state.session_id(), node = node.name(), "Running selection node");

    let updated = if node.should_execute(&state) {
        node.process(state).await?
    } else {
        state
    };

    println!(
        "{}",
        serde_json::json!({
            "session_id": updated.session_id(),
            "reasoning_method": updated.reasoning_method(),
        })
    );

    Ok(())
}

/// Build the execution state from CLI arguments
fn build_state(cli: Cli) -> ExecutionState {
    let mut state = ExecutionState::new(cli.query);

    if let Some(intent) = cli.intent {
        state = state.with_query_analysis(&QueryAnalysis::new().with_intent(intent));
    }

    if cli.domain.is_some() || cli.format.is_some() || !cli.preferences.is_empty() {
        let mut profile = UserProfile::new("cli");
        if let Some(domain) = cli.domain {
            profile = profile.with_domain(domain);
        }
        if let Some(format) = cli.format {
            profile = profile.with_preferred_format(format);
        }
        for name in cli.preferences {
            profile = profile.with_preference(name, true);
        }
        state = state.with_profile(profile);
    }

    state
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
