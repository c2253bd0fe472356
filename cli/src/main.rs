//! CLI entrypoint for agent-orchestra
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use commands::{Cli, Command, OutputFormat};
use orchestra_application::{
    AddToolsOptions, AgentEventEmitter, BrowserToolBatch, ExecutableToolBatch, NoAgentEvents,
    RoundConfig, RoundOutcome, RoundOutput, RunRoundInput, RunRoundUseCase, ToolManager,
};
use orchestra_domain::{convert_error_message, is_context_length_error, is_recoverable_error};
use orchestra_infrastructure::{
    BrowserToolBridge, ConfigLoader, FileConfig, JsonlEventLogger, ReplayFixture,
    ScriptedChatModel,
};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise verbosity level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    file_config
        .validate()
        .context("Invalid configuration")?;

    match &cli.command {
        Command::ClassifyError { message } => classify_error(message, cli.output),
        Command::Replay {
            fixture,
            structured,
        } => {
            let events = event_emitter(&cli, &file_config);
            let config = file_config
                .to_round_config()
                .with_structured_output(file_config.round.structured_output || *structured);
            replay(fixture, config, events, cli.output).await
        }
    }
}

/// Choose the event sink: `--event-log` first, then `[logging] event_log`.
fn event_emitter(cli: &Cli, config: &FileConfig) -> Arc<dyn AgentEventEmitter> {
    let path = cli.event_log.as_ref().or(config.logging.event_log.as_ref());

    match path.and_then(JsonlEventLogger::new) {
        Some(logger) => {
            info!("Writing agent events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            if let Some(path) = path {
                warn!("Event log disabled, could not open {}", path.display());
            }
            Arc::new(NoAgentEvents)
        }
    }
}

fn classify_error(message: &str, output: OutputFormat) -> Result<()> {
    let error = convert_error_message(message);
    let recoverable = is_recoverable_error(&error);
    let context_length = is_context_length_error(&error);

    match output {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "error": error,
                "recoverable": recoverable,
                "context_length_exceeded": context_length,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("code:        {}", error.code());
            if let Some(status) = error.status_code() {
                println!("status:      {}", status);
            }
            println!("recoverable: {}", recoverable);
            if context_length {
                println!("context:     prompt exceeds the model's context window");
            }
            println!("message:     {}", error.message());
        }
    }

    Ok(())
}

async fn replay(
    fixture_path: &Path,
    config: RoundConfig,
    events: Arc<dyn AgentEventEmitter>,
    output: OutputFormat,
) -> Result<()> {
    let fixture = ReplayFixture::load(fixture_path)?;
    info!(
        replies = fixture.replies.len(),
        tools = fixture.tools.len(),
        "Replaying {}",
        fixture_path.display()
    );

    // === Dependency Injection ===
    let mut tools =
        ToolManager::new(config.dynamic_tool_capacity).with_event_emitter(events.clone());

    let (dynamic, fixed): (Vec<_>, Vec<_>) = fixture.tools.iter().partition(|t| t.dynamic);
    tools.add_tools(
        ExecutableToolBatch::new("fixture", fixed.iter().map(|t| t.to_executable()).collect()),
        AddToolsOptions::static_tools(),
    );
    tools.add_tools(
        ExecutableToolBatch::new(
            "fixture",
            dynamic.iter().map(|t| t.to_executable()).collect(),
        ),
        AddToolsOptions::dynamic(),
    );
    if !fixture.browser_tools.is_empty() {
        tools.add_tools(
            BrowserToolBatch::new(fixture.browser_tools.clone(), Arc::new(BrowserToolBridge::new())),
            AddToolsOptions::static_tools(),
        );
    }

    let input = match &fixture.system_prompt {
        Some(prompt) => RunRoundInput::with_system_prompt(prompt, &fixture.request),
        None => RunRoundInput::new(&fixture.request),
    };

    let cancellation = CancellationToken::new();
    let on_interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let model = Arc::new(ScriptedChatModel::new(fixture.replies));
    let use_case = RunRoundUseCase::new(model, config)
        .with_event_emitter(events)
        .with_cancellation(cancellation);

    let result = use_case.execute(input, &mut tools).await?;
    print_round(&result, output)?;

    Ok(())
}

fn print_round(result: &RoundOutput, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            println!("actions: {}", result.action_kinds().join(" -> "));
            println!("cycles:  {}", result.cycles);
            if !result.dynamic_tool_ids.is_empty() {
                println!("dynamic tools: {}", result.dynamic_tool_ids.join(", "));
            }
            println!();
            match &result.outcome {
                RoundOutcome::Answer { message } => println!("{}", message),
                RoundOutcome::StructuredAnswer { data } => {
                    println!("{}", serde_json::to_string_pretty(data)?)
                }
                RoundOutcome::AwaitingInput {
                    tool_name, prompt, ..
                } => println!("Awaiting input for '{}': {}", tool_name, prompt.message),
                RoundOutcome::Failed { error } => {
                    println!("Round failed [{}]: {}", error.code(), error.message())
                }
            }
        }
    }
    Ok(())
}
