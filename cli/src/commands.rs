//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI arguments for agent-orchestra
#[derive(Parser, Debug)]
#[command(name = "orchestra")]
#[command(author, version, about = "Agent tool-orchestration runtime")]
#[command(long_about = r#"
Orchestra turns model output into typed agent actions, runs tool calls
against a bounded tool registry, and classifies provider failures.

Configuration files are loaded from (in priority order):
1. ORCHESTRA_<SECTION>__<KEY>                 Environment overrides
2. --config <path>                            Explicit config file
3. ./orchestra.toml                           Project-level config
4. ~/.config/agent-orchestra/config.toml      Global config

Example:
  orchestra classify-error "Error calling connector: Status code: 429. Message: Too Many Requests"
  orchestra -v replay fixtures/search_round.json --event-log events.jsonl
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write agent events as JSONL to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub event_log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a raw provider error message
    ClassifyError {
        /// The error message, verbatim
        message: String,
    },

    /// Replay a recorded round from a JSON fixture
    Replay {
        /// Path to the fixture file
        fixture: PathBuf,

        /// Expect a structured (JSON object) answer
        #[arg(long)]
        structured: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify_error() {
        let cli = Cli::parse_from(["orchestra", "-vv", "classify-error", "boom"]);

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::ClassifyError { ref message } if message == "boom"));
    }

    #[test]
    fn test_parse_replay_with_global_flags() {
        let cli = Cli::parse_from([
            "orchestra",
            "replay",
            "round.json",
            "--structured",
            "--no-config",
            "--event-log",
            "events.jsonl",
            "-o",
            "json",
        ]);

        assert!(cli.no_config);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.event_log, Some(PathBuf::from("events.jsonl")));
        match cli.command {
            Command::Replay { fixture, structured } => {
                assert_eq!(fixture, PathBuf::from("round.json"));
                assert!(structured);
            }
            other => panic!("expected replay, got {:?}", other),
        }
    }
}
