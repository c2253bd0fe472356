//! Application layer for agent-orchestra
//!
//! This crate contains the tool registry, the round orchestrator use case,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod tools;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoundConfig;
pub use ports::{
    agent_events::{AgentEvent, AgentEventEmitter, NoAgentEvents},
    browser_tools::{BrowserToolAdapter, BrowserToolDescriptor},
    llm_gateway::{ChatModel, ChatRequest, GatewayError, RoundPhase},
    tool_handler::{ToolContext, ToolHandler, ToolOutput},
};
pub use tools::{
    AddToolsOptions, BrowserToolBatch, ExecutableTool, ExecutableToolBatch, RuntimeTool,
    ToolBatch, ToolManager, dispatch_tool_calls,
};
pub use use_cases::run_round::{
    RoundOutcome, RoundOutput, RunRoundError, RunRoundInput, RunRoundUseCase,
};
