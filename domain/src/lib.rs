//! Domain layer for agent-orchestra
//!
//! This crate contains the pure vocabulary of the tool-orchestration runtime.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! Every model turn and every tool batch is classified into an
//! [`AgentAction`]. The orchestrator matches on it exhaustively, so adding a
//! variant forces every consumer to be revisited.
//!
//! ## Errors
//!
//! Failures are values, not panics: [`AgentExecutionError`] carries a code
//! and code-specific metadata, and [`is_recoverable_error`] answers the
//! single question "is blind retry safe?".

pub mod agent;
pub mod core;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use agent::{
    AgentAction, classify_answer_response, classify_model_response, classify_structured_answer,
    classify_tool_results,
};
pub use core::{
    error::{AgentErrorCode, AgentExecutionError},
    error_classifier::{
        convert_error, convert_error_message, is_context_length_error, is_recoverable_error,
    },
};
pub use session::{
    entities::{Conversation, Message, Role},
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use tool::{
    HitlPrompt, ToolArtifact, ToolCall, ToolCallResult, ToolDefinition, ToolError, ToolMessage,
};
