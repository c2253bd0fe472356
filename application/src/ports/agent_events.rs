//! Port for structured agent events.
//!
//! Defines the [`AgentEventEmitter`] trait for recording what happens in a
//! round (tool calls, tool progress, interrupts, classified actions).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable transcript (e.g., JSONL).

use serde::Serialize;
use serde_json::Value;

/// A structured event emitted during a round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentEvent {
    ToolCallStarted {
        call_id: String,
        tool_name: String,
        tool_id: String,
        arguments: Value,
    },
    /// Free-form progress reported by a running tool.
    ToolProgress {
        call_id: String,
        tool_name: String,
        message: String,
    },
    ToolCallCompleted {
        call_id: String,
        tool_name: String,
        is_error: bool,
    },
    ToolPromptRaised {
        call_id: String,
        tool_name: String,
        message: String,
    },
    ActionProduced {
        cycle: usize,
        action: &'static str,
    },
}

impl AgentEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AgentEvent::ToolCallStarted { .. } => "tool_call_started",
            AgentEvent::ToolProgress { .. } => "tool_progress",
            AgentEvent::ToolCallCompleted { .. } => "tool_call_completed",
            AgentEvent::ToolPromptRaised { .. } => "tool_prompt_raised",
            AgentEvent::ActionProduced { .. } => "action_produced",
        }
    }
}

/// Port for emitting agent events.
///
/// The `emit` method is intentionally synchronous and non-fallible to avoid
/// disrupting the main execution flow. Sink failures are ignored.
pub trait AgentEventEmitter: Send + Sync {
    fn emit(&self, event: AgentEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoAgentEvents;

impl AgentEventEmitter for NoAgentEvents {
    fn emit(&self, _event: AgentEvent) {}
}
