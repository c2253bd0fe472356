//! Agent actions: one step of progress in a round.
//!
//! An [`AgentAction`] is produced once per classification call and consumed
//! exactly once by the round orchestrator:
//!
//! | Variant | Effect on the loop |
//! |---------|--------------------|
//! | `ToolCall` | dispatch the calls |
//! | `ExecuteTool` | merge results, call the model again |
//! | `ToolPrompt` | pause for human input |
//! | `Handover` | switch from research to answering |
//! | `Answer` / `StructuredAnswer` | terminate with a result |
//! | `Error` | terminate (or retry, per orchestrator policy) |

use crate::core::error::AgentExecutionError;
use crate::tool::entities::ToolCall;
use crate::tool::value_objects::{HitlPrompt, ToolCallResult};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentAction {
    /// The model asked for one or more tool invocations.
    ToolCall {
        /// Text the model emitted alongside the calls (may be empty)
        message: String,
        tool_calls: Vec<ToolCall>,
    },
    /// Research finished; hand over to the answering phase.
    Handover { message: String },
    /// A batch of tool invocations completed without interruption.
    ExecuteTool { results: Vec<ToolCallResult> },
    /// A tool invocation raised a human-in-the-loop interrupt.
    ToolPrompt {
        call_id: String,
        tool_name: String,
        prompt: HitlPrompt,
    },
    /// Final natural-language answer.
    Answer { message: String },
    /// Final answer conforming to a structured output schema.
    StructuredAnswer { data: Map<String, Value> },
    /// Classification failed to produce a valid result.
    Error(AgentExecutionError),
}

impl AgentAction {
    /// Whether this action ends the round.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AgentAction::Answer { .. }
                | AgentAction::StructuredAnswer { .. }
                | AgentAction::Error(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AgentAction::ToolCall { .. } => "tool_call",
            AgentAction::Handover { .. } => "handover",
            AgentAction::ExecuteTool { .. } => "execute_tool",
            AgentAction::ToolPrompt { .. } => "tool_prompt",
            AgentAction::Answer { .. } => "answer",
            AgentAction::StructuredAnswer { .. } => "structured_answer",
            AgentAction::Error(_) => "error",
        }
    }

    pub fn as_error(&self) -> Option<&AgentExecutionError> {
        match self {
            AgentAction::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<AgentExecutionError> for AgentAction {
    fn from(error: AgentExecutionError) -> Self {
        AgentAction::Error(error)
    }
}
