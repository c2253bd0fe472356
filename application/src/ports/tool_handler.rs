//! Tool handler port
//!
//! Defines the interface tool providers implement to make a tool callable.
//! The registry never constructs handlers; it only indexes the tools that
//! carry them.

use std::sync::Arc;

use async_trait::async_trait;
use orchestra_domain::{HitlPrompt, ToolError};
use serde_json::Value;

use crate::ports::agent_events::{AgentEvent, AgentEventEmitter};

/// What a handler produced for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// The tool ran to completion.
    Completed { text: String, data: Option<Value> },
    /// The tool needs a human decision before it can complete.
    Interrupt(HitlPrompt),
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        ToolOutput::Completed {
            text: text.into(),
            data: None,
        }
    }

    /// Completed output whose text is the JSON rendering of `data`.
    pub fn json(data: Value) -> Self {
        ToolOutput::Completed {
            text: data.to_string(),
            data: Some(data),
        }
    }

    pub fn interrupt(prompt: HitlPrompt) -> Self {
        ToolOutput::Interrupt(prompt)
    }
}

/// Per-invocation context handed to a handler.
#[derive(Clone)]
pub struct ToolContext {
    pub call_id: String,
    pub tool_name: String,
    /// Internal id of the tool being invoked
    pub tool_id: String,
    pub events: Arc<dyn AgentEventEmitter>,
}

impl ToolContext {
    /// Report progress of a long-running tool.
    pub fn report_progress(&self, message: impl Into<String>) {
        self.events.emit(AgentEvent::ToolProgress {
            call_id: self.call_id.clone(),
            tool_name: self.tool_name.clone(),
            message: message.into(),
        });
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("call_id", &self.call_id)
            .field("tool_name", &self.tool_name)
            .field("tool_id", &self.tool_id)
            .finish_non_exhaustive()
    }
}

/// An invocable tool implementation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}
