//! Chat model port
//!
//! Defines the interface to the opaque chat-completion capability. This
//! core does not own any wire format: adapters surface either an
//! [`LlmResponse`] or a [`GatewayError`] whose text is the raw connector
//! message, left untouched so the error classifier can parse it.

use async_trait::async_trait;
use orchestra_domain::{LlmResponse, Message, ToolDefinition};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while invoking the chat model
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Raw connector failure; the message is kept verbatim.
    #[error("{0}")]
    Connector(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request aborted")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

/// Which half of a round the request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Tools available; the model gathers context.
    Research,
    /// Tools forbidden; the model writes the final answer.
    Answer,
}

/// One chat-completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub phase: RoundPhase,
    pub messages: Vec<Message>,
    /// Tools the model may call (always empty in the answering phase)
    pub tools: Vec<ToolDefinition>,
    /// Whether a structured (JSON object) answer is expected
    pub structured_output: bool,
}

impl ChatRequest {
    pub fn research(messages: &[Message], tools: Vec<ToolDefinition>) -> Self {
        Self {
            phase: RoundPhase::Research,
            messages: messages.to_vec(),
            tools,
            structured_output: false,
        }
    }

    pub fn answer(messages: &[Message], structured_output: bool) -> Self {
        Self {
            phase: RoundPhase::Answer,
            messages: messages.to_vec(),
            tools: Vec::new(),
            structured_output,
        }
    }
}

/// Chat-completion capability consumed by the round orchestrator.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Identifier used in logs
    fn model_id(&self) -> &str;

    /// Invoke the model once.
    async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, GatewayError>;
}
