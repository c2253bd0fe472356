//! Model response types.
//!
//! A chat-completion response is modelled as an ordered list of content
//! blocks mixing text and tool use requests. The response classifier only
//! ever asks two questions of it: "are there tool calls?" and "is there
//! any text?".

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single block of content within a model response.
///
/// # Examples
///
/// ```
/// use orchestra_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text { text: "Let me search.".to_string() };
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "call_abc123".to_string(),
///     name: "search".to_string(),
///     input: serde_json::Map::new(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text { text: String },

    /// A tool use request from the model.
    ToolUse {
        /// Provider-assigned ID for correlating with tool results.
        id: String,
        /// Runtime tool name.
        name: String,
        /// Structured arguments.
        #[serde(default)]
        input: Map<String, Value>,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &Map<String, Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response: the model is done.
    EndTurn,
    /// The model wants to call tools.
    ToolUse,
    /// Hit the token limit: response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

/// A response from the chat-completion capability.
///
/// # Examples
///
/// ```
/// use orchestra_domain::session::response::{ContentBlock, LlmResponse};
///
/// let response = LlmResponse::from_text("Hello!");
/// assert_eq!(response.text_content(), "Hello!");
/// assert!(!response.has_tool_calls());
///
/// let response = LlmResponse::from_blocks(vec![
///     ContentBlock::text("Searching..."),
///     ContentBlock::ToolUse {
///         id: "call_1".to_string(),
///         name: "search".to_string(),
///         input: serde_json::Map::new(),
///     },
/// ]);
/// assert!(response.has_tool_calls());
/// assert_eq!(response.tool_calls()[0].call_id, "call_1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    /// Structured output payload, when the request asked for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<Value>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            stop_reason: Some(StopReason::EndTurn),
            structured: None,
        }
    }

    /// Create a response from raw blocks, inferring the stop reason.
    pub fn from_blocks(content: Vec<ContentBlock>) -> Self {
        let stop_reason = if content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
        {
            StopReason::ToolUse
        } else {
            StopReason::EndTurn
        };
        Self {
            content,
            stop_reason: Some(stop_reason),
            structured: None,
        }
    }

    /// Create a structured-output response.
    pub fn from_structured(value: Value) -> Self {
        Self {
            content: Vec::new(),
            stop_reason: Some(StopReason::EndTurn),
            structured: Some(value),
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::new(id, name).with_arguments(input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}
