//! Tool domain value objects: immutable result, prompt and error types
//!
//! These types form the **output side** of a tool invocation. Every
//! invocation produces a [`ToolMessage`] whose [`ToolArtifact`] tells the
//! response classifier whether the tool completed or raised a
//! human-in-the-loop interrupt:
//!
//! ```text
//! ToolMessage { artifact: Result { .. } }   → completed  → ExecuteTool
//! ToolMessage { artifact: Prompt(..) }      → interrupted → ToolPrompt
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error raised by a tool handler.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/wrong parameters: model can fix |
/// | `NOT_FOUND` | Unknown tool or resource |
/// | `EXECUTION_FAILED` | Runtime failure inside the handler |
/// | `TIMEOUT` | Operation timed out |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "EXECUTION_FAILED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            "TIMEOUT",
            format!("Operation timed out: {}", operation.into()),
        )
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// A request for human input raised by a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitlPrompt {
    /// Text shown to the human
    pub message: String,
    /// Optional schema (or payload) describing the expected answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl HitlPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Tagged artifact attached to every tool message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolArtifact {
    /// The tool ran to completion (successfully or not).
    Result {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
        #[serde(default)]
        is_error: bool,
    },
    /// The tool paused to ask a human.
    Prompt(HitlPrompt),
}

impl ToolArtifact {
    pub fn is_prompt(&self) -> bool {
        matches!(self, ToolArtifact::Prompt(_))
    }
}

/// Result message of one tool invocation, paired with its call by `call_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMessage {
    pub call_id: String,
    pub tool_name: String,
    /// Text sent back to the model
    pub content: String,
    pub artifact: ToolArtifact,
}

impl ToolMessage {
    /// Message for a tool that completed successfully.
    pub fn completed(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            content: content.into(),
            artifact: ToolArtifact::Result {
                data,
                is_error: false,
            },
        }
    }

    /// Message for a tool that failed. The model sees the error text.
    pub fn failed(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: &ToolError,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            content: error.to_string(),
            artifact: ToolArtifact::Result {
                data: None,
                is_error: true,
            },
        }
    }

    /// Message for a tool that raised a human-in-the-loop interrupt.
    pub fn interrupted(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        prompt: HitlPrompt,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            content: prompt.message.clone(),
            artifact: ToolArtifact::Prompt(prompt),
        }
    }

    pub fn is_interrupt(&self) -> bool {
        self.artifact.is_prompt()
    }

    pub fn prompt(&self) -> Option<&HitlPrompt> {
        match &self.artifact {
            ToolArtifact::Prompt(prompt) => Some(prompt),
            ToolArtifact::Result { .. } => None,
        }
    }
}

/// One completed call inside an `ExecuteTool` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub call_id: String,
    pub tool_name: String,
    pub result_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Value>,
    #[serde(default)]
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::not_found("index logs-*");

        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.to_string(), "[NOT_FOUND] Resource not found: index logs-*");
    }

    #[test]
    fn test_failed_message_carries_error_text() {
        let msg = ToolMessage::failed("c1", "search", &ToolError::execution_failed("boom"));

        assert_eq!(msg.content, "[EXECUTION_FAILED] boom");
        assert!(!msg.is_interrupt());
        assert!(matches!(msg.artifact, ToolArtifact::Result { is_error: true, .. }));
    }

    #[test]
    fn test_interrupted_message() {
        let msg = ToolMessage::interrupted("c2", "confirm", HitlPrompt::new("Delete index?"));

        assert!(msg.is_interrupt());
        assert_eq!(msg.content, "Delete index?");
        assert_eq!(msg.prompt().unwrap().message, "Delete index?");
    }

    #[test]
    fn test_artifact_tag_serialization() {
        let prompt = ToolArtifact::Prompt(HitlPrompt::new("Proceed?"));
        let json = serde_json::to_value(&prompt).unwrap();
        assert_eq!(json["kind"], "prompt");
        assert_eq!(json["message"], "Proceed?");

        let result: ToolArtifact = serde_json::from_str(r#"{"kind": "result"}"#).unwrap();
        assert_eq!(
            result,
            ToolArtifact::Result {
                data: None,
                is_error: false
            }
        );
    }
}
