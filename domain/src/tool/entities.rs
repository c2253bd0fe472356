//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Definition of a tool as it is exposed to the model.
///
/// `name` is the *runtime name*: unique among the tools visible in the
/// current round, and possibly different from the internal tool id the
/// hosting system tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Runtime name visible to the model (e.g., "platform_core_search")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema of the tool input
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
            }),
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Return a copy of this definition exposed under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// A call to a tool requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Model-assigned ID used to pair the call with its result
    pub call_id: String,
    /// Runtime name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(call_id: impl Into<String>, tool_name: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Map<String, Value>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Arguments as a JSON object value.
    pub fn arguments_value(&self) -> Value {
        Value::Object(self.arguments.clone())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition_default_schema() {
        let tool = ToolDefinition::new("search", "Search the index");

        assert_eq!(tool.name, "search");
        assert_eq!(tool.input_schema["type"], "object");
    }

    #[test]
    fn test_tool_definition_renamed_keeps_schema() {
        let tool = ToolDefinition::new("platform.core.search", "Search").with_schema(
            serde_json::json!({"type": "object", "properties": {"query": {"type": "string"}}}),
        );
        let renamed = tool.renamed("platform_core_search");

        assert_eq!(renamed.name, "platform_core_search");
        assert_eq!(renamed.description, "Search");
        assert_eq!(renamed.input_schema, tool.input_schema);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("call_1", "search")
            .with_arg("query", "error rate")
            .with_arg("limit", 5)
            .with_arg("verbose", true);

        assert_eq!(call.call_id, "call_1");
        assert_eq!(call.get_string("query"), Some("error rate"));
        assert_eq!(call.require_string("query").unwrap(), "error rate");
        assert!(call.require_string("missing").is_err());
        assert_eq!(call.get_i64("limit"), Some(5));
        assert_eq!(call.get_bool("verbose"), Some(true));
        assert_eq!(call.arguments_value()["limit"], 5);
    }

    #[test]
    fn test_tool_call_deserializes_without_arguments() {
        let call: ToolCall =
            serde_json::from_str(r#"{"call_id": "c1", "tool_name": "noop"}"#).unwrap();
        assert!(call.arguments.is_empty());
    }
}
