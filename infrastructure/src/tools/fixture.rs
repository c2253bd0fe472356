//! Fixture-defined tools
//!
//! Tools described in a replay fixture. Each returns a canned result, a
//! canned error, or echoes its arguments back when neither is given.

use async_trait::async_trait;
use orchestra_application::{ExecutableTool, ToolContext, ToolHandler, ToolOutput};
use orchestra_domain::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A tool as written in a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureTool {
    pub id: String,
    /// Preferred runtime name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schema: Option<Value>,
    /// Load into the dynamic LRU instead of the static set
    #[serde(default)]
    pub dynamic: bool,
    /// Canned result data
    #[serde(default)]
    pub result: Option<Value>,
    /// Canned failure message, takes precedence over `result`
    #[serde(default)]
    pub error: Option<String>,
}

impl FixtureTool {
    /// Build the runtime-shaped tool.
    pub fn to_executable(&self) -> ExecutableTool {
        let handler = FixtureToolHandler {
            result: self.result.clone(),
            error: self.error.clone(),
        };
        let mut tool = ExecutableTool::new(&self.id, &self.description, Arc::new(handler));
        if let Some(name) = &self.name {
            tool = tool.with_name(name);
        }
        if let Some(schema) = &self.schema {
            tool = tool.with_schema(schema.clone());
        }
        tool
    }
}

struct FixtureToolHandler {
    result: Option<Value>,
    error: Option<String>,
}

#[async_trait]
impl ToolHandler for FixtureToolHandler {
    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        if let Some(message) = &self.error {
            return Err(ToolError::execution_failed(message));
        }

        ctx.report_progress("replaying fixture result");
        Ok(ToolOutput::json(self.result.clone().unwrap_or(args)))
    }
}
