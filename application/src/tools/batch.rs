//! Tool batches handed to [`ToolManager::add_tools`](super::ToolManager::add_tools).

use std::sync::Arc;

use serde_json::Value;

use crate::ports::agent_events::AgentEventEmitter;
use crate::ports::browser_tools::{BrowserToolAdapter, BrowserToolDescriptor};
use crate::ports::tool_handler::ToolHandler;

/// A tool with a server-side handler.
#[derive(Clone)]
pub struct ExecutableTool {
    /// Stable internal id assigned by the provider
    pub id: String,
    /// Preferred runtime name; the id is used when absent
    pub name: Option<String>,
    pub description: String,
    pub schema: Value,
    pub handler: Arc<dyn ToolHandler>,
}

impl ExecutableTool {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: description.into(),
            schema: serde_json::json!({"type": "object", "properties": {}}),
            handler,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }
}

impl std::fmt::Debug for ExecutableTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableTool")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Tools with handlers, plus the emitter their invocations should report to.
pub struct ExecutableToolBatch {
    /// Provider label used in logs (e.g., "builtin", "skills")
    pub source: String,
    pub tools: Vec<ExecutableTool>,
    pub events: Option<Arc<dyn AgentEventEmitter>>,
}

impl ExecutableToolBatch {
    pub fn new(source: impl Into<String>, tools: Vec<ExecutableTool>) -> Self {
        Self {
            source: source.into(),
            tools,
            events: None,
        }
    }

    pub fn with_events(mut self, events: Arc<dyn AgentEventEmitter>) -> Self {
        self.events = Some(events);
        self
    }
}

/// Client-side tool metadata, adapted into runtime tools on insertion.
pub struct BrowserToolBatch {
    pub tools: Vec<BrowserToolDescriptor>,
    pub adapter: Arc<dyn BrowserToolAdapter>,
}

impl BrowserToolBatch {
    pub fn new(tools: Vec<BrowserToolDescriptor>, adapter: Arc<dyn BrowserToolAdapter>) -> Self {
        Self { tools, adapter }
    }
}

/// Input of `add_tools`.
pub enum ToolBatch {
    Executable(ExecutableToolBatch),
    Browser(BrowserToolBatch),
}

impl From<ExecutableToolBatch> for ToolBatch {
    fn from(batch: ExecutableToolBatch) -> Self {
        ToolBatch::Executable(batch)
    }
}

impl From<BrowserToolBatch> for ToolBatch {
    fn from(batch: BrowserToolBatch) -> Self {
        ToolBatch::Browser(batch)
    }
}

/// Options of `add_tools`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddToolsOptions {
    /// Insert into the bounded LRU cache instead of the static set
    pub dynamic: bool,
}

impl AddToolsOptions {
    pub fn dynamic() -> Self {
        Self { dynamic: true }
    }

    pub fn static_tools() -> Self {
        Self { dynamic: false }
    }
}
