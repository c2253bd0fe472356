//! Tool Manager
//!
//! The [`ToolManager`] holds every tool usable by an agent in the current
//! round. Tools come in two residencies:
//!
//! | Residency | Storage | Eviction |
//! |-----------|---------|----------|
//! | **Static** | insertion-ordered set | never |
//! | **Dynamic** | bounded LRU cache | least recently used, once capacity is exceeded |
//!
//! A name is never static and dynamic at the same time: static insertion
//! removes the dynamic entry, and dynamic insertion of a static name is a
//! no-op.
//!
//! # Usage
//!
//! ```ignore
//! let mut tools = ToolManager::new(10);
//! tools.add_tools(ExecutableToolBatch::new("builtin", builtin_tools()), AddToolsOptions::static_tools());
//! tools.add_tools(ExecutableToolBatch::new("skills", skill_tools()), AddToolsOptions::dynamic());
//!
//! // Persist what was dynamically loaded at the end of the round
//! let ids = tools.get_dynamic_tool_ids();
//! ```
//!
//! One manager belongs to one conversation execution; it is not meant to
//! be shared across rounds.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use orchestra_domain::ToolDefinition;
use tracing::{debug, trace};

use super::batch::{AddToolsOptions, ToolBatch};
use super::naming::ToolNameMapping;
use super::runtime::RuntimeTool;
use crate::ports::agent_events::{AgentEventEmitter, NoAgentEvents};

/// Registry of the tools visible to the model in the current round.
pub struct ToolManager {
    /// Static tools in insertion order
    static_tools: Vec<RuntimeTool>,
    /// Runtime name -> index into `static_tools`
    static_index: HashMap<String, usize>,
    /// Dynamic tools, bounded
    dynamic_tools: LruCache<String, RuntimeTool>,
    /// Runtime name <-> internal id (never pruned)
    names: ToolNameMapping,
    /// Emitter for tools whose batch did not bring one
    events: Arc<dyn AgentEventEmitter>,
}

impl ToolManager {
    /// Create a manager whose dynamic cache holds at most `dynamic_capacity`
    /// tools. A capacity of zero is raised to one.
    pub fn new(dynamic_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(dynamic_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            static_tools: Vec::new(),
            static_index: HashMap::new(),
            dynamic_tools: LruCache::new(capacity),
            names: ToolNameMapping::new(),
            events: Arc::new(NoAgentEvents),
        }
    }

    /// Set the default event emitter (builder pattern)
    pub fn with_event_emitter(mut self, events: Arc<dyn AgentEventEmitter>) -> Self {
        self.events = events;
        self
    }

    /// Replace the default event emitter.
    pub fn set_event_emitter(&mut self, events: Arc<dyn AgentEventEmitter>) {
        self.events = events;
    }

    pub fn event_emitter(&self) -> &Arc<dyn AgentEventEmitter> {
        &self.events
    }

    /// Add a batch of tools.
    ///
    /// Idempotent by name: re-adding a static name is skipped, re-adding a
    /// dynamic name refreshes its recency without growing the cache.
    pub fn add_tools(&mut self, batch: impl Into<ToolBatch>, options: AddToolsOptions) {
        let (source, tools, events) = match batch.into() {
            ToolBatch::Executable(batch) => (batch.source, batch.tools, batch.events),
            ToolBatch::Browser(batch) => {
                let tools = batch
                    .tools
                    .iter()
                    .map(|descriptor| batch.adapter.adapt(descriptor))
                    .collect();
                ("browser".to_string(), tools, None)
            }
        };

        for tool in tools {
            let name = self.names.assign(&tool.id, tool.name.as_deref());
            let definition =
                ToolDefinition::new(name, tool.description).with_schema(tool.schema);
            let runtime = RuntimeTool::new(tool.id, definition, tool.handler, events.clone());
            self.insert(runtime, options.dynamic, &source);
        }
    }

    fn insert(&mut self, tool: RuntimeTool, dynamic: bool, source: &str) {
        let name = tool.name().to_string();

        if self.static_index.contains_key(&name) {
            trace!(tool = %name, source, "Tool already registered as static, skipping");
            return;
        }

        if dynamic {
            if let Some((previous, _)) = self.dynamic_tools.push(name.clone(), tool) {
                if previous == name {
                    trace!(tool = %name, source, "Refreshed dynamic tool");
                } else {
                    debug!(tool = %name, evicted = %previous, source, "Evicted least recently used dynamic tool");
                }
            } else {
                debug!(tool = %name, source, "Registered dynamic tool");
            }
        } else {
            if self.dynamic_tools.pop(&name).is_some() {
                debug!(tool = %name, source, "Promoted dynamic tool to static");
            } else {
                debug!(tool = %name, source, "Registered static tool");
            }
            self.static_index.insert(name, self.static_tools.len());
            self.static_tools.push(tool);
        }
    }

    /// All visible tools: static ones in insertion order, then dynamic ones
    /// from most to least recently used.
    pub fn list(&self) -> Vec<&RuntimeTool> {
        self.static_tools
            .iter()
            .chain(self.dynamic_tools.iter().map(|(_, tool)| tool))
            .collect()
    }

    /// Definitions of all visible tools, in [`list`](Self::list) order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.list()
            .into_iter()
            .map(|tool| tool.definition().clone())
            .collect()
    }

    /// Mark a dynamic tool as recently used. No-op for static or unknown names.
    pub fn record_tool_use(&mut self, name: &str) {
        if self.dynamic_tools.contains(name) {
            self.dynamic_tools.promote(name);
            trace!(tool = %name, "Recorded dynamic tool use");
        }
    }

    /// Internal ids of the tools currently resident in the dynamic cache.
    ///
    /// Names without a known id are left out.
    pub fn get_dynamic_tool_ids(&self) -> Vec<String> {
        self.dynamic_tools
            .iter()
            .filter_map(|(name, _)| self.names.internal_id(name))
            .map(str::to_string)
            .collect()
    }

    /// Look up a visible tool without touching its recency.
    pub fn get(&self, name: &str) -> Option<&RuntimeTool> {
        match self.static_index.get(name) {
            Some(&index) => self.static_tools.get(index),
            None => self.dynamic_tools.peek(name),
        }
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_static(&self, name: &str) -> bool {
        self.static_index.contains_key(name)
    }

    pub fn is_dynamic(&self, name: &str) -> bool {
        self.dynamic_tools.contains(name)
    }

    /// Internal id behind a runtime name, including evicted tools.
    pub fn internal_id(&self, name: &str) -> Option<&str> {
        self.names.internal_id(name)
    }

    /// Runtime name assigned to an internal id.
    pub fn runtime_name(&self, id: &str) -> Option<&str> {
        self.names.runtime_name(id)
    }

    pub fn len(&self) -> usize {
        self.static_tools.len() + self.dynamic_tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dynamic_capacity(&self) -> usize {
        self.dynamic_tools.cap().get()
    }
}

impl std::fmt::Debug for ToolManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolManager")
            .field(
                "static_tools",
                &self.static_tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .field(
                "dynamic_tools",
                &self
                    .dynamic_tools
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("dynamic_capacity", &self.dynamic_capacity())
            .finish_non_exhaustive()
    }
}
