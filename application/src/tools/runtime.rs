//! Runtime tools: what the registry actually stores.

use std::sync::Arc;

use orchestra_domain::{ToolCall, ToolDefinition, ToolMessage};
use tracing::{debug, warn};

use crate::ports::agent_events::{AgentEvent, AgentEventEmitter};
use crate::ports::tool_handler::{ToolContext, ToolHandler, ToolOutput};

/// A tool under its runtime name, ready to be invoked.
///
/// Cloning is cheap: the handler and emitter are shared.
#[derive(Clone)]
pub struct RuntimeTool {
    internal_id: String,
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
    /// Emitter bound by the batch that supplied this tool, if any
    events: Option<Arc<dyn AgentEventEmitter>>,
}

impl RuntimeTool {
    pub fn new(
        internal_id: impl Into<String>,
        definition: ToolDefinition,
        handler: Arc<dyn ToolHandler>,
        events: Option<Arc<dyn AgentEventEmitter>>,
    ) -> Self {
        Self {
            internal_id: internal_id.into(),
            definition,
            handler,
            events,
        }
    }

    /// Runtime name visible to the model.
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Invoke the handler and turn its outcome into a tool message.
    ///
    /// Never fails: handler errors become error result messages the model
    /// can read and react to.
    pub async fn invoke(
        &self,
        call: &ToolCall,
        default_events: &Arc<dyn AgentEventEmitter>,
    ) -> ToolMessage {
        let events = self
            .events
            .clone()
            .unwrap_or_else(|| Arc::clone(default_events));

        events.emit(AgentEvent::ToolCallStarted {
            call_id: call.call_id.clone(),
            tool_name: self.name().to_string(),
            tool_id: self.internal_id.clone(),
            arguments: call.arguments_value(),
        });

        let ctx = ToolContext {
            call_id: call.call_id.clone(),
            tool_name: self.name().to_string(),
            tool_id: self.internal_id.clone(),
            events: Arc::clone(&events),
        };

        match self.handler.execute(call.arguments_value(), &ctx).await {
            Ok(ToolOutput::Completed { text, data }) => {
                debug!(tool = %self.name(), call_id = %call.call_id, "Tool completed");
                events.emit(AgentEvent::ToolCallCompleted {
                    call_id: call.call_id.clone(),
                    tool_name: self.name().to_string(),
                    is_error: false,
                });
                ToolMessage::completed(&call.call_id, self.name(), text, data)
            }
            Ok(ToolOutput::Interrupt(prompt)) => {
                debug!(tool = %self.name(), call_id = %call.call_id, "Tool raised an interrupt");
                events.emit(AgentEvent::ToolPromptRaised {
                    call_id: call.call_id.clone(),
                    tool_name: self.name().to_string(),
                    message: prompt.message.clone(),
                });
                ToolMessage::interrupted(&call.call_id, self.name(), prompt)
            }
            Err(error) => {
                warn!(
                    tool = %self.name(),
                    call_id = %call.call_id,
                    error = %error,
                    "Tool execution failed"
                );
                events.emit(AgentEvent::ToolCallCompleted {
                    call_id: call.call_id.clone(),
                    tool_name: self.name().to_string(),
                    is_error: true,
                });
                ToolMessage::failed(&call.call_id, self.name(), &error)
            }
        }
    }
}

impl std::fmt::Debug for RuntimeTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeTool")
            .field("name", &self.definition.name)
            .field("internal_id", &self.internal_id)
            .finish_non_exhaustive()
    }
}
