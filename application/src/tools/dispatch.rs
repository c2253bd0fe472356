//! Parallel tool dispatch.
//!
//! All tool calls of one model turn are started together; their results
//! are collected in the order the model issued the calls, so the
//! classifier always merges a complete, ordered batch.

use futures::future::join_all;
use orchestra_domain::{ToolCall, ToolError, ToolMessage};
use tracing::{debug, warn};

use super::manager::ToolManager;

/// Run every call concurrently and return one message per call, in input order.
///
/// A call naming an unknown tool yields an error result instead of failing
/// the batch, so the model can correct itself on the next turn.
pub async fn dispatch_tool_calls(tools: &ToolManager, calls: &[ToolCall]) -> Vec<ToolMessage> {
    debug!(count = calls.len(), "Dispatching tool calls");

    let futures = calls.iter().map(|call| async move {
        match tools.get(&call.tool_name) {
            Some(tool) => tool.invoke(call, tools.event_emitter()).await,
            None => {
                warn!(tool = %call.tool_name, call_id = %call.call_id, "Model called an unknown tool");
                ToolMessage::failed(
                    &call.call_id,
                    &call.tool_name,
                    &tool_not_found(&call.tool_name),
                )
            }
        }
    });

    join_all(futures).await
}

fn tool_not_found(name: &str) -> ToolError {
    ToolError::new("NOT_FOUND", format!("Tool not found: {}", name))
}
