//! Browser tool bridge
//!
//! Browser tools run in the client, so the server-side handler never
//! executes anything: it raises a human-in-the-loop interrupt whose schema
//! carries the call arguments. The round then ends with
//! `AwaitingInput` and the client runs the tool.

use async_trait::async_trait;
use orchestra_application::{
    BrowserToolAdapter, BrowserToolDescriptor, ExecutableTool, ToolContext, ToolHandler,
    ToolOutput,
};
use orchestra_domain::{HitlPrompt, ToolError};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Adapter turning browser tool metadata into interrupting runtime tools.
#[derive(Debug, Clone, Default)]
pub struct BrowserToolBridge;

impl BrowserToolBridge {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserToolAdapter for BrowserToolBridge {
    fn adapt(&self, descriptor: &BrowserToolDescriptor) -> ExecutableTool {
        ExecutableTool::new(
            &descriptor.id,
            &descriptor.description,
            Arc::new(BrowserToolHandler {
                tool_id: descriptor.id.clone(),
            }),
        )
        .with_schema(descriptor.schema.clone())
    }
}

/// Handler that hands the call over to the client.
struct BrowserToolHandler {
    tool_id: String,
}

#[async_trait]
impl ToolHandler for BrowserToolHandler {
    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        debug!(tool = %ctx.tool_name, call_id = %ctx.call_id, "Deferring browser tool to client");
        Ok(ToolOutput::interrupt(
            HitlPrompt::new(format!(
                "Execute browser tool '{}' in the client and return its result",
                self.tool_id
            ))
            .with_schema(args),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchestra_application::{AddToolsOptions, BrowserToolBatch, ToolManager, dispatch_tool_calls};
    use orchestra_domain::ToolCall;

    #[tokio::test]
    async fn test_browser_tool_raises_prompt_with_args() {
        let mut tools = ToolManager::new(5);
        tools.add_tools(
            BrowserToolBatch::new(
                vec![BrowserToolDescriptor {
                    id: "browser.open_tab".to_string(),
                    description: "Open a tab".to_string(),
                    schema: serde_json::json!({"type": "object"}),
                }],
                Arc::new(BrowserToolBridge::new()),
            ),
            AddToolsOptions::dynamic(),
        );

        let calls = vec![ToolCall::new("c1", "browser_open_tab").with_arg("url", "https://example.com")];
        let messages = dispatch_tool_calls(&tools, &calls).await;

        let prompt = messages[0].prompt().expect("interrupt");
        assert!(prompt.message.contains("browser.open_tab"));
        assert_eq!(
            prompt.schema.as_ref().and_then(|s| s.get("url")),
            Some(&serde_json::json!("https://example.com"))
        );
        assert_eq!(tools.get_dynamic_tool_ids(), vec!["browser.open_tab".to_string()]);
    }
}
