//! Scripted chat model
//!
//! Replays a fixed sequence of model replies, one per invocation. Used to
//! replay recorded rounds from a JSON fixture without a live provider.
//!
//! # Fixture format
//!
//! ```json
//! {
//!   "request": "How many indices are there?",
//!   "tools": [{"id": "index.list", "result": {"indices": ["a", "b"]}}],
//!   "browser_tools": [{"id": "browser.open_tab", "description": "Open a tab"}],
//!   "replies": [
//!     {"content": [{"type": "tool_use", "id": "c1", "name": "index_list", "input": {}}]},
//!     {"content": [{"type": "text", "text": "Two indices found"}]},
//!     {"error": "Error calling connector: Status code: 502. Message: Bad Gateway"}
//!   ]
//! }
//! ```

use crate::tools::fixture::FixtureTool;
use async_trait::async_trait;
use orchestra_application::{BrowserToolDescriptor, ChatModel, ChatRequest, GatewayError};
use orchestra_domain::LlmResponse;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

/// Errors loading a fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One scripted model reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptedReply {
    /// The provider fails with this raw connector message.
    Error { error: String },
    /// The provider answers with this response.
    Response(LlmResponse),
}

/// A recorded round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFixture {
    pub request: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub tools: Vec<FixtureTool>,
    #[serde(default)]
    pub browser_tools: Vec<BrowserToolDescriptor>,
    pub replies: Vec<ScriptedReply>,
}

impl ReplayFixture {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Chat model replaying scripted replies in order.
///
/// Once the script is exhausted every call fails with `GatewayError::Other`.
pub struct ScriptedChatModel {
    model_id: String,
    replies: Mutex<VecDeque<ScriptedReply>>,
}

impl ScriptedChatModel {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            model_id: "scripted".to_string(),
            replies: Mutex::new(replies.into()),
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, GatewayError> {
        let next = self
            .replies
            .lock()
            .map_err(|_| GatewayError::Other("script lock poisoned".to_string()))?
            .pop_front();

        debug!(
            phase = ?request.phase,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Scripted model invoked"
        );

        match next {
            Some(ScriptedReply::Response(response)) => Ok(response),
            Some(ScriptedReply::Error { error }) => Err(GatewayError::Connector(error)),
            None => Err(GatewayError::Other("scripted replies exhausted".to_string())),
        }
    }
}
