//! Agent execution error types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Code of an [`AgentExecutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentErrorCode {
    /// Model produced neither tool calls nor text
    EmptyResponse,
    /// Answering-phase model called a tool
    ToolNotFound,
    /// Transport/auth/provider failure with a status code
    ConnectorError,
    /// The round was cancelled
    RequestAborted,
    /// Anything else
    UnknownError,
}

impl AgentErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            AgentErrorCode::EmptyResponse => "emptyResponse",
            AgentErrorCode::ToolNotFound => "toolNotFound",
            AgentErrorCode::ConnectorError => "connectorError",
            AgentErrorCode::RequestAborted => "requestAborted",
            AgentErrorCode::UnknownError => "unknownError",
        }
    }
}

impl std::fmt::Display for AgentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed, coded failure of an agent round.
///
/// Each variant carries only the metadata meaningful for its code
/// (`status_code` for connector errors, the offending tool name/args for
/// tool-call violations). Values are never mutated after creation.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "camelCase")]
pub enum AgentExecutionError {
    #[error("{message}")]
    EmptyResponse { message: String },

    #[error("{message}")]
    ToolNotFound {
        message: String,
        tool_name: String,
        #[serde(default)]
        tool_args: Value,
    },

    #[error("{message}")]
    ConnectorError { message: String, status_code: u16 },

    #[error("{message}")]
    RequestAborted { message: String },

    #[error("{message}")]
    UnknownError { message: String },
}

impl AgentExecutionError {
    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::EmptyResponse {
            message: message.into(),
        }
    }

    pub fn tool_not_found(
        message: impl Into<String>,
        tool_name: impl Into<String>,
        tool_args: Value,
    ) -> Self {
        Self::ToolNotFound {
            message: message.into(),
            tool_name: tool_name.into(),
            tool_args,
        }
    }

    pub fn connector_error(message: impl Into<String>, status_code: u16) -> Self {
        Self::ConnectorError {
            message: message.into(),
            status_code,
        }
    }

    pub fn request_aborted(message: impl Into<String>) -> Self {
        Self::RequestAborted {
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::UnknownError {
            message: message.into(),
        }
    }

    pub fn code(&self) -> AgentErrorCode {
        match self {
            Self::EmptyResponse { .. } => AgentErrorCode::EmptyResponse,
            Self::ToolNotFound { .. } => AgentErrorCode::ToolNotFound,
            Self::ConnectorError { .. } => AgentErrorCode::ConnectorError,
            Self::RequestAborted { .. } => AgentErrorCode::RequestAborted,
            Self::UnknownError { .. } => AgentErrorCode::UnknownError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::EmptyResponse { message }
            | Self::ToolNotFound { message, .. }
            | Self::ConnectorError { message, .. }
            | Self::RequestAborted { message }
            | Self::UnknownError { message } => message,
        }
    }

    /// HTTP status code, only set for connector errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ConnectorError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Offending tool name, only set for tool-call violations.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::ToolNotFound { tool_name, .. } => Some(tool_name),
            _ => None,
        }
    }

    pub fn tool_args(&self) -> Option<&Value> {
        match self {
            Self::ToolNotFound { tool_args, .. } => Some(tool_args),
            _ => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::RequestAborted { .. })
    }
}
