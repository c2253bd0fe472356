//! Connector error classification.
//!
//! Turns the raw error surfaced by the model connector into a typed
//! [`AgentExecutionError`]. Connector errors arrive as plain strings, so
//! classification relies on a small set of named matchers, each with its
//! own fixture tests below:
//!
//! | Matcher | Shape |
//! |---------|-------|
//! | [`match_connector_status`] | `Status code: <NNN>. Message: <text>` |
//! | [`match_inference_status`] | `... status [<NNN>] ...` (anywhere in the message) |
//!
//! Both status shapes are only honoured on messages carrying the
//! [`CONNECTOR_ERROR_PREFIX`]. Everything else becomes `unknownError` with
//! the original message preserved verbatim.
//!
//! Context-window overflow is not a code of its own: providers report it as
//! a 400, so it stays a `connectorError` and [`is_context_length_error`]
//! tells it apart.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{AgentErrorCode, AgentExecutionError};

/// Prefix the connector layer puts on every transport error it raises.
pub const CONNECTOR_ERROR_PREFIX: &str = "Error calling connector:";

static CONNECTOR_STATUS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)Status code: ([0-9]{3})\. Message: (.*)").ok());

static INFERENCE_STATUS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"status \[([0-9]{3})\]").ok());

const CONTEXT_LENGTH_MARKERS: &[&str] = &[
    "context_length_exceeded",
    "maximum context length",
    "context length exceeded",
    "prompt is too long",
];

/// Extract the status code from a direct connector-transport error.
pub fn match_connector_status(message: &str) -> Option<u16> {
    CONNECTOR_STATUS
        .as_ref()?
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the status code from an inference-API error embedded anywhere
/// in a larger message.
pub fn match_inference_status(message: &str) -> Option<u16> {
    INFERENCE_STATUS
        .as_ref()?
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether the message carries provider "context length" wording.
pub fn is_context_length_exceeded(message: &str) -> bool {
    let lower = message.to_lowercase();
    CONTEXT_LENGTH_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Whether a classified error is a connector rejection for exceeding the
/// model's context window.
pub fn is_context_length_error(error: &AgentExecutionError) -> bool {
    error.code() == AgentErrorCode::ConnectorError && is_context_length_exceeded(error.message())
}

/// Convert any error into an [`AgentExecutionError`].
///
/// Already-classified errors are returned as-is; everything else is
/// classified from its display text.
pub fn convert_error(error: &(dyn std::error::Error + 'static)) -> AgentExecutionError {
    if let Some(classified) = error.downcast_ref::<AgentExecutionError>() {
        return classified.clone();
    }
    convert_error_message(&error.to_string())
}

/// Classify a raw connector error message. Total: every input yields
/// exactly one error.
pub fn convert_error_message(message: &str) -> AgentExecutionError {
    if message.trim_start().starts_with(CONNECTOR_ERROR_PREFIX) {
        let status = match_connector_status(message).or_else(|| match_inference_status(message));
        if let Some(status_code) = status
            && (400..=599).contains(&status_code)
        {
            return AgentExecutionError::connector_error(message, status_code);
        }
    }

    AgentExecutionError::unknown(message)
}

/// Whether blind retry of the failed step is safe.
///
/// Connector failures are never recoverable: they fail identically on
/// retry. Attempt counting and backoff belong to the caller.
pub fn is_recoverable_error(error: &AgentExecutionError) -> bool {
    match error.code() {
        AgentErrorCode::ToolNotFound | AgentErrorCode::EmptyResponse => true,
        AgentErrorCode::ConnectorError
        | AgentErrorCode::RequestAborted
        | AgentErrorCode::UnknownError => false,
    }
}
