//! Response classification.
//!
//! Pure, total functions turning one model or tool-runner output into
//! [`AgentAction`]s. None of them panic or return `Result`: malformed
//! output degrades to [`AgentAction::Error`] so the orchestrator has a
//! single failure channel.

use crate::agent::action::AgentAction;
use crate::core::error::AgentExecutionError;
use crate::session::response::LlmResponse;
use crate::tool::value_objects::{ToolArtifact, ToolCallResult, ToolMessage};
use serde_json::Value;
use tracing::warn;

/// Classify a research-phase model response.
///
/// Tool calls take precedence over text when both are present.
pub fn classify_model_response(response: &LlmResponse) -> AgentAction {
    if response.has_tool_calls() {
        return AgentAction::ToolCall {
            message: response.text_content(),
            tool_calls: response.tool_calls(),
        };
    }

    let text = response.text_content();
    if !text.trim().is_empty() {
        return AgentAction::Handover { message: text };
    }

    AgentAction::Error(AgentExecutionError::empty_response(
        "No tool calls or text content found in model response",
    ))
}

/// Merge the results of one batch of tool invocations.
///
/// Returns zero, one or two actions, in this order:
/// - one `ExecuteTool` with every completed message, if any;
/// - one `ToolPrompt` for the first interrupted message, if any.
///
/// Only one interrupt per batch is supported: any further interrupts are
/// logged and dropped.
pub fn classify_tool_results(messages: &[ToolMessage]) -> Vec<AgentAction> {
    let mut results = Vec::new();
    let mut interrupts = Vec::new();

    for message in messages {
        match &message.artifact {
            ToolArtifact::Result { data, is_error } => results.push(ToolCallResult {
                call_id: message.call_id.clone(),
                tool_name: message.tool_name.clone(),
                result_text: message.content.clone(),
                artifact: data.clone(),
                is_error: *is_error,
            }),
            ToolArtifact::Prompt(prompt) => interrupts.push((message, prompt)),
        }
    }

    let mut actions = Vec::with_capacity(2);
    if !results.is_empty() {
        actions.push(AgentAction::ExecuteTool { results });
    }

    if let Some(((first, prompt), rest)) = interrupts.split_first() {
        if !rest.is_empty() {
            let dropped: Vec<&str> = rest.iter().map(|(m, _)| m.call_id.as_str()).collect();
            warn!(
                kept = %first.call_id,
                dropped = ?dropped,
                "Multiple tool interrupts in one batch, only the first is surfaced"
            );
        }
        actions.push(AgentAction::ToolPrompt {
            call_id: first.call_id.clone(),
            tool_name: first.tool_name.clone(),
            prompt: (*prompt).clone(),
        });
    }

    actions
}

/// Classify an answering-phase model response.
///
/// Tools are forbidden in this phase; a tool call is reported as a
/// recoverable `toolNotFound` error naming the first attempted tool.
pub fn classify_answer_response(response: &LlmResponse) -> AgentAction {
    if let Some(call) = response.tool_calls().into_iter().next() {
        return AgentAction::Error(AgentExecutionError::tool_not_found(
            format!(
                "Tool '{}' was called during the answering phase, where no tools are available",
                call.tool_name
            ),
            call.tool_name.clone(),
            call.arguments_value(),
        ));
    }

    let text = response.text_content();
    if !text.trim().is_empty() {
        return AgentAction::Answer { message: text };
    }

    AgentAction::Error(AgentExecutionError::empty_response(
        "No text content found in answer response",
    ))
}

/// Classify a structured-output answer.
///
/// Objects become `StructuredAnswer`; strings degrade to `Answer` for
/// models that ignore structured-output instructions; anything else is
/// an `emptyResponse` error describing what was received.
pub fn classify_structured_answer(raw: &Value) -> AgentAction {
    match raw {
        Value::Object(data) => AgentAction::StructuredAnswer { data: data.clone() },
        Value::String(text) => AgentAction::Answer {
            message: text.clone(),
        },
        other => AgentAction::Error(AgentExecutionError::empty_response(format!(
            "Failed to parse structured response: expected an object, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
