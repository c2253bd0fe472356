//! Input, output and error types of the round orchestrator.

use orchestra_domain::{AgentAction, AgentExecutionError, Conversation, HitlPrompt, Message};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that prevent a round from starting.
///
/// Failures *during* a round are not errors of the use case: they end the
/// round with [`RoundOutcome::Failed`] so the conversation so far is kept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunRoundError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Round input has no messages")]
    EmptyInput,
}

/// Input for the RunRound use case
#[derive(Debug, Clone)]
pub struct RunRoundInput {
    /// History the round continues from, ending with the user's request
    pub conversation: Conversation,
}

impl RunRoundInput {
    pub fn new(request: impl Into<String>) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(Message::user(request));
        Self { conversation }
    }

    pub fn with_system_prompt(system_prompt: impl Into<String>, request: impl Into<String>) -> Self {
        let mut conversation = Conversation::with_system_prompt(system_prompt);
        conversation.push(Message::user(request));
        Self { conversation }
    }

    pub fn from_conversation(conversation: Conversation) -> Self {
        Self { conversation }
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Final text answer.
    Answer { message: String },
    /// Final structured answer.
    StructuredAnswer { data: Map<String, Value> },
    /// A tool needs human input; resume the conversation once it is given.
    AwaitingInput {
        call_id: String,
        tool_name: String,
        prompt: HitlPrompt,
    },
    /// Non-recoverable error, or recoverable error with retries exhausted.
    Failed { error: AgentExecutionError },
}

impl RoundOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RoundOutcome::Answer { .. } | RoundOutcome::StructuredAnswer { .. }
        )
    }
}

/// Output from the RunRound use case
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutput {
    pub outcome: RoundOutcome,
    /// Conversation including everything the round appended
    pub conversation: Conversation,
    /// Every action classified during the round, in order
    pub actions: Vec<AgentAction>,
    /// Internal ids of dynamic tools still loaded, for persistence
    pub dynamic_tool_ids: Vec<String>,
    /// Research-phase model turns taken
    pub cycles: usize,
}

impl RoundOutput {
    /// Kinds of the classified actions, in order.
    pub fn action_kinds(&self) -> Vec<&'static str> {
        self.actions.iter().map(AgentAction::kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchestra_domain::Role;

    #[test]
    fn test_input_with_system_prompt() {
        let input = RunRoundInput::with_system_prompt("Be brief", "List indices");

        let messages = input.conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[1].content(), "List indices");
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = RoundOutcome::Answer {
            message: "done".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "answer");
        assert_eq!(json["message"], "done");
        assert!(outcome.is_success());
    }

    #[test]
    fn test_failed_outcome_carries_error_code() {
        let outcome = RoundOutcome::Failed {
            error: AgentExecutionError::request_aborted("Request was aborted"),
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"]["code"], "requestAborted");
        assert!(!outcome.is_success());
    }
}
