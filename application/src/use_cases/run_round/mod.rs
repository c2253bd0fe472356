//! Run Round use case
//!
//! Drives one agent round over a [`ToolManager`]:
//!
//! ```text
//!            ┌──────────────── research ────────────────┐
//!  request ─▶│ model(tools) ─▶ classify_model_response  │
//!            │    ▲               │ ToolCall             │
//!            │    │               ▼                      │
//!            │    └── classify_tool_results ◀─ dispatch  │──▶ AwaitingInput (ToolPrompt)
//!            └───────────────────┬──────────────────────┘
//!                                │ Handover / cycle limit
//!                                ▼
//!            ┌──────────────── answer ──────────────────┐
//!            │ model(no tools) ─▶ classify_answer_*     │──▶ Answer / StructuredAnswer
//!            │   ▲ toolNotFound: inject error result    │
//!            └───┴──────────────────────────────────────┘
//! ```
//!
//! | Failure | Handling |
//! |---------|----------|
//! | `emptyResponse` | retried up to `max_model_retries` with backoff |
//! | `toolNotFound` while answering | corrected in-band up to `max_answer_retries` |
//! | anything else | ends the round with [`RoundOutcome::Failed`] |

mod types;

pub use types::{RoundOutcome, RoundOutput, RunRoundError, RunRoundInput};

use crate::config::RoundConfig;
use crate::ports::agent_events::{AgentEvent, AgentEventEmitter, NoAgentEvents};
use crate::ports::llm_gateway::{ChatModel, ChatRequest, GatewayError};
use crate::tools::{ToolManager, dispatch_tool_calls};
use crate::use_cases::shared::{aborted, cancellable, check_cancelled};
use orchestra_domain::{
    AgentAction, AgentErrorCode, AgentExecutionError, Conversation, LlmResponse, Message,
    ToolError, ToolMessage, classify_answer_response, classify_model_response,
    classify_structured_answer, classify_tool_results, convert_error, is_recoverable_error,
};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Use case for running one agent round
pub struct RunRoundUseCase {
    model: Arc<dyn ChatModel>,
    config: RoundConfig,
    events: Arc<dyn AgentEventEmitter>,
    cancellation_token: Option<CancellationToken>,
}

/// Mutable state threaded through both phases
struct RoundState {
    conversation: Conversation,
    actions: Vec<AgentAction>,
    cycles: usize,
}

impl RunRoundUseCase {
    pub fn new(model: Arc<dyn ChatModel>, config: RoundConfig) -> Self {
        Self {
            model,
            config,
            events: Arc::new(NoAgentEvents),
            cancellation_token: None,
        }
    }

    /// Set the emitter receiving `ActionProduced` events
    pub fn with_event_emitter(mut self, events: Arc<dyn AgentEventEmitter>) -> Self {
        self.events = events;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Run the round to completion, interruption or failure.
    pub async fn execute(
        &self,
        input: RunRoundInput,
        tools: &mut ToolManager,
    ) -> Result<RoundOutput, RunRoundError> {
        if input.conversation.is_empty() {
            return Err(RunRoundError::EmptyInput);
        }
        if self.config.max_research_cycles == 0 {
            return Err(RunRoundError::InvalidConfig(
                "max_research_cycles must be at least 1".to_string(),
            ));
        }

        info!(
            model = %self.model.model_id(),
            tools = tools.len(),
            "Starting round"
        );

        let mut state = RoundState {
            conversation: input.conversation,
            actions: Vec::new(),
            cycles: 0,
        };

        let result = match self.research(&mut state, tools).await {
            Ok(Some(outcome)) => Ok(outcome),
            Ok(None) => self.answer(&mut state).await,
            Err(error) => Err(error),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(code = %error.code(), error = %error, "Round failed");
                self.record(&mut state, AgentAction::Error(error.clone()));
                RoundOutcome::Failed { error }
            }
        };

        info!(cycles = state.cycles, success = outcome.is_success(), "Round finished");

        Ok(RoundOutput {
            outcome,
            conversation: state.conversation,
            actions: state.actions,
            dynamic_tool_ids: tools.get_dynamic_tool_ids(),
            cycles: state.cycles,
        })
    }

    /// Research phase. `Ok(Some(..))` ends the round early (HITL interrupt);
    /// `Ok(None)` hands over to the answer phase.
    async fn research(
        &self,
        state: &mut RoundState,
        tools: &mut ToolManager,
    ) -> Result<Option<RoundOutcome>, AgentExecutionError> {
        let mut model_retries = 0;

        while state.cycles < self.config.max_research_cycles {
            let request = ChatRequest::research(state.conversation.messages(), tools.definitions());
            let response = match self.invoke_model(&request).await {
                Ok(response) => response,
                Err(error) => {
                    self.retry_or_fail(error, &mut model_retries).await?;
                    continue;
                }
            };

            state.cycles += 1;
            let action = classify_model_response(&response);
            self.record(state, action.clone());

            match action {
                AgentAction::ToolCall { tool_calls, .. } => {
                    state.conversation.push(Message::from_response(&response));
                    for call in &tool_calls {
                        tools.record_tool_use(&call.tool_name);
                    }

                    let messages = cancellable(
                        &self.cancellation_token,
                        dispatch_tool_calls(tools, &tool_calls),
                    )
                    .await?;
                    state.conversation.extend_tool_messages(messages.iter().cloned());

                    for follow_up in classify_tool_results(&messages) {
                        self.record(state, follow_up.clone());
                        if let AgentAction::ToolPrompt {
                            call_id,
                            tool_name,
                            prompt,
                        } = follow_up
                        {
                            info!(tool = %tool_name, call_id = %call_id, "Round awaiting human input");
                            return Ok(Some(RoundOutcome::AwaitingInput {
                                call_id,
                                tool_name,
                                prompt,
                            }));
                        }
                    }
                }
                AgentAction::Handover { message } => {
                    debug!(cycle = state.cycles, "Research handed over");
                    state.conversation.push(Message::assistant(message));
                    return Ok(None);
                }
                AgentAction::Error(error) => {
                    state.cycles -= 1;
                    self.retry_or_fail(error, &mut model_retries).await?;
                }
                other => {
                    return Err(AgentExecutionError::unknown(format!(
                        "Unexpected action during research: {}",
                        other.kind()
                    )));
                }
            }
        }

        info!(
            max = self.config.max_research_cycles,
            "Research cycle limit reached, handing over"
        );
        Ok(None)
    }

    /// Answer phase: no tools, a single final answer.
    async fn answer(&self, state: &mut RoundState) -> Result<RoundOutcome, AgentExecutionError> {
        let mut model_retries = 0;
        let mut corrections = 0;

        loop {
            let request =
                ChatRequest::answer(state.conversation.messages(), self.config.structured_output);
            let response = match self.invoke_model(&request).await {
                Ok(response) => response,
                Err(error) => {
                    self.retry_or_fail(error, &mut model_retries).await?;
                    continue;
                }
            };

            let action = classify_answer(&response, self.config.structured_output);
            self.record(state, action.clone());

            match action {
                AgentAction::Answer { message } => {
                    state.conversation.push(Message::assistant(message.clone()));
                    return Ok(RoundOutcome::Answer { message });
                }
                AgentAction::StructuredAnswer { data } => {
                    state
                        .conversation
                        .push(Message::assistant(Value::Object(data.clone()).to_string()));
                    return Ok(RoundOutcome::StructuredAnswer { data });
                }
                AgentAction::Error(error) if error.code() == AgentErrorCode::ToolNotFound => {
                    if corrections >= self.config.max_answer_retries {
                        return Err(error);
                    }
                    corrections += 1;
                    info!(
                        tool = error.tool_name().unwrap_or_default(),
                        attempt = corrections,
                        "Model called a tool while answering, correcting"
                    );
                    inject_tool_correction(&mut state.conversation, &response, &error);
                }
                AgentAction::Error(error) => {
                    self.retry_or_fail(error, &mut model_retries).await?;
                }
                other => {
                    return Err(AgentExecutionError::unknown(format!(
                        "Unexpected action while answering: {}",
                        other.kind()
                    )));
                }
            }
        }
    }

    /// One model call, raced against cancellation, with errors classified.
    async fn invoke_model(&self, request: &ChatRequest) -> Result<LlmResponse, AgentExecutionError> {
        check_cancelled(&self.cancellation_token)?;

        match cancellable(&self.cancellation_token, self.model.invoke(request)).await? {
            Ok(response) => Ok(response),
            Err(GatewayError::Cancelled) => Err(aborted()),
            Err(error) => {
                let converted = convert_error(&error);
                warn!(
                    model = %self.model.model_id(),
                    code = %converted.code(),
                    error = %error,
                    "Model call failed"
                );
                Err(converted)
            }
        }
    }

    /// Back off and return `Ok` when `error` may be retried; return it otherwise.
    async fn retry_or_fail(
        &self,
        error: AgentExecutionError,
        retries: &mut usize,
    ) -> Result<(), AgentExecutionError> {
        if !is_recoverable_error(&error) || *retries >= self.config.max_model_retries {
            return Err(error);
        }

        *retries += 1;
        info!(
            code = %error.code(),
            attempt = *retries,
            max = self.config.max_model_retries,
            "Retrying model call after recoverable error"
        );

        if !self.config.retry_backoff.is_zero() {
            cancellable(
                &self.cancellation_token,
                tokio::time::sleep(self.config.retry_backoff),
            )
            .await?;
        }
        Ok(())
    }

    fn record(&self, state: &mut RoundState, action: AgentAction) {
        self.events.emit(AgentEvent::ActionProduced {
            cycle: state.cycles,
            action: action.kind(),
        });
        state.actions.push(action);
    }
}

/// Classify an answer, honouring structured output when requested.
///
/// Without a parsed structured payload the text is used as the object when
/// it parses to one; any other text is a plain answer.
fn classify_answer(response: &LlmResponse, structured_output: bool) -> AgentAction {
    if !structured_output || response.has_tool_calls() {
        return classify_answer_response(response);
    }

    if let Some(value) = &response.structured {
        return classify_structured_answer(value);
    }

    let text = response.text_content();
    if text.trim().is_empty() {
        return classify_answer_response(response);
    }

    match serde_json::from_str::<Value>(text.trim()) {
        Ok(value @ Value::Object(_)) => classify_structured_answer(&value),
        _ => classify_structured_answer(&Value::String(text)),
    }
}

/// Record the forbidden tool call and answer it with an error result, so the
/// model sees why it failed on its next attempt.
fn inject_tool_correction(
    conversation: &mut Conversation,
    response: &LlmResponse,
    error: &AgentExecutionError,
) {
    let calls = response.tool_calls();
    conversation.push(Message::from_response(response));
    conversation.extend_tool_messages(calls.iter().map(|call| {
        ToolMessage::failed(
            &call.call_id,
            &call.tool_name,
            &ToolError::new(
                "TOOL_NOT_AVAILABLE",
                format!(
                    "{}. Answer using the information gathered so far.",
                    error.message()
                ),
            ),
        )
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tool_handler::{ToolContext, ToolHandler, ToolOutput};
    use crate::tools::{AddToolsOptions, ExecutableTool, ExecutableToolBatch};
    use async_trait::async_trait;
    use orchestra_domain::{ContentBlock, HitlPrompt, Role};
    use serde_json::{Map, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Chat model replaying a fixed list of results.
    struct ScriptedModel {
        replies: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<LlmResponse, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        fn model_id(&self) -> &str {
            "scripted"
        }

        async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }
    }

    /// Never answers; used to exercise cancellation.
    struct HangingModel;

    #[async_trait]
    impl ChatModel for HangingModel {
        fn model_id(&self) -> &str {
            "hanging"
        }

        async fn invoke(&self, _request: &ChatRequest) -> Result<LlmResponse, GatewayError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(GatewayError::Timeout)
        }
    }

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn execute(&self, args: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::json(args))
        }
    }

    struct Confirm;

    #[async_trait]
    impl ToolHandler for Confirm {
        async fn execute(&self, _args: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::interrupt(HitlPrompt::new("Proceed?")))
        }
    }

    fn tool_use(id: &str, name: &str) -> ContentBlock {
        ContentBlock::ToolUse {
            id: id.to_string(),
            name: name.to_string(),
            input: Map::new(),
        }
    }

    fn tools() -> ToolManager {
        let mut manager = ToolManager::new(2);
        manager.add_tools(
            ExecutableToolBatch::new(
                "builtin",
                vec![ExecutableTool::new("search", "Search", Arc::new(Echo))],
            ),
            AddToolsOptions::static_tools(),
        );
        manager.add_tools(
            ExecutableToolBatch::new(
                "skills",
                vec![
                    ExecutableTool::new("skills.lookup", "Lookup", Arc::new(Echo)),
                    ExecutableTool::new("skills.confirm", "Confirm", Arc::new(Confirm)),
                ],
            ),
            AddToolsOptions::dynamic(),
        );
        manager
    }

    fn config() -> RoundConfig {
        RoundConfig::default().with_retry_backoff(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_research_then_answer() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_blocks(vec![
                ContentBlock::text("Searching"),
                tool_use("c1", "search"),
            ])),
            Ok(LlmResponse::from_text("Found two indices")),
            Ok(LlmResponse::from_text("There are two indices.")),
        ]);
        let use_case = RunRoundUseCase::new(model.clone(), config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("How many indices?"), &mut tools)
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            RoundOutcome::Answer {
                message: "There are two indices.".to_string()
            }
        );
        assert_eq!(
            output.action_kinds(),
            vec!["tool_call", "execute_tool", "handover", "answer"]
        );
        assert_eq!(output.cycles, 2);

        let requests = model.requests();
        assert_eq!(requests.len(), 3);
        assert!(!requests[0].tools.is_empty());
        assert!(requests[2].tools.is_empty());
        // user, assistant(tool call), tool result
        assert_eq!(requests[1].messages.len(), 3);
        assert_eq!(requests[1].messages[2].role(), Role::Tool);
    }

    #[tokio::test]
    async fn test_tool_prompt_ends_round() {
        let model = ScriptedModel::new(vec![Ok(LlmResponse::from_blocks(vec![
            tool_use("c1", "search"),
            tool_use("c2", "skills_confirm"),
        ]))]);
        let use_case = RunRoundUseCase::new(model, config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("Delete the index"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::AwaitingInput {
                call_id,
                tool_name,
                prompt,
            } => {
                assert_eq!(call_id, "c2");
                assert_eq!(tool_name, "skills_confirm");
                assert_eq!(prompt.message, "Proceed?");
            }
            other => panic!("expected AwaitingInput, got {:?}", other),
        }
        assert_eq!(
            output.action_kinds(),
            vec!["tool_call", "execute_tool", "tool_prompt"]
        );
    }

    #[tokio::test]
    async fn test_tool_use_refreshes_dynamic_recency() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_blocks(vec![tool_use("c1", "skills_lookup")])),
            Ok(LlmResponse::from_text("done")),
            Ok(LlmResponse::from_text("answer")),
        ]);
        let use_case = RunRoundUseCase::new(model, config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("Look it up"), &mut tools)
            .await
            .unwrap();

        assert_eq!(
            output.dynamic_tool_ids.first().map(String::as_str),
            Some("skills.lookup")
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_is_reported_to_model() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_blocks(vec![tool_use("c1", "nonexistent")])),
            Ok(LlmResponse::from_text("ok")),
            Ok(LlmResponse::from_text("answer")),
        ]);
        let use_case = RunRoundUseCase::new(model.clone(), config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        assert!(output.outcome.is_success());
        let second = &model.requests()[1];
        assert!(second.messages[2].content().contains("Tool not found: nonexistent"));
    }

    #[tokio::test]
    async fn test_cycle_limit_forces_handover() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_blocks(vec![tool_use("c1", "search")])),
            Ok(LlmResponse::from_blocks(vec![tool_use("c2", "search")])),
            Ok(LlmResponse::from_text("final")),
        ]);
        let use_case = RunRoundUseCase::new(model.clone(), config().with_max_research_cycles(2));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        assert_eq!(output.cycles, 2);
        assert_eq!(
            output.outcome,
            RoundOutcome::Answer {
                message: "final".to_string()
            }
        );
        assert_eq!(model.requests()[2].phase, crate::ports::llm_gateway::RoundPhase::Answer);
    }

    #[tokio::test]
    async fn test_empty_response_is_retried() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("   ")),
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_text("answer")),
        ]);
        let use_case = RunRoundUseCase::new(model, config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        assert!(output.outcome.is_success());
        assert_eq!(output.cycles, 1);
        assert_eq!(output.action_kinds()[0], "error");
    }

    #[tokio::test]
    async fn test_empty_response_retries_are_bounded() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("")),
            Ok(LlmResponse::from_text("")),
        ]);
        let use_case = RunRoundUseCase::new(model, config().with_max_model_retries(1));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::Failed { error } => {
                assert_eq!(error.code(), AgentErrorCode::EmptyResponse)
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connector_error_is_not_retried() {
        let model = ScriptedModel::new(vec![Err(GatewayError::Connector(
            "Error calling connector: Status code: 401. Message: Unauthorized".to_string(),
        ))]);
        let use_case = RunRoundUseCase::new(model.clone(), config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::Failed { error } => {
                assert_eq!(error.code(), AgentErrorCode::ConnectorError);
                assert_eq!(error.status_code(), Some(401));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(model.requests().len(), 1);
        assert_eq!(output.action_kinds(), vec!["error"]);
    }

    #[tokio::test]
    async fn test_tool_call_while_answering_is_corrected() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_blocks(vec![tool_use("c9", "search")])),
            Ok(LlmResponse::from_text("final answer")),
        ]);
        let use_case = RunRoundUseCase::new(model.clone(), config());
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            RoundOutcome::Answer {
                message: "final answer".to_string()
            }
        );
        let retry = &model.requests()[2];
        let last = retry.messages.last().unwrap();
        assert_eq!(last.role(), Role::Tool);
        assert!(last.content().contains("answering phase"));
    }

    #[tokio::test]
    async fn test_tool_call_while_answering_fails_after_retries() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_blocks(vec![tool_use("c1", "search")])),
            Ok(LlmResponse::from_blocks(vec![tool_use("c2", "search")])),
        ]);
        let use_case = RunRoundUseCase::new(model, config().with_max_answer_retries(1));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::Failed { error } => {
                assert_eq!(error.code(), AgentErrorCode::ToolNotFound);
                assert_eq!(error.tool_name(), Some("search"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_structured_answer() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_structured(json!({"count": 2}))),
        ]);
        let use_case = RunRoundUseCase::new(model.clone(), config().with_structured_output(true));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::StructuredAnswer { data } => assert_eq!(data["count"], 2),
            other => panic!("expected StructuredAnswer, got {:?}", other),
        }
        assert!(model.requests()[1].structured_output);
    }

    #[tokio::test]
    async fn test_structured_answer_parsed_from_text() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_text(r#"{"ok": true}"#)),
        ]);
        let use_case = RunRoundUseCase::new(model, config().with_structured_output(true));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        assert_eq!(output.action_kinds().last(), Some(&"structured_answer"));
    }

    #[test]
    fn test_structured_mode_keeps_non_object_json_text_as_answer() {
        for text in ["42", "true", "null", "[1,2]"] {
            let action = classify_answer(&LlmResponse::from_text(text), true);
            assert_eq!(
                action,
                AgentAction::Answer {
                    message: text.to_string()
                },
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_structured_mode_blank_text_is_empty_response() {
        let action = classify_answer(&LlmResponse::from_text("  "), true);
        let error = action.as_error().expect("must be an error");
        assert_eq!(error.code(), AgentErrorCode::EmptyResponse);
    }

    #[tokio::test]
    async fn test_structured_round_answers_with_scalar_text() {
        let model = ScriptedModel::new(vec![
            Ok(LlmResponse::from_text("handover")),
            Ok(LlmResponse::from_text("42")),
        ]);
        let use_case = RunRoundUseCase::new(model, config().with_structured_output(true));
        let mut tools = tools();

        let output = use_case
            .execute(RunRoundInput::new("How many?"), &mut tools)
            .await
            .unwrap();

        assert_eq!(
            output.outcome,
            RoundOutcome::Answer {
                message: "42".to_string()
            }
        );
        assert_eq!(output.action_kinds(), vec!["handover", "answer"]);
    }

    #[tokio::test]
    async fn test_cancellation_aborts_round() {
        let token = CancellationToken::new();
        let use_case =
            RunRoundUseCase::new(Arc::new(HangingModel), config()).with_cancellation(token.clone());
        let mut tools = tools();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let output = use_case
            .execute(RunRoundInput::new("q"), &mut tools)
            .await
            .unwrap();

        match &output.outcome {
            RoundOutcome::Failed { error } => assert!(error.is_aborted()),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let use_case = RunRoundUseCase::new(ScriptedModel::new(vec![]), config());
        let mut tools = tools();

        let result = use_case
            .execute(RunRoundInput::from_conversation(Conversation::new()), &mut tools)
            .await;

        assert_eq!(result.unwrap_err(), RunRoundError::EmptyInput);
    }
}
