//! Round parameters: loop control for the round orchestrator.
//!
//! [`RoundConfig`] groups the static parameters that bound a
//! [`RunRoundUseCase`](crate::use_cases::run_round::RunRoundUseCase):
//! registry capacity, cycle limits and retry policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Round loop control parameters.
///
/// | Parameter | Default | Bounds |
/// |-----------|---------|--------|
/// | `dynamic_tool_capacity` | 10 | LRU size of the tool registry |
/// | `max_research_cycles` | 10 | model turns with tools before a forced handover |
/// | `max_answer_retries` | 1 | in-band corrections of a tool call while answering |
/// | `max_model_retries` | 2 | retries of a recoverable model error |
/// | `retry_backoff` | 500ms | pause before each model retry |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub dynamic_tool_capacity: usize,
    pub max_research_cycles: usize,
    pub max_answer_retries: usize,
    pub max_model_retries: usize,
    pub retry_backoff: Duration,
    /// Ask the model for a JSON object answer instead of text.
    pub structured_output: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            dynamic_tool_capacity: 10,
            max_research_cycles: 10,
            max_answer_retries: 1,
            max_model_retries: 2,
            retry_backoff: Duration::from_millis(500),
            structured_output: false,
        }
    }
}

impl RoundConfig {
    // ==================== Builder Methods ====================

    pub fn with_dynamic_tool_capacity(mut self, capacity: usize) -> Self {
        self.dynamic_tool_capacity = capacity;
        self
    }

    pub fn with_max_research_cycles(mut self, max: usize) -> Self {
        self.max_research_cycles = max;
        self
    }

    pub fn with_max_answer_retries(mut self, max: usize) -> Self {
        self.max_answer_retries = max;
        self
    }

    pub fn with_max_model_retries(mut self, max: usize) -> Self {
        self.max_model_retries = max;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_structured_output(mut self, structured: bool) -> Self {
        self.structured_output = structured;
        self
    }
}
