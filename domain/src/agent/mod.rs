//! Agent domain module
//!
//! The action vocabulary of an agent round and the pure classifiers that
//! produce it from model and tool-runner output.

pub mod action;
pub mod classifier;

pub use action::AgentAction;
pub use classifier::{
    classify_answer_response, classify_model_response, classify_structured_answer,
    classify_tool_results,
};
