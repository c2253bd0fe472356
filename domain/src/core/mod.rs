//! Core domain concepts shared across all subdomains.
//!
//! - [`error::AgentExecutionError`]: typed, coded failure of an agent round
//! - [`error_classifier`]: raw connector error → [`error::AgentExecutionError`]

pub mod error;
pub mod error_classifier;
