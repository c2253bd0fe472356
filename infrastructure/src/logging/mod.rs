//! Logging infrastructure: structured event transcripts.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`AgentEventEmitter`](orchestra_application::AgentEventEmitter) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLogger;
