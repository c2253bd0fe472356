//! Tool domain module
//!
//! Pure definitions for the tools an agent can call during a round:
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolDefinition │───▶│ ToolCall     │───▶│ ToolMessage  │
//! │ (runtime name) │    │ (call_id)    │    │ (artifact)   │
//! └────────────────┘    └──────────────┘    └──────┬───────┘
//!                                                  │
//!                         ├─ Result { data, is_error }
//!                         └─ Prompt(HitlPrompt)
//! ```
//!
//! Registration, eviction and invocation live in the application layer
//! (`ToolManager`); this module has no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition};
pub use value_objects::{HitlPrompt, ToolArtifact, ToolCallResult, ToolError, ToolMessage};
