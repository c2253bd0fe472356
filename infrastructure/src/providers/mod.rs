//! Chat model adapters
//!
//! - [`ScriptedChatModel`]: fixture-driven replay of recorded rounds

pub mod scripted;

pub use scripted::{FixtureError, ReplayFixture, ScriptedChatModel, ScriptedReply};
