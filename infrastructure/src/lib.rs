//! Infrastructure layer for agent-orchestra
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileRoundConfig,
    FileToolsConfig,
};
pub use logging::JsonlEventLogger;
pub use providers::{FixtureError, ReplayFixture, ScriptedChatModel, ScriptedReply};
pub use tools::{BrowserToolBridge, FixtureTool};
