//! Tool adapters
//!
//! - `browser`: bridge for client-side tools, executed through HITL prompts
//! - `fixture`: canned tools declared in replay fixtures

pub mod browser;
pub mod fixture;

pub use browser::BrowserToolBridge;
pub use fixture::FixtureTool;
