//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod agent_events;
pub mod browser_tools;
pub mod llm_gateway;
pub mod tool_handler;
