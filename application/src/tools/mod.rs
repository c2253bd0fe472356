//! Tool Registry
//!
//! Everything needed to expose tools to the model and run the calls it
//! makes:
//!
//! - [`ToolManager`]: static set plus bounded LRU of dynamic tools
//! - [`ToolNameMapping`]: runtime name ↔ internal id
//! - [`dispatch_tool_calls`]: concurrent execution of one model turn

pub mod batch;
pub mod dispatch;
pub mod manager;
pub mod naming;
pub mod runtime;

pub use batch::{AddToolsOptions, BrowserToolBatch, ExecutableTool, ExecutableToolBatch, ToolBatch};
pub use dispatch::dispatch_tool_calls;
pub use manager::ToolManager;
pub use naming::{MAX_TOOL_NAME_LENGTH, ToolNameMapping, sanitize_tool_name};
pub use runtime::RuntimeTool;
