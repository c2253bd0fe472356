//! Browser tool adapter port
//!
//! Browser tools are executed by the client, not by the server. Providers
//! only describe them (`{id, description, schema}`); an adapter turns each
//! description into a runtime-shaped [`ExecutableTool`] so the registry can
//! index it like any other tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::batch::ExecutableTool;

/// Metadata of a client-side tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserToolDescriptor {
    pub id: String,
    pub description: String,
    #[serde(default = "empty_object_schema")]
    pub schema: Value,
}

fn empty_object_schema() -> Value {
    serde_json::json!({"type": "object", "properties": {}})
}

/// Port for adapting browser tool metadata into runtime tools.
pub trait BrowserToolAdapter: Send + Sync {
    fn adapt(&self, descriptor: &BrowserToolDescriptor) -> ExecutableTool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults_schema() {
        let descriptor: BrowserToolDescriptor =
            serde_json::from_str(r#"{"id": "browser.open_tab", "description": "Open a tab"}"#)
                .unwrap();
        assert_eq!(descriptor.schema["type"], "object");
    }
}
