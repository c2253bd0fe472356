//! Runtime tool names.
//!
//! Internal tool ids (e.g. `platform.core.search`) are not always valid
//! model-facing names. Every id is assigned a runtime name made of
//! `[A-Za-z0-9_-]`, at most [`MAX_TOOL_NAME_LENGTH`] characters, unique
//! across the registry. Once assigned, an id keeps its name.

use std::collections::HashMap;

/// Longest runtime name accepted by chat-completion providers.
pub const MAX_TOOL_NAME_LENGTH: usize = 64;

const FALLBACK_NAME: &str = "tool";

/// Replace characters outside `[A-Za-z0-9_-]` with `_` and truncate.
pub fn sanitize_tool_name(raw: &str) -> String {
    let sanitized: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_TOOL_NAME_LENGTH)
        .collect();

    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

/// Bidirectional runtime name ↔ internal id mapping.
///
/// Only ever grows: evicting a tool from the registry does not remove its
/// mapping.
#[derive(Debug, Clone, Default)]
pub struct ToolNameMapping {
    name_to_id: HashMap<String, String>,
    id_to_name: HashMap<String, String>,
}

impl ToolNameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the runtime name for `id`, assigning one if needed.
    ///
    /// The base is `preferred` when given, else the id itself. On collision
    /// with another id, `_1`, `_2`, … is appended.
    pub fn assign(&mut self, id: &str, preferred: Option<&str>) -> String {
        if let Some(existing) = self.id_to_name.get(id) {
            return existing.clone();
        }

        let base = sanitize_tool_name(preferred.unwrap_or(id));
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while self.name_to_id.contains_key(&candidate) {
            let tail = format!("_{}", suffix);
            let keep = MAX_TOOL_NAME_LENGTH.saturating_sub(tail.len());
            candidate = format!("{}{}", truncate(&base, keep), tail);
            suffix += 1;
        }

        self.name_to_id.insert(candidate.clone(), id.to_string());
        self.id_to_name.insert(id.to_string(), candidate.clone());
        candidate
    }

    pub fn internal_id(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(|s| s.as_str())
    }

    pub fn runtime_name(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
