//! Decides how an assistant reply is displayed.
//!
//! The backend does not promise a content type, so this is a cascade: the
//! legacy `repr` dump first, then JSON, then the raw text. Nothing here fails;
//! a reply that cannot be read as a trace is shown exactly as received.

pub mod legacy;

use serde::Deserialize;
use crate::features::agent_chat::models::{ActionResult, AgentHistory};

pub use legacy::{parse_legacy_trace, TRACE_MARKER};

#[derive(Debug, Clone, PartialEq)]
pub enum FormattedResponse {
    PlainText(String),
    Timeline(AgentHistory),
}

impl FormattedResponse {
    pub fn is_timeline(&self) -> bool {
        matches!(self, FormattedResponse::Timeline(_))
    }

    #[cfg(test)]
    pub fn step_count(&self) -> usize {
        match self {
            FormattedResponse::Timeline(history) => history.len(),
            FormattedResponse::PlainText(_) => 0,
        }
    }
}

// A bare JSON array only counts as a trace when every item carries one of these
const STEP_KEYS: [&str; 6] = [
    "is_done",
    "success",
    "error",
    "extracted_content",
    "long_term_memory",
    "metadata",
];

pub fn format_response(content: &str) -> FormattedResponse {
    let parsed = if content.contains(TRACE_MARKER) {
        parse_legacy_trace(content)
    } else if looks_structured(content) {
        parse_structured_trace(content)
    } else {
        None
    };

    match parsed {
        Some(history) => FormattedResponse::Timeline(history),
        None => FormattedResponse::PlainText(content.to_string()),
    }
}

fn looks_structured(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn parse_structured_trace(content: &str) -> Option<AgentHistory> {
    let value: serde_json::Value = serde_json::from_str(content.trim()).ok()?;
    match &value {
        serde_json::Value::Object(map) if map.contains_key("all_results") => {
            AgentHistory::deserialize(&value).ok()
        }
        serde_json::Value::Array(items) if !items.is_empty() && items.iter().all(is_step_object) => {
            Vec::<ActionResult>::deserialize(&value).ok().map(AgentHistory::new)
        }
        _ => None,
    }
}

fn is_step_object(item: &serde_json::Value) -> bool {
    item.as_object()
        .map(|fields| STEP_KEYS.iter().any(|key| fields.contains_key(*key)))
        .unwrap_or(false)
}
