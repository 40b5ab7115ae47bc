use serde::{Deserialize, Serialize};

const PREVIEW_CHARS: usize = 80;

/// One step of a remote agent run, as recovered from a reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResult {
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extracted_content: String,
    #[serde(default)]
    pub long_term_memory: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
    InProgress,
}

impl StepStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            StepStatus::Succeeded => "✓",
            StepStatus::Failed => "✗",
            StepStatus::InProgress => "…",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed => "failed",
            StepStatus::InProgress => "in-progress",
        }
    }
}

impl ActionResult {
    pub fn status(&self) -> StepStatus {
        match self.success {
            Some(true) => StepStatus::Succeeded,
            Some(false) => StepStatus::Failed,
            None => StepStatus::InProgress,
        }
    }

    /// First line of the extracted content, clipped for the collapsed card.
    pub fn preview(&self) -> String {
        let first_line = self.extracted_content.lines().next().unwrap_or("").trim();
        if first_line.chars().count() > PREVIEW_CHARS {
            let clipped: String = first_line.chars().take(PREVIEW_CHARS).collect();
            format!("{}…", clipped)
        } else {
            first_line.to_string()
        }
    }

    pub fn memory(&self) -> Option<&str> {
        self.long_term_memory.as_deref().filter(|s| !s.is_empty())
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|s| !s.is_empty())
    }

    /// Metadata pairs in key order, values rendered as plain text.
    pub fn metadata_pairs(&self) -> Vec<(String, String)> {
        let Some(map) = &self.metadata else {
            return Vec::new();
        };
        map.iter()
            .map(|(k, v)| {
                let text = match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect()
    }
}

/// Full trace for one chat turn. Always derived from message content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentHistory {
    pub all_results: Vec<ActionResult>,
}

impl AgentHistory {
    pub fn new(all_results: Vec<ActionResult>) -> Self {
        Self { all_results }
    }

    pub fn len(&self) -> usize {
        self.all_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_results.is_empty()
    }
}
