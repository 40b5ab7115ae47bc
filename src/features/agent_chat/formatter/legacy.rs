//! Best-effort recovery of an agent run from the backend's Python `repr` dump.
//!
//! The dump looks like
//! `AgentHistoryList(all_results=[ActionResult(is_done=True, ...), ...], all_model_outputs=[...])`.
//! This is a scrape, not a grammar: each field is matched on its own inside each
//! record, so one unreadable field leaves the rest of the record intact. String
//! values that themselves contain `ActionResult(` will throw the record split off.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::features::agent_chat::models::{ActionResult, AgentHistory};

pub const TRACE_MARKER: &str = "all_results=";
const RECORD_OPENER: &str = "ActionResult(";

static TRACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)all_results=\[(.*?)\], all_model_outputs").expect("valid trace regex"));
static IS_DONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bis_done=(True|False)").expect("valid is_done regex"));
static SUCCESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsuccess=(True|False|None)").expect("valid success regex"));
static ERROR_RE: Lazy<Regex> = Lazy::new(|| quoted_field("error"));
static CONTENT_RE: Lazy<Regex> = Lazy::new(|| quoted_field("extracted_content"));
static MEMORY_RE: Lazy<Regex> = Lazy::new(|| quoted_field("long_term_memory"));
static METADATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmetadata=").expect("valid metadata regex"));

fn quoted_field(key: &str) -> Regex {
    Regex::new(&format!(r"(?s)\b{}='((?:[^'\\]|\\.)*)'", key)).expect("valid string field regex")
}

/// Returns `None` only when the `all_results=[ ... ], all_model_outputs` pair is missing.
pub fn parse_legacy_trace(text: &str) -> Option<AgentHistory> {
    let captured = TRACE_RE.captures(text)?.get(1)?.as_str();

    let results = captured
        .split(RECORD_OPENER)
        .skip(1)
        .map(parse_record)
        .collect();

    Some(AgentHistory::new(results))
}

fn parse_record(record: &str) -> ActionResult {
    let is_done = IS_DONE_RE
        .captures(record)
        .map(|c| &c[1] == "True")
        .unwrap_or(false);

    let success = SUCCESS_RE.captures(record).and_then(|c| match &c[1] {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    });

    ActionResult {
        is_done,
        success,
        error: quoted_value(&ERROR_RE, record),
        extracted_content: quoted_value(&CONTENT_RE, record).unwrap_or_default(),
        long_term_memory: quoted_value(&MEMORY_RE, record),
        metadata: metadata_value(record),
    }
}

fn quoted_value(re: &Regex, record: &str) -> Option<String> {
    re.captures(record).map(|c| unescape_python(&c[1]))
}

fn unescape_python(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn metadata_value(record: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    let start = METADATA_RE.find(record)?.end();
    let literal = brace_literal(&record[start..])?;
    let normalized = literal.replace('\'', "\"");
    match serde_json::from_str::<serde_json::Value>(&normalized) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// The `{ ... }` literal at the start of `rest`, matched with quote-aware brace counting.
fn brace_literal(rest: &str) -> Option<&str> {
    if !rest.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for (idx, ch) in rest.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match (quote, ch) {
            (Some(_), '\\') => escape_next = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(ch),
            (None, '{') => depth += 1,
            (None, '}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..=idx]);
                }
            }
            (None, _) => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = "all_results=[ActionResult(is_done=True, success=True, error=None, extracted_content='done', long_term_memory=None, metadata=None)], all_model_outputs=[...]";

    #[test]
    fn parses_single_done_record() {
        let history = parse_legacy_trace(SINGLE).unwrap();
        assert_eq!(history.len(), 1);
        let step = &history.all_results[0];
        assert!(step.is_done);
        assert_eq!(step.success, Some(true));
        assert_eq!(step.error, None);
        assert_eq!(step.extracted_content, "done");
        assert_eq!(step.long_term_memory, None);
        assert_eq!(step.metadata, None);
    }

    #[test]
    fn recovers_metadata_after_quote_normalization() {
        let text = "all_results=[ActionResult(is_done=False, success=None, metadata={'a': 1})], all_model_outputs=[]";
        let history = parse_legacy_trace(text).unwrap();
        let metadata = history.all_results[0].metadata.as_ref().unwrap();
        assert_eq!(metadata["a"], serde_json::json!(1));
    }

    #[test]
    fn parses_multiple_records_in_order_across_lines() {
        let text = "AgentHistoryList(all_results=[\n  ActionResult(is_done=False, success=None, extracted_content='Navigated to https://news.ycombinator.com', long_term_memory='Opened HN'),\n  ActionResult(is_done=True, success=False, error='Element not found', extracted_content='')\n], all_model_outputs=[{'navigate': {}}])";
        let history = parse_legacy_trace(text).unwrap();
        assert_eq!(history.len(), 2);

        let first = &history.all_results[0];
        assert!(!first.is_done);
        assert_eq!(first.success, None);
        assert_eq!(first.extracted_content, "Navigated to https://news.ycombinator.com");
        assert_eq!(first.long_term_memory.as_deref(), Some("Opened HN"));

        let second = &history.all_results[1];
        assert!(second.is_done);
        assert_eq!(second.success, Some(false));
        assert_eq!(second.error.as_deref(), Some("Element not found"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let text = "all_results=[ActionResult()], all_model_outputs=[]";
        let step = &parse_legacy_trace(text).unwrap().all_results[0];
        assert!(!step.is_done);
        assert_eq!(step.success, None);
        assert_eq!(step.extracted_content, "");
        assert_eq!(step.error, None);
    }

    #[test]
    fn bad_metadata_only_drops_metadata() {
        let text = "all_results=[ActionResult(is_done=True, success=True, extracted_content='kept', metadata={'a': True})], all_model_outputs=[]";
        let step = &parse_legacy_trace(text).unwrap().all_results[0];
        assert_eq!(step.metadata, None);
        assert_eq!(step.extracted_content, "kept");
        assert!(step.is_done);
    }

    #[test]
    fn nested_metadata_is_kept_whole() {
        let text = "all_results=[ActionResult(metadata={'page': {'n': 2}, 'tag': 'x}y'})], all_model_outputs=[]";
        let metadata = parse_legacy_trace(text).unwrap().all_results[0].metadata.clone().unwrap();
        assert_eq!(metadata["page"]["n"], serde_json::json!(2));
        assert_eq!(metadata["tag"], serde_json::json!("x}y"));
    }

    #[test]
    fn escaped_quotes_in_strings_are_unescaped() {
        let text = r"all_results=[ActionResult(extracted_content='it\'s on line 1\nand 2')], all_model_outputs=[]";
        let step = &parse_legacy_trace(text).unwrap().all_results[0];
        assert_eq!(step.extracted_content, "it's on line 1\nand 2");
    }

    #[test]
    fn marker_pair_without_records_is_an_empty_trace() {
        let history = parse_legacy_trace("all_results=[], all_model_outputs=[]").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn missing_closing_marker_yields_nothing() {
        assert!(parse_legacy_trace("all_results=[ActionResult(is_done=True)]").is_none());
        assert!(parse_legacy_trace("no trace here").is_none());
    }
}
