use crate::core::models::ChatContext;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
const API_BASE_META: &str = "meta[name=\"agent-api-base\"]";
const CHAT_CONTEXT_GLOBAL: &str = "__AGENT_CHAT_CONTEXT__";

/// Where the backend lives. Resolved once at startup and shared through context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_string() }
    }

    /// Host page `<meta name="agent-api-base">`, then `AGENT_API_BASE` at build time, then the default.
    pub fn resolve() -> Self {
        let from_meta = read_meta_base();
        Self::pick(from_meta.as_deref(), option_env!("AGENT_API_BASE"))
    }

    fn pick(from_meta: Option<&str>, from_env: Option<&str>) -> Self {
        let chosen = [from_meta, from_env]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self::new(chosen)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn root_url(&self) -> String {
        self.url("/")
    }

    pub fn health_url(&self) -> String {
        self.url("/health")
    }

    pub fn chat_url(&self) -> String {
        self.url("/agent/chat")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn read_meta_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_META).ok()??;
    meta.get_attribute("content")
}

/// Reads `window.__AGENT_CHAT_CONTEXT__`. Missing or malformed values give an empty context.
pub fn load_chat_context() -> ChatContext {
    let Some(window) = web_sys::window() else {
        return ChatContext::default();
    };
    let key = wasm_bindgen::JsValue::from_str(CHAT_CONTEXT_GLOBAL);
    match js_sys::Reflect::get(&window, &key) {
        Ok(value) if !value.is_undefined() && !value.is_null() => {
            match serde_wasm_bindgen::from_value::<ChatContext>(value) {
                Ok(context) => context,
                Err(e) => {
                    web_sys::console::error_1(&format!("Ignoring malformed chat context: {}", e).into());
                    ChatContext::default()
                }
            }
        }
        _ => ChatContext::default(),
    }
}
