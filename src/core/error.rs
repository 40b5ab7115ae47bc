use thiserror::Error;

/// Banner text shown when the status endpoints cannot be read.
pub const STATUS_FETCH_ERROR: &str =
    "Failed to fetch data from API. Make sure the server is running.";

/// Assistant turn appended in place of a reply when a chat send fails.
pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("no browser window available")]
    NoWindow,

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        ClientError::Request(format!("{:?}", value))
    }
}
