use crate::core::config::ApiConfig;
use crate::core::error::ClientError;
use crate::core::models::{ApiResponse, ChatReply, ChatRequest};
use super::http::{get_json, post_json, StatusPolicy};

// Status bodies are read whatever the HTTP status; only transport or decode failures count
const STATUS_FETCH_POLICY: StatusPolicy = StatusPolicy::AcceptAny;

// Specific endpoint helpers

pub async fn fetch_root_message(config: &ApiConfig) -> Result<String, ClientError> {
    let resp: ApiResponse = get_json(&config.root_url(), STATUS_FETCH_POLICY).await?;
    Ok(resp.message_text())
}

pub async fn fetch_health_status(config: &ApiConfig) -> Result<String, ClientError> {
    let resp: ApiResponse = get_json(&config.health_url(), STATUS_FETCH_POLICY).await?;
    Ok(resp.status_text())
}

pub async fn send_chat(config: &ApiConfig, request: &ChatRequest) -> Result<ChatReply, ClientError> {
    web_sys::console::log_1(&format!("Sending chat turn to {}", config.chat_url()).into());
    post_json(&config.chat_url(), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_503_body_is_shown_not_rejected() {
        assert_eq!(STATUS_FETCH_POLICY.check(503), Ok(()));
        let resp: ApiResponse = serde_json::from_str(r#"{"status":"unhealthy"}"#).unwrap();
        assert_eq!(resp.status_text(), "unhealthy");
    }

    #[test]
    fn missing_status_fields_read_as_empty() {
        let resp: ApiResponse = serde_json::from_str(r#"{"detail":"Not Found"}"#).unwrap();
        assert_eq!(resp.message_text(), "");
        assert_eq!(resp.status_text(), "");
    }
}
