use serde::{Deserialize, Serialize};

/// Body of `GET /` and `GET /health`. Either field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiResponse {
    pub fn message_text(&self) -> String {
        self.message.clone().unwrap_or_default()
    }

    pub fn status_text(&self) -> String {
        self.status.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoOwner {
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoRef {
    pub owner: RepoOwner,
    pub name: String,
}

impl RepoRef {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// Optional host-page context forwarded with every chat turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default)]
    pub repo: Option<RepoRef>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub user_github_token: Option<String>,
}

/// Body of `POST /agent/chat`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_github_token: Option<String>,
}

impl ChatRequest {
    pub fn new(message: String, context: &ChatContext) -> Self {
        Self {
            message,
            repo: context.repo.clone(),
            file: context.file.clone(),
            user_github_token: context.user_github_token.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub message: String,
}
