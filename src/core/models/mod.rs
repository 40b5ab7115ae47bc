pub mod api;
pub mod chat;

pub use api::{ApiResponse, ChatContext, ChatReply, ChatRequest, RepoOwner, RepoRef};
pub use chat::{ChatMessage, Role};
