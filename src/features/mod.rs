pub mod agent_chat;
pub mod status;
