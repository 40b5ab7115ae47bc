use crate::core::error::{ClientError, CHAT_FALLBACK_MESSAGE};
use crate::core::models::{ChatContext, ChatMessage, ChatReply, ChatRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
}

/// One chat thread: transcript, input box and in-flight flag.
///
/// The transcript is append-only. `submit` appends the user turn before any
/// request exists, and `complete` appends exactly one assistant turn.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    state: SessionState,
    last_send_failed: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            state: SessionState::Idle,
            last_send_failed: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SessionState::Sending
    }

    pub fn last_send_failed(&self) -> bool {
        self.last_send_failed
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Starts a send from the current input.
    ///
    /// Returns the request to issue, or `None` when nothing should go over the
    /// wire (blank input, or a send already in flight). On `Some`, the user turn
    /// is already in the transcript and the input is cleared.
    pub fn submit(&mut self, context: &ChatContext) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let text = self.input.trim().to_string();
        self.input.clear();
        self.messages.push(ChatMessage::user(text.clone()));
        self.state = SessionState::Sending;
        self.last_send_failed = false;

        Some(ChatRequest::new(text, context))
    }

    /// Finishes the in-flight send. Errors become the fixed fallback turn.
    pub fn complete(&mut self, outcome: Result<ChatReply, ClientError>) -> &ChatMessage {
        let reply = match outcome {
            Ok(reply) => {
                self.last_send_failed = false;
                ChatMessage::assistant(reply.message)
            }
            Err(_) => {
                self.last_send_failed = true;
                ChatMessage::assistant(CHAT_FALLBACK_MESSAGE)
            }
        };
        self.state = SessionState::Idle;
        self.messages.push(reply);
        &self.messages[self.messages.len() - 1]
    }
}

/// Enter alone submits; any modifier leaves the key to the textarea.
pub fn is_submit_key(key: &str, shift: bool, ctrl: bool, alt: bool, meta: bool) -> bool {
    key == "Enter" && !(shift || ctrl || alt || meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Role;

    fn session_with_input(text: &str) -> ChatSession {
        let mut session = ChatSession::new();
        session.set_input(text.to_string());
        session
    }

    #[test]
    fn submit_appends_user_turn_and_clears_input_before_reply() {
        let mut session = session_with_input("  find the top post  ");
        let request = session.submit(&ChatContext::default()).unwrap();

        assert_eq!(request.message, "find the top post");
        assert_eq!(session.input(), "");
        assert!(session.is_sending());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[0].content, "find the top post");
    }

    #[test]
    fn whitespace_input_is_a_no_op() {
        let mut session = session_with_input(" \n\t ");
        assert!(session.submit(&ChatContext::default()).is_none());
        assert!(session.messages().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut session = session_with_input("first");
        assert!(session.submit(&ChatContext::default()).is_some());

        session.set_input("second".to_string());
        assert!(session.submit(&ChatContext::default()).is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.input(), "second");

        session.complete(Ok(ChatReply { message: "ok".to_string() }));
        assert!(session.submit(&ChatContext::default()).is_some());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn successful_reply_appends_assistant_turn() {
        let mut session = session_with_input("hello");
        session.submit(&ChatContext::default());
        let reply = session.complete(Ok(ChatReply { message: "hi there".to_string() })).clone();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "hi there");
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.last_send_failed());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn failure_appends_one_fixed_fallback_without_raw_error() {
        let mut session = session_with_input("hello");
        session.submit(&ChatContext::default());
        session.complete(Err(ClientError::Request("TypeError: NetworkError secret-detail".to_string())));

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].content, CHAT_FALLBACK_MESSAGE);
        assert!(session.messages().iter().all(|m| !m.content.contains("secret-detail")));
        assert!(session.last_send_failed());
        assert!(!session.is_sending());
    }

    #[test]
    fn transcript_keeps_insertion_order_and_unique_ids() {
        let mut session = ChatSession::new();
        for turn in ["one", "two"] {
            session.set_input(turn.to_string());
            session.submit(&ChatContext::default());
            session.complete(Err(ClientError::Status(502)));
        }
        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", CHAT_FALLBACK_MESSAGE, "two", CHAT_FALLBACK_MESSAGE]);

        let mut ids: Vec<&str> = session.messages().iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn request_forwards_context() {
        let context = ChatContext {
            file: Some("README.md".to_string()),
            ..Default::default()
        };
        let request = session_with_input("summarize").submit(&context).unwrap();
        assert_eq!(request.file.as_deref(), Some("README.md"));
        assert_eq!(request.repo, None);
    }

    #[test]
    fn only_bare_enter_submits() {
        assert!(is_submit_key("Enter", false, false, false, false));
        assert!(!is_submit_key("Enter", true, false, false, false));
        assert!(!is_submit_key("Enter", false, true, false, false));
        assert!(!is_submit_key("Enter", false, false, true, false));
        assert!(!is_submit_key("Enter", false, false, false, true));
        assert!(!is_submit_key("a", false, false, false, false));
    }
}
