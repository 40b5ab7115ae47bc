use crate::core::error::{ClientError, STATUS_FETCH_ERROR};

/// What the status panel shows. `error` is empty unless a fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusState {
    pub loading: bool,
    pub message: String,
    pub health: String,
    pub error: String,
}

impl StatusState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            message: String::new(),
            health: String::new(),
            error: String::new(),
        }
    }

    /// Collapses both fetches into one state. Any failure becomes the generic banner.
    pub fn from_outcome(outcome: Result<(String, String), ClientError>) -> Self {
        match outcome {
            Ok((message, health)) => Self {
                loading: false,
                message,
                health,
                error: String::new(),
            },
            Err(_) => Self {
                loading: false,
                message: String::new(),
                health: String::new(),
                error: STATUS_FETCH_ERROR.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_with_empty_text() {
        let state = StatusState::loading();
        assert!(state.loading);
        assert!(!state.is_ready());
        assert!(state.message.is_empty() && state.health.is_empty() && state.error.is_empty());
    }

    #[test]
    fn empty_fields_are_shown_as_empty_strings() {
        let state = StatusState::from_outcome(Ok((String::new(), String::new())));
        assert!(state.is_ready());
        assert_eq!(state.message, "");
        assert_eq!(state.health, "");
    }

    #[test]
    fn success_keeps_both_texts() {
        let state = StatusState::from_outcome(Ok(("hello".to_string(), "healthy".to_string())));
        assert_eq!(state.message, "hello");
        assert_eq!(state.health, "healthy");
    }

    #[test]
    fn any_failure_becomes_the_generic_banner() {
        for err in [
            ClientError::Status(500),
            ClientError::Decode("expected string".to_string()),
            ClientError::Request("TypeError: Failed to fetch".to_string()),
        ] {
            let state = StatusState::from_outcome(Err(err));
            assert!(!state.loading);
            assert_eq!(state.error, STATUS_FETCH_ERROR);
            assert!(!state.is_ready());
        }
    }
}
