use thiserror::Error;

/// The only message a user ever sees when a generation request fails.
pub const FAILURE_NOTE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Backend responded with status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to encode request body: {0}")]
    Encode(String),
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Every failure collapses to the same user-facing note. The variant
    /// detail is only for logs.
    pub fn user_message(&self) -> &'static str {
        FAILURE_NOTE
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => GenerationError::Status(status.as_u16()),
            None if err.is_decode() => GenerationError::Decode(err.to_string()),
            None => GenerationError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_shows_the_same_note() {
        let errors = [
            GenerationError::Status(502),
            GenerationError::Transport("connection refused".to_string()),
            GenerationError::Decode("expected value at line 1 column 1".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), "Something went wrong. Please try again.");
        }
    }

    #[test]
    fn display_keeps_the_detail() {
        let err = GenerationError::Status(500);
        assert_eq!(err.to_string(), "Backend responded with status 500");
    }
}
