pub mod message;
pub mod telegram;

use async_trait::async_trait;

#[derive(Debug)]
pub struct NotifyError {
    pub message: String,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for NotifyError {
    fn from(s: String) -> Self {
        NotifyError { message: s }
    }
}

impl From<&str> for NotifyError {
    fn from(s: &str) -> Self {
        NotifyError {
            message: s.to_string(),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError {
            message: format!("Request failed: {err}"),
        }
    }
}

/// Delivers a plain-text notification somewhere. The relay handler only
/// observes success or failure of the single best-effort attempt.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
