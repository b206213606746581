pub mod azure;
pub mod noop;
mod prompt_builder;
mod prompts;

use crate::error::CompletionError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub use prompt_builder::{PromptPair, commit_suggestions_prompt};

/// Endpoint and credentials for one invocation.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Credentials {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: deployment.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .finish()
    }
}

/// Trait for talking to a chat-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the patch to the model and return its raw text answer.
    ///
    /// A missing answer is returned as an empty string; shaping it into
    /// suggestions is the caller's job.
    async fn generate_suggestions(
        &self,
        patch: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<String, CompletionError>;
}

/// Truncate long strings for debug logging.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...\n[truncated {} chars]", &s[..cut], s.len() - cut)
}
