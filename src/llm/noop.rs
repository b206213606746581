use super::{CompletionClient, Credentials};
use crate::error::CompletionError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// No-op / dummy model client for development with --no-model.
///
/// Answers with three canned lines so the placeholder padding is visible.
pub struct NoopClient;

#[async_trait]
impl CompletionClient for NoopClient {
    async fn generate_suggestions(
        &self,
        patch: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<String, CompletionError> {
        if cancel.is_cancelled() {
            return Err(CompletionError::Cancelled);
        }

        log::debug!(
            "NoopClient: skipping call to deployment {:?}",
            credentials.deployment
        );

        let lines = patch.lines().count();
        Ok(format!(
            "chore: dummy commit message (LLM disabled)\n\
             chore: staged patch has {lines} line(s)\n\
             test: exercise committy without a model\n"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_canned_lines() {
        let creds = Credentials::new("none", "none", "none");
        let raw = NoopClient
            .generate_suggestions("a\nb\n", &creds, &CancellationToken::new())
            .await
            .unwrap();
        assert!(raw.contains("staged patch has 2 line(s)"));
    }

    #[tokio::test]
    async fn honors_cancelled_token() {
        let creds = Credentials::new("none", "none", "none");
        let token = CancellationToken::new();
        token.cancel();
        let err = NoopClient
            .generate_suggestions("a", &creds, &token)
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Cancelled));
    }
}
