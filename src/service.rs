//! Entry point used by hosts: validate input, call the model, shape the answer.

use crate::error::SuggestionError;
use crate::llm::{CompletionClient, Credentials};
use crate::suggestions::SuggestionList;
use tokio_util::sync::CancellationToken;

/// Generates commit message suggestions through a [`CompletionClient`].
pub struct SuggestionService {
    client: Box<dyn CompletionClient>,
}

impl SuggestionService {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        SuggestionService { client }
    }

    /// Produce exactly five suggestions for `patch`, or fail.
    ///
    /// Arguments are checked in order (patch, api key, endpoint, deployment)
    /// before any network activity. Cancellation comes back as
    /// [`SuggestionError::OperationCancelled`]; every other client failure is
    /// wrapped once in [`SuggestionError::SuggestionGenerationFailed`].
    pub async fn generate_commit_message_suggestions(
        &self,
        patch: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<SuggestionList, SuggestionError> {
        validate(patch, credentials)?;

        let raw = self
            .client
            .generate_suggestions(patch, credentials, cancel)
            .await?;

        let suggestions = SuggestionList::from_raw(&raw);
        log::debug!("Normalized suggestions:\n{suggestions}");

        Ok(suggestions)
    }
}

fn validate(patch: &str, credentials: &Credentials) -> Result<(), SuggestionError> {
    let checks = [
        ("patch", patch),
        ("api key", credentials.api_key.as_str()),
        ("endpoint", credentials.endpoint.as_str()),
        ("deployment name", credentials.deployment.as_str()),
    ];

    match checks.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((parameter, _)) => Err(SuggestionError::InvalidArgument {
            parameter: *parameter,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(key: &str, endpoint: &str, deployment: &str) -> Credentials {
        Credentials::new(key, endpoint, deployment)
    }

    #[test]
    fn blank_patch_wins_over_other_problems() {
        let err = validate("  \n", &creds("", "", "")).unwrap_err();
        assert_eq!(err.parameter(), Some("patch"));
    }

    #[test]
    fn checks_run_in_declared_order() {
        let err = validate("diff", &creds("", "", "")).unwrap_err();
        assert_eq!(err.parameter(), Some("api key"));

        let err = validate("diff", &creds("k", " ", "")).unwrap_err();
        assert_eq!(err.parameter(), Some("endpoint"));

        let err = validate("diff", &creds("k", "https://x", "\t")).unwrap_err();
        assert_eq!(err.parameter(), Some("deployment name"));
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate("diff", &creds("k", "https://x", "gpt-4")).is_ok());
    }

    #[test]
    fn invalid_argument_message_names_parameter() {
        let err = validate("", &creds("k", "e", "d")).unwrap_err();
        assert_eq!(err.to_string(), "patch cannot be empty");
    }
}
