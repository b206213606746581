use super::{CompletionClient, Credentials, commit_suggestions_prompt, truncate};
use crate::error::CompletionError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const API_VERSION: &str = "2024-02-15-preview";
pub const MAX_TOKENS: u32 = 200;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal request/response structs for the Azure OpenAI Chat Completions API.
#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Azure OpenAI implementation of [`CompletionClient`].
///
/// One instance holds one connection pool and can serve any number of
/// concurrent calls.
pub struct AzureOpenAiClient {
    client: Client,
    api_version: String,
    max_tokens: u32,
}

impl AzureOpenAiClient {
    pub fn new() -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(AzureOpenAiClient {
            client,
            api_version: API_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
        })
    }

    /// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=..`
    /// with the deployment percent-encoded as a single path segment.
    fn chat_url(&self, credentials: &Credentials) -> Result<Url, CompletionError> {
        let invalid = |reason: String| CompletionError::InvalidEndpoint {
            endpoint: credentials.endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(credentials.endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["openai", "deployments"])
            .push(&credentials.deployment)
            .extend(["chat", "completions"]);
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);

        Ok(url)
    }

    fn headers(credentials: &Credentials) -> Result<HeaderMap, CompletionError> {
        let mut key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|e| CompletionError::InvalidHeader("api-key".to_string(), e))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("api-key", key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn call_chat(
        &self,
        req: &ChatRequest,
        credentials: &Credentials,
    ) -> Result<String, CompletionError> {
        let url = self.chat_url(credentials)?;
        let headers = Self::headers(credentials)?;

        log::info!("Calling Azure OpenAI deployment {:?}", credentials.deployment);

        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(req)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::UpstreamRequestFailed { status, body });
        }

        let text = resp.text().await?;
        log::debug!("Azure OpenAI raw response: {}", truncate(&text, 2000));

        let chat_resp: ChatResponse = serde_json::from_str(&text)?;

        if let Some(usage) = &chat_resp.usage {
            log::info!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        Ok(first_content(chat_resp))
    }
}

/// Text of the first choice; absent choices or content read as `""`.
fn first_content(resp: ChatResponse) -> String {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .unwrap_or_default()
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn generate_suggestions(
        &self,
        patch: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<String, CompletionError> {
        let prompts = commit_suggestions_prompt(patch);

        log::trace!("Commit suggestions prompt:\n{}", truncate(&prompts.user, 3000));

        let req = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: prompts.system,
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompts.user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: 0.1,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Completion request cancelled");
                Err(CompletionError::Cancelled)
            }
            res = self.call_chat(&req, credentials) => res,
        }
    }
}
