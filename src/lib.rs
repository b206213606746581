//! committy - suggests conventional commit messages for a staged diff.
//!
//! The patch is sent to an Azure OpenAI chat-completion deployment and the
//! answer is normalized into exactly five suggestions.
//!
//! ```no_run
//! use committy::llm::Credentials;
//! use committy::llm::azure::AzureOpenAiClient;
//! use committy::service::SuggestionService;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = SuggestionService::new(Box::new(AzureOpenAiClient::new()?));
//! let creds = Credentials::new("key", "https://my-resource.openai.azure.com", "gpt-4.1-mini");
//! let suggestions = service
//!     .generate_commit_message_suggestions("diff --git ...", &creds, &CancellationToken::new())
//!     .await?;
//! println!("{}", suggestions.first());
//! # Ok(())
//! # }
//! ```

pub mod cli_args;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod git;
pub mod interrupt;
pub mod llm;
pub mod logging;
pub mod patch;
pub mod service;
pub mod setup;
pub mod suggestions;
pub mod ui;

pub use cli_args::Cli;
pub use error::{CompletionError, SuggestionError};
pub use llm::{CompletionClient, Credentials};
pub use service::SuggestionService;
pub use suggestions::{SUGGESTION_COUNT, SuggestionList};
