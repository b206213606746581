use crate::config::Config;
use crate::error::CompletionError;
use crate::llm::CompletionClient;
use crate::llm::azure::AzureOpenAiClient;
use crate::llm::noop::NoopClient;
use crate::service::SuggestionService;
use log::debug;

/// Build the completion client based on CLI + config.
pub fn build_llm_client(cfg: &Config) -> Result<Box<dyn CompletionClient>, CompletionError> {
    if cfg.no_model {
        debug!("Using NoopClient (no model calls)");
        return Ok(Box::new(NoopClient));
    }

    debug!(
        "Using AzureOpenAiClient with deployment: {}",
        cfg.credentials.deployment
    );

    Ok(Box::new(AzureOpenAiClient::new()?))
}

pub fn build_service(cfg: &Config) -> Result<SuggestionService, CompletionError> {
    Ok(SuggestionService::new(build_llm_client(cfg)?))
}
