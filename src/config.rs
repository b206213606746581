use crate::cli_args::{API_KEY_ENV, Cli, DEPLOYMENT_ENV, ENDPOINT_ENV};
use crate::llm::Credentials;
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DEPLOYMENT: &str = "gpt-4.1-mini";

/// Final resolved configuration for committy.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub no_model: bool,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--api-key`, `--endpoint`, `--deployment`)
    ///   2. Env vars `AZURE_OPENAI_API_KEY`, `AZURE_OPENAI_ENDPOINT_HOST`, `AZURE_OPENAI_DEPLOYMENT`
    ///   3. TOML `~/.config/committy.toml`
    ///   4. Hardcoded default deployment ("gpt-4.1-mini")
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = load_file_config().unwrap_or_default();
        Self::resolve(cli, file_cfg)
    }

    fn resolve(cli: &Cli, file_cfg: FileConfig) -> Result<Self> {
        let api_key = non_blank(cli.api_key.clone()).or(non_blank(file_cfg.api_key));
        let endpoint = non_blank(cli.endpoint.clone()).or(non_blank(file_cfg.endpoint));
        let deployment = non_blank(cli.deployment.clone())
            .or(non_blank(file_cfg.deployment))
            .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string());

        if cli.no_model {
            let credentials = Credentials::new(
                api_key.unwrap_or_else(|| "none".to_string()),
                endpoint.unwrap_or_else(|| "none".to_string()),
                deployment,
            );
            return Ok(Config {
                credentials,
                no_model: true,
            });
        }

        let api_key = api_key.ok_or_else(|| {
            anyhow!(
                "Azure OpenAI API key is required. Set {API_KEY_ENV} environment variable or use --api-key option."
            )
        })?;
        let endpoint = endpoint.ok_or_else(|| {
            anyhow!(
                "Azure OpenAI endpoint is required. Set {ENDPOINT_ENV} environment variable or use --endpoint option."
            )
        })?;

        log::debug!("Resolved deployment {deployment:?} at {endpoint} (override with {DEPLOYMENT_ENV})");

        Ok(Config {
            credentials: Credentials::new(api_key, endpoint, deployment),
            no_model: false,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    /// Default deployment to use when not provided via CLI or env.
    pub deployment: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Return `~/.config/committy.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("committy.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    match toml::from_str::<FileConfig>(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {e}", path.display());
            None
        }
    }
}
