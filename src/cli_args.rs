use clap::{ArgAction, Parser};

pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT_HOST";
pub const DEPLOYMENT_ENV: &str = "AZURE_OPENAI_DEPLOYMENT";

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "committy",
    version,
    about = "Generate AI-powered commit messages from git patches"
)]
pub struct Cli {
    /// Azure OpenAI API key
    #[arg(short = 'k', long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Azure OpenAI endpoint host URL; omit everything after the domain
    #[arg(short = 'e', long, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// Azure OpenAI deployment name (defaults to gpt-4.1-mini)
    #[arg(short = 'd', long, env = DEPLOYMENT_ENV)]
    pub deployment: Option<String>,

    /// Read the patch from stdin only; never run `git diff --cached`
    #[arg(long)]
    pub no_git: bool,

    /// Copy the first suggestion to the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Write the chosen message into .git/COMMIT_EDITMSG (no commit is created)
    #[arg(long, conflicts_with = "commit")]
    pub apply: bool,

    /// Pick a suggestion interactively, confirm it, and run `git commit`
    #[arg(long)]
    pub commit: bool,

    /// Disable model calls; return dummy suggestions instead
    #[arg(long)]
    pub no_model: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
