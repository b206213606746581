use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use committy::clipboard::Clipboard;
use committy::config::Config;
use committy::interrupt::{self, EXIT_INTERRUPTED};
use committy::patch::{self, PatchSource};
use committy::{Cli, git, logging, setup, ui};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let progress = logging::init_logger(cli.verbose);

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Interrupt received, cancelling");
                cancel.cancel();
            }
        }
    });

    match run(&cli, &cancel, &progress).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if interrupt::is_cancellation(&err) => {
            // A prompt or stdin reader may still be parked on the blocking pool.
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, cancel: &CancellationToken, progress: &MultiProgress) -> Result<()> {
    let cfg = Config::from_sources(cli)?;

    let source = PatchSource::detect(cli.no_git);
    if cli.commit && source == PatchSource::Stdin {
        bail!("--commit needs an interactive terminal; stage your changes instead of piping a patch");
    }

    let patch = interrupt::run_blocking(cancel, move || patch::read_patch(source)).await?;
    if patch.trim().is_empty() {
        bail!("No patch data available.");
    }
    log::info!("Read {} bytes of patch from {:?}", patch.len(), source);

    let service = setup::build_service(&cfg)?;

    let spinner = spinner(progress);
    let result = service
        .generate_commit_message_suggestions(&patch, &cfg.credentials, cancel)
        .await;
    spinner.finish_and_clear();
    let suggestions = result?;

    let mut clipboard = Clipboard::new();

    if cli.commit {
        let menu = suggestions.clone();
        let message = interrupt::run_blocking(cancel, move || ui::select_commit_message(&menu)).await?;
        if cli.clipboard {
            clipboard.copy(&message);
        }

        let shown = message.clone();
        if interrupt::run_blocking(cancel, move || ui::confirm_commit(&shown)).await? {
            git::commit(&message)?;
            println!("{}", "Committed.".green());
        } else {
            println!("Commit aborted.");
        }
        return Ok(());
    }

    ui::print_suggestions(&suggestions);

    if cli.apply {
        git::write_commit_editmsg(suggestions.first())?;
        log::info!("Wrote first suggestion to COMMIT_EDITMSG");
    }

    if cli.clipboard {
        clipboard.copy(suggestions.first());
    }

    Ok(())
}

fn spinner(progress: &MultiProgress) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = progress.add(ProgressBar::new_spinner());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Asking the model for commit messages...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
