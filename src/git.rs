use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the path to the Git directory (e.g. .git)
pub fn git_dir() -> Result<PathBuf> {
    let dir = git_output(&["rev-parse", "--git-dir"])?.trim().to_string();
    Ok(PathBuf::from(dir))
}

/// Write the commit message into .git/COMMIT_EDITMSG so the next `git commit`
/// will use it as the default message in the editor.
pub fn write_commit_editmsg(message: &str) -> Result<()> {
    let dir = git_dir()?;
    let path = dir.join("COMMIT_EDITMSG");
    fs::write(&path, message)
        .with_context(|| format!("failed to write commit message to {:?}", path))?;
    Ok(())
}

/// Get the full staged diff. Fails when nothing is staged.
pub fn staged_diff() -> Result<String> {
    let diff = git_output(&["diff", "--cached"])?;
    if diff.trim().is_empty() {
        return Err(anyhow!(
            "No staged changes found. Use 'git add' to stage files for commit."
        ));
    }
    Ok(diff)
}

/// Commit the staged changes with the given message.
pub fn commit(message: &str) -> Result<()> {
    log::info!("Committing with message {message:?}");
    git_output(&["commit", "-m", message])?;
    Ok(())
}
