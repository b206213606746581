use anyhow::{Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};

fn execute_copy_command(command: &mut Command, text: &str) -> Result<()> {
    let mut process = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| anyhow!("`{:?}`: {}", command, e))?;

    process
        .stdin
        .take()
        .ok_or_else(|| anyhow!("`{:?}`: no stdin", command))?
        .write_all(text.as_bytes())
        .map_err(|e| anyhow!("`{:?}`: {}", command, e))?;

    let status = process
        .wait()
        .map_err(|e| anyhow!("`{:?}`: {}", command, e))?;

    if !status.success() {
        return Err(anyhow!("`{:?}` exited with {}", command, status));
    }

    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
pub const COPY_COMMANDS: &str = "xclip/xsel";
#[cfg(target_os = "macos")]
pub const COPY_COMMANDS: &str = "pbcopy";
#[cfg(windows)]
pub const COPY_COMMANDS: &str = "clip";

#[cfg(all(unix, not(target_os = "macos")))]
pub fn copy_string(text: &str) -> Result<()> {
    execute_copy_command(
        Command::new("xclip").arg("-selection").arg("clipboard"),
        text,
    )
    .or_else(|_| {
        execute_copy_command(Command::new("xsel").arg("--clipboard").arg("--input"), text)
    })
}

#[cfg(target_os = "macos")]
pub fn copy_string(text: &str) -> Result<()> {
    execute_copy_command(&mut Command::new("pbcopy"), text)
}

#[cfg(windows)]
pub fn copy_string(text: &str) -> Result<()> {
    execute_copy_command(&mut Command::new("clip"), text)
}

/// Copies to the clipboard without ever failing the run.
///
/// The first failure prints a warning; later ones are only logged.
#[derive(Debug, Default)]
pub struct Clipboard {
    warned: bool,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the text was copied.
    pub fn copy(&mut self, text: &str) -> bool {
        self.copy_with(text, copy_string)
    }

    fn copy_with<F>(&mut self, text: &str, copy: F) -> bool
    where
        F: FnOnce(&str) -> Result<()>,
    {
        match copy(text) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("clipboard copy failed: {e}");
                if !self.warned {
                    eprintln!("{}", unavailable_warning());
                    self.warned = true;
                }
                false
            }
        }
    }

    pub fn has_warned(&self) -> bool {
        self.warned
    }
}

fn unavailable_warning() -> String {
    format!("Warning: Clipboard functionality not available ({COPY_COMMANDS} could not be run)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_warns_once() {
        let mut clipboard = Clipboard::new();
        assert!(!clipboard.copy_with("a", |_| Err(anyhow!("missing"))));
        assert!(clipboard.has_warned());
        assert!(!clipboard.copy_with("b", |_| Err(anyhow!("missing"))));
        assert!(clipboard.has_warned());
    }

    #[test]
    fn warning_names_this_platform_command() {
        let msg = unavailable_warning();
        assert!(msg.contains(COPY_COMMANDS));
        #[cfg(target_os = "macos")]
        assert!(!msg.contains("xclip"));
        #[cfg(windows)]
        assert!(!msg.contains("xsel"));
    }

    #[test]
    fn success_does_not_warn() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.copy_with("a", |_| Ok(())));
        assert!(!clipboard.has_warned());
    }
}
