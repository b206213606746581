use crate::git;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

/// Where the patch text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchSource {
    Stdin,
    Git,
}

impl PatchSource {
    /// Stdin wins when it is piped or when git access is disabled.
    pub fn select(no_git: bool, stdin_is_terminal: bool) -> Self {
        if no_git || !stdin_is_terminal {
            PatchSource::Stdin
        } else {
            PatchSource::Git
        }
    }

    pub fn detect(no_git: bool) -> Self {
        Self::select(no_git, io::stdin().is_terminal())
    }
}

/// Read the patch from the chosen source.
pub fn read_patch(source: PatchSource) -> Result<String> {
    match source {
        PatchSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read patch from stdin")?;
            Ok(buf)
        }
        PatchSource::Git => git::staged_diff(),
    }
}
