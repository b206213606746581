//! Turning raw model output into a fixed-size list of commit message candidates.

use std::fmt;

/// Number of suggestions every list carries.
pub const SUGGESTION_COUNT: usize = 5;

/// Exactly [`SUGGESTION_COUNT`] trimmed, non-empty commit message candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList([String; SUGGESTION_COUNT]);

impl SuggestionList {
    /// Normalize raw model text into a suggestion list.
    ///
    /// Lines are split on `\n` and `\r`, trimmed, and blank ones dropped. The
    /// first five survivors are kept in order; missing slots are filled with
    /// `feat: implement changes (N)` where N is the 1-based slot.
    pub fn from_raw(raw: &str) -> Self {
        let mut lines = raw
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty());

        SuggestionList(std::array::from_fn(|slot| match lines.next() {
            Some(line) => line.to_string(),
            None => placeholder(slot + 1),
        }))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The top suggestion; always present.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SuggestionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn placeholder(position: usize) -> String {
    format!("feat: implement changes ({position})")
}
