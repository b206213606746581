use crate::llm::prompts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Build the system/user prompts asking for five commit message candidates.
pub fn commit_suggestions_prompt(patch: &str) -> PromptPair {
    let system = prompts::SYSTEM_INSTRUCTIONS.to_owned();

    // Single-pass replace so a `{patch}` inside the diff itself is left alone.
    let (head, tail) = prompts::COMMIT_SUGGESTIONS_TEMPLATE
        .split_once("{patch}")
        .unwrap_or((prompts::COMMIT_SUGGESTIONS_TEMPLATE, ""));

    let mut user = String::with_capacity(head.len() + patch.len() + tail.len());
    user.push_str(head);
    user.push_str(patch);
    user.push_str(tail);

    PromptPair { system, user }
}
