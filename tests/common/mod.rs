//! Shared helpers for tests against a mocked Azure OpenAI endpoint.

#![allow(dead_code)]

use committy::Credentials;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_DEPLOYMENT: &str = "gpt-4";
pub const TEST_PATCH: &str = "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn added() {}\n";

pub fn chat_path() -> String {
    format!("/openai/deployments/{TEST_DEPLOYMENT}/chat/completions")
}

pub fn credentials(server: &MockServer) -> Credentials {
    Credentials::new(TEST_API_KEY, server.uri(), TEST_DEPLOYMENT)
}

/// A chat-completions success body whose first choice carries `content`.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "finish_reason": "stop",
                "message": { "role": "assistant", "content": content }
            }
        ],
        "usage": { "prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150 }
    })
}
