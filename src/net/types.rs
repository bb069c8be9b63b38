//! Wire schema for the chat endpoint.
//!
//! DESIGN
//! ======
//! One request shape for every deployment: tenant and visitor ride in the
//! query string (`clientID`, `requestID`) and the body always carries the
//! message plus prior turns. `history` is an empty array when tracking is
//! off, so stateless backends can ignore it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Speaker of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One exchanged message, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// JSON body of `POST <endpoint>?clientID=..&requestID=..`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// The message being sent now (trimmed, non-empty).
    pub message: String,
    /// Turns exchanged before `message`.
    pub history: Vec<ConversationTurn>,
}

/// Validated reply payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    /// Optional backend outcome tag (e.g. `"reply"`, `"booked"`).
    /// Anything other than a string reads as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    pub status: Option<String>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_str().map(str::to_owned))
}
