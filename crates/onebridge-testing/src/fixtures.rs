//! Fixtures for sample webhook payloads.
//!
//! Provides utilities to:
//! - Load the recorded Yunhu samples shipped with the provider tests
//! - Build minimal payloads for a given event type in code

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;

/// Event id used by every payload built in code
pub const SAMPLE_EVENT_ID: &str = "c192ccc83d5147f2859ca77bcfafc9f9";

/// Event time (ms) used by every payload built in code
pub const SAMPLE_EVENT_TIME_MS: i64 = 1_748_613_099_002;

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Create a new sample file manager.
    ///
    /// Assumes samples are in `crates/onebridge-providers/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .map(|crates| crates.join("onebridge-providers/tests/samples"))
            .unwrap_or_else(|| manifest_dir.join("samples"));

        Self { samples_dir }
    }

    /// Use a custom samples directory.
    pub fn with_dir(samples_dir: impl Into<PathBuf>) -> Self {
        Self {
            samples_dir: samples_dir.into(),
        }
    }

    /// Absolute path of a sample file.
    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Load and parse a sample payload.
    pub fn load(&self, sample_name: &str) -> Result<Value> {
        let path = self.path(sample_name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Sample {} is not valid JSON", path.display()))
    }

    /// Names of all `.json` samples, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.samples_dir)
            .with_context(|| format!("Failed to list {}", self.samples_dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Wrap an event body in a webhook envelope with the sample id and time.
pub fn raw_event(event_type: &str, event: Value) -> Value {
    json!({
        "version": "1.0",
        "header": {
            "eventId": SAMPLE_EVENT_ID,
            "eventType": event_type,
            "eventTime": SAMPLE_EVENT_TIME_MS
        },
        "event": event
    })
}

/// `message.receive.normal` carrying `content`
pub fn message_event(chat_type: &str, chat_id: &str, content_type: &str, content: Value) -> Value {
    raw_event(
        "message.receive.normal",
        json!({
            "sender": {
                "senderId": "6300451",
                "senderType": "user",
                "senderUserLevel": "owner",
                "senderNickname": "ShanFish"
            },
            "chat": {"chatId": chat_id, "chatType": chat_type},
            "message": {
                "msgId": "5c887bc0a82244c7969c08000f5b3ae8",
                "parentId": "",
                "sendTime": SAMPLE_EVENT_TIME_MS - 13,
                "chatId": chat_id,
                "chatType": chat_type,
                "contentType": content_type,
                "content": content
            }
        }),
    )
}

/// Plain text message
pub fn text_message(chat_type: &str, chat_id: &str, text: &str) -> Value {
    message_event(chat_type, chat_id, "text", json!({ "text": text }))
}

/// `message.receive.instruction` for a slash command typed as text
pub fn instruction_message(command_name: &str, command_id: i64, text: &str) -> Value {
    raw_event(
        "message.receive.instruction",
        json!({
            "sender": {"senderId": "6300451", "senderNickname": "ShanFish"},
            "chat": {"chatId": "49871624", "chatType": "bot"},
            "message": {
                "msgId": "9a1f",
                "contentType": "text",
                "commandId": command_id,
                "commandName": command_name,
                "content": {"text": text}
            }
        }),
    )
}

/// `message.receive.instruction` submitting a form
pub fn form_instruction(command_name: &str, form: Value) -> Value {
    raw_event(
        "message.receive.instruction",
        json!({
            "sender": {"senderId": "6300451", "senderNickname": "ShanFish"},
            "chat": {"chatId": "49871624", "chatType": "bot"},
            "message": {
                "msgId": "b07e",
                "contentType": "form",
                "commandId": 1520,
                "commandName": command_name,
                "instructionId": 1520,
                "instructionName": command_name,
                "content": {"formJson": form}
            }
        }),
    )
}

/// `group.join` / `group.leave` and `bot.followed` / `bot.unfollowed`
pub fn relation_event(event_type: &str, chat_id: &str, user_id: &str) -> Value {
    raw_event(
        event_type,
        json!({
            "time": SAMPLE_EVENT_TIME_MS,
            "chatId": chat_id,
            "chatType": "group",
            "userId": user_id,
            "nickname": "ShanFish",
            "avatarUrl": "https://chat-img.jwznb.com/avatar.png"
        }),
    )
}
