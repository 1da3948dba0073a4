//! Read-only views over Yunhu webhook payloads.
//!
//! Yunhu payload shapes differ per event category and are loosely documented, so
//! every field is read with an explicit default instead of a strict serde schema:
//! strings default to `""` (numbers are stringified), objects to an empty object.

use serde_json::Value;

use crate::{Error, Result};

static NULL: Value = Value::Null;

/// Field `key` of `obj`, or `null` when absent (or when `obj` is not an object)
pub(crate) fn field<'a>(obj: &'a Value, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&NULL)
}

/// String field; numbers and booleans are stringified, anything else is `""`
pub(crate) fn str_field(obj: &Value, key: &str) -> String {
    value_to_string(field(obj, key))
}

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Integer field; floats are truncated and numeric strings are parsed
pub(crate) fn i64_field(obj: &Value, key: &str, default: i64) -> i64 {
    let value = field(obj, key);
    match value {
        Value::String(s) => parse_integer(s.trim()),
        _ => value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)),
    }
    .unwrap_or(default)
}

fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}

/// Falsy values follow the webhook's loose typing: null, false, 0, "", [] and {}
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Event envelope header
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Header {
    pub event_id: Option<String>,
    pub event_type: String,
    /// Milliseconds since the Unix epoch
    pub event_time: Option<i64>,
}

/// Validated top-level payload
#[derive(Debug, Clone)]
pub(crate) struct RawEvent<'a> {
    pub header: Header,
    /// Category-specific body (`null` when absent)
    pub event: &'a Value,
}

impl<'a> RawEvent<'a> {
    pub fn parse(raw: &'a Value) -> Result<Self> {
        if !raw.is_object() {
            return Err(Error::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_kind(raw)
            )));
        }

        let header = field(raw, "header");
        let event_type = match field(header, "eventType") {
            Value::String(s) if !s.is_empty() => s.clone(),
            _ => return Err(Error::MissingEventType),
        };

        let event_id = match field(header, "eventId") {
            Value::Null => None,
            other => Some(value_to_string(other)),
        };

        let time = field(header, "eventTime");
        let event_time = time.as_i64().or_else(|| time.as_f64().map(|f| f as i64));

        Ok(Self {
            header: Header {
                event_id,
                event_type,
                event_time,
            },
            event: field(raw, "event"),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// --- Message events ---

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Sender {
    pub id: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChatType {
    /// Direct conversation with the bot
    Bot,
    Group,
    Other(String),
}

impl ChatType {
    fn parse(raw: &str) -> Self {
        match raw {
            "bot" => ChatType::Bot,
            "group" => ChatType::Group,
            other => ChatType::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chat {
    pub id: String,
    pub chat_type: ChatType,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == ChatType::Bot
    }
}

/// Message body discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentType {
    Text,
    Image,
    Video,
    File,
    Form,
    Other(String),
}

impl ContentType {
    fn parse(raw: &str) -> Self {
        match raw {
            "text" => ContentType::Text,
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            "file" => ContentType::File,
            "form" => ContentType::Form,
            other => ContentType::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MessageInfo<'a> {
    pub msg_id: String,
    pub content_type: ContentType,
    /// `null` when absent; lookups on it yield defaults
    pub content: &'a Value,
    pub command_id: String,
    pub command_name: String,
    pub instruction_id: String,
    pub instruction_name: String,
}

/// `message.receive.normal` / `message.receive.instruction`
#[derive(Debug, Clone)]
pub(crate) struct MessageEvent<'a> {
    pub sender: Sender,
    pub chat: Chat,
    pub message: MessageInfo<'a>,
}

impl<'a> MessageEvent<'a> {
    pub fn from_value(event: &'a Value) -> Self {
        let sender = field(event, "sender");
        let chat = field(event, "chat");
        let message = field(event, "message");

        let content_type = match field(message, "contentType") {
            Value::Null => ContentType::Text,
            other => ContentType::parse(&value_to_string(other)),
        };

        let command_id = match field(message, "commandId") {
            Value::Null => "0".to_string(),
            other => value_to_string(other),
        };

        Self {
            sender: Sender {
                id: str_field(sender, "senderId"),
                nickname: str_field(sender, "senderNickname"),
            },
            chat: Chat {
                id: str_field(chat, "chatId"),
                chat_type: ChatType::parse(&str_field(chat, "chatType")),
            },
            message: MessageInfo {
                msg_id: str_field(message, "msgId"),
                content_type,
                content: field(message, "content"),
                command_id,
                command_name: str_field(message, "commandName"),
                instruction_id: str_field(message, "instructionId"),
                instruction_name: str_field(message, "instructionName"),
            },
        }
    }
}

// --- Notice events ---

/// `bot.followed`, `bot.unfollowed`, `group.join`, `group.leave`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RelationEvent {
    pub user_id: String,
    pub nickname: String,
    pub chat_id: String,
}

impl RelationEvent {
    pub fn from_value(event: &Value) -> Self {
        Self {
            user_id: str_field(event, "userId"),
            nickname: str_field(event, "nickname"),
            chat_id: str_field(event, "chatId"),
        }
    }
}

/// `button.report.inline`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ButtonReportEvent {
    pub user_id: String,
    pub nickname: String,
    pub msg_id: String,
    pub button_id: String,
    pub value: String,
}

impl ButtonReportEvent {
    pub fn from_value(event: &Value) -> Self {
        Self {
            user_id: str_field(event, "userId"),
            nickname: str_field(event, "nickname"),
            msg_id: str_field(event, "msgId"),
            button_id: str_field(event, "buttonId"),
            value: str_field(event, "value"),
        }
    }
}

/// `bot.shortcut.menu`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShortcutMenuEvent {
    pub sender_id: String,
    pub nickname: String,
    pub chat_id: String,
    pub chat_type: ChatType,
    pub menu_id: String,
    pub menu_type: i64,
    pub menu_action: i64,
}

impl ShortcutMenuEvent {
    pub fn from_value(event: &Value) -> Self {
        Self {
            sender_id: str_field(event, "senderId"),
            nickname: str_field(event, "nickname"),
            chat_id: str_field(event, "chatId"),
            chat_type: ChatType::parse(&str_field(event, "chatType")),
            menu_id: str_field(event, "menuId"),
            menu_type: i64_field(event, "menuType", 1),
            menu_action: i64_field(event, "menuAction", 1),
        }
    }
}

/// `bot.setting`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BotSettingEvent {
    pub group_id: String,
    pub nickname: String,
    pub chat_id: String,
    /// Verbatim settings document, `{}` when absent
    pub setting: Value,
}

impl BotSettingEvent {
    pub fn from_value(event: &Value) -> Self {
        let setting = match field(event, "settingJson") {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };

        Self {
            group_id: str_field(event, "groupId"),
            nickname: str_field(event, "nickname"),
            chat_id: str_field(event, "chatId"),
            setting,
        }
    }
}
