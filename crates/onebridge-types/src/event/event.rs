use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::body::EventBody;

// NOTE: Schema Design Goals
//
// 1. Standard first: every field OneBot-12 defines for a category is emitted with
//    its standard name, even when the source platform leaves it empty.
// 2. Lossless: the adapter keeps the untouched source payload in the extension map,
//    so downstream consumers can always recover data the schema dropped.
// 3. Namespaced extras: anything non-standard lives under a platform-prefixed key
//    (e.g. `yunhu_command`) and never shadows a standard field.

/// Top-level event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Message,
    Notice,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Message => "message",
            EventType::Notice => "notice",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the bot in the context of one event (`self` in OneBot-12)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelfInfo {
    pub platform: String,
    pub user_id: String,
}

impl SelfInfo {
    pub fn new(platform: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            user_id: user_id.into(),
        }
    }
}

/// Platform-agnostic event produced by an adapter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEvent {
    /// Source event id, or a generated UUID when the source has none
    pub id: String,

    /// Seconds since the Unix epoch
    pub time: i64,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub detail_type: String,

    /// Empty when the category has no refinement
    pub sub_type: String,

    pub platform: String,

    #[serde(rename = "self")]
    pub self_info: SelfInfo,

    pub user_nickname: String,

    /// Category-specific standard fields
    #[serde(flatten)]
    pub body: EventBody,

    /// Platform-prefixed extension fields, in insertion order
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl NormalizedEvent {
    /// Look up an extension field by its full (prefixed) key
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn set_extension(&mut self, key: impl Into<String>, value: Value) {
        self.extensions.insert(key.into(), value);
    }

    /// Serialize into a JSON object
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::body::GroupMemberBody;
    use serde_json::json;

    fn sample_event() -> NormalizedEvent {
        let mut extensions = Map::new();
        extensions.insert("demo_raw".to_string(), json!({"k": "v"}));

        NormalizedEvent {
            id: "e1".to_string(),
            time: 1000,
            event_type: EventType::Notice,
            detail_type: "group_member_increase".to_string(),
            sub_type: "invite".to_string(),
            platform: "demo".to_string(),
            self_info: SelfInfo::new("demo", ""),
            user_nickname: "alice".to_string(),
            body: EventBody::GroupMember(GroupMemberBody {
                group_id: "g1".to_string(),
                user_id: "u2".to_string(),
                operator_id: String::new(),
            }),
            extensions,
        }
    }

    #[test]
    fn test_serialization_flattens_body_and_extensions() {
        let value = sample_event().to_value().unwrap();

        assert_eq!(value["type"], "notice");
        assert_eq!(value["self"]["platform"], "demo");
        assert_eq!(value["group_id"], "g1");
        assert_eq!(value["operator_id"], "");
        assert_eq!(value["demo_raw"], json!({"k": "v"}));
        assert!(value.get("body").is_none());
        assert!(value.get("extensions").is_none());
    }

    #[test]
    fn test_serialization_key_order() {
        let json = serde_json::to_string(&sample_event()).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let self_pos = json.find("\"self\"").unwrap();
        let group_pos = json.find("\"group_id\"").unwrap();
        let raw_pos = json.find("\"demo_raw\"").unwrap();

        assert!(id_pos < self_pos);
        assert!(self_pos < group_pos);
        assert!(group_pos < raw_pos);
    }

    #[test]
    fn test_extension_accessors() {
        let mut event = sample_event();
        assert!(event.extension("demo_menu").is_none());

        event.set_extension("demo_menu", json!({"id": "m1"}));
        assert_eq!(event.extension("demo_menu"), Some(&json!({"id": "m1"})));
    }

    #[test]
    fn test_event_type_display() {
        assert_eq!(EventType::Message.to_string(), "message");
        assert_eq!(EventType::Notice.as_str(), "notice");
    }
}
