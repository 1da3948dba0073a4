use onebridge_types::*;
use serde_json::{Map, Value};

use crate::event_spec::EventSpec;

/// Pre-seeded envelope shared by every category builder
///
/// Holds everything known before the category-specific fields are read:
/// identity, timestamp, classification and the untouched source payload.
#[derive(Debug, Clone)]
pub struct BaseEvent {
    pub id: String,
    pub time: i64,
    pub event_type: EventType,
    pub detail_type: String,
    pub sub_type: String,
    pub platform: &'static str,
    raw_key: String,
    raw: Value,
}

impl BaseEvent {
    /// Seed an envelope from header data and a classification row
    ///
    /// `id` and `time_ms` fall back to a fresh UUID and the current time.
    pub fn seed(
        platform: &'static str,
        extension_prefix: &str,
        spec: &EventSpec,
        id: Option<String>,
        time_ms: Option<i64>,
        raw: &Value,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(new_event_id),
            time: time_ms.map(millis_to_seconds).unwrap_or_else(now_seconds),
            event_type: spec.event_type,
            detail_type: spec.detail_type.fixed().unwrap_or_default().to_string(),
            sub_type: spec.sub_type.to_string(),
            platform,
            raw_key: format!("{}raw", extension_prefix),
            raw: raw.clone(),
        }
    }

    pub fn with_detail_type(mut self, detail_type: &str) -> Self {
        self.detail_type = detail_type.to_string();
        self
    }

    /// Complete the event with the category fields
    ///
    /// The raw payload is always the first extension field.
    pub fn finish(
        self,
        self_user_id: String,
        user_nickname: String,
        body: EventBody,
    ) -> NormalizedEvent {
        let mut extensions = Map::new();
        extensions.insert(self.raw_key, self.raw);

        NormalizedEvent {
            id: self.id,
            time: self.time,
            event_type: self.event_type,
            detail_type: self.detail_type,
            sub_type: self.sub_type,
            platform: self.platform.to_string(),
            self_info: SelfInfo::new(self.platform, self_user_id),
            user_nickname,
            body,
            extensions,
        }
    }
}
