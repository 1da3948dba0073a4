use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One typed content unit within a message
///
/// Serialized as `{"type": ..., "data": {...}}`. Standard kinds carry typed
/// data; platform kinds (prefixed, e.g. `yunhu_form`) carry arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSegment")]
pub enum MessageSegment {
    Text(TextData),
    Image(MediaData),
    Video(MediaData),
    File(MediaData),
    Extension { kind: String, data: Value },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextData {
    pub text: String,
}

/// Attachment record shared by image, video and file segments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaData {
    pub file_id: String,
    pub url: String,
    pub file_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl MessageSegment {
    pub fn text(text: impl Into<String>) -> Self {
        MessageSegment::Text(TextData { text: text.into() })
    }

    pub fn extension(kind: impl Into<String>, data: Value) -> Self {
        MessageSegment::Extension {
            kind: kind.into(),
            data,
        }
    }

    /// Segment `type` as it appears on the wire
    pub fn kind(&self) -> &str {
        match self {
            MessageSegment::Text(_) => "text",
            MessageSegment::Image(_) => "image",
            MessageSegment::Video(_) => "video",
            MessageSegment::File(_) => "file",
            MessageSegment::Extension { kind, .. } => kind,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, MessageSegment::Extension { .. })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageSegment::Text(data) => Some(&data.text),
            _ => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaData> {
        match self {
            MessageSegment::Image(data) | MessageSegment::Video(data) | MessageSegment::File(data) => {
                Some(data)
            }
            _ => None,
        }
    }
}

impl Serialize for MessageSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("MessageSegment", 2)?;
        state.serialize_field("type", self.kind())?;
        match self {
            MessageSegment::Text(data) => state.serialize_field("data", data)?,
            MessageSegment::Image(data) | MessageSegment::Video(data) | MessageSegment::File(data) => {
                state.serialize_field("data", data)?
            }
            MessageSegment::Extension { data, .. } => state.serialize_field("data", data)?,
        }
        state.end()
    }
}

/// Wire shape used to decode segments of any kind
#[derive(Deserialize)]
struct RawSegment {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawSegment> for MessageSegment {
    type Error = serde_json::Error;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        Ok(match raw.kind.as_str() {
            "text" => MessageSegment::Text(serde_json::from_value(raw.data)?),
            "image" => MessageSegment::Image(serde_json::from_value(raw.data)?),
            "video" => MessageSegment::Video(serde_json::from_value(raw.data)?),
            "file" => MessageSegment::File(serde_json::from_value(raw.data)?),
            _ => MessageSegment::Extension {
                kind: raw.kind,
                data: raw.data,
            },
        })
    }
}
