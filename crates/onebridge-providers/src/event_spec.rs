use onebridge_types::EventType;
use serde::Serialize;

/// Builder family responsible for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Message,
    FriendRelation,
    GroupMember,
    ButtonClick,
    ShortcutMenu,
    BotSetting,
}

/// How the normalized `detail_type` is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailType {
    /// Known from the event type alone
    Fixed(&'static str),
    /// `private` or `group`, decided by the chat the message arrived in
    FromChat,
}

impl DetailType {
    pub fn fixed(&self) -> Option<&'static str> {
        match self {
            DetailType::Fixed(name) => Some(*name),
            DetailType::FromChat => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            DetailType::Fixed(name) => *name,
            DetailType::FromChat => "private|group",
        }
    }
}

impl Serialize for DetailType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.describe())
    }
}

/// One row of a platform's classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSpec {
    /// Platform event type (e.g. `group.join`)
    pub source: &'static str,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub detail_type: DetailType,
    pub sub_type: &'static str,
    pub category: EventCategory,
}

impl EventSpec {
    pub const fn new(
        source: &'static str,
        event_type: EventType,
        detail_type: DetailType,
        sub_type: &'static str,
        category: EventCategory,
    ) -> Self {
        Self {
            source,
            event_type,
            detail_type,
            sub_type,
            category,
        }
    }
}
