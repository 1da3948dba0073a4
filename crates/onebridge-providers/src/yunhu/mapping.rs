use onebridge_types::EventType;

use crate::event_spec::{DetailType, EventCategory, EventSpec};

pub const NORMAL_MESSAGE: &str = "message.receive.normal";
pub const INSTRUCTION_MESSAGE: &str = "message.receive.instruction";

/// Classification table for Yunhu webhook event types
const YUNHU_EVENTS: &[EventSpec] = &[
    // Messages
    EventSpec::new(
        NORMAL_MESSAGE,
        EventType::Message,
        DetailType::FromChat,
        "",
        EventCategory::Message,
    ),
    EventSpec::new(
        INSTRUCTION_MESSAGE,
        EventType::Message,
        DetailType::FromChat,
        "command",
        EventCategory::Message,
    ),
    // Friend relations
    EventSpec::new(
        "bot.followed",
        EventType::Notice,
        DetailType::Fixed("friend_increase"),
        "",
        EventCategory::FriendRelation,
    ),
    EventSpec::new(
        "bot.unfollowed",
        EventType::Notice,
        DetailType::Fixed("friend_decrease"),
        "",
        EventCategory::FriendRelation,
    ),
    // Group membership
    EventSpec::new(
        "group.join",
        EventType::Notice,
        DetailType::Fixed("group_member_increase"),
        "invite",
        EventCategory::GroupMember,
    ),
    EventSpec::new(
        "group.leave",
        EventType::Notice,
        DetailType::Fixed("group_member_decrease"),
        "leave",
        EventCategory::GroupMember,
    ),
    // Platform extensions
    EventSpec::new(
        "button.report.inline",
        EventType::Notice,
        DetailType::Fixed("yunhu_button_click"),
        "",
        EventCategory::ButtonClick,
    ),
    EventSpec::new(
        "bot.shortcut.menu",
        EventType::Notice,
        DetailType::Fixed("yunhu_shortcut_menu"),
        "",
        EventCategory::ShortcutMenu,
    ),
    EventSpec::new(
        "bot.setting",
        EventType::Notice,
        DetailType::Fixed("yunhu_bot_setting"),
        "",
        EventCategory::BotSetting,
    ),
];

/// Classify a Yunhu event type
///
/// Returns `None` for event types this adapter does not translate.
pub fn classify(event_type: &str) -> Option<&'static EventSpec> {
    YUNHU_EVENTS.iter().find(|spec| spec.source == event_type)
}

pub fn is_supported(event_type: &str) -> bool {
    classify(event_type).is_some()
}

/// All classified event types, in table order
pub fn supported_event_types() -> Vec<&'static str> {
    YUNHU_EVENTS.iter().map(|spec| spec.source).collect()
}

pub(crate) fn event_specs() -> &'static [EventSpec] {
    YUNHU_EVENTS
}
