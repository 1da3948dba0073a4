use serde::Serialize;

use super::segment::MessageSegment;

/// Category-specific standard fields
///
/// Serialized without a tag: the variant's fields are flattened into the
/// enclosing [`NormalizedEvent`](super::NormalizedEvent).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventBody {
    /// `message.private` / `message.group`
    Message(MessageBody),

    /// `notice.friend_increase` / `notice.friend_decrease`
    FriendRelation(FriendRelationBody),

    /// `notice.group_member_increase` / `notice.group_member_decrease`
    GroupMember(GroupMemberBody),

    /// Inline button pressed on a bot message
    ButtonClick(ButtonClickBody),

    /// Bot shortcut menu entry selected
    ShortcutMenu(ShortcutMenuBody),

    /// Bot settings submitted by a group admin
    BotSetting(BotSettingBody),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MessageBody {
    pub message_id: String,

    pub message: Vec<MessageSegment>,

    /// Plain-text rendering of `message`
    pub alt_message: String,

    pub user_id: String,

    /// Only set for group messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FriendRelationBody {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupMemberBody {
    pub group_id: String,
    pub user_id: String,
    pub operator_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ButtonClickBody {
    pub user_id: String,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShortcutMenuBody {
    pub user_id: String,
    pub group_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BotSettingBody {
    pub group_id: String,
}

impl EventBody {
    pub fn as_message(&self) -> Option<&MessageBody> {
        match self {
            EventBody::Message(body) => Some(body),
            _ => None,
        }
    }

    /// `user_id` of the acting user, when the category has one
    pub fn user_id(&self) -> Option<&str> {
        match self {
            EventBody::Message(b) => Some(&b.user_id),
            EventBody::FriendRelation(b) => Some(&b.user_id),
            EventBody::GroupMember(b) => Some(&b.user_id),
            EventBody::ButtonClick(b) => Some(&b.user_id),
            EventBody::ShortcutMenu(b) => Some(&b.user_id),
            EventBody::BotSetting(_) => None,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            EventBody::Message(b) => b.group_id.as_deref(),
            EventBody::GroupMember(b) => Some(&b.group_id),
            EventBody::ShortcutMenu(b) => Some(&b.group_id),
            EventBody::BotSetting(b) => Some(&b.group_id),
            EventBody::FriendRelation(_) | EventBody::ButtonClick(_) => None,
        }
    }
}
