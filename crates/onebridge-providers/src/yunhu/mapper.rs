use onebridge_types::*;
use serde_json::{Value, json};
use tracing::trace;

use super::command::build_command_data;
use super::form::build_form_data;
use super::media::{MediaKind, build_media_data};
use super::mapping::INSTRUCTION_MESSAGE;
use super::schema::*;
use super::{
    BUTTON_KEY, BUTTON_SEGMENT, COMMAND_FORM_KEY, COMMAND_KEY, FORM_SEGMENT, MENU_KEY,
    SETTING_KEY,
};
use crate::Result;
use crate::builder::BaseEvent;
use crate::event_spec::EventSpec;
use crate::options::{CommandFormPlacement, ConvertOptions};

/// Build a `message.private` / `message.group` event
///
/// Produces at most one primary segment from the content type, then an
/// independent button segment when the message carries inline buttons.
pub(crate) fn build_message_event(
    spec: &EventSpec,
    event: &Value,
    base: BaseEvent,
    options: &ConvertOptions,
) -> Result<NormalizedEvent> {
    let msg = MessageEvent::from_value(event);
    let content = msg.message.content;

    let mut segments = Vec::new();
    let mut alt_message = String::new();

    match &msg.message.content_type {
        ContentType::Text => {
            let text = str_field(content, "text");
            if text.is_empty() {
                trace!(msg_id = %msg.message.msg_id, "empty text message, no segment");
            } else {
                alt_message.push_str(&text);
                segments.push(MessageSegment::text(text));
            }
        }
        ContentType::Image => push_media(&mut segments, &mut alt_message, content, MediaKind::Image),
        ContentType::Video => push_media(&mut segments, &mut alt_message, content, MediaKind::Video),
        ContentType::File => push_media(&mut segments, &mut alt_message, content, MediaKind::File),
        ContentType::Form => {
            let form = build_form_data(content, &msg.message);
            alt_message.push_str(&format!("[form:{}]", form.name));
            segments.push(MessageSegment::extension(
                FORM_SEGMENT,
                serde_json::to_value(&form)?,
            ));
        }
        ContentType::Other(other) => {
            trace!(content_type = %other, "unknown content type, no primary segment");
        }
    }

    let buttons = field(content, "buttons");
    if is_truthy(buttons) {
        segments.push(MessageSegment::extension(
            BUTTON_SEGMENT,
            json!({ "buttons": buttons }),
        ));
        alt_message.push_str("[button]");
    }

    let private = msg.chat.is_private();
    let (detail_type, group_id, self_user_id) = if private {
        ("private", None, msg.chat.id.clone())
    } else {
        ("group", Some(msg.chat.id.clone()), String::new())
    };

    let body = EventBody::Message(MessageBody {
        message_id: msg.message.msg_id.clone(),
        message: segments,
        alt_message,
        user_id: msg.sender.id.clone(),
        group_id,
    });

    let mut normalized = base
        .with_detail_type(detail_type)
        .finish(self_user_id, msg.sender.nickname.clone(), body);

    if spec.source == INSTRUCTION_MESSAGE {
        let mut command = build_command_data(content, &msg.message, &msg.message.content_type);
        let separate_form = match options.command_form {
            CommandFormPlacement::Separate => command.form.take(),
            CommandFormPlacement::Nested => None,
        };

        normalized.set_extension(COMMAND_KEY, serde_json::to_value(&command)?);
        if let Some(form) = separate_form {
            normalized.set_extension(COMMAND_FORM_KEY, form);
        }
    }

    Ok(normalized)
}

fn push_media(
    segments: &mut Vec<MessageSegment>,
    alt_message: &mut String,
    content: &Value,
    kind: MediaKind,
) {
    let media = build_media_data(content, kind);
    alt_message.push_str(&kind.alt_text(&media.file_name));
    segments.push(kind.into_segment(media));
}

/// `notice.friend_increase` / `notice.friend_decrease`
///
/// The relation is scoped to the chat, so `self.user_id` is the chat id.
pub(crate) fn build_friend_event(event: &Value, base: BaseEvent) -> NormalizedEvent {
    let relation = RelationEvent::from_value(event);
    base.finish(
        relation.chat_id,
        relation.nickname,
        EventBody::FriendRelation(FriendRelationBody {
            user_id: relation.user_id,
        }),
    )
}

/// `notice.group_member_increase` / `notice.group_member_decrease`
///
/// Yunhu does not report who invited or removed the member, so `operator_id`
/// is always empty.
pub(crate) fn build_group_member_event(event: &Value, base: BaseEvent) -> NormalizedEvent {
    let relation = RelationEvent::from_value(event);
    base.finish(
        String::new(),
        relation.nickname,
        EventBody::GroupMember(GroupMemberBody {
            group_id: relation.chat_id,
            user_id: relation.user_id,
            operator_id: String::new(),
        }),
    )
}

pub(crate) fn build_button_event(event: &Value, base: BaseEvent) -> NormalizedEvent {
    let report = ButtonReportEvent::from_value(event);
    let mut normalized = base.finish(
        String::new(),
        report.nickname,
        EventBody::ButtonClick(ButtonClickBody {
            user_id: report.user_id,
            message_id: report.msg_id,
        }),
    );
    normalized.set_extension(
        BUTTON_KEY,
        json!({ "id": report.button_id, "value": report.value }),
    );
    normalized
}

pub(crate) fn build_menu_event(event: &Value, base: BaseEvent) -> NormalizedEvent {
    let menu = ShortcutMenuEvent::from_value(event);
    let group_id = if menu.chat_type == ChatType::Group {
        menu.chat_id
    } else {
        String::new()
    };

    let mut normalized = base.finish(
        String::new(),
        menu.nickname,
        EventBody::ShortcutMenu(ShortcutMenuBody {
            user_id: menu.sender_id,
            group_id,
        }),
    );
    normalized.set_extension(
        MENU_KEY,
        json!({ "id": menu.menu_id, "type": menu.menu_type, "action": menu.menu_action }),
    );
    normalized
}

pub(crate) fn build_setting_event(event: &Value, base: BaseEvent) -> NormalizedEvent {
    let setting = BotSettingEvent::from_value(event);
    let mut normalized = base.finish(
        setting.chat_id,
        setting.nickname,
        EventBody::BotSetting(BotSettingBody {
            group_id: setting.group_id,
        }),
    );
    normalized.set_extension(SETTING_KEY, setting.setting);
    normalized
}
