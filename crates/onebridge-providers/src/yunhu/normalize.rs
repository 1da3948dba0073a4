use onebridge_types::NormalizedEvent;
use serde_json::Value;
use tracing::debug;

use super::mapper;
use super::mapping::classify;
use super::schema::RawEvent;
use super::{EXTENSION_PREFIX, PLATFORM};
use crate::Result;
use crate::builder::BaseEvent;
use crate::event_spec::EventCategory;
use crate::options::ConvertOptions;

/// Convert one Yunhu webhook payload
///
/// Returns `Ok(None)` when the event type is not classified.
pub(crate) fn normalize_yunhu_event(
    raw: &Value,
    options: &ConvertOptions,
) -> Result<Option<NormalizedEvent>> {
    let parsed = RawEvent::parse(raw)?;

    let Some(spec) = classify(&parsed.header.event_type) else {
        debug!(event_type = %parsed.header.event_type, "unsupported yunhu event type");
        return Ok(None);
    };
    debug!(event_type = spec.source, category = ?spec.category, "classified yunhu event");

    let base = BaseEvent::seed(
        PLATFORM,
        EXTENSION_PREFIX,
        spec,
        parsed.header.event_id.clone(),
        parsed.header.event_time,
        raw,
    );

    let event = parsed.event;
    let normalized = match spec.category {
        EventCategory::Message => mapper::build_message_event(spec, event, base, options)?,
        EventCategory::FriendRelation => mapper::build_friend_event(event, base),
        EventCategory::GroupMember => mapper::build_group_member_event(event, base),
        EventCategory::ButtonClick => mapper::build_button_event(event, base),
        EventCategory::ShortcutMenu => mapper::build_menu_event(event, base),
        EventCategory::BotSetting => mapper::build_setting_event(event, base),
    };

    Ok(Some(normalized))
}
