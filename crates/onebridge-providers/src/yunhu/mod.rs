pub mod mapping;
pub(crate) mod mapper;
pub(crate) mod normalize;
pub(crate) mod schema;

mod command;
mod form;
mod media;

use onebridge_types::NormalizedEvent;
use serde_json::Value;

use crate::Result;
use crate::event_spec::EventSpec;
use crate::options::ConvertOptions;
use crate::traits::EventConverter;

pub use mapping::{classify, is_supported, supported_event_types};

/// Value of `platform` and `self.platform`
pub const PLATFORM: &str = "yunhu";

/// Namespace for every non-standard field and segment type
pub const EXTENSION_PREFIX: &str = "yunhu_";

pub const RAW_KEY: &str = "yunhu_raw";
pub const COMMAND_KEY: &str = "yunhu_command";
pub const COMMAND_FORM_KEY: &str = "yunhu_command_form";
pub const BUTTON_KEY: &str = "yunhu_button";
pub const MENU_KEY: &str = "yunhu_menu";
pub const SETTING_KEY: &str = "yunhu_setting";

pub const FORM_SEGMENT: &str = "yunhu_form";
pub const BUTTON_SEGMENT: &str = "yunhu_button";

/// Yunhu webhook -> normalized event converter
#[derive(Debug, Clone, Default)]
pub struct YunhuConverter {
    options: ConvertOptions,
}

impl YunhuConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert one webhook payload
    ///
    /// Returns `Ok(None)` for event types this adapter does not translate;
    /// errors only for payloads that are not an object or lack `header.eventType`.
    pub fn convert(&self, raw: &Value) -> Result<Option<NormalizedEvent>> {
        normalize::normalize_yunhu_event(raw, &self.options)
    }
}

impl EventConverter for YunhuConverter {
    fn id(&self) -> &'static str {
        PLATFORM
    }

    fn classify(&self, event_type: &str) -> Option<&'static EventSpec> {
        mapping::classify(event_type)
    }

    fn event_specs(&self) -> &'static [EventSpec] {
        mapping::event_specs()
    }

    fn convert(&self, raw: &Value) -> Result<Option<NormalizedEvent>> {
        YunhuConverter::convert(self, raw)
    }
}

/// Convert one Yunhu payload with default options
pub fn convert_yunhu_event(raw: &Value) -> Result<Option<NormalizedEvent>> {
    YunhuConverter::default().convert(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_key_matches_prefix() {
        assert_eq!(RAW_KEY, format!("{}raw", EXTENSION_PREFIX));
        for key in [COMMAND_KEY, COMMAND_FORM_KEY, BUTTON_KEY, MENU_KEY, SETTING_KEY] {
            assert!(key.starts_with(EXTENSION_PREFIX), "{}", key);
        }
    }

    #[test]
    fn test_converter_keeps_options() {
        let options = ConvertOptions::default()
            .with_command_form(crate::options::CommandFormPlacement::Nested);
        let converter = YunhuConverter::new(options.clone());
        assert_eq!(converter.options(), &options);
        assert_eq!(YunhuConverter::default().options(), &ConvertOptions::default());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let converter: Box<dyn EventConverter> = Box::new(YunhuConverter::default());
        assert_eq!(converter.id(), "yunhu");
        assert!(converter.classify("bot.setting").is_some());
        assert_eq!(converter.event_specs().len(), 9);

        let raw = json!({"header": {"eventType": "bot.setting"}, "event": {"groupId": "g1"}});
        let event = converter.convert(&raw).unwrap().unwrap();
        assert_eq!(event.extension(RAW_KEY), Some(&raw));
    }
}
