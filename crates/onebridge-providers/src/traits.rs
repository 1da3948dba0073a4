use onebridge_types::NormalizedEvent;
use serde_json::Value;

use crate::Result;
use crate::event_spec::EventSpec;

/// Platform webhook payload -> normalized event
///
/// Responsibilities:
/// - Classify platform event types into normalized categories
/// - Build the normalized event for a single payload
///
/// Implementations are stateless; one converter can serve concurrent callers.
pub trait EventConverter: Send + Sync {
    /// Unique provider ID (e.g., "yunhu")
    fn id(&self) -> &'static str;

    /// Look up the classification row for a platform event type
    fn classify(&self, event_type: &str) -> Option<&'static EventSpec>;

    /// Full classification table, in table order
    fn event_specs(&self) -> &'static [EventSpec];

    /// Convert a single payload
    ///
    /// `Ok(None)` means the event type is not supported and should be dropped.
    fn convert(&self, raw: &Value) -> Result<Option<NormalizedEvent>>;

    /// Check whether this converter translates an event type
    fn supports(&self, event_type: &str) -> bool {
        self.classify(event_type).is_some()
    }
}
