//! Custom assertions for serialized normalized events.
//!
//! Provides high-level assertions that make tests more readable:
//! - Envelope completeness
//! - Raw payload preservation
//! - Message segment layout

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that the standard envelope fields are present and well-formed.
pub fn assert_envelope(event: &Value, platform: &str) -> Result<()> {
    for key in ["id", "type", "detail_type"] {
        let value = event[key]
            .as_str()
            .with_context(|| format!("Expected string field '{}'", key))?;
        if value.is_empty() {
            anyhow::bail!("Field '{}' is empty", key);
        }
    }

    event["time"].as_i64().context("Expected integer 'time'")?;
    event["sub_type"].as_str().context("Expected string 'sub_type'")?;

    if event["platform"] != platform {
        anyhow::bail!("Expected platform {}, got {}", platform, event["platform"]);
    }
    if event["self"]["platform"] != platform {
        anyhow::bail!(
            "Expected self.platform {}, got {}",
            platform,
            event["self"]["platform"]
        );
    }
    event["self"]["user_id"]
        .as_str()
        .context("Expected string 'self.user_id'")?;

    Ok(())
}

/// Assert that the raw-payload extension equals the original input.
pub fn assert_raw_preserved(event: &Value, raw_key: &str, raw: &Value) -> Result<()> {
    let embedded = event
        .get(raw_key)
        .with_context(|| format!("Missing extension field '{}'", raw_key))?;

    if embedded != raw {
        anyhow::bail!(
            "Raw payload was modified:\nexpected: {}\nactual:   {}",
            raw,
            embedded
        );
    }

    Ok(())
}

/// Assert the `type` of each message segment, in order.
pub fn assert_segment_kinds(event: &Value, expected: &[&str]) -> Result<()> {
    let segments = event["message"]
        .as_array()
        .context("Expected 'message' array in event")?;

    let kinds: Vec<&str> = segments
        .iter()
        .map(|s| s["type"].as_str().unwrap_or(""))
        .collect();

    if kinds != expected {
        anyhow::bail!("Expected segments {:?}, got {:?}", expected, kinds);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_envelope() {
        let event = json!({
            "id": "e1", "time": 1, "type": "notice", "detail_type": "friend_increase",
            "sub_type": "", "platform": "yunhu", "self": {"platform": "yunhu", "user_id": ""}
        });
        assert!(assert_envelope(&event, "yunhu").is_ok());
        assert!(assert_envelope(&event, "qq").is_err());

        let mut missing = event.clone();
        missing["detail_type"] = json!("");
        assert!(assert_envelope(&missing, "yunhu").is_err());
    }

    #[test]
    fn test_assert_raw_preserved() {
        let raw = json!({"header": {"eventType": "x"}});
        let event = json!({"demo_raw": raw.clone()});
        assert!(assert_raw_preserved(&event, "demo_raw", &raw).is_ok());
        assert!(assert_raw_preserved(&event, "other_raw", &raw).is_err());
        assert!(assert_raw_preserved(&event, "demo_raw", &json!({})).is_err());
    }

    #[test]
    fn test_assert_segment_kinds() {
        let event = json!({"message": [{"type": "image"}, {"type": "yunhu_button"}]});
        assert!(assert_segment_kinds(&event, &["image", "yunhu_button"]).is_ok());
        assert!(assert_segment_kinds(&event, &["image"]).is_err());
        assert!(assert_segment_kinds(&json!({}), &[]).is_err());
    }
}
