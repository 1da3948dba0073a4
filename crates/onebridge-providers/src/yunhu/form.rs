use serde::Serialize;
use serde_json::Value;

use super::schema::{MessageInfo, field, is_truthy, str_field, value_to_string};

/// Submitted form, carried by `yunhu_form` segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FormData {
    pub id: String,
    pub name: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    pub value: String,
}

/// Form control kinds and how their value is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormControl {
    /// `value` as-is (input, textarea)
    Direct,
    /// boolean `value` (switch)
    Switch,
    /// `selectValue` (select, radio)
    SingleChoice,
    /// `selectStatus` flags paired with `selectValues` labels (checkbox)
    MultiChoice,
    Unknown,
}

impl FormControl {
    fn parse(field_type: &str) -> Self {
        match field_type {
            "input" | "textarea" => FormControl::Direct,
            "switch" => FormControl::Switch,
            "select" | "radio" => FormControl::SingleChoice,
            "checkbox" => FormControl::MultiChoice,
            _ => FormControl::Unknown,
        }
    }
}

/// Flatten `content.formJson` into ordered field records
pub(crate) fn build_form_data(content: &Value, message: &MessageInfo<'_>) -> FormData {
    let fields = field(content, "formJson")
        .as_object()
        .map(|form| {
            form.iter()
                .map(|(id, control)| build_field(id, control))
                .collect()
        })
        .unwrap_or_default();

    FormData {
        id: message.instruction_id.clone(),
        name: message.instruction_name.clone(),
        fields,
    }
}

fn build_field(id: &str, control: &Value) -> FormField {
    let field_type = str_field(control, "type");
    let value = match FormControl::parse(&field_type) {
        FormControl::Direct => str_field(control, "value"),
        FormControl::Switch => switch_value(field(control, "value")),
        FormControl::SingleChoice => str_field(control, "selectValue"),
        FormControl::MultiChoice => checked_labels(control),
        FormControl::Unknown => String::new(),
    };

    FormField {
        id: id.to_string(),
        field_type,
        label: str_field(control, "label"),
        value,
    }
}

/// Switch state as `True` / `False`; absent means off, other scalars pass through
fn switch_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) | Value::Null => "False".to_string(),
        other => value_to_string(other),
    }
}

/// Comma-joined labels whose selection flag is set
///
/// Flags and labels are paired positionally; extra entries on either side are ignored.
fn checked_labels(control: &Value) -> String {
    let empty = Vec::new();
    let flags = field(control, "selectStatus").as_array().unwrap_or(&empty);
    let labels = field(control, "selectValues").as_array().unwrap_or(&empty);

    flags
        .iter()
        .zip(labels)
        .filter(|(flag, _)| is_truthy(flag))
        .map(|(_, label)| value_to_string(label))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yunhu::schema::MessageEvent;
    use serde_json::json;

    fn form_message(form: Value) -> Value {
        json!({
            "message": {
                "contentType": "form",
                "instructionId": 1729,
                "instructionName": "signup",
                "content": {"formJson": form}
            }
        })
    }

    fn build(form: Value) -> FormData {
        let event = form_message(form);
        let message = MessageEvent::from_value(&event);
        build_form_data(message.message.content, &message.message)
    }

    #[test]
    fn test_form_metadata() {
        let data = build(json!({}));
        assert_eq!(data.id, "1729");
        assert_eq!(data.name, "signup");
        assert!(data.fields.is_empty());
    }

    #[test]
    fn test_field_values_per_control() {
        let data = build(json!({
            "f1": {"type": "input", "label": "Name", "value": "Ada"},
            "f2": {"type": "textarea", "label": "Bio", "value": "hello\nworld"},
            "f3": {"type": "switch", "label": "Subscribe", "value": true},
            "f4": {"type": "select", "label": "City", "selectValue": "Paris"},
            "f5": {"type": "radio", "label": "Size", "selectValue": "M"},
            "f6": {
                "type": "checkbox",
                "label": "Tags",
                "selectStatus": [true, false, true],
                "selectValues": ["a", "b", "c"]
            },
            "f7": {"type": "slider", "label": "Volume", "value": 3}
        }));

        let values: Vec<(&str, &str)> = data
            .fields
            .iter()
            .map(|f| (f.id.as_str(), f.value.as_str()))
            .collect();

        assert_eq!(
            values,
            vec![
                ("f1", "Ada"),
                ("f2", "hello\nworld"),
                ("f3", "True"),
                ("f4", "Paris"),
                ("f5", "M"),
                ("f6", "a,c"),
                ("f7", ""),
            ]
        );
        assert_eq!(data.fields[5].field_type, "checkbox");
        assert_eq!(data.fields[5].label, "Tags");
    }

    #[test]
    fn test_switch_defaults_to_false() {
        let data = build(json!({"s": {"type": "switch", "label": "On"}}));
        assert_eq!(data.fields[0].value, "False");
    }

    #[test]
    fn test_checkbox_truncates_to_shorter_list() {
        let data = build(json!({
            "c1": {"type": "checkbox", "selectStatus": [true, true], "selectValues": ["x", "y", "z"]},
            "c2": {"type": "checkbox", "selectStatus": [false, true, true], "selectValues": ["x", "y"]}
        }));

        assert_eq!(data.fields[0].value, "x,y");
        assert_eq!(data.fields[1].value, "y");
    }

    #[test]
    fn test_checkbox_flags_use_loose_truthiness() {
        let data = build(json!({
            "c": {"type": "checkbox", "selectStatus": [1, 0, 1], "selectValues": ["a", "b", "c"]}
        }));
        assert_eq!(data.fields[0].value, "a,c");
    }

    #[test]
    fn test_switch_rendering() {
        let data = build(json!({
            "on": {"type": "switch", "value": true},
            "off": {"type": "switch", "value": false},
            "raw": {"type": "switch", "value": "yes"}
        }));
        assert_eq!(data.fields[0].value, "True");
        assert_eq!(data.fields[1].value, "False");
        assert_eq!(data.fields[2].value, "yes");
    }

    #[test]
    fn test_checkbox_without_lists() {
        let data = build(json!({"c": {"type": "checkbox"}}));
        assert_eq!(data.fields[0].value, "");
    }

    #[test]
    fn test_non_object_field_entry() {
        let data = build(json!({"broken": "oops"}));
        assert_eq!(
            data.fields[0],
            FormField {
                id: "broken".to_string(),
                field_type: String::new(),
                label: String::new(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let data = build(json!({"f1": {"type": "input", "label": "Name", "value": "Ada"}}));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "id": "1729",
                "name": "signup",
                "fields": [{"id": "f1", "type": "input", "label": "Name", "value": "Ada"}]
            })
        );
    }
}
