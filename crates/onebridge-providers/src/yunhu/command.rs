use serde::Serialize;
use serde_json::Value;

use super::schema::{ContentType, MessageInfo, field, str_field};

/// Slash-command invocation, carried under `yunhu_command`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CommandData {
    pub name: String,
    pub id: String,
    pub args: String,
    /// Raw form definition of a form instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
}

pub(crate) fn build_command_data(
    content: &Value,
    message: &MessageInfo<'_>,
    content_type: &ContentType,
) -> CommandData {
    let text = str_field(content, "text");

    let form = match content_type {
        ContentType::Form => Some(match field(content, "formJson") {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        }),
        _ => None,
    };

    CommandData {
        name: message.command_name.clone(),
        id: message.command_id.clone(),
        args: strip_command_prefix(&text, &message.command_name),
        form,
    }
}

/// Remove the first literal `/<name>` from `text` and trim the result
///
/// Inner whitespace is kept.
pub(crate) fn strip_command_prefix(text: &str, name: &str) -> String {
    let prefix = format!("/{}", name);
    text.replacen(&prefix, "", 1).trim().to_string()
}
