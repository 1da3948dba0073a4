use serde::{Deserialize, Serialize};

/// Where the raw form definition of a form instruction is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandFormPlacement {
    /// Top-level `<prefix>command_form` extension field
    #[default]
    Separate,
    /// `form` key inside the command record
    Nested,
}

/// Tunables for converters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertOptions {
    #[serde(default)]
    pub command_form: CommandFormPlacement,
}

impl ConvertOptions {
    pub fn with_command_form(mut self, placement: CommandFormPlacement) -> Self {
        self.command_form = placement;
        self
    }
}
