use clap::ValueEnum;
use onebridge_providers::CommandFormPlacement;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CommandFormArg {
    Separate,
    Nested,
}

impl fmt::Display for CommandFormArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFormArg::Separate => write!(f, "separate"),
            CommandFormArg::Nested => write!(f, "nested"),
        }
    }
}

impl From<CommandFormArg> for CommandFormPlacement {
    fn from(arg: CommandFormArg) -> Self {
        match arg {
            CommandFormArg::Separate => CommandFormPlacement::Separate,
            CommandFormArg::Nested => CommandFormPlacement::Nested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display_matches_filter_syntax() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_command_form_arg_conversion() {
        assert_eq!(
            CommandFormPlacement::from(CommandFormArg::Nested),
            CommandFormPlacement::Nested
        );
        assert_eq!(
            CommandFormPlacement::from(CommandFormArg::Separate),
            CommandFormPlacement::Separate
        );
    }
}
