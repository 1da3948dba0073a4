use crate::types::{CommandFormArg, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "onebridge")]
#[command(about = "Convert chat-platform webhook payloads into OneBot-12 events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $ONEBRIDGE_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one webhook payload and print the normalized event
    Convert {
        /// Payload file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        #[arg(long, default_value = "yunhu")]
        provider: String,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,

        /// Override `convert.command_form` from the config file
        #[arg(long)]
        command_form: Option<CommandFormArg>,
    },

    /// Show how a platform event type is classified
    Classify {
        event_type: String,

        #[arg(long, default_value = "yunhu")]
        provider: String,
    },

    /// List registered providers
    Providers {
        /// Also list each provider's supported event types
        #[arg(long)]
        events: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}
