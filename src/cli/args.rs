// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::registry::ValidatorResponse;

/// vreg - validation registry inspector
///
/// Loads the validation registry described by vreg.toml and answers
/// questions about its messages, locales and formats.
#[derive(Parser, Debug)]
#[command(name = "vreg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Inspect validation rules, formats and localized messages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Override the validation language
    #[arg(short, long, global = true, env = "VREG_LANG")]
    pub lang: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the validation message for a path
    Message(MessageArgs),

    /// Resolve a language to a registered locale
    Locale(LocaleArgs),

    /// List formats or show a single one
    Formats(FormatsArgs),

    /// Test input against a format
    Match(MatchArgs),

    /// Write an example vreg.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the message command.
#[derive(Parser, Debug, Clone)]
pub struct MessageArgs {
    /// Message path, e.g. "required" or "min.string"
    pub path: String,

    /// JSON object used to fill message placeholders
    #[arg(long)]
    pub context: Option<String>,

    /// Severity the message is rendered as
    #[arg(long, value_enum, default_value_t = MessageKind::Error)]
    pub kind: MessageKind,
}

/// Severity of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MessageKind {
    Error,
    Warning,
    Success,
}

impl MessageKind {
    /// Wrap `message` in a validator response of this kind.
    pub fn response(self, message: String) -> ValidatorResponse {
        match self {
            MessageKind::Error => ValidatorResponse::Error(message),
            MessageKind::Warning => ValidatorResponse::Warning(message),
            MessageKind::Success => ValidatorResponse::Success(message),
        }
    }
}

/// Arguments for the locale command.
#[derive(Parser, Debug, Clone, Default)]
pub struct LocaleArgs {
    /// Language to resolve (defaults to the current language)
    pub code: Option<String>,
}

/// Arguments for the formats command.
#[derive(Parser, Debug, Clone, Default)]
pub struct FormatsArgs {
    /// Show only this format
    pub name: Option<String>,
}

/// Arguments for the match command.
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Format name
    pub name: String,

    /// Input to test
    pub input: String,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "vreg.toml")]
    pub path: PathBuf,
}

impl Cli {
    /// Whether JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}
