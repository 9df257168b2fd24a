//! Output format flags shared by every program subcommand.

use clap::{Args, ValueEnum};

/// Report form for a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Label-per-line text report.
    Text,
    /// JSON report carrying the record and its derived value.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for the final report.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Machine-friendly defaults (JSON report, no prompts).
    #[arg(long, global = true)]
    pub agent: bool,
    /// Suppress the prompt stream; the reads still happen.
    #[arg(long, global = true)]
    pub no_progress: bool,
    /// Keep prompts even when another flag would suppress them.
    #[arg(long, global = true)]
    pub interactive: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    /// Report form to render.
    pub format: OutputFormat,
    /// Suppress prompts and banners when set.
    pub no_progress: bool,
}

impl OutputMode {
    /// Build output mode from CLI flags.
    #[must_use]
    pub const fn from_args(args: &OutputArgs) -> Self {
        let format = match (args.output, args.agent) {
            (Some(value), _) => value,
            (None, true) => OutputFormat::Json,
            (None, false) => OutputFormat::Text,
        };

        let no_progress = if args.agent {
            true
        } else if args.interactive {
            false
        } else {
            args.no_progress
        };

        Self {
            format,
            no_progress,
        }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
