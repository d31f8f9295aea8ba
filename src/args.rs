//! Shared CLI argument structs.
//!
//! Use `#[command(flatten)]` to include them in the top-level Cli struct.

use clap::Args;

use crate::output::OutputFormat;

/// Common output format flags.
///
/// Provides consistent --format/-f and --json flags.
/// Use `resolve()` to get the effective format with TTY auto-detection.
#[derive(Args, Clone, Debug, Default)]
pub struct FormatArgs {
    /// Output format (auto-detects TTY for pretty vs plain)
    #[arg(short = 'f', long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArgs {
    /// Resolve the effective output format.
    ///
    /// Handles --json shorthand and applies TTY auto-detection for pretty mode.
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.resolve()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shorthand_wins() {
        let args = FormatArgs {
            json: true,
            ..Default::default()
        };
        assert_eq!(args.resolve(), OutputFormat::Json);
    }

    #[test]
    fn explicit_machine_formats_pass_through() {
        let args = FormatArgs {
            format: OutputFormat::Yaml,
            ..Default::default()
        };
        assert_eq!(args.resolve(), OutputFormat::Yaml);

        let args = FormatArgs {
            format: OutputFormat::Plain,
            ..Default::default()
        };
        assert_eq!(args.resolve(), OutputFormat::Plain);
    }
}
