//! Output formatting utilities with TTY auto-detection.

use std::io::IsTerminal;

use clap::ValueEnum;
use colored::{ColoredString, Colorize};

/// Output format for results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-optimized: colors, table, truncated paths
    #[default]
    Pretty,
    /// Pipe-optimized: one path per line, best first
    Plain,
    /// Machine-readable JSON
    Json,
    /// Machine-readable YAML
    Yaml,
}

impl OutputFormat {
    /// Resolve the output format, applying TTY auto-detection.
    ///
    /// If format is Pretty but stdout is not a TTY, returns Plain.
    pub fn resolve(self) -> Self {
        match self {
            OutputFormat::Pretty if !std::io::stdout().is_terminal() => OutputFormat::Plain,
            other => other,
        }
    }
}

/// Style for scores - always dimmed, they are secondary to the path.
pub fn style_score(score: u32) -> ColoredString {
    score.to_string().dimmed()
}

/// Get terminal width, defaulting to 80 if unavailable.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string from the front, showing "..suffix".
/// Useful for paths where the end is more meaningful.
pub fn truncate_front(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars <= 2 {
        "..".to_string()
    } else {
        let skip = char_count - (max_chars - 2);
        let truncated: String = s.chars().skip(skip).collect();
        format!("..{}", truncated)
    }
}
