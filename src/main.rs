use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

mod args;
mod fuzzy;
mod matcher;
mod output;
mod rank;
mod walk;

use args::FormatArgs;
use output::OutputFormat;
use rank::ScoredPath;
use walk::WalkOptions;

#[derive(Parser)]
#[command(name = "pathpick")]
#[command(version = env!("PATHPICK_VERSION"))]
#[command(about = "Rank files against a fuzzy per-component path pattern")]
#[command(
    long_about = "pathpick - which file did I mean?\n\nThe pattern is split on / or \\ and aligned against the tail of every\ncandidate path. Each pattern component fuzzy-matches its path component\nas a subsequence, penalized by skipped characters; ^ and $ anchor a\ncomponent to a prefix or suffix instead. Lowest total penalty wins."
)]
struct Cli {
    /// Pattern to match, components separated by / or \
    pattern: String,

    /// Directories to search (default: current directory)
    #[arg(value_name = "ROOT")]
    roots: Vec<PathBuf>,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    limit: usize,

    /// Require components to match verbatim instead of fuzzily
    #[arg(short = 'e', long)]
    exact: bool,

    /// Include hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Limit traversal depth below each root
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    #[command(flatten)]
    format: FormatArgs,
}

fn main() {
    // Handle dynamic shell completions
    CompleteEnv::with_factory(Cli::command).complete();

    // Use try_parse to catch errors and normalize exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Print the error (includes usage for missing args)
            let _ = e.print();
            // Exit with 0 for help/version, 1 for actual errors
            let exit_code = if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                0
            } else {
                1
            };
            process::exit(exit_code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let format = cli.format.resolve();

    // Matching is case-insensitive by lowercasing both sides up front; the
    // core itself never case-folds. Original casing is kept for output.
    let pattern = cli.pattern.to_lowercase();

    let roots = if cli.roots.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.roots
    };

    let options = WalkOptions {
        hidden: cli.hidden,
        depth: cli.depth,
    };
    let candidates = walk::collect_paths(&roots, &options);

    let mut results = Vec::new();
    for path in candidates {
        let lowered = path.to_lowercase();
        if let Some(score) = matcher::match_path(&pattern, &lowered, cli.exact) {
            results.push(ScoredPath { score, path });
        }
    }

    let results = rank::rank(results, cli.limit);

    match format {
        OutputFormat::Pretty => output_pretty(&results, &cli.pattern),
        OutputFormat::Plain => output_plain(&results),
        OutputFormat::Json => output_json(&results, &cli.pattern, &roots),
        OutputFormat::Yaml => output_yaml(&results, &cli.pattern, &roots),
    }
}

/// Row data for pretty output table.
#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "SCORE")]
    score: String,
    #[tabled(rename = "PATH")]
    path: String,
}

fn output_pretty(results: &[ScoredPath], pattern: &str) -> Result<(), String> {
    println!(
        "{} matches {}",
        results.len().to_string().bold(),
        format!("(pattern \"{}\")", pattern).dimmed()
    );
    println!();

    if results.is_empty() {
        println!("{}", "No matches.".dimmed());
        return Ok(());
    }

    // Leave room for the score column and table chrome.
    let path_max = output::terminal_width().saturating_sub(16).max(20);

    let rows: Vec<TableRow> = results
        .iter()
        .map(|r| TableRow {
            score: output::style_score(r.score).to_string(),
            path: output::truncate_front(&r.path, path_max),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    Ok(())
}

fn output_plain(results: &[ScoredPath]) -> Result<(), String> {
    for r in results {
        println!("{}", r.path);
    }
    Ok(())
}

#[derive(Serialize)]
struct MachineOutput<'a> {
    pattern: &'a str,
    roots: Vec<String>,
    matches: &'a [ScoredPath],
}

impl<'a> MachineOutput<'a> {
    fn new(results: &'a [ScoredPath], pattern: &'a str, roots: &[PathBuf]) -> Self {
        MachineOutput {
            pattern,
            roots: roots
                .iter()
                .map(|r| r.to_string_lossy().to_string())
                .collect(),
            matches: results,
        }
    }
}

fn output_json(results: &[ScoredPath], pattern: &str, roots: &[PathBuf]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&MachineOutput::new(results, pattern, roots))
        .map_err(|e| format!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn output_yaml(results: &[ScoredPath], pattern: &str, roots: &[PathBuf]) -> Result<(), String> {
    let yaml = serde_yaml::to_string(&MachineOutput::new(results, pattern, roots))
        .map_err(|e| format!("YAML serialization failed: {}", e))?;
    print!("{}", yaml);
    Ok(())
}
