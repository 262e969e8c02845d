//! Clap argument structs.

use std::path::PathBuf;

use algocoach_settings::SETTINGS_ENV_VAR;
use algocoach_types::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// `algocoach` - heuristic complexity, pattern and quality reports for
/// algorithm practice submissions.
#[derive(Parser, Debug)]
#[command(name = "algocoach", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file. Falls back to `./algocoach.toml` when present.
    #[arg(long, global = true, value_name = "PATH", env = SETTINGS_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyse one source file.
    Analyze(AnalyzeArgs),

    /// Compare a submission against a reference solution.
    Compare(CompareArgs),

    /// Explain a reference solution: leading technique, classes and tips.
    Explain(ExplainArgs),

    /// List the active pattern catalog.
    Patterns(PatternsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Source file to analyse (`-` reads stdin).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// The submission (`-` reads stdin).
    #[arg(value_name = "USER_FILE")]
    pub user: PathBuf,

    /// The reference solution.
    #[arg(value_name = "REFERENCE_FILE")]
    pub reference: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Reference solution to explain (`-` reads stdin).
    #[arg(value_name = "REFERENCE_FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatternsArgs {
    /// Output format [possible values: md, json].
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Language tag for the report (inferred from the file extension if omitted).
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Output format [possible values: md, json].
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}
