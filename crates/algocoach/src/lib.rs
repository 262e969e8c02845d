//! # algocoach
//!
//! **CLI Binary**
//!
//! This is the entry point for the `algocoach` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load settings and build the pattern catalog
//! * Dispatch commands to the analysis engine and renderers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

pub mod cli;
pub mod config;
mod error_hints;
pub mod language;

use std::io::Read;
use std::path::Path;

use algocoach_core::AnalysisEngine;
use algocoach_format as format;
use algocoach_settings::Settings;
use algocoach_types::{OutputFormat, SourceText};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OutputArgs};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "ALGOCOACH_LOG";

/// Render an error chain plus recovery hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read source from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn resolve_language(args: &OutputArgs, path: &Path, settings: &Settings) -> String {
    args.lang
        .clone()
        .or_else(|| language::infer_language(path).map(str::to_string))
        .or_else(|| settings.output.language.clone())
        .unwrap_or_else(|| language::FALLBACK_LANGUAGE.to_string())
}

fn resolve_format(flag: Option<OutputFormat>, settings: &Settings) -> OutputFormat {
    flag.or(settings.output.format).unwrap_or_default()
}

fn build_engine(settings: &Settings) -> Result<AnalysisEngine> {
    let catalog = settings
        .build_catalog()
        .context("Failed to build pattern catalog")?;
    Ok(AnalysisEngine::new(catalog))
}

fn emit(rendered: &str) {
    println!("{}", rendered.trim_end());
}

/// Entry point used by the `algocoach` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let settings = config::load_settings(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => {
            let engine = build_engine(&settings)?;
            let code = read_source(&args.file)?;
            let language = resolve_language(&args.output, &args.file, &settings);
            let report = engine
                .generate_analysis_report(&SourceText::new(code, language))
                .context("Analysis failed")?;
            let format = resolve_format(args.output.format, &settings);
            emit(&format::render_analysis(&report, format)?);
        }
        Commands::Compare(args) => {
            let engine = build_engine(&settings)?;
            let user = read_source(&args.user)?;
            let reference = read_source(&args.reference)?;
            let language = resolve_language(&args.output, &args.user, &settings);
            let report = engine
                .compare_with_optimal(&user, &reference, &language)
                .context("Comparison failed")?;
            let format = resolve_format(args.output.format, &settings);
            emit(&format::render_comparison(&report, format)?);
        }
        Commands::Explain(args) => {
            let engine = build_engine(&settings)?;
            let code = read_source(&args.file)?;
            let language = resolve_language(&args.output, &args.file, &settings);
            let explanation = engine
                .explain_solution(&SourceText::new(code, language))
                .context("Analysis failed")?;
            let format = resolve_format(args.output.format, &settings);
            emit(&format::render_explanation(&explanation, format)?);
        }
        Commands::Patterns(args) => {
            let engine = build_engine(&settings)?;
            let format = resolve_format(args.format, &settings);
            emit(&format::render_catalog(engine.catalog(), format)?);
        }
    }

    Ok(())
}
