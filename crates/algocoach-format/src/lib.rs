//! # algocoach-format
//!
//! **Tier 4 (Presentation)**
//!
//! Rendering for analysis reports, comparison reports, learner explanations
//! and the active pattern catalog.
//!
//! ## What belongs here
//! * Markdown and JSON output
//! * Timestamp and number formatting for reports
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * File I/O

use algocoach_catalog::PatternCatalog;
use algocoach_types::{
    AnalysisReport, ComparisonReport, ComplexityComparison, OutputFormat, PatternDefinition,
    ProblemExplanation,
};
use anyhow::Result;
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

pub fn render_analysis(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(render_analysis_md(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_comparison(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(render_comparison_md(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_explanation(explanation: &ProblemExplanation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(render_explanation_md(explanation)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(explanation)?),
    }
}

pub fn render_catalog(catalog: &PatternCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(render_catalog_md(catalog)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CatalogListing {
            patterns: catalog.iter().collect(),
        })?),
    }
}

#[derive(Serialize)]
struct CatalogListing<'a> {
    patterns: Vec<&'a PatternDefinition>,
}

/// `generated_at_ms` as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn timestamp_utc(generated_at_ms: u128) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    i128::try_from(generated_at_ms)
        .ok()
        .and_then(|ms| ms.checked_mul(1_000_000))
        .and_then(|nanos| OffsetDateTime::from_unix_timestamp_nanos(nanos).ok())
        .and_then(|at| at.format(&format).ok())
        .unwrap_or_else(|| "1970-01-01 00:00:00 UTC".to_string())
}

fn render_analysis_md(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str("# algocoach analysis\n\n");
    out.push_str(&format!("Language: `{}`\n\n", report.language));
    out.push_str(&format!(
        "Generated: {}\n\n",
        timestamp_utc(report.generated_at_ms)
    ));
    push_analysis_body(&mut out, report, "##");
    out
}

fn push_analysis_body(out: &mut String, report: &AnalysisReport, level: &str) {
    out.push_str(&format!("{level} Complexity\n\n"));
    out.push_str("|Dimension|Class|Explanation|\n");
    out.push_str("|---|---|---|\n");
    out.push_str(&format!(
        "|Time|`{}`|{}|\n",
        report.complexity.time.level, report.complexity.time.explanation
    ));
    out.push_str(&format!(
        "|Space|`{}`|{}|\n\n",
        report.complexity.space.level, report.complexity.space.explanation
    ));

    out.push_str(&format!("{level} Cyclomatic complexity\n\n"));
    out.push_str(&format!(
        "- Value: `{}` ({})\n",
        report.cyclomatic.value, report.cyclomatic.tier
    ));
    out.push_str(&format!("- {}\n\n", report.cyclomatic.explanation));

    out.push_str(&format!("{level} Patterns\n\n"));
    if report.patterns.is_empty() {
        out.push_str("- No recognized technique.\n\n");
    } else {
        out.push_str("|Pattern|Score|Description|\n");
        out.push_str("|---|---:|---|\n");
        for m in &report.patterns {
            out.push_str(&format!(
                "|{}|{}|{}|\n",
                m.name,
                fmt_pct(m.score),
                m.description
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{level} Code quality\n\n"));
    out.push_str(&format!("- Score: `{}`\n", fmt_f64(report.quality.score, 2)));
    for tip in &report.quality.tips {
        out.push_str(&format!("- {tip}\n"));
    }
    out.push('\n');

    push_suggestions(out, &report.suggestions, level);
}

fn push_suggestions(out: &mut String, suggestions: &[String], level: &str) {
    out.push_str(&format!("{level} Suggestions\n\n"));
    if suggestions.is_empty() {
        out.push_str("- None.\n\n");
        return;
    }
    for s in suggestions {
        out.push_str(&format!("- {s}\n"));
    }
    out.push('\n');
}

fn comparison_row(dimension: &str, cmp: &ComplexityComparison) -> String {
    format!(
        "|{}|`{}`|`{}`|{}|\n",
        dimension, cmp.user.level, cmp.optimal.level, cmp.verdict
    )
}

fn render_comparison_md(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str("# algocoach comparison\n\n");
    out.push_str(&format!("Language: `{}`\n\n", report.language));
    out.push_str(&format!(
        "Generated: {}\n\n",
        timestamp_utc(report.generated_at_ms)
    ));

    out.push_str("## Verdict\n\n");
    out.push_str("|Dimension|Yours|Reference|Verdict|\n");
    out.push_str("|---|---|---|---|\n");
    out.push_str(&comparison_row("Time", &report.time));
    out.push_str(&comparison_row("Space", &report.space));
    out.push('\n');

    push_suggestions(&mut out, &report.suggestions, "##");

    out.push_str("## Your solution\n\n");
    push_analysis_body(&mut out, &report.user, "###");
    out.push_str("## Reference solution\n\n");
    push_analysis_body(&mut out, &report.optimal, "###");
    out
}

fn render_explanation_md(explanation: &ProblemExplanation) -> String {
    let mut out = String::new();
    out.push_str("# algocoach explanation\n\n");
    out.push_str("## Approach\n\n");
    out.push_str(&format!("{}\n\n", explanation.approach));

    out.push_str("## Key concepts\n\n");
    if explanation.key_concepts.is_empty() {
        out.push_str("- No recognized technique.\n\n");
    } else {
        for concept in &explanation.key_concepts {
            out.push_str(&format!("- {concept}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Optimization tips\n\n");
    if explanation.optimization_tips.is_empty() {
        out.push_str("- None.\n");
    } else {
        for tip in &explanation.optimization_tips {
            out.push_str(&format!("- {tip}\n"));
        }
    }
    out
}

fn render_catalog_md(catalog: &PatternCatalog) -> String {
    let mut out = String::new();
    out.push_str("# algocoach patterns\n\n");
    if catalog.is_empty() {
        out.push_str("- Catalog is empty.\n");
        return out;
    }
    out.push_str("|Pattern|Indicator tokens|Description|\n");
    out.push_str("|---|---|---|\n");
    for p in catalog {
        let tokens = p
            .indicator_tokens
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("`, `");
        out.push_str(&format!("|{}|`{}`|{}|\n", p.name, tokens, p.description));
    }
    out
}

fn fmt_pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn fmt_f64(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
