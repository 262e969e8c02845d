//! Rendering tests for `algocoach-format` over real engine output.

use algocoach_core::{compare_with_optimal, generate_analysis_report};
use algocoach_format::{render_analysis, render_catalog, render_comparison};
use algocoach_types::{AnalysisReport, ComparisonReport, OutputFormat};

const NESTED: &str = "for (let i = 0; i < n; i++) {\n  for (let j = 0; j < n; j++) {\n    c++;\n  }\n}\n";
const LINEAR: &str = "const seen = new Set();\nfor (const x of xs) {\n  seen.add(x);\n}\n";

#[test]
fn analysis_md_has_all_sections() {
    let report = generate_analysis_report(NESTED, "javascript").unwrap();
    let md = render_analysis(&report, OutputFormat::Md).unwrap();

    assert!(md.starts_with("# algocoach analysis\n"));
    for heading in [
        "## Complexity",
        "## Cyclomatic complexity",
        "## Patterns",
        "## Code quality",
        "## Suggestions",
    ] {
        assert!(md.contains(heading), "missing {heading}");
    }
    assert!(md.contains("|Time|`O(n^2)`|2 nested loops detected|"));
    assert!(md.contains("|Space|`O(1)`|Constant space complexity|"));
    assert!(md.contains("- No recognized technique."));
    assert!(md.contains(" UTC\n"));
}

#[test]
fn analysis_json_parses_back() {
    let report = generate_analysis_report(NESTED, "javascript").unwrap();
    let json = render_analysis(&report, OutputFormat::Json).unwrap();
    let back: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn comparison_md_has_verdict_table() {
    let cmp = compare_with_optimal(NESTED, LINEAR, "javascript").unwrap();
    let md = render_comparison(&cmp, OutputFormat::Md).unwrap();

    assert!(md.starts_with("# algocoach comparison\n"));
    assert!(md.contains("|Time|`O(n^2)`|`O(n)`|worse|"));
    assert!(md.contains("|Space|`O(1)`|`O(n)`|better|"));
    assert!(md.contains("- Consider optimizing time complexity from O(n^2) to O(n)"));
    assert!(md.contains("## Your solution"));
    assert!(md.contains("### Complexity"));
    assert!(md.contains("## Reference solution"));
}

#[test]
fn comparison_json_parses_back() {
    let cmp = compare_with_optimal(NESTED, LINEAR, "javascript").unwrap();
    let json = render_comparison(&cmp, OutputFormat::Json).unwrap();
    let back: ComparisonReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmp);
}

#[test]
fn catalog_json_lists_patterns() {
    let catalog = algocoach_core::PatternCatalog::builtin();
    let json = render_catalog(&catalog, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let patterns = value["patterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 6);
    assert_eq!(patterns[0]["name"], "two-pointer");
}
