//! Output rendering for the schema, score, and brand commands.
//!
//! Supports `human` (default) and `json` outputs. Human output is built as a
//! string first so it can be tested without a terminal.

use crate::models::brand::{BrandConsistencyReport, Severity};
use crate::models::schema::ValidationReport;
use crate::models::visibility::AIVisibilityScore;
use crate::models::Status;
use crate::utils::{paint, use_colors};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

/// Strengths shown in the human score summary.
pub const TOP_STRENGTHS: usize = 3;
/// Recommendations shown in the human score summary.
pub const TOP_RECOMMENDATIONS: usize = 5;
/// High-severity issues and warnings shown in the human brand summary.
pub const TOP_BRAND_ITEMS: usize = 3;

fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print schema validation results in the requested format.
pub fn print_schema(report: &ValidationReport, output: &str) -> serde_json::Result<()> {
    match output {
        "json" => print_json(report),
        _ => {
            print!("{}", render_schema(report, use_colors(output)));
            Ok(())
        }
    }
}

/// Print the AI visibility score in the requested format.
pub fn print_score(score: &AIVisibilityScore, output: &str) -> serde_json::Result<()> {
    match output {
        "json" => print_json(score),
        _ => {
            print!("{}", render_score(score, use_colors(output)));
            Ok(())
        }
    }
}

/// Print the brand consistency report in the requested format.
pub fn print_brand(report: &BrandConsistencyReport, output: &str) -> serde_json::Result<()> {
    match output {
        "json" => print_json(report),
        _ => {
            print!("{}", render_brand(report, use_colors(output)));
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct Combined<'a> {
    schema: &'a ValidationReport,
    score: &'a AIVisibilityScore,
    brand: &'a BrandConsistencyReport,
}

/// All three audits as one JSON document keyed `schema`, `score`, `brand`.
pub fn render_all_json(
    schema: &ValidationReport,
    score: &AIVisibilityScore,
    brand: &BrandConsistencyReport,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Combined {
        schema,
        score,
        brand,
    })
}

/// Section separator used by `seo all`.
pub fn banner(title: &str, output: &str) -> String {
    let line = "═".repeat(60);
    let text = format!("{}\n  {}\n{}", line, title, line);
    paint(use_colors(output), &text, |s| s.magenta().bold().to_string())
}

pub fn render_schema(report: &ValidationReport, color: bool) -> String {
    let mut out = String::new();
    for r in &report.results {
        let (icon, name) = if r.valid {
            (
                paint(color, "✓", |s| s.green().to_string()),
                paint(color, &r.schema_type, |s| s.green().bold().to_string()),
            )
        } else {
            (
                paint(color, "✗", |s| s.red().to_string()),
                paint(color, &r.schema_type, |s| s.red().bold().to_string()),
            )
        };
        match &r.source {
            Some(src) => {
                let _ = writeln!(out, "{} {} ({})", icon, name, src);
            }
            None => {
                let _ = writeln!(out, "{} {}", icon, name);
            }
        }
        for e in &r.errors {
            let _ = writeln!(
                out,
                "    {} {}",
                paint(color, "✖", |s| s.red().to_string()),
                e
            );
        }
        for w in &r.warnings {
            let _ = writeln!(
                out,
                "    {} {}",
                paint(color, "▲", |s| s.yellow().to_string()),
                w
            );
        }
    }
    let summary = format!(
        "— Summary — schemas={} valid={} errors={} warnings={}",
        report.total_schemas, report.valid_schemas, report.errors, report.warnings
    );
    let _ = writeln!(out, "{}", paint(color, &summary, |s| s.bold().to_string()));
    out
}

fn status_paint(status: Status) -> fn(&str) -> String {
    match status {
        Status::Excellent => |s| s.green().to_string(),
        Status::Good => |s| s.cyan().to_string(),
        Status::NeedsImprovement => |s| s.yellow().to_string(),
        Status::Critical => |s| s.red().to_string(),
    }
}

pub fn render_score(score: &AIVisibilityScore, color: bool) -> String {
    let mut out = String::new();
    let headline = format!(
        "AI Visibility Score: {}/{} (Grade {})",
        score.total_score, score.max_score, score.grade
    );
    let _ = writeln!(out, "{}", paint(color, &headline, |s| s.bold().to_string()));
    let _ = writeln!(out);
    for (_, c) in &score.breakdown {
        let status = paint(color, c.status.as_str(), status_paint(c.status));
        let _ = writeln!(
            out,
            "  {:<22} {:>2}/{:<2} ({:>3.0}%) {}",
            c.name, c.score, c.max_score, c.percentage, status
        );
    }
    if !score.strengths.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            paint(color, "Top strengths:", |s| s.green().bold().to_string())
        );
        for s in score.strengths.iter().take(TOP_STRENGTHS) {
            let _ = writeln!(out, "  + {}", s);
        }
    }
    if !score.recommendations.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            paint(color, "Top recommendations:", |s| s.yellow().bold().to_string())
        );
        for (i, r) in score
            .recommendations
            .iter()
            .take(TOP_RECOMMENDATIONS)
            .enumerate()
        {
            let _ = writeln!(out, "  {}. {}", i + 1, r);
        }
    }
    out
}

pub fn render_brand(report: &BrandConsistencyReport, color: bool) -> String {
    let mut out = String::new();
    let status = if report.is_consistent {
        paint(color, "✓ Consistent", |s| s.green().bold().to_string())
    } else {
        paint(color, "✗ Inconsistent", |s| s.red().bold().to_string())
    };
    let _ = writeln!(out, "Brand status: {}", status);
    let _ = writeln!(out, "Brand score: {}/100", report.score);

    let critical: Vec<_> = report.issues_with(Severity::Critical).collect();
    if !critical.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            paint(color, "Critical issues:", |s| s.red().bold().to_string())
        );
        for i in critical {
            let _ = writeln!(out, "  ✖ {} ({})", i.message, i.location);
        }
    }
    let high: Vec<_> = report.issues_with(Severity::High).collect();
    if !high.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            paint(color, "High-priority issues:", |s| s.yellow().bold().to_string())
        );
        for i in high.iter().take(TOP_BRAND_ITEMS) {
            let _ = writeln!(out, "  ▲ {} ({})", i.message, i.location);
        }
    }
    if !report.warnings.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            paint(color, "Warnings:", |s| s.yellow().to_string())
        );
        for w in report.warnings.iter().take(TOP_BRAND_ITEMS) {
            let _ = writeln!(out, "  • {}", w);
        }
    }
    let _ = writeln!(
        out,
        "\nPassed validations: {}/{}",
        report.validations.len(),
        report.total_checks()
    );
    out
}
