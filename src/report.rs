//! Markdown reports for schema validation and AI visibility.
//!
//! Renderers are pure; `write_report` handles the filesystem side.

use crate::models::schema::ValidationReport;
use crate::models::visibility::AIVisibilityScore;
use crate::models::{Grade, Status};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render the schema suite as GitHub-flavored Markdown.
pub fn render_schema_report(report: &ValidationReport, generated_at: &str) -> String {
    let mut md = String::new();
    let rate = if report.total_schemas == 0 {
        0.0
    } else {
        report.valid_schemas as f64 / report.total_schemas as f64 * 100.0
    };
    let _ = write!(
        md,
        r#"# Schema Validation Report

Generated: {}

## Summary

| Metric | Value |
|--------|-------|
| **Total Schemas** | {} |
| **Valid Schemas** | {} |
| **Invalid Schemas** | {} |
| **Errors** | {} |
| **Warnings** | {} |
| **Success Rate** | {:.1}% |

## Results
"#,
        generated_at,
        report.total_schemas,
        report.valid_schemas,
        report.total_schemas - report.valid_schemas,
        report.errors,
        report.warnings,
        rate
    );
    for r in &report.results {
        let mark = if r.valid { "✅" } else { "❌" };
        let _ = write!(md, "\n### {} {}\n", mark, r.schema_type);
        if let Some(src) = &r.source {
            let _ = writeln!(md, "\nSource: `{}`", src);
        }
        if r.errors.is_empty() && r.warnings.is_empty() {
            let _ = writeln!(md, "\nNo issues found.");
            continue;
        }
        if !r.errors.is_empty() {
            let _ = writeln!(md, "\n**Errors**\n");
            for e in &r.errors {
                let _ = writeln!(md, "- {}", e);
            }
        }
        if !r.warnings.is_empty() {
            let _ = writeln!(md, "\n**Warnings**\n");
            for w in &r.warnings {
                let _ = writeln!(md, "- {}", w);
            }
        }
    }
    md
}

fn grade_emoji(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus | Grade::A => "🏆",
        Grade::B => "⭐",
        Grade::C => "⚠️",
        Grade::D => "❌",
        Grade::F => "💀",
    }
}

fn status_indicator(status: Status) -> &'static str {
    match status {
        Status::Excellent => "🟢 excellent",
        Status::Good => "🔵 good",
        Status::NeedsImprovement => "🟡 needs improvement",
        Status::Critical => "🔴 critical",
    }
}

/// Render the AI visibility score as GitHub-flavored Markdown.
pub fn render_visibility_report(score: &AIVisibilityScore) -> String {
    let mut md = String::new();
    let _ = write!(
        md,
        r#"# {} AI Visibility Report

**Grade: {}** | **Score: {}/{}**

Generated: {}

## Category Scores

| Category | Score | Percentage | Status |
|----------|-------|------------|--------|
"#,
        grade_emoji(score.grade),
        score.grade,
        score.total_score,
        score.max_score,
        score.generated_at
    );
    for (_, c) in &score.breakdown {
        let _ = writeln!(
            md,
            "| {} | {}/{} | {:.0}% | {} |",
            c.name,
            c.score,
            c.max_score,
            c.percentage,
            status_indicator(c.status)
        );
    }
    for (_, c) in &score.breakdown {
        let _ = write!(md, "\n### {}\n\n", c.name);
        for d in &c.details {
            let _ = writeln!(md, "- {}", d);
        }
    }
    for (title, items) in [
        ("Strengths", &score.strengths),
        ("Weaknesses", &score.weaknesses),
        ("Recommendations", &score.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        let _ = write!(md, "\n## {}\n\n", title);
        for item in items {
            let _ = writeln!(md, "- {}", item);
        }
    }
    md
}

/// Write a report, creating parent directories as needed.
pub fn write_report(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
