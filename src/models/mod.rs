//! Shared data models for rule evaluation, category scores, and reports.
//!
//! - `site`: site configuration and content inventory fed to the evaluators.
//! - `schema`: schema validation results and the suite report.
//! - `visibility`: AI visibility score report.
//! - `brand`: brand consistency issues and report.

pub mod brand;
pub mod schema;
pub mod site;
pub mod visibility;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of evaluating one rule.
pub struct RuleResult {
    pub id: String,
    /// True when the rule awarded its full weight.
    pub passed: bool,
    pub points_awarded: u32,
    pub max_points: u32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Qualitative label derived from a category percentage.
pub enum Status {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl Status {
    /// ≥90 excellent, ≥75 good, ≥60 needs-improvement, else critical.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            Status::Excellent
        } else if pct >= 75.0 {
            Status::Good
        } else if pct >= 60.0 {
            Status::NeedsImprovement
        } else {
            Status::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Excellent => "excellent",
            Status::Good => "good",
            Status::NeedsImprovement => "needs-improvement",
            Status::Critical => "critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Letter grade for a total score out of 100.
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// ≥95 A+, ≥90 A, ≥80 B, ≥70 C, ≥60 D, else F.
    pub fn from_score(score: u32) -> Self {
        match score {
            95.. => Grade::APlus,
            90..=94 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Aggregate of one category's rule results.
pub struct CategoryScore {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub status: Status,
    /// One line per evaluated rule, in evaluation order.
    pub details: Vec<String>,
    #[serde(skip)]
    pub rules: Vec<RuleResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
/// Advisory note emitted by a rule alongside its score.
pub enum Advice {
    Strength(String),
    Weakness(String),
    Recommendation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds_match_boundaries() {
        let cases = [
            (100, "A+"),
            (95, "A+"),
            (94, "A"),
            (90, "A"),
            (89, "B"),
            (80, "B"),
            (79, "C"),
            (70, "C"),
            (69, "D"),
            (60, "D"),
            (59, "F"),
            (0, "F"),
        ];
        for (score, want) in cases {
            assert_eq!(Grade::from_score(score).as_str(), want, "score {score}");
        }
    }

    #[test]
    fn status_thresholds_match_boundaries() {
        assert_eq!(Status::from_percentage(100.0), Status::Excellent);
        assert_eq!(Status::from_percentage(90.0), Status::Excellent);
        assert_eq!(Status::from_percentage(89.9), Status::Good);
        assert_eq!(Status::from_percentage(75.0), Status::Good);
        assert_eq!(Status::from_percentage(74.9), Status::NeedsImprovement);
        assert_eq!(Status::from_percentage(60.0), Status::NeedsImprovement);
        assert_eq!(Status::from_percentage(59.9), Status::Critical);
        assert_eq!(Status::from_percentage(0.0), Status::Critical);
    }

    #[test]
    fn grade_serializes_with_plus_sign() {
        let v = serde_json::to_value(Grade::APlus).unwrap();
        assert_eq!(v, "A+");
        let s = serde_json::to_value(Status::NeedsImprovement).unwrap();
        assert_eq!(s, "needs-improvement");
    }
}
