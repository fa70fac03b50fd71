//! Brand consistency issue and report types.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points subtracted from the brand score per issue of this severity.
    pub const fn penalty(self) -> u32 {
        match self {
            Severity::Critical => 20,
            Severity::High => 10,
            Severity::Medium => 5,
            Severity::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Name,
    Url,
    Contact,
    Social,
    Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A brand consistency problem with the observed and expected values.
pub struct BrandIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    pub found: Option<String>,
    pub expected: Option<String>,
    /// Symbolic path to the offending config field, e.g. `site.email` or
    /// `site.social.twitter`.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandConsistencyReport {
    /// True when no critical issue was found; independent of `score`.
    pub is_consistent: bool,
    pub score: u32,
    pub issues: Vec<BrandIssue>,
    pub warnings: Vec<String>,
    pub validations: Vec<String>,
}

impl BrandConsistencyReport {
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &BrandIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Checks evaluated overall: passed validations plus every issue and warning.
    pub fn total_checks(&self) -> usize {
        self.validations.len() + self.issues.len() + self.warnings.len()
    }
}
