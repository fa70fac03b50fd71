//! Rule and category engine for weighted checklist scoring.
//!
//! A `Category` is an ordered table of `Rule`s. Each rule names a weight and a
//! check function; the check returns an `Evaluation` (award, message, advice).
//! The engine clamps awards to the rule's weight, renders one detail line per
//! rule, and sums the category against its fixed maximum.

use crate::models::{Advice, CategoryScore, RuleResult, Status};
use tracing::debug;

/// Points a check grants, resolved against the rule weight by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Award {
    Full,
    Points(u32),
    Zero,
}

/// What a single check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub award: Award,
    pub message: String,
    pub advice: Vec<Advice>,
}

impl Evaluation {
    pub fn full(message: impl Into<String>) -> Self {
        Self::with(Award::Full, message)
    }

    pub fn zero(message: impl Into<String>) -> Self {
        Self::with(Award::Zero, message)
    }

    pub fn points(points: u32, message: impl Into<String>) -> Self {
        Self::with(Award::Points(points), message)
    }

    fn with(award: Award, message: impl Into<String>) -> Self {
        Evaluation {
            award,
            message: message.into(),
            advice: Vec::new(),
        }
    }

    pub fn strength(mut self, text: impl Into<String>) -> Self {
        self.advice.push(Advice::Strength(text.into()));
        self
    }

    pub fn weakness(mut self, text: impl Into<String>) -> Self {
        self.advice.push(Advice::Weakness(text.into()));
        self
    }

    pub fn recommend(mut self, text: impl Into<String>) -> Self {
        self.advice.push(Advice::Recommendation(text.into()));
        self
    }
}

pub type Check<I> = fn(&I) -> Evaluation;

/// A named, weighted check.
pub struct Rule<I> {
    pub id: &'static str,
    pub weight: u32,
    pub check: Check<I>,
}

/// A group of rules scored against a fixed maximum.
pub struct Category<I> {
    pub key: &'static str,
    pub name: &'static str,
    pub max_score: u32,
    pub rules: Vec<Rule<I>>,
}

impl<I> Category<I> {
    /// Sum of declared rule weights; equals `max_score` for a well-formed table.
    pub fn declared_weight(&self) -> u32 {
        self.rules.iter().map(|r| r.weight).sum()
    }

    /// Run every rule in order and aggregate the category.
    ///
    /// Advice from all rules is returned alongside the score, in rule order.
    pub fn evaluate(&self, input: &I) -> (CategoryScore, Vec<Advice>) {
        let mut results = Vec::with_capacity(self.rules.len());
        let mut details = Vec::with_capacity(self.rules.len());
        let mut advice = Vec::new();
        for rule in &self.rules {
            let ev = (rule.check)(input);
            let result = resolve(rule, &ev);
            debug!(
                category = self.key,
                rule = rule.id,
                points = result.points_awarded,
                weight = rule.weight,
                "rule evaluated"
            );
            details.push(detail_line(&result));
            advice.extend(ev.advice);
            results.push(result);
        }
        let raw: u32 = results.iter().map(|r| r.points_awarded).sum();
        let score = raw.min(self.max_score);
        let pct = percentage(score, self.max_score);
        let category = CategoryScore {
            name: self.name.to_string(),
            score,
            max_score: self.max_score,
            percentage: pct,
            status: Status::from_percentage(pct),
            details,
            rules: results,
        };
        (category, advice)
    }
}

fn resolve<I>(rule: &Rule<I>, ev: &Evaluation) -> RuleResult {
    let points = match ev.award {
        Award::Full => rule.weight,
        Award::Points(n) => n.min(rule.weight),
        Award::Zero => 0,
    };
    RuleResult {
        id: rule.id.to_string(),
        passed: points == rule.weight,
        points_awarded: points,
        max_points: rule.weight,
        message: ev.message.clone(),
    }
}

fn detail_line(r: &RuleResult) -> String {
    let mark = if r.passed {
        "✓"
    } else if r.points_awarded > 0 {
        "◐"
    } else {
        "✗"
    };
    format!(
        "{} {} ({}/{})",
        mark, r.message, r.points_awarded, r.max_points
    )
}

/// `score / max * 100`, or 0 for an empty budget.
pub fn percentage(score: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(max) * 100.0
}

/// Points for the first tier whose threshold `value` reaches.
///
/// Tiers are `(threshold, points)` ordered from highest threshold down.
pub fn tiered(value: u32, tiers: &[(u32, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Integer share of `weight` for `present` out of `total` items.
pub fn proportional(weight: u32, present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let present = present.min(total) as u64;
    (u64::from(weight) * present / total as u64) as u32
}
