//! AI visibility score report.

use super::{CategoryScore, Grade};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Composite 0–100 score across the five visibility categories.
pub struct AIVisibilityScore {
    pub total_score: u32,
    pub max_score: u32,
    pub grade: Grade,
    /// `(category key, score)` in evaluation order, serialized as an object.
    #[serde(serialize_with = "ordered_map")]
    pub breakdown: Vec<(String, CategoryScore)>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Display-only timestamp; never scored.
    pub generated_at: String,
}

impl AIVisibilityScore {
    pub fn category(&self, key: &str) -> Option<&CategoryScore> {
        self.breakdown
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c)
    }
}

fn ordered_map<S: Serializer>(
    entries: &[(String, CategoryScore)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, c)| (k, c)))
}

#[cfg(test)]
mod tests {
    use crate::models::site::{SiteConfig, SiteInventory};
    use crate::visibility::calculate_score;

    #[test]
    fn breakdown_serializes_as_ordered_object() {
        let score = calculate_score(&SiteConfig::builtin(), &SiteInventory::builtin());
        let v = serde_json::to_value(&score).unwrap();
        let keys: Vec<&String> = v["breakdown"].as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "schemaCompleteness",
                "aiCrawlerFiles",
                "entityGraph",
                "contentReadiness",
                "citationSignals"
            ]
        );
        assert_eq!(v["breakdown"]["entityGraph"]["max_score"], 20);
    }
}
