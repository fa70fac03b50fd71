//! Site configuration and content inventory.
//!
//! Both records describe the audited site and are passed explicitly to every
//! evaluator. `builtin()` describes the bundled IPTV site, used when
//! `seo.toml` has no `[site]` or `[inventory]` section. A section that is
//! present is read onto an empty record, so omitted fields stay absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Canonical brand identity and Knowledge Graph metadata.
pub struct SiteConfig {
    pub name: String,
    pub legal_name: Option<String>,
    pub alternate_name: Vec<String>,
    pub url: String,
    pub description: String,
    pub logo: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    /// Platform key (e.g. `twitter`) to profile URL.
    pub social: BTreeMap<String, String>,
    pub founding_date: Option<String>,
    pub slogan: Option<String>,
    pub founder: Option<String>,
    pub awards: Vec<String>,
    pub number_of_employees: Option<u32>,
    pub price_range: Option<String>,
}

impl SiteConfig {
    /// The bundled IPTV site.
    pub fn builtin() -> Self {
        let social = [
            ("facebook", "https://www.facebook.com/streamvistaiptv"),
            ("twitter", "https://twitter.com/streamvistatv"),
            ("instagram", "https://www.instagram.com/streamvistaiptv"),
            ("youtube", "https://www.youtube.com/@streamvistaiptv"),
            ("reddit", "https://www.reddit.com/r/streamvista"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        SiteConfig {
            name: "StreamVista IPTV".into(),
            legal_name: Some("StreamVista Media Ltd".into()),
            alternate_name: vec!["StreamVista".into(), "Stream Vista IPTV".into()],
            url: "https://www.streamvista.tv".into(),
            description: "Premium IPTV subscription with 20,000+ live channels, 4K sports, movies and series on every device, with setup guides for Firestick, Smart TV and Android.".into(),
            logo: "https://www.streamvista.tv/images/logo.png".into(),
            email: Some("support@streamvista.tv".into()),
            telephone: Some("+1-555-010-2030".into()),
            social,
            founding_date: Some("2019-03-01".into()),
            slogan: Some("Every channel, every screen.".into()),
            founder: Some("Daniel Mercer".into()),
            awards: vec![
                "Best IPTV Service 2023 - StreamTech Awards".into(),
                "Editor's Choice 2024 - Cord Cutters Review".into(),
                "Top Rated Streaming Provider 2024 - IPTV Insider".into(),
            ],
            number_of_employees: Some(45),
            price_range: Some("$$".into()),
        }
    }

    /// Social profile URLs that are non-empty, in platform order.
    pub fn same_as(&self) -> Vec<&str> {
        self.social
            .values()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Knowledge Graph fields as `(name, present)` pairs in canonical order.
    pub fn knowledge_graph_fields(&self) -> [(&'static str, bool); 6] {
        [
            ("foundingDate", non_empty(&self.founding_date)),
            ("slogan", non_empty(&self.slogan)),
            ("founder", non_empty(&self.founder)),
            ("awards", !self.awards.is_empty()),
            ("numberOfEmployees", self.number_of_employees.is_some_and(|n| n > 0)),
            ("priceRange", non_empty(&self.price_range)),
        ]
    }
}

fn non_empty(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// What the site publishes: schema types, crawler files, and content volume.
pub struct SiteInventory {
    /// Schema.org types emitted somewhere on the site.
    pub schema_types: Vec<String>,
    /// Whether schema objects cross-reference each other through `@id`.
    pub uses_entity_ids: bool,
    /// User agents explicitly allowed in robots.txt.
    pub allowed_crawlers: Vec<String>,
    /// Root-level crawler files served (e.g. `llms.txt`).
    pub crawler_files: Vec<String>,
    pub faq_count: u32,
    pub howto_guides: u32,
    pub glossary_terms: u32,
    pub comparison_pages: u32,
    pub statistics_cited: u32,
    pub cited_sources: u32,
    pub last_updated: Option<String>,
}

impl SiteInventory {
    /// Content inventory of the bundled IPTV site.
    pub fn builtin() -> Self {
        let strs = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        SiteInventory {
            schema_types: strs(&[
                "Organization",
                "WebSite",
                "Product",
                "FAQPage",
                "BreadcrumbList",
                "Article",
                "HowTo",
                "QAPage",
                "DefinedTermSet",
                "SiteNavigationElement",
                "ItemList",
            ]),
            uses_entity_ids: true,
            allowed_crawlers: strs(&[
                "GPTBot",
                "ClaudeBot",
                "PerplexityBot",
                "Google-Extended",
                "CCBot",
            ]),
            crawler_files: strs(&["robots.txt", "llms.txt", "llms-full.txt", "sitemap.xml"]),
            faq_count: 24,
            howto_guides: 8,
            glossary_terms: 30,
            comparison_pages: 3,
            statistics_cited: 6,
            cited_sources: 4,
            last_updated: Some("2025-01-15".into()),
        }
    }

    pub fn has_schema(&self, ty: &str) -> bool {
        self.schema_types.iter().any(|t| t == ty)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.crawler_files.iter().any(|f| f.eq_ignore_ascii_case(name))
    }

    pub fn allows_crawler(&self, agent: &str) -> bool {
        self.allowed_crawlers
            .iter()
            .any(|a| a.eq_ignore_ascii_case(agent))
    }
}
