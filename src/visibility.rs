//! AI visibility scoring.
//!
//! Five categories with fixed budgets (schema completeness 25, AI crawler
//! files 15, entity graph 20, content readiness 20, citation signals 20) sum
//! to a 0–100 total. Each category is a table of weighted rules evaluated by
//! the `rules` engine; advice emitted by rules is collected into strengths,
//! weaknesses and recommendations in evaluation order.

use crate::models::site::{SiteConfig, SiteInventory};
use crate::models::visibility::AIVisibilityScore;
use crate::models::{Advice, Grade};
use crate::rules::{proportional, tiered, Category, Evaluation, Rule};
use tracing::debug;

/// Evaluator input: the site identity plus what the site publishes.
pub struct Audit<'a> {
    pub site: &'a SiteConfig,
    pub inventory: &'a SiteInventory,
}

pub const CORE_TYPES: [&str; 5] = [
    "Organization",
    "WebSite",
    "Product",
    "FAQPage",
    "BreadcrumbList",
];
pub const CONTENT_TYPES: [&str; 4] = ["Article", "HowTo", "QAPage", "DefinedTermSet"];
pub const NAVIGATION_TYPES: [&str; 2] = ["SiteNavigationElement", "ItemList"];
pub const AI_CRAWLERS: [&str; 5] = [
    "GPTBot",
    "ClaudeBot",
    "PerplexityBot",
    "Google-Extended",
    "CCBot",
];

/// The five categories in evaluation order.
pub fn categories<'a>() -> Vec<Category<Audit<'a>>> {
    vec![
        Category {
            key: "schemaCompleteness",
            name: "Schema Completeness",
            max_score: 25,
            rules: vec![
                Rule {
                    id: "core-types",
                    weight: 10,
                    check: core_types,
                },
                Rule {
                    id: "content-types",
                    weight: 8,
                    check: content_types,
                },
                Rule {
                    id: "navigation-types",
                    weight: 4,
                    check: navigation_types,
                },
                Rule {
                    id: "entity-ids",
                    weight: 3,
                    check: entity_ids,
                },
            ],
        },
        Category {
            key: "aiCrawlerFiles",
            name: "AI Crawler Files",
            max_score: 15,
            rules: vec![
                Rule {
                    id: "robots-ai-crawlers",
                    weight: 5,
                    check: robots_crawlers,
                },
                Rule {
                    id: "llms-txt",
                    weight: 5,
                    check: llms_txt,
                },
                Rule {
                    id: "llms-full-txt",
                    weight: 3,
                    check: llms_full_txt,
                },
                Rule {
                    id: "sitemap",
                    weight: 2,
                    check: sitemap,
                },
            ],
        },
        Category {
            key: "entityGraph",
            name: "Entity Graph",
            max_score: 20,
            rules: vec![
                Rule {
                    id: "organization-entity",
                    weight: 5,
                    check: organization_entity,
                },
                Rule {
                    id: "same-as-links",
                    weight: 5,
                    check: same_as_links,
                },
                Rule {
                    id: "founder",
                    weight: 3,
                    check: founder,
                },
                Rule {
                    id: "knowledge-graph-fields",
                    weight: 5,
                    check: knowledge_graph_fields,
                },
                Rule {
                    id: "alternate-names",
                    weight: 2,
                    check: alternate_names,
                },
            ],
        },
        Category {
            key: "contentReadiness",
            name: "Content Readiness",
            max_score: 20,
            rules: vec![
                Rule {
                    id: "faq-coverage",
                    weight: 6,
                    check: faq_coverage,
                },
                Rule {
                    id: "howto-guides",
                    weight: 4,
                    check: howto_guides,
                },
                Rule {
                    id: "glossary",
                    weight: 4,
                    check: glossary,
                },
                Rule {
                    id: "comparison-pages",
                    weight: 3,
                    check: comparison_pages,
                },
                Rule {
                    id: "site-description",
                    weight: 3,
                    check: site_description,
                },
            ],
        },
        Category {
            key: "citationSignals",
            name: "Citation Signals",
            max_score: 20,
            rules: vec![
                Rule {
                    id: "awards",
                    weight: 5,
                    check: awards,
                },
                Rule {
                    id: "founding-date",
                    weight: 3,
                    check: founding_date,
                },
                Rule {
                    id: "statistics",
                    weight: 4,
                    check: statistics,
                },
                Rule {
                    id: "cited-sources",
                    weight: 4,
                    check: cited_sources,
                },
                Rule {
                    id: "freshness",
                    weight: 4,
                    check: freshness,
                },
            ],
        },
    ]
}

/// Compute the composite score for a site.
///
/// Deterministic for fixed input except `generated_at`, which is display-only.
pub fn calculate_score(site: &SiteConfig, inventory: &SiteInventory) -> AIVisibilityScore {
    let audit = Audit { site, inventory };
    let mut breakdown = Vec::new();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();
    let mut total = 0u32;
    let mut max = 0u32;
    for category in categories() {
        let (score, advice) = category.evaluate(&audit);
        debug!(
            category = category.key,
            score = score.score,
            max = score.max_score,
            "category scored"
        );
        total += score.score;
        max += score.max_score;
        for a in advice {
            match a {
                Advice::Strength(s) => strengths.push(s),
                Advice::Weakness(s) => weaknesses.push(s),
                Advice::Recommendation(s) => recommendations.push(s),
            }
        }
        breakdown.push((category.key.to_string(), score));
    }
    let total_score = total.min(max);
    AIVisibilityScore {
        total_score,
        max_score: max,
        grade: Grade::from_score(total_score),
        breakdown,
        recommendations,
        strengths,
        weaknesses,
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn missing<'t>(types: &[&'t str], inv: &SiteInventory) -> Vec<&'t str> {
    types.iter().copied().filter(|t| !inv.has_schema(t)).collect()
}

fn type_coverage(label: &str, types: &[&str], inv: &SiteInventory) -> Evaluation {
    let absent = missing(types, inv);
    let present = types.len() - absent.len();
    let message = format!("{} published: {}/{}", label, present, types.len());
    if absent.is_empty() {
        Evaluation::full(message)
            .strength(format!("All {} published", label.to_lowercase()))
    } else {
        Evaluation::points(2 * present as u32, message)
            .recommend(format!("Add schema markup for: {}", absent.join(", ")))
    }
}

fn core_types(a: &Audit<'_>) -> Evaluation {
    type_coverage("Core schema types", &CORE_TYPES, a.inventory)
}

fn content_types(a: &Audit<'_>) -> Evaluation {
    type_coverage("Content schema types", &CONTENT_TYPES, a.inventory)
}

fn navigation_types(a: &Audit<'_>) -> Evaluation {
    type_coverage("Navigation schema types", &NAVIGATION_TYPES, a.inventory)
}

fn entity_ids(a: &Audit<'_>) -> Evaluation {
    if a.inventory.uses_entity_ids {
        Evaluation::full("Schema entities cross-reference via @id")
    } else {
        Evaluation::zero("Schema entities are not linked with @id references")
            .recommend("Link Organization, WebSite and pages through @id references")
    }
}

fn robots_crawlers(a: &Audit<'_>) -> Evaluation {
    let blocked: Vec<&str> = AI_CRAWLERS
        .iter()
        .copied()
        .filter(|c| !a.inventory.allows_crawler(c))
        .collect();
    let allowed = AI_CRAWLERS.len() - blocked.len();
    let message = format!(
        "robots.txt allows {}/{} AI crawlers",
        allowed,
        AI_CRAWLERS.len()
    );
    let advice = format!("Allow AI crawlers in robots.txt: {}", blocked.join(", "));
    if blocked.is_empty() {
        Evaluation::full(message)
            .strength("All major AI crawlers allowed in robots.txt")
    } else if allowed == 0 {
        Evaluation::zero(message)
            .weakness("robots.txt does not allow any AI crawler")
            .recommend(advice)
    } else {
        Evaluation::points(allowed as u32, message)
            .recommend(advice)
    }
}

fn crawler_file(a: &Audit<'_>, file: &str, purpose: &str) -> Evaluation {
    if a.inventory.has_file(file) {
        Evaluation::full(format!("{} present", file))
    } else {
        Evaluation::zero(format!("{} missing", file))
            .weakness(format!("No {} file", file))
            .recommend(format!("Publish /{} {}", file, purpose))
    }
}

fn llms_txt(a: &Audit<'_>) -> Evaluation {
    let ev = crawler_file(a, "llms.txt", "summarizing the site for language models");
    if a.inventory.has_file("llms.txt") {
        ev.strength("llms.txt guides AI assistants to key pages")
    } else {
        ev
    }
}

fn llms_full_txt(a: &Audit<'_>) -> Evaluation {
    crawler_file(a, "llms-full.txt", "with full-text content for AI ingestion")
}

fn sitemap(a: &Audit<'_>) -> Evaluation {
    crawler_file(a, "sitemap.xml", "listing every indexable page")
}

fn organization_entity(a: &Audit<'_>) -> Evaluation {
    if !a.site.name.trim().is_empty() && !a.site.url.trim().is_empty() {
        Evaluation::full(format!("Organization entity defined: {}", a.site.name))
    } else {
        Evaluation::zero("Organization entity incomplete (name or url missing)")
            .weakness("Organization entity is not fully defined")
            .recommend("Set the organization name and canonical URL")
    }
}

fn same_as_links(a: &Audit<'_>) -> Evaluation {
    let n = a.site.same_as().len() as u32;
    let message = format!("{} sameAs links", n);
    match tiered(n, &[(5, 5), (3, 3)]) {
        5 => Evaluation::full(message)
            .strength(format!("Strong entity linking with {} sameAs profiles", n)),
        0 => Evaluation::zero(message)
            .weakness("Too few sameAs links for entity disambiguation")
            .recommend("Add at least 5 sameAs links (social profiles, Wikidata, Crunchbase)"),
        p => Evaluation::points(p, message)
            .recommend("Add more sameAs links to reach 5 authoritative profiles"),
    }
}

fn founder(a: &Audit<'_>) -> Evaluation {
    match a.site.founder.as_deref().map(str::trim) {
        Some(f) if !f.is_empty() => Evaluation::full(format!("Founder entity: {}", f)),
        _ => Evaluation::zero("No founder entity")
            .recommend("Add a founder Person entity to the Organization schema"),
    }
}

fn knowledge_graph_fields(a: &Audit<'_>) -> Evaluation {
    let fields = a.site.knowledge_graph_fields();
    let absent: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    let present = fields.len() - absent.len();
    let message = format!("Knowledge Graph fields: {}/{}", present, fields.len());
    if absent.is_empty() {
        Evaluation::full(message)
            .strength("Complete Knowledge Graph metadata")
    } else {
        Evaluation::points(proportional(5, present, fields.len()), message)
            .recommend(format!("Fill Knowledge Graph fields: {}", absent.join(", ")))
    }
}

fn alternate_names(a: &Audit<'_>) -> Evaluation {
    let n = a.site.alternate_name.len();
    if n > 0 {
        Evaluation::full(format!("{} alternate names", n))
    } else {
        Evaluation::zero("No alternate names")
            .recommend("List alternate brand spellings in alternateName")
    }
}

fn faq_coverage(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.faq_count;
    let message = format!("{} FAQ answers", n);
    match tiered(n, &[(20, 6), (10, 4), (1, 2)]) {
        6 => Evaluation::full(message)
            .strength(format!("Extensive FAQ coverage ({} answers)", n)),
        0 => Evaluation::zero(message)
            .weakness("No FAQ content for answer engines")
            .recommend("Publish FAQ pages with FAQPage schema targeting People Also Ask"),
        p => Evaluation::points(p, message)
            .recommend("Expand FAQ content to 20+ answered questions"),
    }
}

fn howto_guides(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.howto_guides;
    let message = format!("{} how-to guides", n);
    match tiered(n, &[(5, 4), (1, 2)]) {
        4 => Evaluation::full(message),
        0 => Evaluation::zero(message)
            .recommend("Write step-by-step setup guides with HowTo schema"),
        p => Evaluation::points(p, message)
            .recommend("Add more device setup guides"),
    }
}

fn glossary(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.glossary_terms;
    let message = format!("{} glossary terms", n);
    match tiered(n, &[(20, 4), (5, 2)]) {
        4 => Evaluation::full(message),
        0 => Evaluation::zero(message)
            .recommend("Build a glossary with DefinedTermSet schema"),
        p => Evaluation::points(p, message)
            .recommend("Grow the glossary to 20+ defined terms"),
    }
}

fn comparison_pages(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.comparison_pages;
    let message = format!("{} comparison pages", n);
    match tiered(n, &[(3, 3), (1, 1)]) {
        3 => Evaluation::full(message),
        0 => Evaluation::zero(message)
            .recommend("Add comparison pages against alternatives"),
        p => Evaluation::points(p, message)
            .recommend("Add more comparison pages"),
    }
}

fn site_description(a: &Audit<'_>) -> Evaluation {
    let len = a.site.description.trim().chars().count();
    let message = format!("Site description length: {} characters", len);
    if (50..=160).contains(&len) {
        Evaluation::full(message)
    } else {
        Evaluation::zero(message)
            .recommend("Keep the site description between 50 and 160 characters")
    }
}

fn awards(a: &Audit<'_>) -> Evaluation {
    let n = a.site.awards.len() as u32;
    let message = format!("{} awards listed", n);
    match tiered(n, &[(3, 5), (1, 3)]) {
        5 => Evaluation::full(message)
            .strength("Award recognition supports authority"),
        0 => Evaluation::zero(message)
            .weakness("No awards or recognitions listed")
            .recommend("List awards and press recognition in the Organization schema"),
        p => Evaluation::points(p, message)
            .recommend("Document additional awards or certifications"),
    }
}

fn founding_date(a: &Audit<'_>) -> Evaluation {
    match a.site.founding_date.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => Evaluation::full(format!("Founding date: {}", d)),
        _ => Evaluation::zero("No founding date")
            .recommend("Add foundingDate to establish history"),
    }
}

fn statistics(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.statistics_cited;
    let message = format!("{} statistics cited", n);
    match tiered(n, &[(10, 4), (3, 2)]) {
        4 => Evaluation::full(message)
            .strength("Content is rich in quotable statistics"),
        0 => Evaluation::zero(message)
            .recommend("Include concrete statistics AI engines can quote"),
        p => Evaluation::points(p, message)
            .recommend("Add more data points and statistics to key pages"),
    }
}

fn cited_sources(a: &Audit<'_>) -> Evaluation {
    let n = a.inventory.cited_sources;
    let message = format!("{} external sources cited", n);
    match tiered(n, &[(5, 4), (1, 2)]) {
        4 => Evaluation::full(message),
        0 => Evaluation::zero(message)
            .weakness("No external sources cited")
            .recommend("Cite authoritative external sources"),
        p => Evaluation::points(p, message)
            .recommend("Cite at least 5 authoritative sources"),
    }
}

fn freshness(a: &Audit<'_>) -> Evaluation {
    match a.inventory.last_updated.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => Evaluation::full(format!("Last updated: {}", d)),
        _ => Evaluation::zero("No last-updated date published")
            .recommend("Show a visible last-updated date on evergreen pages"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn strip_stamp(mut s: AIVisibilityScore) -> AIVisibilityScore {
        s.generated_at.clear();
        s
    }

    #[test]
    fn category_budgets_sum_to_one_hundred() {
        let cats = categories();
        let budgets: Vec<u32> = cats.iter().map(|c| c.max_score).collect();
        assert_eq!(budgets, vec![25, 15, 20, 20, 20]);
        for c in &cats {
            assert_eq!(c.declared_weight(), c.max_score, "category {}", c.key);
        }
    }

    #[test]
    fn default_site_scores_deterministically() {
        let site = SiteConfig::builtin();
        let inv = SiteInventory::builtin();
        let a = strip_stamp(calculate_score(&site, &inv));
        let b = strip_stamp(calculate_score(&site, &inv));
        assert_eq!(a, b);
        // statistics 2/4, cited sources 2/4 are the only partial rules
        assert_eq!(a.total_score, 96);
        assert_eq!(a.grade, Grade::APlus);
        assert_eq!(a.max_score, 100);
    }

    #[test]
    fn every_rule_writes_one_detail_line() {
        let score = calculate_score(&SiteConfig::builtin(), &SiteInventory::builtin());
        let keys: Vec<&str> = score.breakdown.iter().map(|(k, _)| k.as_str()).collect();
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
        let lines: Vec<usize> = score.breakdown.iter().map(|(_, c)| c.details.len()).collect();
        assert_eq!(lines, vec![4, 4, 5, 5, 5]);
    }

    #[test]
    fn empty_site_scores_zero_and_stays_in_bounds() {
        let score = calculate_score(&SiteConfig::default(), &SiteInventory::default());
        assert_eq!(score.total_score, 0);
        assert_eq!(score.grade, Grade::F);
        for (_, c) in &score.breakdown {
            assert_eq!(c.score, 0);
            assert_eq!(c.status, Status::Critical);
        }
        assert!(score.strengths.is_empty());
        assert!(!score.weaknesses.is_empty());
        assert!(!score.recommendations.is_empty());
    }

    #[test]
    fn same_as_tiers_award_partial_credit() {
        let mut site = SiteConfig::builtin();
        let inv = SiteInventory::builtin();
        let entity = |s: &SiteConfig| {
            calculate_score(s, &inv)
                .category("entityGraph")
                .map(|c| c.rules[1].points_awarded)
        };
        assert_eq!(entity(&site), Some(5));
        site.social.remove("reddit");
        site.social.remove("youtube");
        assert_eq!(entity(&site), Some(3));
        site.social.remove("instagram");
        assert_eq!(entity(&site), Some(0));
        let score = calculate_score(&site, &inv);
        assert!(score
            .weaknesses
            .contains(&"Too few sameAs links for entity disambiguation".to_string()));
    }

    #[test]
    fn passing_more_checks_never_lowers_total() {
        let site = SiteConfig::builtin();
        let mut inv = SiteInventory::default();
        let mut last = calculate_score(&site, &inv).total_score;
        let steps: Vec<Box<dyn Fn(&mut SiteInventory)>> = vec![
            Box::new(|i: &mut SiteInventory| i.schema_types.push("Organization".into())),
            Box::new(|i: &mut SiteInventory| i.crawler_files.push("llms.txt".into())),
            Box::new(|i: &mut SiteInventory| i.allowed_crawlers.push("GPTBot".into())),
            Box::new(|i: &mut SiteInventory| i.faq_count = 12),
            Box::new(|i: &mut SiteInventory| i.faq_count = 25),
            Box::new(|i: &mut SiteInventory| i.statistics_cited = 10),
            Box::new(|i: &mut SiteInventory| i.last_updated = Some("2025-02-01".into())),
        ];
        for step in steps {
            step(&mut inv);
            let next = calculate_score(&site, &inv).total_score;
            assert!(next >= last, "{} < {}", next, last);
            last = next;
        }
    }

    #[test]
    fn category_scores_never_exceed_budget() {
        let mut inv = SiteInventory::builtin();
        inv.faq_count = 10_000;
        inv.statistics_cited = 500;
        inv.cited_sources = 500;
        let score = calculate_score(&SiteConfig::builtin(), &inv);
        assert!(score.total_score <= 100);
        for (_, c) in &score.breakdown {
            assert!(c.score <= c.max_score);
        }
        assert_eq!(score.total_score, 100);
    }
}
