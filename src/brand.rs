//! Brand consistency validation with deduction-based scoring.
//!
//! Five check groups (name, URL, contact, social, entity data) each return
//! their own findings. The score starts at 100 and loses a fixed penalty per
//! issue severity plus one point per warning, floored at 0. Consistency only
//! depends on the absence of critical issues.

use crate::models::brand::{BrandConsistencyReport, BrandIssue, IssueCategory, Severity};
use crate::models::site::SiteConfig;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Points subtracted per warning.
pub const WARNING_PENALTY: u32 = 1;

/// Minimum number of social profiles before the set counts as healthy.
const MIN_SOCIAL_PROFILES: usize = 3;

/// Expected host fragment for known social platforms.
pub const PLATFORM_DOMAINS: [(&str, &str); 11] = [
    ("facebook", "facebook.com"),
    ("twitter", "twitter.com"),
    ("instagram", "instagram.com"),
    ("youtube", "youtube.com"),
    ("linkedin", "linkedin.com"),
    ("tiktok", "tiktok.com"),
    ("pinterest", "pinterest.com"),
    ("reddit", "reddit.com"),
    ("telegram", "t.me"),
    ("github", "github.com"),
    ("wikidata", "wikidata.org"),
];

#[derive(Debug, Default, PartialEq, Eq)]
/// Output of one check group.
pub struct Findings {
    pub issues: Vec<BrandIssue>,
    pub warnings: Vec<String>,
    pub validations: Vec<String>,
}

impl Findings {
    fn issue(
        &mut self,
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
        found: Option<String>,
        expected: Option<String>,
        location: impl Into<String>,
    ) {
        self.issues.push(BrandIssue {
            severity,
            category,
            message: message.into(),
            found,
            expected,
            location: location.into(),
        });
    }

    fn extend(&mut self, other: Findings) {
        self.issues.extend(other.issues);
        self.warnings.extend(other.warnings);
        self.validations.extend(other.validations);
    }
}

/// Run every check group against the site and score the result.
pub fn validate(site: &SiteConfig) -> BrandConsistencyReport {
    let mut all = Findings::default();
    for (group, findings) in [
        ("name", check_name(site)),
        ("url", check_url(site)),
        ("contact", check_contact(site)),
        ("social", check_social(site)),
        ("entity", check_entity(site)),
    ] {
        debug!(
            group,
            issues = findings.issues.len(),
            warnings = findings.warnings.len(),
            "brand checks evaluated"
        );
        all.extend(findings);
    }
    let score = deduction_score(&all.issues, all.warnings.len());
    let is_consistent = !all.issues.iter().any(|i| i.severity == Severity::Critical);
    BrandConsistencyReport {
        is_consistent,
        score,
        issues: all.issues,
        warnings: all.warnings,
        validations: all.validations,
    }
}

/// `100 − Σ severity penalties − warnings`, floored at 0.
pub fn deduction_score(issues: &[BrandIssue], warnings: usize) -> u32 {
    let penalty: u64 = issues
        .iter()
        .map(|i| u64::from(i.severity.penalty()))
        .sum::<u64>()
        + warnings as u64 * u64::from(WARNING_PENALTY);
    100u64.saturating_sub(penalty) as u32
}

pub fn check_name(site: &SiteConfig) -> Findings {
    let mut f = Findings::default();
    match site.legal_name.as_deref() {
        Some(legal) if legal == site.name => {
            f.validations
                .push("Legal name matches brand name".to_string());
        }
        legal => f.warnings.push(format!(
            "Legal name \"{}\" differs from brand name \"{}\"",
            legal.unwrap_or("(not set)"),
            site.name
        )),
    }
    if site.alternate_name.is_empty() {
        f.warnings
            .push("No alternate names defined for brand variations".to_string());
    } else {
        f.validations.push(format!(
            "{} alternate names defined",
            site.alternate_name.len()
        ));
    }
    let canonical = site.name.to_lowercase();
    for (i, alt) in site.alternate_name.iter().enumerate() {
        if alt.to_lowercase() == canonical && *alt != site.name {
            f.issue(
                Severity::Medium,
                IssueCategory::Name,
                "Alternate name differs from brand name only by casing",
                Some(alt.clone()),
                Some(site.name.clone()),
                format!("site.alternate_name[{}]", i),
            );
        }
    }
    f
}

pub fn check_url(site: &SiteConfig) -> Findings {
    let mut f = Findings::default();
    let url = site.url.as_str();
    if url.starts_with("https://") {
        f.validations.push("Site URL uses HTTPS".to_string());
    } else {
        f.issue(
            Severity::High,
            IssueCategory::Url,
            "Site URL must use HTTPS",
            Some(url.to_string()),
            Some("https://…".to_string()),
            "site.url",
        );
    }
    if url.ends_with('/') {
        f.warnings
            .push(format!("Site URL has a trailing slash: {}", url));
    }
    let host = host_of(url);
    if host.starts_with("www.") {
        f.validations
            .push(format!("Canonical host uses www subdomain: {}", host));
    } else {
        f.validations
            .push(format!("Canonical host uses non-www domain: {}", host));
    }
    f
}

pub fn check_contact(site: &SiteConfig) -> Findings {
    let mut f = Findings::default();
    match site.email.as_deref().map(str::trim) {
        None | Some("") => f.issue(
            Severity::Critical,
            IssueCategory::Contact,
            "Contact email is missing",
            None,
            Some("local@domain.tld".to_string()),
            "site.email",
        ),
        Some(email) if !email_regex().is_match(email) => f.issue(
            Severity::High,
            IssueCategory::Contact,
            "Contact email is not a valid address",
            Some(email.to_string()),
            Some("local@domain.tld".to_string()),
            "site.email",
        ),
        Some(email) => f
            .validations
            .push(format!("Contact email is valid: {}", email)),
    }
    match site.telephone.as_deref().map(str::trim) {
        None | Some("") => f
            .warnings
            .push("No telephone number configured".to_string()),
        Some(tel) if !tel.starts_with('+') => f.warnings.push(format!(
            "Telephone is not in international format: {}",
            tel
        )),
        Some(tel) => f
            .validations
            .push(format!("Telephone uses international format: {}", tel)),
    }
    f
}

pub fn check_social(site: &SiteConfig) -> Findings {
    let mut f = Findings::default();
    let profiles: Vec<(&String, &str)> = site
        .social
        .iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect();
    match profiles.len() {
        0 => f.issue(
            Severity::High,
            IssueCategory::Social,
            "No social profiles configured",
            None,
            Some(format!("at least {} profiles", MIN_SOCIAL_PROFILES)),
            "site.social",
        ),
        n if n < MIN_SOCIAL_PROFILES => f.warnings.push(format!(
            "Only {} social profiles configured (recommend at least {})",
            n, MIN_SOCIAL_PROFILES
        )),
        n => f
            .validations
            .push(format!("{} social profiles configured", n)),
    }
    for (platform, url) in profiles {
        let location = format!("site.social.{}", platform);
        if !url.starts_with("https://") {
            f.issue(
                Severity::Medium,
                IssueCategory::Social,
                format!("{} profile URL does not use HTTPS", platform),
                Some(url.to_string()),
                Some("https://…".to_string()),
                location.clone(),
            );
        }
        if let Some(domain) = expected_domain(platform) {
            if !url.contains(domain) {
                f.issue(
                    Severity::High,
                    IssueCategory::Social,
                    format!("{} profile URL does not match the platform domain", platform),
                    Some(url.to_string()),
                    Some(domain.to_string()),
                    location,
                );
            }
        }
    }
    f
}

pub fn check_entity(site: &SiteConfig) -> Findings {
    let mut f = Findings::default();
    let fields = site.knowledge_graph_fields();
    let present = fields.iter().filter(|(_, p)| *p).count();
    let pct = (present as f64 / fields.len() as f64 * 100.0).round() as u32;
    if pct < 50 {
        let absent: Vec<&str> = fields
            .iter()
            .filter(|(_, p)| !p)
            .map(|(n, _)| *n)
            .collect();
        f.issue(
            Severity::Medium,
            IssueCategory::Entity,
            format!(
                "Knowledge Graph data is incomplete; missing {}",
                absent.join(", ")
            ),
            Some(format!("{}%", pct)),
            Some("at least 50%".to_string()),
            "site",
        );
    } else if pct < 80 {
        f.warnings
            .push(format!("Knowledge Graph data is only {}% complete", pct));
    }
    f.validations
        .push(format!("Knowledge Graph completeness: {}%", pct));

    let links = site.same_as().len();
    if links < MIN_SOCIAL_PROFILES {
        f.issue(
            Severity::Medium,
            IssueCategory::Entity,
            "Too few sameAs links for entity disambiguation",
            Some(links.to_string()),
            Some(format!("at least {}", MIN_SOCIAL_PROFILES)),
            "site.social",
        );
    }
    f
}

fn expected_domain(platform: &str) -> Option<&'static str> {
    PLATFORM_DOMAINS
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(platform))
        .map(|(_, d)| *d)
}

fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent_site() -> SiteConfig {
        let site = SiteConfig::builtin();
        SiteConfig {
            legal_name: Some(site.name.clone()),
            ..site
        }
    }

    fn issue(severity: Severity) -> BrandIssue {
        BrandIssue {
            severity,
            category: IssueCategory::Entity,
            message: "x".into(),
            found: None,
            expected: None,
            location: "site".into(),
        }
    }

    #[test]
    fn default_site_only_warns_about_legal_name() {
        let report = validate(&SiteConfig::builtin());
        assert!(report.is_consistent);
        assert!(report.issues.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Legal name"));
        assert_eq!(report.score, 99);
    }

    #[test]
    fn clean_site_scores_full_marks() {
        let report = validate(&consistent_site());
        assert_eq!(report.score, 100);
        assert!(report
            .validations
            .contains(&"Knowledge Graph completeness: 100%".to_string()));
        assert!(report
            .validations
            .contains(&"Canonical host uses www subdomain: www.streamvista.tv".to_string()));
    }

    #[test]
    fn high_issue_lowers_score_but_stays_consistent() {
        let site = SiteConfig {
            url: "http://www.streamvista.tv".into(),
            ..consistent_site()
        };
        let report = validate(&site);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::High);
        assert_eq!(report.issues[0].location, "site.url");
        assert!(report.is_consistent);
        assert_eq!(report.score, 90);
    }

    #[test]
    fn missing_email_is_critical_and_inconsistent() {
        let site = SiteConfig {
            email: None,
            ..consistent_site()
        };
        let report = validate(&site);
        assert!(!report.is_consistent);
        assert_eq!(report.score, 80);
        assert_eq!(report.issues[0].category, IssueCategory::Contact);
    }

    #[test]
    fn malformed_email_is_high() {
        let site = SiteConfig {
            email: Some("support@streamvista".into()),
            ..consistent_site()
        };
        let f = check_contact(&site);
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].severity, Severity::High);
        assert_eq!(f.issues[0].found.as_deref(), Some("support@streamvista"));
    }

    #[test]
    fn telephone_warnings() {
        let none = SiteConfig {
            telephone: None,
            ..consistent_site()
        };
        assert_eq!(
            check_contact(&none).warnings,
            vec!["No telephone number configured"]
        );
        let local = SiteConfig {
            telephone: Some("555-0100".into()),
            ..consistent_site()
        };
        assert_eq!(
            check_contact(&local).warnings,
            vec!["Telephone is not in international format: 555-0100"]
        );
    }

    #[test]
    fn score_is_floored_at_zero() {
        let issues: Vec<BrandIssue> = (0..6).map(|_| issue(Severity::Critical)).collect();
        assert_eq!(deduction_score(&issues, 0), 0);
        let mixed = vec![
            issue(Severity::Critical),
            issue(Severity::High),
            issue(Severity::Medium),
            issue(Severity::Low),
        ];
        assert_eq!(deduction_score(&mixed, 3), 100 - 20 - 10 - 5 - 2 - 3);
    }

    #[test]
    fn casing_only_alternate_name_is_medium_issue() {
        let site = SiteConfig {
            alternate_name: vec!["StreamVista".into(), "streamvista iptv".into()],
            ..consistent_site()
        };
        let f = check_name(&site);
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].severity, Severity::Medium);
        assert_eq!(f.issues[0].location, "site.alternate_name[1]");
        assert_eq!(f.issues[0].expected.as_deref(), Some("StreamVista IPTV"));
    }

    #[test]
    fn url_trailing_slash_warns_and_non_www_is_recorded() {
        let site = SiteConfig {
            url: "https://streamvista.tv/".into(),
            ..consistent_site()
        };
        let f = check_url(&site);
        assert!(f.issues.is_empty());
        assert_eq!(f.warnings.len(), 1);
        assert!(f
            .validations
            .contains(&"Canonical host uses non-www domain: streamvista.tv".to_string()));
    }

    #[test]
    fn social_profiles_are_checked_per_platform() {
        let mut site = consistent_site();
        site.social.clear();
        site.social
            .insert("twitter".into(), "https://x.com/streamvista".into());
        site.social
            .insert("facebook".into(), "http://facebook.com/streamvista".into());
        let f = check_social(&site);
        assert_eq!(f.warnings.len(), 1);
        let sev: Vec<Severity> = f.issues.iter().map(|i| i.severity).collect();
        assert_eq!(sev, vec![Severity::Medium, Severity::High]);
        assert_eq!(f.issues[0].location, "site.social.facebook");
        assert_eq!(f.issues[1].expected.as_deref(), Some("twitter.com"));
    }

    #[test]
    fn unknown_platform_skips_domain_check() {
        let mut site = consistent_site();
        site.social
            .insert("mastodon".into(), "https://mastodon.social/@x".into());
        let f = check_social(&site);
        assert!(f
            .issues
            .iter()
            .all(|i| i.location != "site.social.mastodon"));
        assert!(!f.issues.iter().any(|i| i.severity == Severity::High));

        site.social
            .insert("mastodon".into(), "http://mastodon.social/@x".into());
        let f = check_social(&site);
        let mastodon: Vec<Severity> = f
            .issues
            .iter()
            .filter(|i| i.location == "site.social.mastodon")
            .map(|i| i.severity)
            .collect();
        assert_eq!(mastodon, vec![Severity::Medium]);
    }

    #[test]
    fn no_social_profiles_is_high() {
        let mut site = consistent_site();
        site.social.clear();
        let f = check_social(&site);
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].severity, Severity::High);
        let e = check_entity(&site);
        assert_eq!(e.issues.len(), 1);
        assert_eq!(e.issues[0].message, "Too few sameAs links for entity disambiguation");
    }

    #[test]
    fn entity_completeness_thresholds() {
        let partial = SiteConfig {
            awards: Vec::new(),
            price_range: None,
            ..consistent_site()
        };
        let f = check_entity(&partial);
        assert!(f.issues.is_empty());
        assert_eq!(f.warnings, vec!["Knowledge Graph data is only 67% complete"]);
        assert_eq!(f.validations, vec!["Knowledge Graph completeness: 67%"]);

        let sparse = SiteConfig {
            awards: Vec::new(),
            price_range: None,
            slogan: None,
            founder: None,
            ..consistent_site()
        };
        let f = check_entity(&sparse);
        assert_eq!(f.issues.len(), 1);
        assert_eq!(f.issues[0].severity, Severity::Medium);
        assert_eq!(f.issues[0].found.as_deref(), Some("33%"));
    }

    #[test]
    fn validation_is_deterministic() {
        let site = SiteConfig::builtin();
        assert_eq!(validate(&site), validate(&site));
    }
}
