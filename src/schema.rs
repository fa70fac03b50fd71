//! Structural validation for Schema.org JSON-LD records.
//!
//! Every record gets two generic checks:
//! - `@id` references on nested objects must be absolute (`http…`) or carry a
//!   `#` fragment.
//! - Known URL-bearing fields must hold absolute URLs.
//!
//! Types listed in `TYPE_RULES` additionally get required-property checks and
//! type-specific extras. Unknown types receive only the generic checks.
//!
//! Paths are dot-joined. The record itself has the empty path, so a direct
//! child `a` is reported as `a`, while URL fields append `.<field>` to the
//! containing object's path (`.logo` at the root).

use crate::catalog;
use crate::models::schema::{ValidationReport, ValidationResult};
use crate::models::site::SiteConfig;
use glob::glob;
use rayon::prelude::*;
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Field names whose string values must be absolute URLs.
pub const URL_FIELDS: [&str; 6] = [
    "url",
    "image",
    "logo",
    "contentUrl",
    "embedUrl",
    "thumbnailUrl",
];

pub type Extra = fn(&Map<String, Json>, &mut Findings);

/// Required properties and extra checks for a set of type names.
pub struct TypeRules {
    pub types: &'static [&'static str],
    /// Dot paths that must resolve to a truthy value.
    pub required: &'static [&'static str],
    pub extra: Option<Extra>,
}

pub const TYPE_RULES: &[TypeRules] = &[
    TypeRules {
        types: &["Organization"],
        required: &["name", "url", "logo"],
        extra: Some(organization_extra),
    },
    TypeRules {
        types: &["Product"],
        required: &["name", "description", "image"],
        extra: Some(product_extra),
    },
    TypeRules {
        types: &["FAQPage"],
        required: &["mainEntity"],
        extra: Some(faq_extra),
    },
    TypeRules {
        types: &["Article", "TechArticle"],
        required: &["headline", "datePublished", "author", "publisher"],
        extra: None,
    },
    TypeRules {
        types: &["BreadcrumbList"],
        required: &[],
        extra: Some(breadcrumb_extra),
    },
    TypeRules {
        types: &["WebSite"],
        required: &["name", "url"],
        extra: Some(website_extra),
    },
    TypeRules {
        types: &["QAPage"],
        required: &["mainEntity.acceptedAnswer"],
        extra: None,
    },
];

#[derive(Debug, Default)]
/// Errors and warnings collected while checking one record.
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Look up the rule entry for a type name.
pub fn rules_for(type_name: &str) -> Option<&'static TypeRules> {
    TYPE_RULES.iter().find(|r| r.types.contains(&type_name))
}

/// Validate one record against the generic checks and its type's rule entry.
pub fn validate_schema(type_name: &str, data: &Json) -> ValidationResult {
    let mut f = Findings::default();
    match data.as_object() {
        Some(obj) => {
            if let Some(rules) = rules_for(type_name) {
                for field in rules.required {
                    if !truthy(lookup(obj, field)) {
                        f.errors
                            .push(format!("Missing required property: {}", field));
                    }
                }
                if let Some(extra) = rules.extra {
                    extra(obj, &mut f);
                }
            }
            check_ids(data, "", &mut f.errors);
            check_urls(data, "", &mut f.errors);
        }
        None => f
            .errors
            .push("Schema data must be a JSON object".to_string()),
    }
    debug!(
        schema = type_name,
        errors = f.errors.len(),
        warnings = f.warnings.len(),
        "schema validated"
    );
    ValidationResult::new(type_name, data.clone(), f.errors, f.warnings)
}

/// Validate records in order and accumulate suite totals.
pub fn validate_all(instances: &[(String, Json)]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (name, data) in instances {
        report.push(validate_schema(name, data));
    }
    report
}

/// Validate the built-in catalog followed by any files matched by `patterns`.
pub fn validate_suite(
    site: &SiteConfig,
    root: &Path,
    patterns: &[String],
) -> Result<ValidationReport, glob::PatternError> {
    let mut report = validate_all(&catalog::builtin_schemas(site));
    for result in validate_files(root, patterns)? {
        report.push(result);
    }
    Ok(report)
}

/// Validate JSON-LD files matched by glob patterns relative to `root`.
///
/// Files are processed in parallel; results come back sorted by path.
/// Unreadable or malformed files yield an invalid result instead of failing.
pub fn validate_files(
    root: &Path,
    patterns: &[String],
) -> Result<Vec<ValidationResult>, glob::PatternError> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        for entry in glob(&abs_glob.to_string_lossy())?.flatten() {
            if entry.is_file() {
                targets.push(entry);
            }
        }
    }
    targets.sort();
    targets.dedup();
    Ok(targets.par_iter().map(|p| validate_file(root, p)).collect())
}

fn validate_file(root: &Path, path: &Path) -> ValidationResult {
    let shown = pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string();
    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(file = %shown, error = %e, "failed to read schema file");
            return ValidationResult::new(
                "Unknown",
                Json::Null,
                vec![format!("Failed to read file: {}", e)],
                Vec::new(),
            )
            .with_source(shown);
        }
    };
    let json: Json = match serde_json::from_str(&data) {
        Ok(v) => v,
        Err(e) => {
            return ValidationResult::new(
                "Unknown",
                Json::Null,
                vec![format!("Invalid JSON: {}", e)],
                Vec::new(),
            )
            .with_source(shown);
        }
    };
    let ty = schema_type_of(&json);
    validate_schema(&ty, &json).with_source(shown)
}

/// The record's `@type` (first entry when it is a list), or `Unknown`.
pub fn schema_type_of(data: &Json) -> String {
    match data.get("@type") {
        Some(Json::String(s)) => s.clone(),
        Some(Json::Array(items)) => items
            .iter()
            .find_map(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string(),
        _ => "Unknown".to_string(),
    }
}

fn organization_extra(obj: &Map<String, Json>, f: &mut Findings) {
    let empty = match obj.get("sameAs") {
        Some(Json::Array(links)) => links.is_empty(),
        other => !truthy(other),
    };
    if empty {
        f.warnings
            .push("Missing sameAs property for entity linking".to_string());
    }
}

fn product_extra(obj: &Map<String, Json>, f: &mut Findings) {
    if !truthy(obj.get("offers")) && !truthy(obj.get("aggregateRating")) {
        f.warnings
            .push("Product should have offers or aggregateRating".to_string());
    }
}

fn faq_extra(obj: &Map<String, Json>, f: &mut Findings) {
    if let Some(Json::Array(questions)) = obj.get("mainEntity") {
        for (i, q) in questions.iter().enumerate() {
            let text = q.get("acceptedAnswer").and_then(|a| a.get("text"));
            if !truthy(text) {
                f.errors
                    .push(format!("FAQ question {} missing answer text", i + 1));
            }
        }
    }
}

fn breadcrumb_extra(obj: &Map<String, Json>, f: &mut Findings) {
    let missing = match obj.get("itemListElement") {
        Some(Json::Array(items)) => items.is_empty(),
        other => !truthy(other),
    };
    if missing {
        f.errors
            .push("BreadcrumbList must have at least one itemListElement".to_string());
    }
}

fn website_extra(obj: &Map<String, Json>, f: &mut Findings) {
    if !truthy(obj.get("potentialAction")) {
        f.warnings
            .push("Missing potentialAction for sitelinks search box".to_string());
    }
}

/// Resolve a dot path inside an object.
fn lookup<'a>(obj: &'a Map<String, Json>, path: &str) -> Option<&'a Json> {
    let mut parts = path.split('.');
    let mut cur = obj.get(parts.next()?)?;
    for part in parts {
        cur = cur.get(part)?;
    }
    Some(cur)
}

/// Absent, `null`, `false`, `0` and `""` count as missing.
fn truthy(v: Option<&Json>) -> bool {
    match v {
        None | Some(Json::Null) => false,
        Some(Json::Bool(b)) => *b,
        Some(Json::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
        Some(Json::String(s)) => !s.is_empty(),
        Some(Json::Array(_)) | Some(Json::Object(_)) => true,
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn children(value: &Json) -> Vec<(String, &Json)> {
    match value {
        Json::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn is_valid_id(id: &str) -> bool {
    id.starts_with("http") || id.contains('#')
}

fn check_ids(value: &Json, path: &str, errors: &mut Vec<String>) {
    for (key, child) in children(value) {
        if !(child.is_object() || child.is_array()) {
            continue;
        }
        let child_path = join(path, &key);
        if let Some(Json::String(id)) = child.get("@id") {
            if !is_valid_id(id) {
                errors.push(format!("Invalid @id format at {}: {}", child_path, id));
            }
        }
        check_ids(child, &child_path, errors);
    }
}

fn check_urls(value: &Json, path: &str, errors: &mut Vec<String>) {
    let is_object = value.is_object();
    for (key, child) in children(value) {
        match child {
            Json::String(s) if is_object && URL_FIELDS.contains(&key.as_str()) => {
                if !s.starts_with("http") {
                    errors.push(format!("Relative URL found at {}.{}: {}", path, key, s));
                }
            }
            Json::Object(_) | Json::Array(_) => check_urls(child, &join(path, &key), errors),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn organization_with_empty_same_as_is_valid_with_warning() {
        let data = json!({
            "name": "X",
            "url": "https://x.com",
            "logo": "https://x.com/l.png",
            "sameAs": []
        });
        let res = validate_schema("Organization", &data);
        assert!(res.valid);
        assert!(res.errors.is_empty());
        assert_eq!(
            res.warnings,
            vec!["Missing sameAs property for entity linking".to_string()]
        );
        assert_eq!(res.schema_type, "Organization");
        assert_eq!(res.data, data);
    }

    #[test]
    fn missing_required_properties_are_errors() {
        let res = validate_schema(
            "Organization",
            &json!({ "name": "", "sameAs": ["https://a"] }),
        );
        assert!(!res.valid);
        assert_eq!(
            res.errors,
            vec![
                "Missing required property: name",
                "Missing required property: url",
                "Missing required property: logo",
            ]
        );
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn faq_reports_only_the_question_without_answer() {
        let data = json!({
            "@type": "FAQPage",
            "mainEntity": [
                { "name": "q1", "acceptedAnswer": { "text": "a1" } },
                { "name": "q2", "acceptedAnswer": {} },
                { "name": "q3", "acceptedAnswer": { "text": "a3" } }
            ]
        });
        let res = validate_schema("FAQPage", &data);
        let faq: Vec<_> = res
            .errors
            .iter()
            .filter(|e| e.starts_with("FAQ question"))
            .collect();
        assert_eq!(faq, vec!["FAQ question 2 missing answer text"]);
        assert_eq!(res.errors.len(), 1);
    }

    #[test]
    fn nested_id_without_http_or_fragment_is_reported() {
        let res = validate_schema("Thing", &json!({ "a": { "b": { "@id": "foo" } } }));
        assert_eq!(res.errors, vec!["Invalid @id format at a.b: foo"]);
    }

    #[test]
    fn fragment_and_absolute_ids_are_accepted() {
        let data = json!({
            "publisher": { "@id": "https://x.com/#org" },
            "about": { "@id": "#main" },
            "isPartOf": { "@id": "http://x.com/site" }
        });
        assert!(validate_schema("Thing", &data).valid);
    }

    #[test]
    fn ids_inside_arrays_use_index_segments() {
        let data = json!({ "@graph": [ { "@id": "https://x/#a" }, { "@id": "org" } ] });
        let res = validate_schema("EntityGraph", &data);
        assert_eq!(res.errors, vec!["Invalid @id format at @graph.1: org"]);
    }

    #[test]
    fn top_level_relative_url_uses_leading_dot() {
        let res = validate_schema("Thing", &json!({ "logo": "/local.png" }));
        assert_eq!(res.errors, vec!["Relative URL found at .logo: /local.png"]);
    }

    #[test]
    fn nested_relative_url_uses_containing_path() {
        let data = json!({
            "publisher": { "logo": { "url": "img/logo.png" } },
            "image": "https://x.com/a.png",
            "sameAs": ["relative/but/not/a/url/field"]
        });
        let res = validate_schema("Thing", &data);
        assert_eq!(
            res.errors,
            vec!["Relative URL found at publisher.logo.url: img/logo.png"]
        );
    }

    #[test]
    fn unknown_type_gets_only_generic_checks() {
        let res = validate_schema("Glossary", &json!({}));
        assert!(res.valid);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn type_specific_warnings_and_errors() {
        let product = validate_schema(
            "Product",
            &json!({ "name": "P", "description": "d", "image": "https://x/p.png" }),
        );
        assert!(product.valid);
        assert_eq!(
            product.warnings,
            vec!["Product should have offers or aggregateRating"]
        );

        let crumbs = validate_schema("BreadcrumbList", &json!({ "itemListElement": [] }));
        assert_eq!(
            crumbs.errors,
            vec!["BreadcrumbList must have at least one itemListElement"]
        );
        let crumbs = validate_schema("BreadcrumbList", &json!({ "name": "Trail" }));
        assert!(!crumbs.valid);
        assert_eq!(
            crumbs.errors,
            vec!["BreadcrumbList must have at least one itemListElement"]
        );

        let site = validate_schema("WebSite", &json!({ "name": "S", "url": "https://s" }));
        assert!(site.valid);
        assert_eq!(
            site.warnings,
            vec!["Missing potentialAction for sitelinks search box"]
        );

        let qa = validate_schema("QAPage", &json!({ "mainEntity": { "name": "q" } }));
        assert_eq!(
            qa.errors,
            vec!["Missing required property: mainEntity.acceptedAnswer"]
        );

        let article = validate_schema("TechArticle", &json!({ "headline": "h" }));
        assert_eq!(article.errors.len(), 3);
    }

    #[test]
    fn warnings_do_not_affect_validity() {
        let res = validate_schema("WebSite", &json!({ "name": "S", "url": "https://s" }));
        assert!(res.valid);
        assert_eq!(res.warnings.len(), 1);
    }

    #[test]
    fn suite_totals_sum_counts_not_instances() {
        let instances = vec![
            ("Organization".to_string(), json!({ "sameAs": [] })),
            (
                "WebSite".to_string(),
                json!({ "name": "S", "url": "https://s" }),
            ),
            (
                "Thing".to_string(),
                json!({ "logo": "/a.png", "image": "/b.png" }),
            ),
        ];
        let report = validate_all(&instances);
        assert_eq!(report.total_schemas, 3);
        assert_eq!(report.valid_schemas, 1);
        assert_eq!(report.errors, 3 + 2);
        assert_eq!(report.warnings, 2);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn builtin_catalog_is_clean_and_deterministic() {
        let site = SiteConfig::builtin();
        let dir = tempdir().unwrap();
        let a = validate_suite(&site, dir.path(), &[]).unwrap();
        let b = validate_suite(&site, dir.path(), &[]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_schemas, 11);
        assert_eq!(a.valid_schemas, 11);
        assert_eq!(a.errors, 0);
        assert_eq!(a.warnings, 0);
    }

    #[test]
    fn external_files_are_validated_in_path_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("schemas")).unwrap();
        let mut f = fs::File::create(root.join("schemas/b.jsonld")).unwrap();
        writeln!(f, "{}", r#"{"@type": ["Product"], "name": "P"}"#).unwrap();
        fs::write(root.join("schemas/a.jsonld"), "{ not json").unwrap();

        let results = validate_files(root, &["schemas/*.jsonld".to_string()]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source.as_deref(), Some("schemas/a.jsonld"));
        assert!(!results[0].valid);
        assert!(results[0].errors[0].starts_with("Invalid JSON"));
        assert_eq!(results[1].schema_type, "Product");
        assert_eq!(results[1].errors.len(), 2);
    }

    #[test]
    fn bad_glob_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(validate_files(dir.path(), &["schemas/[".to_string()]).is_err());
    }
}
