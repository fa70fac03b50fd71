//! Built-in schema instances for the validation suite.
//!
//! Each builder shapes a JSON-LD record from the site configuration. The
//! suite validates them in the fixed order returned by `builtin_schemas`.

use crate::models::site::SiteConfig;
use serde_json::{json, Value as Json};

/// Suite instances as `(type name, record)` in validation order.
pub fn builtin_schemas(site: &SiteConfig) -> Vec<(String, Json)> {
    vec![
        ("Organization".to_string(), organization(site)),
        ("WebSite".to_string(), website(site)),
        ("SiteNavigation".to_string(), site_navigation(site)),
        ("AdvancedSitelinks".to_string(), advanced_sitelinks(site)),
        ("EntityGraph".to_string(), entity_graph(site)),
        ("KnowledgeGraph".to_string(), knowledge_graph(site)),
        ("Product".to_string(), iptv_product(site)),
        ("FAQPage".to_string(), iptv_faq(site)),
        ("Article".to_string(), example_article(site)),
        ("QAPage".to_string(), example_qa(site)),
        ("Glossary".to_string(), example_glossary(site)),
    ]
}

fn org_id(site: &SiteConfig) -> String {
    format!("{}/#organization", base(site))
}

fn website_id(site: &SiteConfig) -> String {
    format!("{}/#website", base(site))
}

fn base(site: &SiteConfig) -> &str {
    site.url.trim_end_matches('/')
}

fn page(site: &SiteConfig, path: &str) -> String {
    format!("{}/{}", base(site), path.trim_start_matches('/'))
}

pub fn organization(site: &SiteConfig) -> Json {
    let mut org = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "@id": org_id(site),
        "name": site.name,
        "url": site.url,
        "logo": {
            "@type": "ImageObject",
            "url": site.logo,
        },
        "description": site.description,
        "sameAs": site.same_as(),
    });
    if let Some(legal) = site.legal_name.as_deref() {
        org["legalName"] = json!(legal);
    }
    if !site.alternate_name.is_empty() {
        org["alternateName"] = json!(site.alternate_name);
    }
    if let Some(email) = site.email.as_deref() {
        org["contactPoint"] = json!({
            "@type": "ContactPoint",
            "contactType": "customer support",
            "email": email,
            "telephone": site.telephone,
            "availableLanguage": ["English"],
        });
    }
    org
}

pub fn website(site: &SiteConfig) -> Json {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "@id": website_id(site),
        "name": site.name,
        "url": site.url,
        "publisher": { "@id": org_id(site) },
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}/search?q={{search_term_string}}", base(site)),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

const NAV_PAGES: [(&str, &str); 5] = [
    ("Pricing", "pricing"),
    ("Free Trial", "free-trial"),
    ("Setup Guides", "guides"),
    ("Channel List", "channels"),
    ("Blog", "blog"),
];

pub fn site_navigation(site: &SiteConfig) -> Json {
    let items: Vec<Json> = NAV_PAGES
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            json!({
                "@type": "SiteNavigationElement",
                "position": i + 1,
                "name": name,
                "url": page(site, path),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "@id": format!("{}/#navigation", base(site)),
        "itemListElement": items,
    })
}

pub fn advanced_sitelinks(site: &SiteConfig) -> Json {
    let items: Vec<Json> = NAV_PAGES
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "WebPage",
                    "@id": format!("{}#webpage", page(site, path)),
                    "name": name,
                    "url": page(site, path),
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": format!("{} main sections", site.name),
        "itemListElement": items,
    })
}

pub fn entity_graph(site: &SiteConfig) -> Json {
    json!({
        "@context": "https://schema.org",
        "@graph": [
            organization(site),
            {
                "@type": "WebSite",
                "@id": website_id(site),
                "url": site.url,
                "name": site.name,
                "publisher": { "@id": org_id(site) },
            },
            {
                "@type": "WebPage",
                "@id": format!("{}/#webpage", base(site)),
                "url": site.url,
                "isPartOf": { "@id": website_id(site) },
                "about": { "@id": org_id(site) },
            },
        ],
    })
}

pub fn knowledge_graph(site: &SiteConfig) -> Json {
    let mut kg = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "@id": org_id(site),
        "name": site.name,
        "url": site.url,
        "sameAs": site.same_as(),
    });
    if let Some(v) = site.founding_date.as_deref() {
        kg["foundingDate"] = json!(v);
    }
    if let Some(v) = site.slogan.as_deref() {
        kg["slogan"] = json!(v);
    }
    if let Some(v) = site.founder.as_deref() {
        kg["founder"] = json!({ "@type": "Person", "name": v });
    }
    if !site.awards.is_empty() {
        kg["award"] = json!(site.awards);
    }
    if let Some(n) = site.number_of_employees {
        kg["numberOfEmployees"] = json!({ "@type": "QuantitativeValue", "value": n });
    }
    if let Some(v) = site.price_range.as_deref() {
        kg["priceRange"] = json!(v);
    }
    kg
}

pub fn iptv_product(site: &SiteConfig) -> Json {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": format!("{} 12-Month Subscription", site.name),
        "description": "Twelve months of IPTV access with 20,000+ live channels, VOD library, EPG and 4K streams on up to two devices.",
        "image": page(site, "images/iptv-12-month.png"),
        "brand": { "@id": org_id(site) },
        "offers": {
            "@type": "Offer",
            "price": "69.99",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "url": page(site, "pricing"),
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.8",
            "reviewCount": "1250",
        },
    })
}

const FAQS: [(&str, &str); 3] = [
    (
        "What is IPTV?",
        "IPTV delivers live TV channels and on-demand content over the internet instead of cable or satellite.",
    ),
    (
        "Which devices are supported?",
        "Firestick, Android TV, Smart TVs, iOS, Android phones, MAG boxes and any app that supports M3U playlists.",
    ),
    (
        "Is there a free trial?",
        "Yes, a 24-hour free trial is available before purchasing a subscription.",
    ),
];

pub fn iptv_faq(site: &SiteConfig) -> Json {
    let questions: Vec<Json> = FAQS
        .iter()
        .map(|(q, a)| {
            json!({
                "@type": "Question",
                "name": q,
                "acceptedAnswer": { "@type": "Answer", "text": a },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "@id": format!("{}#faq", page(site, "faq")),
        "mainEntity": questions,
    })
}

pub fn example_article(site: &SiteConfig) -> Json {
    let author = site.founder.as_deref().unwrap_or(&site.name);
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": "How to Set Up IPTV on Firestick",
        "datePublished": "2024-06-01",
        "dateModified": "2025-01-15",
        "image": page(site, "images/blog/firestick-setup.jpg"),
        "author": { "@type": "Person", "name": author },
        "publisher": { "@id": org_id(site) },
        "mainEntityOfPage": page(site, "blog/iptv-firestick-setup"),
    })
}

pub fn example_qa(site: &SiteConfig) -> Json {
    json!({
        "@context": "https://schema.org",
        "@type": "QAPage",
        "mainEntity": {
            "@type": "Question",
            "name": "Can I watch IPTV on two devices at once?",
            "answerCount": 1,
            "acceptedAnswer": {
                "@type": "Answer",
                "text": "Yes. The multi-screen plan allows two simultaneous connections.",
                "url": page(site, "faq#multi-screen"),
            },
        },
    })
}

const GLOSSARY: [(&str, &str); 3] = [
    ("EPG", "Electronic Program Guide listing scheduled programming per channel."),
    ("M3U", "Playlist file format listing stream URLs for IPTV players."),
    ("VOD", "Video on demand content that can be watched at any time."),
];

pub fn example_glossary(site: &SiteConfig) -> Json {
    let terms: Vec<Json> = GLOSSARY
        .iter()
        .map(|(term, desc)| {
            json!({
                "@type": "DefinedTerm",
                "@id": format!("{}#{}", page(site, "glossary"), term.to_lowercase()),
                "name": term,
                "description": desc,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "DefinedTermSet",
        "@id": format!("{}#glossary", page(site, "glossary")),
        "name": "IPTV Glossary",
        "hasDefinedTerm": terms,
    })
}
