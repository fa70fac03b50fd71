//! Configuration discovery and effective settings resolution.
//!
//! `seo` reads `seo.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `site` / `inventory`: the built-in IPTV site, only when the section is
//!   absent; a present section starts from an empty record
//! - `schema.report_path`: `reports/schema-validation-report.md`
//! - `schema.patterns`: none
//! - `score.report_path`: `reports/ai-visibility-report.md`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::models::site::{SiteConfig, SiteInventory};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILES: [&str; 3] = ["seo.toml", "seo.yaml", "seo.yml"];
pub const DEFAULT_SCHEMA_REPORT: &str = "reports/schema-validation-report.md";
pub const DEFAULT_SCORE_REPORT: &str = "reports/ai-visibility-report.md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config file not found: {0}")]
    Missing(PathBuf),
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Schema validation section under `[schema]`.
pub struct SchemaCfg {
    pub report_path: Option<String>,
    /// Extra JSON-LD files to validate, as globs relative to the repo root.
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// AI visibility section under `[score]`.
pub struct ScoreCfg {
    pub report_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `seo.toml|yaml`.
pub struct SeoConfig {
    pub output: Option<String>,
    pub site: Option<SiteConfig>,
    pub inventory: Option<SiteInventory>,
    pub schema: Option<SchemaCfg>,
    pub score: Option<ScoreCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub site: SiteConfig,
    pub inventory: SiteInventory,
    pub schema_patterns: Vec<String>,
    pub schema_report: PathBuf,
    pub score_report: PathBuf,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `seo.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Locate the config file under `root`, preferring TOML.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.exists())
}

/// Parse a config file, choosing the format by extension.
pub fn load_config_file(path: &Path) -> Result<SeoConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load `SeoConfig` from `seo.toml` or `seo.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, SeoConfig)>, ConfigError> {
    match find_config(root) {
        Some(path) => {
            let cfg = load_config_file(&path)?;
            Ok(Some((path, cfg)))
        }
        None => Ok(None),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
    cli_patterns: &[String],
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);

    let loaded = match cli_config {
        Some(p) => {
            let path = repo_root.join(p);
            if !path.exists() {
                return Err(ConfigError::Missing(path));
            }
            let cfg = load_config_file(&path)?;
            Some((path, cfg))
        }
        None => load_config(&repo_root)?,
    };
    let (config_path, cfg) = match loaded {
        Some((p, c)) => (Some(p), c),
        None => (None, SeoConfig::default()),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let schema_patterns = if cli_patterns.is_empty() {
        cfg.schema
            .as_ref()
            .and_then(|s| s.patterns.clone())
            .unwrap_or_default()
    } else {
        cli_patterns.to_vec()
    };
    let schema_report = repo_root.join(
        cfg.schema
            .as_ref()
            .and_then(|s| s.report_path.as_deref())
            .unwrap_or(DEFAULT_SCHEMA_REPORT),
    );
    let score_report = repo_root.join(
        cfg.score
            .as_ref()
            .and_then(|s| s.report_path.as_deref())
            .unwrap_or(DEFAULT_SCORE_REPORT),
    );

    Ok(Effective {
        repo_root,
        config_path,
        output,
        site: cfg.site.unwrap_or_else(SiteConfig::builtin),
        inventory: cfg.inventory.unwrap_or_else(SiteInventory::builtin),
        schema_patterns,
        schema_report,
        score_report,
    })
}
