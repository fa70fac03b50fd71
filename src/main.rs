//! `seo` binary entry point.
//! Resolves configuration, dispatches to the audits and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use seo_audit::cli::{Cli, Commands};
use seo_audit::config::{self, Effective};
use seo_audit::models::schema::ValidationReport;
use seo_audit::models::visibility::AIVisibilityScore;
use seo_audit::utils::{error_prefix, info_prefix, note_prefix};
use seo_audit::{brand, output, report, schema, visibility};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", error_prefix(), e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let cmd = cli.cmd.unwrap_or(Commands::All { report: false });
    if let Commands::Version = cmd {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let patterns: &[String] = match &cmd {
        Commands::Validate { schemas, .. } => schemas.as_slice(),
        _ => &[],
    };
    let eff = config::resolve_effective(
        cli.common.repo_root.as_deref(),
        cli.common.config.as_deref(),
        cli.common.output.as_deref(),
        patterns,
    )?;
    if eff.config_path.is_none() && eff.output != "json" {
        eprintln!(
            "{} No seo.toml found; auditing the built-in site.",
            note_prefix()
        );
    }

    match cmd {
        Commands::Validate { report, .. } => {
            let suite = schema_suite(&eff)?;
            output::print_schema(&suite, &eff.output)?;
            if report {
                save_schema_report(&eff, &suite)?;
            }
            Ok(suite.exit_code())
        }
        Commands::Score { report } => {
            let score = visibility::calculate_score(&eff.site, &eff.inventory);
            output::print_score(&score, &eff.output)?;
            if report {
                save_score_report(&eff, &score)?;
            }
            Ok(0)
        }
        Commands::Brand => {
            output::print_brand(&brand::validate(&eff.site), &eff.output)?;
            Ok(0)
        }
        Commands::All { report } => run_all(&eff, report),
        Commands::Version => Ok(0),
    }
}

fn run_all(eff: &Effective, write: bool) -> Result<i32> {
    let suite = schema_suite(eff)?;
    let score = visibility::calculate_score(&eff.site, &eff.inventory);
    let consistency = brand::validate(&eff.site);
    if eff.output == "json" {
        println!("{}", output::render_all_json(&suite, &score, &consistency)?);
    } else {
        println!("{}", output::banner("Schema Validation", &eff.output));
        output::print_schema(&suite, &eff.output)?;
        println!("\n{}", output::banner("AI Visibility Score", &eff.output));
        output::print_score(&score, &eff.output)?;
        println!("\n{}", output::banner("Brand Consistency", &eff.output));
        output::print_brand(&consistency, &eff.output)?;
    }
    if write {
        save_schema_report(eff, &suite)?;
        save_score_report(eff, &score)?;
    }
    Ok(suite.exit_code())
}

fn schema_suite(eff: &Effective) -> Result<ValidationReport> {
    schema::validate_suite(&eff.site, &eff.repo_root, &eff.schema_patterns)
        .context("invalid schema pattern")
}

fn save_schema_report(eff: &Effective, suite: &ValidationReport) -> Result<()> {
    let md = report::render_schema_report(suite, &timestamp());
    save(eff, &eff.schema_report, &md)
}

fn save_score_report(eff: &Effective, score: &AIVisibilityScore) -> Result<()> {
    save(eff, &eff.score_report, &report::render_visibility_report(score))
}

fn save(eff: &Effective, path: &Path, contents: &str) -> Result<()> {
    report::write_report(path, contents)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    let shown = pathdiff::diff_paths(path, &eff.repo_root).unwrap_or_else(|| path.to_path_buf());
    info!(path = %shown.display(), "report written");
    if eff.output != "json" {
        eprintln!("{} Report saved to {}", info_prefix(), shown.display());
    }
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_in(root: &Path, args: &[&str]) -> i32 {
        let root = root.to_string_lossy().to_string();
        let mut argv = vec!["seo", "--repo-root", root.as_str(), "--output", "json"];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn clean_suite_exits_zero() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("seo.toml"), "output = \"json\"\n").unwrap();
        assert_eq!(run_in(dir.path(), &["validate"]), 0);
        assert_eq!(run_in(dir.path(), &["all"]), 0);
    }

    #[test]
    fn schema_errors_exit_one_for_validate_and_all() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("seo.toml"),
            "[schema]\npatterns = [\"schemas/*.jsonld\"]\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("schemas")).unwrap();
        fs::write(
            dir.path().join("schemas/product.jsonld"),
            r#"{ "@type": "Product", "description": "d", "image": "https://x/i.png" }"#,
        )
        .unwrap();
        assert_eq!(run_in(dir.path(), &["validate"]), 1);
        assert_eq!(run_in(dir.path(), &["all"]), 1);
        assert_eq!(run_in(dir.path(), &["score"]), 0);
    }

    #[test]
    fn report_flag_writes_markdown_under_repo_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("seo.toml"), "").unwrap();
        assert_eq!(run_in(dir.path(), &["all", "--report"]), 0);
        assert!(dir.path().join(config::DEFAULT_SCHEMA_REPORT).is_file());
        assert!(dir.path().join(config::DEFAULT_SCORE_REPORT).is_file());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("seo.toml"), "").unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "seo",
            "--repo-root",
            root.as_str(),
            "validate",
            "--schemas",
            "[",
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }
}
