//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seo",
    version,
    about = "Structured-data and brand audits for the site",
    long_about = "seo — validate Schema.org JSON-LD, score AI visibility, and audit brand consistency.\n\nConfiguration precedence: CLI > seo.toml > defaults.",
    after_help = "Examples:\n  seo validate --report\n  seo validate --schemas 'public/**/*.jsonld'\n  seo score --output json\n  seo brand\n  seo all"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Defaults to `all` when omitted.
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Args, Clone, Default)]
/// Options shared by every subcommand.
pub struct CommonArgs {
    #[arg(long, global = true, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Config file relative to the repo root (default: seo.toml|yaml)"
    )]
    pub config: Option<String>,
    #[arg(long, global = true, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
/// Supported audits.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current seo version.")]
    Version,
    /// Validate schema instances
    #[command(
        visible_alias = "schema",
        about = "Validate Schema.org records",
        long_about = "Validate the built-in schema catalog plus any matched JSON-LD files. Exits non-zero when any error is found.",
        after_help = "Examples:\n  seo validate\n  seo schema --report\n  seo validate --schemas 'dist/**/*.jsonld'"
    )]
    Validate {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write a Markdown report")]
        report: bool,
        #[arg(
            long = "schemas",
            value_name = "GLOB",
            help = "Extra JSON-LD files to validate (repeatable)"
        )]
        schemas: Vec<String>,
    },
    /// Compute the AI visibility score
    #[command(
        visible_alias = "ai",
        about = "Score AI visibility",
        long_about = "Score schema completeness, crawler files, entity graph, content readiness and citation signals out of 100."
    )]
    Score {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write a Markdown report")]
        report: bool,
    },
    /// Audit brand consistency
    #[command(
        visible_alias = "consistency",
        about = "Audit brand consistency",
        long_about = "Check name, URL, contact, social profile and Knowledge Graph data for consistency."
    )]
    Brand,
    /// Run every audit in sequence
    #[command(
        about = "Run all audits",
        long_about = "Run schema validation, AI visibility scoring and brand consistency in sequence."
    )]
    All {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write Markdown reports")]
        report: bool,
    },
}
