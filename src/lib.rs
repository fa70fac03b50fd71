//! SEO audit core library.
//!
//! This crate exposes programmatic APIs for validating Schema.org JSON-LD,
//! scoring a site's readiness for AI assistants, and auditing brand data.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `catalog`: Built-in structured-data records for the configured site.
//! - `schema`: Per-type required properties, `@id` and URL checks.
//! - `rules`: Weighted rule tables shared by the scoring categories.
//! - `visibility`: AI visibility score across five categories.
//! - `brand`: Brand consistency checks with deduction scoring.
//! - `models`: Result and configuration data models.
//! - `output`: Human/JSON printers.
//! - `report`: Markdown report rendering.
//! - `utils`: Supporting helpers.
pub mod brand;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod schema;
pub mod utils;
pub mod visibility;
