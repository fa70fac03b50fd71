//! Schema validation result types.

use serde::Serialize;
use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome of validating a single schema record.
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub schema_type: String,
    pub data: Json,
    /// File the record was loaded from; `None` for built-in instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ValidationResult {
    pub fn new(schema_type: &str, data: Json, errors: Vec<String>, warnings: Vec<String>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
            schema_type: schema_type.to_string(),
            data,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Suite-level totals plus per-instance results in evaluation order.
pub struct ValidationReport {
    pub total_schemas: usize,
    pub valid_schemas: usize,
    /// Sum of error counts across instances.
    pub errors: usize,
    /// Sum of warning counts across instances.
    pub warnings: usize,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn push(&mut self, result: ValidationResult) {
        self.total_schemas += 1;
        if result.valid {
            self.valid_schemas += 1;
        }
        self.errors += result.errors.len();
        self.warnings += result.warnings.len();
        self.results.push(result);
    }

    /// Process exit status for the suite: 1 when any error was found.
    pub fn exit_code(&self) -> i32 {
        if self.errors > 0 {
            1
        } else {
            0
        }
    }
}
