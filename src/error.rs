use crate::domain::constraint::Violation;
use miette::Diagnostic;
use thiserror::Error;

/// A value failed its declared schema constraints.
///
/// Every violated constraint is listed; construction never stops at the first.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("invalid {type_name}: {}", join(.violations))]
#[diagnostic(
    code(smart_ctor::validation),
    help("fix the listed fields; values are never coerced")
)]
pub struct ValidationError {
    pub type_name: &'static str,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(type_name: &'static str, violations: Vec<Violation>) -> Self {
        Self {
            type_name,
            violations,
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug, Diagnostic)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(smart_ctor::csv))]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(smart_ctor::io))]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(smart_ctor::json))]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Record error: {0}")]
    #[diagnostic(code(smart_ctor::record))]
    RecordError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
