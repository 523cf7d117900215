use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;

/// A single failed field constraint.
///
/// Carries both the expected bound and the actual measurement so callers can
/// report exactly what went wrong without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        lower: i64,
        upper: i64,
        actual: i64,
    },
}

impl Violation {
    pub fn field(&self) -> &'static str {
        match self {
            Violation::TooShort { field, .. }
            | Violation::TooLong { field, .. }
            | Violation::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { field, min, actual } => write!(
                f,
                "{field}: expected at least {min} characters, got {actual}"
            ),
            Violation::TooLong { field, max, actual } => write!(
                f,
                "{field}: expected at most {max} characters, got {actual}"
            ),
            Violation::OutOfRange {
                field,
                lower,
                upper,
                actual,
            } => write!(f, "{field}: expected {lower}..={upper}, got {actual}"),
        }
    }
}

/// Closed character-length range for a string field.
///
/// Lengths are counted in `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthConstraint {
    pub min: usize,
    pub max: usize,
}

impl LengthConstraint {
    pub const fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "length constraint min must not exceed max");
        Self { min, max }
    }

    /// Returns the violation for `value`, if any.
    pub fn check(&self, field: &'static str, value: &str) -> Option<Violation> {
        let actual = value.chars().count();
        if actual < self.min {
            Some(Violation::TooShort {
                field,
                min: self.min,
                actual,
            })
        } else if actual > self.max {
            Some(Violation::TooLong {
                field,
                max: self.max,
                actual,
            })
        } else {
            None
        }
    }
}

/// Collects every violated constraint of a record before failing.
///
/// ```
/// use smart_ctor::domain::constraint::{Checks, LengthConstraint};
///
/// let result = Checks::new("Code")
///     .length("code", "ab", LengthConstraint::new(3, 5))
///     .finish();
/// assert!(result.is_err());
/// ```
#[derive(Debug)]
pub struct Checks {
    type_name: &'static str,
    violations: Vec<Violation>,
}

impl Checks {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            violations: Vec::new(),
        }
    }

    pub fn length(
        mut self,
        field: &'static str,
        value: &str,
        constraint: LengthConstraint,
    ) -> Self {
        if let Some(violation) = constraint.check(field, value) {
            self.violations.push(violation);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.type_name, self.violations))
        }
    }
}
