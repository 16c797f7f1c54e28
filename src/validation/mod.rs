//! Connection degree validation.
//!
//! Degree violations are data, not errors: validation always runs to
//! completion and reports every failing point.

pub mod validator;

pub use validator::{ConnectionValidator, DegreeIssue, Severity, ValidationEntry, ValidationResult};
