//! Diagnostic and fix types for reporting rule violations.

mod diagnostic;
mod fix;

pub use diagnostic::{Diagnostic, DiagnosticKind, FixAvailability, Violation};
pub use fix::{Applicability, Edit, Fix};
