//! Finding Reporter Port
//!
//! Validators hand every outcome to a reporter instead of logging it, so
//! callers decide how findings are rendered and tests can assert on them.

use crate::value_objects::ValidationFinding;

/// Sink for validation findings
pub trait ValidationReporter: Send {
    /// Record one finding
    fn report(&mut self, finding: &ValidationFinding);

    /// Record a work item level warning (e.g. an empty query)
    fn warn(&mut self, message: &str);
}
