//! Validation Reporting
//!
//! Counters and result accumulation for a validation pass, plus an in-memory
//! [`ValidationReporter`] used by tests and by callers that post-process
//! findings.

use std::fmt;

use olc_domain::ports::ValidationReporter;
use olc_domain::value_objects::{ValidationFinding, ValidationOutcome};

/// Counters of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Work items processed
    pub work_items: usize,
    /// References validated
    pub references: usize,
    /// References with a recorded backlink and a live target
    pub ok: usize,
    /// References without a backlink
    pub missing: usize,
    /// References whose target did not answer 200
    pub broken: usize,
    /// References whose target could not be probed
    pub unverified: usize,
    /// Work items or references skipped after a recoverable remote failure
    pub errors: usize,
}

impl ReportSummary {
    /// Count one outcome
    pub fn record(&mut self, outcome: &ValidationOutcome) {
        self.references += 1;
        match outcome {
            ValidationOutcome::Ok { .. } => self.ok += 1,
            ValidationOutcome::MissingBacklink { .. } => self.missing += 1,
            ValidationOutcome::BrokenLink { .. } => self.broken += 1,
            ValidationOutcome::Unverified { .. } => self.unverified += 1,
        }
    }

    /// Missing plus broken links
    pub fn problems(&self) -> usize {
        self.missing + self.broken
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Work items: {} | Links checked: {} | OK: {} | Missing: {} | Broken: {} | Unverified: {} | Skipped: {}",
            self.work_items,
            self.references,
            self.ok,
            self.missing,
            self.broken,
            self.unverified,
            self.errors
        )
    }
}

/// Overall result of a command
///
/// Findings never flip the success flag: a completed pass is a success even
/// when links are missing or broken.
#[derive(Debug, Clone, Default)]
pub struct OperationResult {
    success: bool,
    lines: Vec<String>,
    summary: ReportSummary,
}

impl OperationResult {
    /// Empty, not yet successful result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the result text
    pub fn append<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    /// Mark the command as completed
    pub fn set_success(&mut self) {
        self.success = true;
    }

    /// Whether the command completed
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Accumulated result text
    pub fn result_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Counters of the pass
    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    /// Replace the counters of the pass
    pub fn set_summary(&mut self, summary: ReportSummary) {
        self.summary = summary;
    }
}

/// Reporter keeping every finding in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    findings: Vec<ValidationFinding>,
    warnings: Vec<String>,
}

impl CollectingReporter {
    /// Empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All findings in report order
    pub fn findings(&self) -> &[ValidationFinding] {
        &self.findings
    }

    /// Findings the operator has to act on
    pub fn problems(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.findings.iter().filter(|f| f.outcome.is_problem())
    }

    /// Work item level warnings
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl ValidationReporter for CollectingReporter {
    fn report(&mut self, finding: &ValidationFinding) {
        self.findings.push(finding.clone());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
