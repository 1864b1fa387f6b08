//! Console Reporting
//!
//! Renders validation findings for an operator. Missing and broken links are
//! written to the output unconditionally, whatever the log level; everything
//! else only goes through `tracing`.

use std::io::{self, Write};

use olc_domain::ports::ValidationReporter;
use olc_domain::value_objects::{CheckMode, ValidationFinding, ValidationOutcome};
use tracing::{error, trace, warn};

/// Hint printed after a missing backlink
pub const PROPAGATION_HINT: &str =
    "\tIf link was just created wait a few minutes for the link to propagate.";

/// Reporter writing link warnings to a [`Write`] sink
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(e) = writeln!(self.out, "{line}") {
                error!("Cannot write report line: {e}");
                return;
            }
        }
    }
}

/// Output lines for a finding, empty when nothing has to be shown
pub fn render_finding(finding: &ValidationFinding) -> Vec<String> {
    let gc = finding.configuration_uri.as_deref().unwrap_or_default();
    match (&finding.outcome, finding.mode) {
        (
            ValidationOutcome::MissingBacklink {
                work_item_id,
                link_type_id,
                target_url,
            },
            CheckMode::GlobalConfiguration,
        ) => vec![
            format!(
                "\n### Warning ### Backlink not found for workitem: {work_item_id} linkType: {link_type_id} |target: {target_url}|gc : {gc}"
            ),
            PROPAGATION_HINT.to_string(),
        ],
        (
            ValidationOutcome::MissingBacklink {
                work_item_id,
                link_type_id,
                target_url,
            },
            CheckMode::LinkIndexOnly,
        ) => vec![
            format!(
                "\n### Warning ### Backlink not found for workitem: {work_item_id} linkType: {link_type_id} |target: {target_url}"
            ),
            PROPAGATION_HINT.to_string(),
            format!(
                "***** Missing backlinks found for item: {work_item_id} |{}",
                finding.end_point
            ),
        ],
        (
            ValidationOutcome::BrokenLink {
                work_item_id,
                link_type_id,
                target_url,
                ..
            },
            _,
        ) => vec![format!(
            "\n### Warning ### Broken link for workitem: {work_item_id} linkType: {link_type_id} | target: {target_url} | gc : {gc}"
        )],
        (ValidationOutcome::Ok { .. } | ValidationOutcome::Unverified { .. }, _) => Vec::new(),
    }
}

/// Log line for a finding
///
/// The "missing backlinks" summary line belongs to checks made without a
/// global configuration; configuration-governed checks name the
/// configuration instead.
pub fn log_message(finding: &ValidationFinding) -> String {
    let outcome = &finding.outcome;
    let work_item_id = outcome.work_item_id();
    let end_point = &finding.end_point;
    let gc = finding.configuration_uri.as_deref().unwrap_or_default();
    match (outcome, finding.mode) {
        (ValidationOutcome::Ok { .. }, CheckMode::LinkIndexOnly) => {
            format!("+++OK. No missing backlinks found for item: {work_item_id} |{end_point}")
        }
        (ValidationOutcome::Ok { .. }, CheckMode::GlobalConfiguration) => {
            format!("+++OK. Backlink found in configuration {gc} for item: {work_item_id} |{end_point}")
        }
        (ValidationOutcome::MissingBacklink { .. }, CheckMode::LinkIndexOnly) => {
            format!("***** Missing backlinks found for item: {work_item_id} |{end_point}")
        }
        (ValidationOutcome::MissingBacklink { .. }, CheckMode::GlobalConfiguration) => {
            format!("Backlink not found in configuration {gc} for item: {work_item_id} |{end_point}")
        }
        (ValidationOutcome::BrokenLink { .. }, _) => {
            format!("Broken link for item: {work_item_id} |{end_point}")
        }
        (ValidationOutcome::Unverified { reason, .. }, _) => format!(
            "Link target could not be verified for item: {work_item_id} |{end_point}: {reason}"
        ),
    }
}

impl<W: Write + Send> ValidationReporter for ConsoleReporter<W> {
    fn report(&mut self, finding: &ValidationFinding) {
        let outcome = &finding.outcome;
        let message = log_message(finding);
        if matches!(outcome, ValidationOutcome::Ok { .. }) {
            trace!("{message}");
        } else {
            warn!(
                work_item = outcome.work_item_id(),
                link_type = outcome.link_type_id(),
                target = outcome.target_url(),
                "{message}"
            );
        }
        let lines = render_finding(finding);
        self.emit(&lines);
    }

    fn warn(&mut self, message: &str) {
        self.emit(&[message.to_string()]);
    }
}
