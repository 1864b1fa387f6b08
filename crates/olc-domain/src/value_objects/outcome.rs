//! Validation Outcome Value Objects
//!
//! Per-reference results of a validation pass. Outcomes are findings, never
//! errors: they are handed to a reporter and then dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP status returned by an existence probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeStatus(pub u16);

impl ProbeStatus {
    /// Only 200 counts as a live target
    pub fn is_alive(self) -> bool {
        self.0 == 200
    }
}

/// How an existence probe that failed at the transport level is counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeFailurePolicy {
    /// Report the link as unverified
    #[default]
    TreatAsUnknown,
    /// Report the link as broken
    TreatAsBroken,
}

impl fmt::Display for ProbeFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TreatAsUnknown => write!(f, "treat-as-unknown"),
            Self::TreatAsBroken => write!(f, "treat-as-broken"),
        }
    }
}

impl std::str::FromStr for ProbeFailurePolicy {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "treat-as-unknown" | "unknown" => Ok(Self::TreatAsUnknown),
            "treat-as-broken" | "broken" => Ok(Self::TreatAsBroken),
            other => Err(crate::error::Error::invalid_argument(format!(
                "Invalid probe failure policy: {other}. Use treat-as-unknown or treat-as-broken"
            ))),
        }
    }
}

/// Which validator produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckMode {
    /// Link checked inside its global configuration
    GlobalConfiguration,
    /// Link checked against the link index without a configuration
    LinkIndexOnly,
}

/// Value Object: Validation Outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Backlink recorded and target alive
    Ok {
        /// Numeric work item id
        work_item_id: i64,
        /// Repository link type id
        link_type_id: String,
        /// Link target
        target_url: String,
    },
    /// The link index has no matching backlink
    MissingBacklink {
        /// Numeric work item id
        work_item_id: i64,
        /// Repository link type id
        link_type_id: String,
        /// Link target without a backlink
        target_url: String,
    },
    /// Backlink recorded but the target does not answer with 200
    BrokenLink {
        /// Numeric work item id
        work_item_id: i64,
        /// Repository link type id
        link_type_id: String,
        /// Link target
        target_url: String,
        /// Configuration the target was probed in
        configuration_uri: Option<String>,
    },
    /// Backlink recorded but the probe failed at the transport level
    Unverified {
        /// Numeric work item id
        work_item_id: i64,
        /// Repository link type id
        link_type_id: String,
        /// Link target
        target_url: String,
        /// Configuration the target was probed in
        configuration_uri: Option<String>,
        /// Transport failure description
        reason: String,
    },
}

impl ValidationOutcome {
    /// Work item the outcome belongs to
    pub fn work_item_id(&self) -> i64 {
        match self {
            Self::Ok { work_item_id, .. }
            | Self::MissingBacklink { work_item_id, .. }
            | Self::BrokenLink { work_item_id, .. }
            | Self::Unverified { work_item_id, .. } => *work_item_id,
        }
    }

    /// Link type of the checked reference
    pub fn link_type_id(&self) -> &str {
        match self {
            Self::Ok { link_type_id, .. }
            | Self::MissingBacklink { link_type_id, .. }
            | Self::BrokenLink { link_type_id, .. }
            | Self::Unverified { link_type_id, .. } => link_type_id,
        }
    }

    /// Target of the checked reference
    pub fn target_url(&self) -> &str {
        match self {
            Self::Ok { target_url, .. }
            | Self::MissingBacklink { target_url, .. }
            | Self::BrokenLink { target_url, .. }
            | Self::Unverified { target_url, .. } => target_url,
        }
    }

    /// Missing and broken links must be seen by the operator
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::MissingBacklink { .. } | Self::BrokenLink { .. })
    }
}

/// Outcome plus the context a reporter needs to render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// Validator that produced the outcome
    pub mode: CheckMode,
    /// End-point display name of the reference
    pub end_point: String,
    /// Configuration the link was validated in
    pub configuration_uri: Option<String>,
    /// The outcome itself
    pub outcome: ValidationOutcome,
}
