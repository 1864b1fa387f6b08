//! Validation configuration types

use olc_domain::value_objects::ProbeFailurePolicy;
use serde::{Deserialize, Serialize};

/// Validation behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// How a link target that cannot be reached is counted
    #[serde(default)]
    pub probe_failure: ProbeFailurePolicy,
}
