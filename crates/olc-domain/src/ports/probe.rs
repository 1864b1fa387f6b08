//! Existence Probe Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ProbeStatus;

/// Live existence check of a link target
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    /// Fetch the target, inside the configuration context when one is given
    ///
    /// Any HTTP answer is a status; only transport failures are errors.
    async fn probe(&self, target_url: &str, configuration_uri: Option<&str>)
    -> Result<ProbeStatus>;
}
