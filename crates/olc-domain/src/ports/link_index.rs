//! Link Index Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{BacklinkQuery, BacklinkTriple};

/// Backlink index of the system owning a link target
#[async_trait]
pub trait LinkIndexProvider: Send + Sync {
    /// Backlinks recorded for the query's target and link type
    ///
    /// A response that carries no usable `links` array yields an empty list.
    /// Transport failures are returned as errors; authentication failures as
    /// [`crate::Error::Authentication`].
    async fn query_backlinks(&self, query: &BacklinkQuery) -> Result<Vec<BacklinkTriple>>;
}
