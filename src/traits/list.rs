//! List trait for walking root collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::CfClient;
use crate::error::Result;
use crate::pagination::Pager;

/// Walk a root collection of the API.
///
/// Implementors only name their collection path; paging follows the
/// `next_url` links the API hands back.
///
/// # Example
///
/// ```ignore
/// use cf_report::{CfClient, List, Organization};
///
/// let mut orgs = Organization::list(&client);
/// while let Some(org) = orgs.try_next().await? {
///     println!("{}", org.name());
/// }
///
/// let buildpacks = Buildpack::list_all(&client).await?;
/// ```
#[async_trait]
pub trait List: DeserializeOwned + Send {
    /// Path of the root collection (e.g., `/v2/organizations`).
    const COLLECTION_PATH: &'static str;

    /// Lazily walk every entity in the collection.
    fn list(client: &CfClient) -> Pager<'_, Self> {
        Pager::new(client, Self::COLLECTION_PATH)
    }

    /// Fetch every entity in the collection (fetches all pages).
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &CfClient) -> Result<Vec<Self>> {
        Self::list(client).collect_all().await
    }
}
