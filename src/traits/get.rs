//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::CfClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually.
///
/// # Example
///
/// ```ignore
/// use cf_report::{CfClient, Droplet, Get};
///
/// let droplet = Droplet::get(&client, app_guid.to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type used to look the entity up.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cloud Controller client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &CfClient, id: Self::Id) -> Result<Self>;
}
