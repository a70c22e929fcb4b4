//! Pagination over Cloud Controller collections.
//!
//! Every `/v2` collection comes back as an envelope holding a batch of
//! resources and a `next_url` continuation reference. [`Pager`] follows those
//! references lazily, one page at a time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, NoneAsEmptyString};

use crate::client::CfClient;
use crate::error::Result;

/// A page of results from the Cloud Controller.
///
/// `null` and `""` both mean "no next page"; a `null` batch is an empty one.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize"))]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Link to the previous page.
    #[serde_as(deserialize_as = "NoneAsEmptyString")]
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Link to the next page. `None` on the last page.
    #[serde_as(deserialize_as = "NoneAsEmptyString")]
    #[serde(default)]
    pub next_url: Option<String>,
    /// The items on this page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if another page follows this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

/// Lazy, forward-only walk over a paginated collection.
///
/// Pages are fetched on demand as items are consumed. Items come out in the
/// order the API returns them. Once a fetch fails or the last page is drained
/// the pager is exhausted; it cannot be restarted.
///
/// There is no page limit: a server that keeps handing out `next_url`s keeps
/// the pager going.
///
/// # Example
///
/// ```ignore
/// let mut orgs = Pager::<Organization>::new(&client, "/v2/organizations");
/// while let Some(org) = orgs.try_next().await? {
///     println!("{}", org.entity.name);
/// }
/// ```
pub struct Pager<'c, T> {
    client: &'c CfClient,
    next: Option<String>,
    buffer: std::vec::IntoIter<T>,
    pages_fetched: u32,
}

impl<'c, T> std::fmt::Debug for Pager<'c, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("next", &self.next)
            .field("buffered", &self.buffer.len())
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

impl<'c, T: DeserializeOwned> Pager<'c, T> {
    /// Start a walk at `path`. An empty path yields an empty sequence.
    pub fn new(client: &'c CfClient, path: &str) -> Self {
        Self {
            client,
            next: Some(path.to_string()).filter(|p| !p.is_empty()),
            buffer: Vec::new().into_iter(),
            pages_fetched: 0,
        }
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Return the next item, fetching the next page if the current one is
    /// drained. `Ok(None)` marks the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or decode error. The pager is exhausted
    /// afterwards.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Ok(Some(item));
            }

            let Some(path) = self.next.take() else {
                return Ok(None);
            };

            let page: Page<T> = self.client.get_json(&path).await?;
            self.pages_fetched += 1;
            tracing::debug!(
                path = %path,
                items = page.len(),
                has_more = page.has_more(),
                "fetched page"
            );

            self.next = page.next_url;
            self.buffer = page.resources.into_iter();
        }
    }

    /// Drain the remaining items into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while let Some(item) = self.try_next().await? {
            all_items.push(item);
        }
        Ok(all_items)
    }
}

/// Walk the collection at `path`, calling `visit` once per item.
///
/// Items are visited in upstream order. The first error, whether from a page
/// fetch or from `visit`, stops the walk and is returned; nothing after the
/// failing item is visited.
///
/// # Errors
///
/// Returns the first error raised by a fetch or by `visit`.
pub async fn walk<T, F>(client: &CfClient, path: &str, mut visit: F) -> Result<()>
where
    T: DeserializeOwned,
    F: FnMut(T) -> Result<()>,
{
    let mut pager = Pager::new(client, path);
    while let Some(item) = pager.try_next().await? {
        visit(item)?;
    }
    Ok(())
}
