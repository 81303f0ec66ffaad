//! Lazy pagination over search results.

use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;

/// One page of search results.
pub trait Page {
    /// Record type carried by the page.
    type Item;

    /// Returns true if the API reports another page after page `index`.
    fn has_next(&self, index: u32) -> bool;

    /// Consumes the page, returning its records.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Creates a lazy stream of result pages.
///
/// `fetch` is called with page indices 0, 1, 2, ... one at a time. The stream
/// ends after a page that reports no successor or carries no records, and
/// stops at the first error. Every call starts again from page 0.
pub fn page_stream<P, E, F, Fut>(fetch: F) -> impl Stream<Item = Result<Vec<P::Item>, E>>
where
    P: Page,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<P, E>>,
{
    stream::try_unfold((fetch, Some(0_u32)), |(mut fetch, next)| async move {
        let Some(index) = next else {
            return Ok(None);
        };

        let page = fetch(index).await?;
        let more = page.has_next(index);
        let items = page.into_items();
        let next = if more && !items.is_empty() {
            Some(index + 1)
        } else {
            None
        };

        Ok::<_, E>(Some((items, (fetch, next))))
    })
}

/// Drains a page stream into a flat list of records.
///
/// # Errors
///
/// Returns the first error produced by the stream.
pub async fn collect_items<T, E>(pages: impl Stream<Item = Result<Vec<T>, E>>) -> Result<Vec<T>, E> {
    pages.try_concat().await
}
