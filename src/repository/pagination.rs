//! Offset pagination shared by the catalog sync and the review loader.

use crate::remote::RemoteError;
use std::future::Future;
use tracing::{debug, warn};

/// Page size of every paginated remote endpoint.
pub const PAGE_SIZE: usize = 10;

/// Upper bound on pages requested by a single loop.
pub const MAX_PAGES: usize = 1_000;

/// Requests pages at offsets `0, 10, 20, ...` and appends every successful page.
///
/// The loop ends at the first `Err`. Short or empty pages do not end it. Results gathered
/// before the failure are returned.
pub async fn collect_pages<T, F, Fut>(resource: &'static str, mut fetch: F) -> Vec<T>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, RemoteError>>,
{
    let mut items = Vec::new();
    for page in 0..MAX_PAGES {
        let offset = page * PAGE_SIZE;
        match fetch(offset, PAGE_SIZE).await {
            Ok(batch) => {
                debug!(resource, page, received = batch.len(), "Page fetched");
                items.extend(batch);
            }
            Err(error) => {
                debug!(resource, page, total = items.len(), error = %error, "Pagination finished");
                return items;
            }
        }
    }
    warn!(resource, max_pages = MAX_PAGES, total = items.len(), "Pagination hit page limit");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_stops_at_first_failure_and_keeps_partial_results() {
        let offsets = Mutex::new(Vec::new());
        let items = collect_pages("numbers", |offset, limit| {
            offsets.lock().unwrap().push(offset);
            async move {
                if offset >= 25 {
                    Err(RemoteError::Status { code: 404 })
                } else {
                    Ok((offset..(offset + limit).min(25)).collect::<Vec<_>>())
                }
            }
        })
        .await;

        assert_eq!(items, (0..25).collect::<Vec<_>>());
        assert_eq!(*offsets.lock().unwrap(), vec![0, 10, 20, 30]);
    }

    #[tokio::test]
    async fn test_empty_pages_do_not_end_the_loop() {
        let calls = Mutex::new(0usize);
        let items: Vec<u8> = collect_pages("empty", |offset, _| {
            *calls.lock().unwrap() += 1;
            async move {
                if offset < 30 {
                    Ok(Vec::new())
                } else {
                    Err(RemoteError::Transport("offline".into()))
                }
            }
        })
        .await;

        assert!(items.is_empty());
        assert_eq!(*calls.lock().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_immediate_failure_yields_nothing() {
        let items: Vec<u8> =
            collect_pages("down", |_, _| async { Err(RemoteError::Status { code: 500 }) }).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_always_succeeding_source_is_bounded() {
        let calls = Mutex::new(0usize);
        let items: Vec<u8> = collect_pages("endless", |_, _| {
            *calls.lock().unwrap() += 1;
            async { Ok(vec![1]) }
        })
        .await;

        assert_eq!(items.len(), MAX_PAGES);
        assert_eq!(*calls.lock().unwrap(), MAX_PAGES);
    }
}
