//! # Mock Framework
//!
//! Utilities for testing clients against a cache the test drives by hand.
//!
//! Use [`create_mock_cache`] to get a client and a receiver.
//! Then use helpers like [`expect_update`] or [`expect_set`] to assert behavior.

use crate::actor_framework::{CacheClient, CacheRequest, Cacheable, QueryKey, Response};
use tokio::sync::mpsc;

/// Creates a mock cache client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Client tests usually want to observe *what* gets written to the cache and
/// *when*, relative to the HTTP round-trip. Spinning up a real `CacheActor`
/// hides that ordering.
///
/// Instead the client sends to a channel we control (`receiver`), so the test
/// can answer each request itself and assert the sequence of writes.
pub fn create_mock_cache<T: Cacheable>(buffer_size: usize) -> (CacheClient<T>, mpsc::Receiver<CacheRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CacheClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Cacheable>(receiver: &mut mpsc::Receiver<CacheRequest<T>>) -> Option<(QueryKey, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CacheRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Set request
pub async fn expect_set<T: Cacheable>(receiver: &mut mpsc::Receiver<CacheRequest<T>>) -> Option<(QueryKey, T, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CacheRequest::Set { key, value, respond_to }) => Some((key, value, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Cacheable>(receiver: &mut mpsc::Receiver<CacheRequest<T>>) -> Option<(QueryKey, T::Patch, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CacheRequest::Update { key, patch, respond_to }) => Some((key, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateMatching request
pub async fn expect_update_matching<T: Cacheable>(receiver: &mut mpsc::Receiver<CacheRequest<T>>) -> Option<(QueryKey, T::Patch, Response<usize>)> {
    match receiver.recv().await {
        Some(CacheRequest::UpdateMatching { prefix, patch, respond_to }) => Some((prefix, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProfilePatch;
    use crate::domain::ManagedRestaurant;

    #[tokio::test]
    async fn test_mock_cache() {
        let (client, mut receiver) = create_mock_cache::<ManagedRestaurant>(10);

        let update_task = tokio::spawn(async move {
            let patch = ProfilePatch { name: "Pizza Shop".into(), description: None };
            client.update(QueryKey::new("managed-restaurant"), patch).await
        });

        let (key, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(key, QueryKey::new("managed-restaurant"));
        assert_eq!(patch.name, "Pizza Shop");
        responder.send(None).unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}
