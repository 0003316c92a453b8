use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::debug;

use crate::error::CacheError;

// =============================================================================
// 1. THE ABSTRACTION (Cached values, Query keys, Patches)
// =============================================================================

/// Trait that any server response must implement to be held by a CacheActor
pub trait Cacheable: Clone + Send + Sync + 'static {
    /// Partial in-place change applied by optimistic writes.
    type Patch: Clone + Send + Sync + Debug;

    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Address of a cached server response, e.g. `["orders", "0", "", "", ""]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    /// True when `prefix`'s parts are the leading parts of this key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// How long a cached value is served without refetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleTime {
    After(Duration),
    Never,
}

impl StaleTime {
    fn is_fresh(&self, fetched_at: Instant) -> bool {
        match self {
            StaleTime::Never => true,
            StaleTime::After(limit) => fetched_at.elapsed() < *limit,
        }
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum CacheRequest<T: Cacheable> {
    Get {
        key: QueryKey,
        respond_to: Response<Option<T>>,
    },
    Set {
        key: QueryKey,
        value: T,
        respond_to: Response<Option<T>>,
    },
    Update {
        key: QueryKey,
        patch: T::Patch,
        respond_to: Response<Option<T>>,
    },
    UpdateMatching {
        prefix: QueryKey,
        patch: T::Patch,
        respond_to: Response<usize>,
    },
    IsFresh {
        key: QueryKey,
        respond_to: Response<bool>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

struct Entry<T> {
    value: T,
    updated_at: Instant,
}

pub struct CacheActor<T: Cacheable> {
    receiver: mpsc::Receiver<CacheRequest<T>>,
    store: HashMap<QueryKey, Entry<T>>,
    stale_time: StaleTime,
}

impl<T: Cacheable> CacheActor<T> {
    pub fn new(buffer_size: usize, stale_time: StaleTime) -> (Self, CacheClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            stale_time,
        };
        (actor, CacheClient::new(sender))
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CacheRequest::Get { key, respond_to } => {
                    let value = self.store.get(&key).map(|e| e.value.clone());
                    let _ = respond_to.send(value);
                }
                CacheRequest::Set { key, value, respond_to } => {
                    let entry = Entry { value, updated_at: Instant::now() };
                    let previous = self.store.insert(key, entry).map(|e| e.value);
                    let _ = respond_to.send(previous);
                }
                CacheRequest::Update { key, patch, respond_to } => {
                    let previous = self.store.get_mut(&key).map(|entry| {
                        let previous = entry.value.clone();
                        entry.value.apply_patch(&patch);
                        previous
                    });
                    let _ = respond_to.send(previous);
                }
                CacheRequest::UpdateMatching { prefix, patch, respond_to } => {
                    let mut touched = 0;
                    for (key, entry) in self.store.iter_mut() {
                        if key.starts_with(&prefix) {
                            entry.value.apply_patch(&patch);
                            touched += 1;
                        }
                    }
                    let _ = respond_to.send(touched);
                }
                CacheRequest::IsFresh { key, respond_to } => {
                    let fresh = self
                        .store
                        .get(&key)
                        .is_some_and(|e| self.stale_time.is_fresh(e.updated_at));
                    let _ = respond_to.send(fresh);
                }
            }
        }
        debug!("Cache actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct CacheClient<T: Cacheable> {
    sender: mpsc::Sender<CacheRequest<T>>,
}

impl<T: Cacheable> CacheClient<T> {
    pub fn new(sender: mpsc::Sender<CacheRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> CacheRequest<T>,
    ) -> Result<R, CacheError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CacheError::ActorClosed)?;
        response.await.map_err(|_| CacheError::ActorDropped)
    }

    pub async fn get(&self, key: QueryKey) -> Result<Option<T>, CacheError> {
        self.request(|respond_to| CacheRequest::Get { key, respond_to }).await
    }

    /// Stores `value` and returns what it replaced.
    pub async fn set(&self, key: QueryKey, value: T) -> Result<Option<T>, CacheError> {
        self.request(|respond_to| CacheRequest::Set { key, value, respond_to })
            .await
    }

    /// Patches the entry in place and returns its prior value. Absent keys stay absent.
    pub async fn update(&self, key: QueryKey, patch: T::Patch) -> Result<Option<T>, CacheError> {
        self.request(|respond_to| CacheRequest::Update { key, patch, respond_to })
            .await
    }

    /// Patches every entry under `prefix`, returning how many were touched.
    pub async fn update_matching(&self, prefix: QueryKey, patch: T::Patch) -> Result<usize, CacheError> {
        self.request(|respond_to| CacheRequest::UpdateMatching { prefix, patch, respond_to })
            .await
    }

    pub async fn is_fresh(&self, key: QueryKey) -> Result<bool, CacheError> {
        self.request(|respond_to| CacheRequest::IsFresh { key, respond_to })
            .await
    }

    /// Serves a fresh cached value, otherwise runs `fetch` and caches its result.
    pub async fn fetch_query<F, Fut, E>(&self, key: QueryKey, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<CacheError>,
    {
        if self.is_fresh(key.clone()).await? {
            if let Some(value) = self.get(key.clone()).await? {
                debug!(%key, "Serving cached query");
                return Ok(value);
            }
        }
        debug!(%key, "Fetching query");
        let value = fetch().await?;
        self.set(key, value.clone()).await?;
        Ok(value)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        label: String,
        hits: u32,
    }

    impl Cacheable for Counter {
        type Patch = String;

        fn apply_patch(&mut self, patch: &String) {
            self.label = patch.clone();
        }
    }

    fn counter(label: &str) -> Counter {
        Counter { label: label.into(), hits: 0 }
    }

    fn spawn(stale_time: StaleTime) -> CacheClient<Counter> {
        let (actor, client) = CacheActor::new(10, stale_time);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_set_returns_previous_and_update_patches() {
        let client = spawn(StaleTime::Never);
        let key = QueryKey::new("counter");

        assert_eq!(client.set(key.clone(), counter("a")).await.unwrap(), None);
        assert_eq!(client.set(key.clone(), counter("b")).await.unwrap(), Some(counter("a")));

        let previous = client.update(key.clone(), "c".into()).await.unwrap();
        assert_eq!(previous, Some(counter("b")));
        assert_eq!(client.get(key).await.unwrap(), Some(counter("c")));
    }

    #[tokio::test]
    async fn test_update_on_missing_key_writes_nothing() {
        let client = spawn(StaleTime::Never);
        let key = QueryKey::new("missing");

        assert_eq!(client.update(key.clone(), "x".into()).await.unwrap(), None);
        assert_eq!(client.get(key.clone()).await.unwrap(), None);
        assert!(!client.is_fresh(key).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_matching_only_touches_prefix() {
        let client = spawn(StaleTime::Never);
        let page_0 = QueryKey::new("orders").with("0");
        let page_1 = QueryKey::new("orders").with("1");
        let other = QueryKey::new("order").with("0");
        for key in [&page_0, &page_1, &other] {
            client.set(key.clone(), counter("old")).await.unwrap();
        }

        let touched = client.update_matching(QueryKey::new("orders"), "new".into()).await.unwrap();

        assert_eq!(touched, 2);
        assert_eq!(client.get(page_1).await.unwrap().unwrap().label, "new");
        assert_eq!(client.get(other).await.unwrap().unwrap().label, "old");
    }

    #[tokio::test]
    async fn test_fetch_query_respects_stale_time() {
        let calls = Arc::new(AtomicU32::new(0));
        let fetch = |calls: Arc<AtomicU32>| async move {
            let hits = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok::<_, CacheError>(Counter { label: "fetched".into(), hits })
        };

        let never = spawn(StaleTime::Never);
        let key = QueryKey::new("managed-restaurant");
        never.fetch_query(key.clone(), || fetch(calls.clone())).await.unwrap();
        let second = never.fetch_query(key, || fetch(calls.clone())).await.unwrap();
        assert_eq!(second.hits, 1);

        let always = spawn(StaleTime::After(Duration::ZERO));
        let key = QueryKey::new("orders");
        always.fetch_query(key.clone(), || fetch(calls.clone())).await.unwrap();
        let refetched = always.fetch_query(key, || fetch(calls.clone())).await.unwrap();
        assert_eq!(refetched.hits, 3);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = CacheActor::<Counter>::new(1, StaleTime::Never);
        drop(actor);
        assert_eq!(client.get(QueryKey::new("k")).await, Err(CacheError::ActorClosed));
    }
}
