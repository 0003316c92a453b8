use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{CacheActor, StaleTime};
use crate::api::ApiClient;
use crate::clients::{AuthClient, MetricsClient, OrderClient, ProfileClient};
use crate::domain::{ManagedRestaurant, OrderDetails, OrdersPage};

const CACHE_BUFFER: usize = 32;

/// The running panel: one cache actor per cached response type, plus the
/// clients wired to them.
///
/// Responsible for starting up the caches and shutting them down.
pub struct DashboardSystem {
    pub auth_client: AuthClient,
    pub profile_client: ProfileClient,
    pub order_client: OrderClient,
    pub metrics_client: MetricsClient,
    handles: Vec<JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new(api: ApiClient) -> Self {
        // 1. Managed restaurant: fetched once per session
        let (restaurant_actor, restaurant_cache) = CacheActor::<ManagedRestaurant>::new(CACHE_BUFFER, StaleTime::Never);
        let restaurant_handle = tokio::spawn(restaurant_actor.run());

        // 2. Orders pages and details: always refetched, kept for optimistic writes
        let (pages_actor, pages_cache) = CacheActor::<OrdersPage>::new(CACHE_BUFFER, StaleTime::After(Duration::ZERO));
        let pages_handle = tokio::spawn(pages_actor.run());

        let (details_actor, details_cache) = CacheActor::<OrderDetails>::new(CACHE_BUFFER, StaleTime::After(Duration::ZERO));
        let details_handle = tokio::spawn(details_actor.run());

        Self {
            auth_client: AuthClient::new(api.clone()),
            profile_client: ProfileClient::new(api.clone(), restaurant_cache),
            order_client: OrderClient::new(api.clone(), pages_cache, details_cache),
            metrics_client: MetricsClient::new(api),
            handles: vec![restaurant_handle, pages_handle, details_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down panel...");

        // Cache actors stop once every client holding their channel is gone
        drop(self.auth_client);
        drop(self.profile_client);
        drop(self.order_client);
        drop(self.metrics_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Cache task failed: {:?}", e);
                return Err(format!("Cache task failed: {:?}", e));
            }
        }

        info!("Panel shutdown complete.");
        Ok(())
    }
}
