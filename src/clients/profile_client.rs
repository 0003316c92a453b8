use tracing::{debug, error, info, instrument};

use crate::actor_framework::{CacheClient, Cacheable, QueryKey};
use crate::api::ApiClient;
use crate::domain::ManagedRestaurant;
use crate::error::ProfileError;
use crate::forms::StoreProfileForm;

pub fn managed_restaurant_key() -> QueryKey {
    QueryKey::new("managed-restaurant")
}

/// Speculative change written to the cached restaurant before the server confirms it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePatch {
    pub name: String,
    pub description: Option<String>,
}

impl Cacheable for ManagedRestaurant {
    type Patch = ProfilePatch;

    fn apply_patch(&mut self, patch: &ProfilePatch) {
        self.name = patch.name.clone();
        self.description = patch.description.clone();
    }
}

/// Client for the managed restaurant profile.
///
/// Profile edits are optimistic: the cached restaurant shows the new values
/// before `PUT /profile` returns, and is put back if the call fails.
#[derive(Clone)]
pub struct ProfileClient {
    api: ApiClient,
    cache: CacheClient<ManagedRestaurant>,
}

impl ProfileClient {
    pub fn new(api: ApiClient, cache: CacheClient<ManagedRestaurant>) -> Self {
        Self { api, cache }
    }

    #[instrument(skip(self))]
    pub async fn get_managed_restaurant(&self) -> Result<ManagedRestaurant, ProfileError> {
        self.cache
            .fetch_query(managed_restaurant_key(), || async {
                self.api.get_managed_restaurant().await.map_err(ProfileError::from)
            })
            .await
    }

    /// Whatever the cache currently holds, without touching the network.
    pub async fn cached_profile(&self) -> Result<Option<ManagedRestaurant>, ProfileError> {
        Ok(self.cache.get(managed_restaurant_key()).await?)
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update_profile(&self, form: &StoreProfileForm) -> Result<(), ProfileError> {
        let body = form.validate()?;
        let patch = ProfilePatch {
            name: body.name.clone(),
            description: Some(body.description.clone()),
        };

        debug!("Applying optimistic profile update");
        let previous_profile = self.cache.update(managed_restaurant_key(), patch).await?;

        match self.api.update_profile(&body).await {
            Ok(()) => {
                info!("Profile updated");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Profile update failed");
                if let Some(previous) = previous_profile {
                    debug!("Restoring previous profile");
                    self.cache.set(managed_restaurant_key(), previous).await?;
                }
                Err(e.into())
            }
        }
    }
}
