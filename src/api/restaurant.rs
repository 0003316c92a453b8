use tracing::instrument;

use super::ApiClient;
use crate::domain::{ManagedRestaurant, UpdateProfileBody};
use crate::error::ApiError;

impl_get_queries! {
    fn get_managed_restaurant() -> ManagedRestaurant = "/managed-restaurant";
}

impl ApiClient {
    #[instrument(skip(self, body), fields(name = %body.name))]
    pub async fn update_profile(&self, body: &UpdateProfileBody) -> Result<(), ApiError> {
        Self::execute(self.put("/profile").json(body)).await
    }
}
