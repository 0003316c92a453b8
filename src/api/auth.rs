use tracing::instrument;

use super::ApiClient;
use crate::domain::{RegisterRestaurantBody, SignInBody};
use crate::error::ApiError;

impl ApiClient {
    /// Asks the API to mail a magic sign-in link.
    #[instrument(skip(self, body), fields(email = %body.email))]
    pub async fn sign_in(&self, body: &SignInBody) -> Result<(), ApiError> {
        Self::execute(self.post("/authenticate").json(body)).await
    }

    #[instrument(skip(self, body), fields(restaurant = %body.restaurant_name))]
    pub async fn register_restaurant(&self, body: &RegisterRestaurantBody) -> Result<(), ApiError> {
        Self::execute(self.post("/restaurants").json(body)).await
    }
}
