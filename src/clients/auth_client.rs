use tracing::{info, instrument};

use crate::api::ApiClient;
use crate::domain::RegisterRestaurantBody;
use crate::error::AuthError;
use crate::forms::{SignInForm, SignUpForm};

/// Client for sign-in and restaurant sign-up.
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validates the form and requests a magic link.
    #[instrument(skip(self, form))]
    pub async fn sign_in(&self, form: &SignInForm) -> Result<(), AuthError> {
        let body = form.validate()?;
        self.api.sign_in(&body).await?;
        info!("Authentication link requested");
        Ok(())
    }

    /// Validates the form and registers the restaurant, returning what was sent.
    #[instrument(skip(self, form))]
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<RegisterRestaurantBody, AuthError> {
        let body = form.validate()?;
        self.api.register_restaurant(&body).await?;
        info!(restaurant = %body.restaurant_name, "Restaurant registered");
        Ok(body)
    }
}
