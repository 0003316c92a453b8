use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The restaurant managed by the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRestaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileBody {
    pub name: String,
    pub description: String,
}

/// Body of `POST /restaurants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRestaurantBody {
    pub email: String,
    pub restaurant_name: String,
    pub manager_name: String,
    pub phone: String,
}
