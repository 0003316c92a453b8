use super::Schema;
use crate::domain::{ManagedRestaurant, UpdateProfileBody};
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreProfileForm {
    pub name: String,
    pub description: Option<String>,
}

impl StoreProfileForm {
    /// Form values pre-filled from the cached restaurant, if any.
    pub fn from_restaurant(restaurant: Option<&ManagedRestaurant>) -> Self {
        Self {
            name: restaurant.map(|r| r.name.clone()).unwrap_or_default(),
            description: Some(
                restaurant
                    .and_then(|r| r.description.clone())
                    .unwrap_or_default(),
            ),
        }
    }

    pub fn validate(&self) -> Result<UpdateProfileBody, ValidationErrors> {
        Schema::new().min_len("name", &self.name, 1, "Nome inválido.").finish()?;
        Ok(UpdateProfileBody {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let form = StoreProfileForm { name: String::new(), description: None };
        assert_eq!(form.validate().unwrap_err().message_for("name"), Some("Nome inválido."));
    }

    #[test]
    fn test_missing_description_becomes_empty() {
        let form = StoreProfileForm { name: "Pizza".into(), description: None };
        assert_eq!(form.validate().unwrap().description, "");
    }

    #[test]
    fn test_defaults_without_cached_restaurant() {
        let form = StoreProfileForm::from_restaurant(None);
        assert_eq!(form.name, "");
        assert_eq!(form.description.as_deref(), Some(""));
    }
}
