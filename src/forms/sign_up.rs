use super::Schema;
use crate::domain::RegisterRestaurantBody;
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<RegisterRestaurantBody, ValidationErrors> {
        Schema::new()
            .email("email", &self.email, "E-mail inválido.")
            .min_len("restaurantName", &self.restaurant_name, 3, "Nome do estabelecimento inválido.")
            .min_len("managerName", &self.manager_name, 3, "Nome do responsável inválido.")
            .min_len("phone", &self.phone, 11, "Celular inválido.")
            .finish()?;

        Ok(RegisterRestaurantBody {
            email: self.email.clone(),
            restaurant_name: self.restaurant_name.clone(),
            manager_name: self.manager_name.clone(),
            phone: self.phone.clone(),
        })
    }
}
