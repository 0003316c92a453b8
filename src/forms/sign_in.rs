use super::Schema;
use crate::domain::SignInBody;
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<SignInBody, ValidationErrors> {
        Schema::new()
            .email("email", &self.email, "E-mail inválido.")
            .finish()?;
        Ok(SignInBody { email: self.email.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_email() {
        let err = SignInForm { email: "nope".into() }.validate().unwrap_err();
        assert_eq!(err.message_for("email"), Some("E-mail inválido."));
    }
}
