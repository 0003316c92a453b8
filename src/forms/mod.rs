//! Form schemas. Each form validates its raw input before exactly one
//! request function is called with the resulting body.

pub mod order_filters;
pub mod sign_in;
pub mod sign_up;
pub mod store_profile;

pub use order_filters::*;
pub use sign_in::*;
pub use sign_up::*;
pub use store_profile::*;

use crate::error::{FieldError, ValidationErrors};

/// Collects field rules in declaration order.
#[derive(Default)]
struct Schema {
    errors: Vec<FieldError>,
}

impl Schema {
    fn new() -> Self {
        Self::default()
    }

    fn min_len(mut self, field: &'static str, value: &str, min: usize, message: &'static str) -> Self {
        if value.chars().count() < min {
            self.errors.push(FieldError { field, message });
        }
        self
    }

    fn email(mut self, field: &'static str, value: &str, message: &'static str) -> Self {
        if !is_email(value) {
            self.errors.push(FieldError { field, message });
        }
        self
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// `local@label.tld` with no whitespace, no leading or doubled dots, and a
/// TLD of at least two letters.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && !local.ends_with('.');
    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    local_ok && domain_ok
}
