use std::fmt;

use thiserror::Error;

use crate::domain::{OrderAction, OrderStatus};

/// Failure of a single REST call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),
}

/// Failure to reach a cache actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CacheError {
    #[error("Cache actor closed")]
    ActorClosed,
    #[error("Cache actor dropped the request")]
    ActorDropped,
}

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field rejected by a form schema, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    #[cfg(test)]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Authentication request failed: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Profile request failed: {0}")]
    Api(#[from] ApiError),
    #[error("Profile cache error: {0}")]
    Cache(#[from] CacheError),
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order request failed: {0}")]
    Api(#[from] ApiError),
    #[error("Order cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("Action {action:?} is not offered for orders with status {status}")]
    ActionNotAvailable { action: OrderAction, status: OrderStatus },
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics request failed: {0}")]
    Api(#[from] ApiError),
}
