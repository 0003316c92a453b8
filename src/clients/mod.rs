//! Data clients used by the views: the request layer composed with the
//! query caches.

#[macro_use]
mod macros;

pub mod auth_client;
pub mod metrics_client;
pub mod order_client;
pub mod profile_client;

pub use auth_client::*;
pub use metrics_client::*;
pub use order_client::*;
pub use profile_client::*;
