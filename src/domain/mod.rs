pub mod order;
pub mod restaurant;
pub mod metrics;
pub mod auth;

pub use order::*;
pub use restaurant::*;
pub use metrics::*;
pub use auth::*;
