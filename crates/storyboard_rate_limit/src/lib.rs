//! Rate limiting for requests to the generation capability.
//!
//! Several scenes' preview images can be requested at once. The limiter caps
//! how many requests are in flight and, optionally, how many start per minute.

mod config;
mod limiter;

pub use config::LimitConfig;
pub use limiter::{RequestLimiter, RequestLimiterGuard};
