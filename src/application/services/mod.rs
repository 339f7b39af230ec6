//! Business logic services for the application layer.

pub mod rate_limiter;
pub mod reset_tokens;
pub mod resolver;
pub mod token_blacklist;

pub use rate_limiter::{RateDecision, RateLimiter};
pub use reset_tokens::ResetTokenStore;
pub use resolver::LinkResolver;
pub use token_blacklist::TokenBlacklist;
