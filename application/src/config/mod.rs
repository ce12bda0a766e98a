//! Application-level configuration.
//!
//! - [`RetryPolicy`]: how completion calls are retried after a failure

pub mod retry_policy;

pub use retry_policy::{Backoff, RetryPolicy};
