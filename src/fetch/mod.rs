// Fetch module.
// One-shot HTTP requests with an enforced timeout.

pub mod guard;

pub use guard::{DEFAULT_TIMEOUT, FetchGuard, RequestOptions};
