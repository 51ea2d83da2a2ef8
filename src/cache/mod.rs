// Cache module.
// Session-lifetime timed cache for GitHub responses, plus on-disk paths.

pub mod clock;
pub mod paths;
pub mod timed;

pub use clock::{Clock, ManualClock, SystemClock};
pub use paths::{cache_dir, log_path};
pub use timed::{CacheEntry, DEFAULT_CACHE_DURATION, TimedCache};
