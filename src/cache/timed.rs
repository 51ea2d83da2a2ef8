// In-memory cache with a single fixed lifetime per entry.
// Expired entries are discovered and dropped on access; nothing sweeps in the background.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::clock::{Clock, SystemClock};

/// Default entry lifetime: 1 hour.
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(60 * 60);

/// A stored value and the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// Milliseconds since the Unix epoch.
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    /// An entry is stale once strictly more than `duration` has elapsed.
    pub fn is_expired(&self, now_ms: u64, duration: Duration) -> bool {
        now_ms.saturating_sub(self.stored_at) > duration.as_millis() as u64
    }
}

/// Key/value store whose entries are valid for `duration` after being set.
pub struct TimedCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    duration: Duration,
    clock: Arc<dyn Clock>,
}

impl<V> TimedCache<V> {
    /// Create a cache backed by the wall clock.
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, Arc::new(SystemClock))
    }

    pub fn with_clock(duration: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            duration,
            clock,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Look up `key`, evicting it first if it has expired.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.clock.now_ms();
        let expired = self.entries.get(key)?.is_expired(now, self.duration);

        if expired {
            debug!(key, "evicting expired cache entry");
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Insert or overwrite `key`, stamping it with the current time.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now_ms(),
        };
        self.entries.insert(key.into(), entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including ones not yet found stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> std::fmt::Debug for TimedCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .field("duration", &self.duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    const HOUR: Duration = Duration::from_secs(3600);

    fn manual_cache(duration: Duration) -> (TimedCache<String>, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let cache = TimedCache::with_clock(duration, Arc::new(clock.clone()));
        (cache, clock)
    }

    #[test]
    fn test_get_after_set_returns_value() {
        let (mut cache, _clock) = manual_cache(HOUR);
        cache.set("profile", "octocat".to_string());
        assert_eq!(cache.get("profile"), Some(&"octocat".to_string()));
    }

    #[test]
    fn test_get_before_set_is_absent() {
        let (mut cache, _clock) = manual_cache(HOUR);
        assert!(cache.get("repos").is_none());
    }

    #[test]
    fn test_entry_valid_at_exact_duration() {
        let (mut cache, clock) = manual_cache(Duration::from_millis(1000));
        cache.set("profile", "a".to_string());

        clock.advance(Duration::from_millis(1000));
        assert!(cache.get("profile").is_some());
    }

    #[test]
    fn test_entry_expires_one_ms_past_duration() {
        let (mut cache, clock) = manual_cache(Duration::from_millis(1000));
        cache.set("profile", "a".to_string());

        clock.advance(Duration::from_millis(1001));
        assert!(cache.get("profile").is_none());
        assert_eq!(cache.len(), 0, "expired entry should be purged");

        // Still absent at the same instant
        assert!(cache.get("profile").is_none());
    }

    #[test]
    fn test_eviction_is_permanent_even_if_clock_moves_back() {
        let (mut cache, clock) = manual_cache(Duration::from_millis(10));
        cache.set("k", "v".to_string());

        clock.advance(Duration::from_millis(11));
        assert!(cache.get("k").is_none());

        clock.set(0);
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_set_overwrites_and_restamps() {
        let (mut cache, clock) = manual_cache(Duration::from_millis(100));
        cache.set("k", "first".to_string());

        clock.advance(Duration::from_millis(80));
        cache.set("k", "second".to_string());

        clock.advance(Duration::from_millis(80));
        assert_eq!(cache.get("k"), Some(&"second".to_string()));
    }

    #[test]
    fn test_clear_empties_cache() {
        let (mut cache, _clock) = manual_cache(HOUR);
        cache.set("profile", "a".to_string());
        cache.set("repos", "b".to_string());

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("profile").is_none());
        assert!(cache.get("repos").is_none());
    }

    #[test]
    fn test_expiry_is_lazy() {
        let (mut cache, clock) = manual_cache(Duration::from_millis(5));
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());

        clock.advance(Duration::from_millis(50));

        // Only the key that was accessed gets purged
        assert!(cache.get("a").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_wall_clock_cache_round_trip() {
        let mut cache = TimedCache::new(HOUR);
        cache.set("n", 42u32);
        assert_eq!(cache.get("n"), Some(&42));
        assert_eq!(cache.duration(), HOUR);
    }
}
