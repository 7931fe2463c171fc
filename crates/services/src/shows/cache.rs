use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::ports::ShowList;

struct CacheEntry {
    value: ShowList,
    inserted_at: Instant,
    /// Write order, breaks ties between equal timestamps
    sequence: u64,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    next_sequence: u64,
}

/// Bounded TTL cache of resolved show lists, keyed by case-folded actor name.
///
/// Expiry is lazy: an entry older than the TTL reads as a miss but stays in
/// the map until it is overwritten or evicted. When the cache is full, the
/// entry with the oldest insertion time is evicted before the next insert.
/// Reads do not refresh an entry, so this is FIFO rather than LRU.
pub struct ShowCache {
    state: Mutex<CacheState>,
    ttl: Duration,
    max_entries: usize,
}

impl ShowCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn from_config(config: &config::CacheConfig) -> Self {
        Self::new(config.ttl, config.max_entries)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Cached list for `key`, or `None` when absent or expired
    pub async fn get(&self, key: &str) -> Option<ShowList> {
        let state = self.state.lock().await;
        let entry = state.entries.get(key)?;

        if entry.inserted_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            tracing::debug!(key = %key, "Cache entry expired");
            None
        }
    }

    /// Insert or replace `key`, evicting the oldest entry first when full
    pub async fn put(&self, key: String, value: ShowList) {
        let mut state = self.state.lock().await;

        if state.entries.len() >= self.max_entries {
            Self::evict_oldest(&mut state);
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                sequence,
            },
        );
    }

    fn evict_oldest(state: &mut CacheState) {
        let oldest = state
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.inserted_at, entry.sequence))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            state.entries.remove(&key);
            tracing::debug!(key = %key, "Evicted oldest cache entry");
        }
    }

    /// Number of stored entries, expired ones included
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.state.lock().await.entries.contains_key(key)
    }
}
