//! Bounded page-content cache with FIFO eviction
//!
//! Keys are page identifiers, values are raw fetched content. Eviction is
//! strictly by original insertion order: reading an entry does not refresh
//! its position, and overwriting an entry's value does not move it. The
//! handle is `Clone` and cheap to share across concurrent navigations.

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Default number of pages kept in the cache
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Bounded FIFO cache of fetched page content
#[derive(Clone)]
pub struct PageCache {
    inner: Arc<RwLock<FifoCache>>,
    stats: Arc<RwLock<CacheStats>>,
}

struct FifoCache {
    data: HashMap<String, String>,

    /// Insertion order, oldest at the front
    order: VecDeque<String>,

    max_size: usize,
}

/// Cache statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

impl PageCache {
    /// Create a cache holding at most `max_size` pages.
    ///
    /// A capacity of zero disables caching: every `insert` is a no-op and
    /// every lookup misses.
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FifoCache {
                data: HashMap::new(),
                order: VecDeque::new(),
                max_size,
            })),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        }
    }

    /// Check whether a page is currently cached
    pub fn contains(&self, page: &str) -> bool {
        self.inner.read().data.contains_key(page)
    }

    /// Get cached content for a page
    ///
    /// Returns `None` on a miss. A hit does not refresh the entry's
    /// eviction order.
    pub fn get(&self, page: &str) -> Option<String> {
        let inner = self.inner.read();
        let mut stats = self.stats.write();

        match inner.data.get(page) {
            Some(content) => {
                stats.hits += 1;
                debug!("page cache HIT: {}", page);
                Some(content.clone())
            }
            None => {
                stats.misses += 1;
                debug!("page cache MISS: {}", page);
                None
            }
        }
    }

    /// Insert or overwrite a page's content
    ///
    /// A new key evicts the oldest-inserted entry first when the cache is
    /// full. Overwriting an existing key updates the value in place and
    /// keeps the key's original insertion position.
    pub fn insert(&self, page: String, content: String) {
        let mut inner = self.inner.write();
        let mut stats = self.stats.write();

        if inner.max_size == 0 {
            return;
        }

        // Overwrite keeps the original insertion position
        if let Some(existing) = inner.data.get_mut(&page) {
            *existing = content;
            return;
        }

        while inner.data.len() >= inner.max_size {
            if let Some(oldest) = inner.order.pop_front() {
                inner.data.remove(&oldest);
                stats.evictions += 1;
                debug!("page cache EVICT: {}", oldest);
            } else {
                break;
            }
        }

        debug!("page cache PUT: {} ({} bytes)", page, content.len());
        inner.order.push_back(page.clone());
        inner.data.insert(page, content);
        stats.entries = inner.data.len();
    }

    /// Number of cached pages
    pub fn len(&self) -> usize {
        self.inner.read().data.len()
    }

    /// True if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.inner.read().data.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let entries = self.inner.read().data.len();
        let mut stats = self.stats.read().clone();
        stats.entries = entries;
        stats
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
