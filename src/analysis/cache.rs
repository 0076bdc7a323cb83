//! Memoization of critical edge reports.
//!
//! Critical edge analysis enumerates every simple path and can be expensive
//! on dense graphs. The cache stores finished reports under a key derived
//! from everything that affects the answer:
//! - graph snapshot hash (nodes, trust labels, edges)
//! - source and destination IDs
//! - policy parameter hash
//!
//! Any graph mutation or policy change therefore results in a cache miss.

use std::hash::Hasher;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;
use xxhash_rust::xxh64::Xxh64;

use crate::policy::SearchPolicy;
use crate::search::{CriticalEdgeAnalyzer, CriticalEdgeReport};
use crate::store::GraphStore;
use crate::types::NodeId;

/// Capacity used when a zero capacity is configured.
const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Configuration for the analysis cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache.
    pub max_entries: usize,
    /// Whether to enable the cache.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_024,
            enabled: true,
        }
    }
}

/// Cache key for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AnalysisCacheKey(u64);

impl AnalysisCacheKey {
    fn compute(snapshot_hash: &str, source: &NodeId, dest: &NodeId, params_hash: &str) -> Self {
        let mut hasher = Xxh64::new(0);

        hasher.write(snapshot_hash.as_bytes());
        hasher.write(source.as_uuid().as_bytes());
        hasher.write(dest.as_uuid().as_bytes());
        hasher.write(params_hash.as_bytes());

        Self(hasher.finish())
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries in the cache.
    pub len: usize,
    /// Maximum capacity of the cache.
    pub cap: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the analysis.
    pub misses: u64,
}

/// LRU cache of critical edge reports.
///
/// Thread-safe; lookups take a read lock, inserts a write lock.
pub struct AnalysisCache {
    cache: Option<RwLock<LruCache<AnalysisCacheKey, Arc<CriticalEdgeReport>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    /// Create a cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        let cache = config.enabled.then(|| {
            let size = NonZeroUsize::new(config.max_entries).unwrap_or(FALLBACK_CAPACITY);
            RwLock::new(LruCache::new(size))
        });

        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached report for this query, or run the analysis and
    /// cache it. The flag is `true` on a cache hit.
    pub fn get_or_analyze<S: GraphStore + ?Sized>(
        &self,
        store: &S,
        policy: &SearchPolicy,
        source: NodeId,
        dest: NodeId,
    ) -> (Arc<CriticalEdgeReport>, bool) {
        let Some(cache) = &self.cache else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            let report = CriticalEdgeAnalyzer::with_policy(store, policy.clone()).analyze(source, dest);
            return (Arc::new(report), false);
        };

        let key = AnalysisCacheKey::compute(&store.snapshot_hash(), &source, &dest, &policy.params_hash());

        if let Some(report) = cache.read().peek(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return (Arc::clone(report), true);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let report = Arc::new(
            CriticalEdgeAnalyzer::with_policy(store, policy.clone()).analyze(source, dest),
        );
        cache.write().put(key, Arc::clone(&report));

        (report, false)
    }

    /// Get cache statistics.
    ///
    /// Returns `None` if caching is disabled.
    pub fn stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| {
            let cache = cache.read();
            CacheStats {
                len: cache.len(),
                cap: cache.cap().get(),
                hits: self.hits.load(Ordering::Relaxed),
                misses: self.misses.load(Ordering::Relaxed),
            }
        })
    }

    /// Drop every cached report.
    ///
    /// Does nothing if caching is disabled.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.write().clear();
        }
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
