//! Memoized loads.
//!
//! A [`LoadCache`] belongs to a single session. It remembers the outcome of
//! each distinct source so repeated renders skip re-parsing; failed loads are
//! remembered too until explicitly invalidated.

use std::collections::HashMap;
use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::config::LoaderConfig;
use crate::loader::{load, LoadOutcome};
use crate::source::{Source, SourceKey};

/// Hit/miss counters for a [`LoadCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Calculate cache hit rate as a percentage (0-100).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Load results keyed by source identity.
#[derive(Debug, Default)]
pub struct LoadCache {
    config: LoaderConfig,
    entries: HashMap<SourceKey, Arc<LoadOutcome>>,
    stats: CacheStats,
}

impl LoadCache {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Return the memoized outcome for `source`, loading it on first use.
    pub fn get_or_load(&mut self, source: &Source) -> Arc<LoadOutcome> {
        let key = source.key();
        if let Some(outcome) = self.entries.get(&key) {
            self.stats.hits += 1;
            counter!("station_load_cache_hits_total").increment(1);
            debug!(
                source = %key,
                hit_rate = self.stats.hit_rate(),
                "Load cache hit"
            );
            return Arc::clone(outcome);
        }

        self.stats.misses += 1;
        counter!("station_load_cache_misses_total").increment(1);
        debug!(
            source = %key,
            hit_rate = self.stats.hit_rate(),
            "Load cache miss"
        );
        let outcome = Arc::new(load(source, &self.config));
        self.entries.insert(key, Arc::clone(&outcome));
        outcome
    }

    /// Drop any memoized outcome for `source` and load it again.
    pub fn reload(&mut self, source: &Source) -> Arc<LoadOutcome> {
        self.invalidate(source);
        self.get_or_load(source)
    }

    /// Forget the memoized outcome for `source`. Returns whether one existed.
    pub fn invalidate(&mut self, source: &Source) -> bool {
        self.entries.remove(&source.key()).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, source: &Source) -> bool {
        self.entries.contains_key(&source.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
