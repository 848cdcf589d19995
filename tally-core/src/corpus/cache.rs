//! Parse memoization keyed by content identity.
//!
//! Re-selecting an input that was already parsed (same bytes, same loader
//! columns) returns the shared `Arc<Corpus>` instead of parsing again.
//! Entries live as long as the cache; there is no eviction.

use super::{Corpus, Loader};
use core::hash::BuildHasher;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::sync::Arc;
use tally_types::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    len: usize,
    digest: u64,
    loader: Loader,
}

#[derive(Debug)]
struct CacheEntry {
    source: Arc<[u8]>,
    corpus: Arc<Corpus>,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to parse.
    pub misses: u64,
    /// Cached corpora.
    pub entries: usize,
}

/// Memoizes [`Loader`] output by input bytes.
#[derive(Debug, Default)]
pub struct LoaderCache {
    entries: FxHashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl LoaderCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached corpus for `source`, parsing it on a miss.
    ///
    /// Failed parses are not cached.
    pub fn get_or_load(
        &mut self,
        loader: &Loader,
        source: &Arc<[u8]>,
    ) -> Result<Arc<Corpus>, LoadError> {
        let key = CacheKey {
            len: source.len(),
            digest: FxBuildHasher.hash_one(&source[..]),
            loader: loader.clone(),
        };

        if let Some(entry) = self.entries.get(&key) {
            // The digest is not collision-free; confirm the bytes match.
            if entry.source[..] == source[..] {
                self.hits += 1;
                log::debug!("loader cache hit ({} bytes)", source.len());
                return Ok(Arc::clone(&entry.corpus));
            }
            log::warn!("loader cache digest collision ({} bytes)", source.len());
        }

        self.misses += 1;
        log::debug!("loader cache miss ({} bytes)", source.len());

        let corpus = Arc::new(loader.load_bytes(source)?);
        self.entries.insert(
            key,
            CacheEntry {
                source: Arc::clone(source),
                corpus: Arc::clone(&corpus),
            },
        );
        Ok(corpus)
    }

    /// Returns hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    /// Drops every cached corpus.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
