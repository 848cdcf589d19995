//! Explorer session state.
//!
//! A [`Session`] owns everything that outlives a single interaction: the
//! resolved configuration, the loader cache, the bytes of the current input
//! and the corpus parsed from them. Filter changes never touch this state;
//! they produce a fresh [`Report`] from the shared corpus snapshot.
//!
//! A failed load leaves the previous corpus active.

use crate::analyzer::Analyzer;
use crate::corpus::{CacheStats, Corpus, Loader, LoaderCache, Record};
use crate::report::Report;
use std::path::Path;
use std::sync::Arc;
use tally_types::{ConfigError, ExplorerConfig, LengthRange, LoadError};

/// Errors from changing session settings.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The requested setting would make the configuration invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The current input could not be reloaded with the new setting.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Explorer state for one user.
#[derive(Debug)]
pub struct Session {
    config: ExplorerConfig,
    analyzer: Analyzer,
    loader: Loader,
    cache: LoaderCache,
    source: Option<Arc<[u8]>>,
    corpus: Option<Arc<Corpus>>,
}

impl Session {
    /// Validates `config` and starts an empty session.
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            analyzer: Analyzer::from_config(&config),
            loader: Loader::from_config(&config),
            cache: LoaderCache::new(),
            source: None,
            corpus: None,
            config,
        })
    }

    /// The resolved configuration.
    #[inline]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The analyzer every report uses.
    #[inline]
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The active corpus, if one has loaded successfully.
    #[inline]
    pub fn corpus(&self) -> Option<&Arc<Corpus>> {
        self.corpus.as_ref()
    }

    /// Loader cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Parses `bytes` and makes the result the active corpus.
    ///
    /// On error the previous corpus and source stay active.
    pub fn load(&mut self, bytes: impl Into<Arc<[u8]>>) -> Result<Arc<Corpus>, LoadError> {
        let source = bytes.into();
        match self.cache.get_or_load(&self.loader, &source) {
            Ok(corpus) => {
                self.source = Some(source);
                self.corpus = Some(Arc::clone(&corpus));
                Ok(corpus)
            }
            Err(err) => {
                log::warn!("load failed, keeping previous corpus: {err}");
                Err(err)
            }
        }
    }

    /// Reads `path` and loads it.
    pub fn load_path(&mut self, path: &Path) -> Result<Arc<Corpus>, LoadError> {
        let bytes = std::fs::read(path)?;
        log::info!("read {} bytes from {}", bytes.len(), path.display());
        self.load(bytes)
    }

    /// Switches the text column and reloads the current input with it.
    ///
    /// With no input loaded yet, only the setting changes. The name must
    /// keep the configuration valid (non-empty, not the length column). On
    /// error the previous column and corpus stay active.
    pub fn select_text_field(&mut self, name: &str) -> Result<(), SessionError> {
        let config = ExplorerConfig {
            text_field: name.to_owned(),
            ..self.config.clone()
        };
        config.validate()?;

        let loader = Loader::from_config(&config);
        if let Some(source) = &self.source {
            let corpus = self.cache.get_or_load(&loader, source)?;
            self.corpus = Some(corpus);
        }
        self.loader = loader;
        self.config = config;
        Ok(())
    }

    /// Records of the active corpus within `range`.
    pub fn filtered(&self, range: LengthRange) -> Option<Corpus> {
        self.corpus.as_ref().map(|c| c.filter(range))
    }

    /// First `preview_rows` records of the active corpus.
    pub fn preview(&self) -> &[Record] {
        self.corpus
            .as_ref()
            .map(|c| c.head(self.config.preview_rows))
            .unwrap_or_default()
    }

    /// Filters the active corpus and computes every statistic over the result.
    ///
    /// Returns `None` until a corpus has loaded.
    pub fn report(&self, range: LengthRange) -> Option<Report> {
        let filtered = self.filtered(range)?;
        log::debug!(
            "report over {} of {} records",
            filtered.len(),
            self.corpus.as_ref().map_or(0, |c| c.len())
        );
        Some(Report::build(&filtered, range, &self.config, &self.analyzer))
    }
}
