//! The reloadable corpus store.
//!
//! [`CorpusStore`] owns the loaded corpus and its word indexes as a single
//! immutable [`Snapshot`] behind an `Arc`. A reload builds a complete new
//! snapshot and then swaps the pointer, so a reader holding a snapshot
//! always sees a corpus and indexes that belong together.
//!
//! Reads go through [`CorpusStore::snapshot`], which first checks whether
//! any `*.txt` file in a genre folder is newer than the snapshot and
//! reloads if so. The filesystem scan can be rate limited with
//! [`Settings::staleness_check_interval_ms`].

use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Instant, SystemTime},
};

use globset::GlobMatcher;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::{
    corpus::{self, Corpus, Document},
    data_dir::DataDir,
    error::Result,
    genre::{Genre, GenreFilter},
    kwic::{self, KwicResult},
    neologism,
    settings::Settings,
    suggest,
    walker,
    word_index::{CorpusStats, WordIndex},
};

/// Document counts per genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreStats {
    pub genres: BTreeMap<Genre, usize>,
    pub total: usize,
}

/// Word counts of one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeCounts {
    pub unique_words: usize,
    pub total_words: usize,
}

impl From<&WordIndex> for ScopeCounts {
    fn from(index: &WordIndex) -> Self {
        Self {
            unique_words: index.unique_words(),
            total_words: index.total_words(),
        }
    }
}

/// Word counts for the whole corpus and per genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    pub all: ScopeCounts,
    pub genres: BTreeMap<Genre, ScopeCounts>,
}

/// A consistent view of the corpus and everything derived from it.
#[derive(Debug, Default)]
pub struct Snapshot {
    corpus: Corpus,
    stats: CorpusStats,
    /// Files modified after this instant make the snapshot stale.
    loaded_at: Option<SystemTime>,
}

impl Snapshot {
    fn build(corpus: Corpus, loaded_at: SystemTime) -> Self {
        let stats = CorpusStats::build(&corpus);
        Self {
            corpus,
            stats,
            loaded_at: Some(loaded_at),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Staleness baseline, `None` before the first load.
    pub fn loaded_at(&self) -> Option<SystemTime> {
        self.loaded_at
    }

    pub fn files_by_genre(&self, filter: GenreFilter) -> Vec<&Document> {
        self.corpus.filtered(filter).collect()
    }

    pub fn kwic_search(
        &self,
        term: &str,
        window: usize,
        filter: GenreFilter,
    ) -> KwicResult {
        kwic::kwic_search(self.corpus.filtered(filter), term, window)
    }

    pub fn suggest(
        &self,
        prefix: &str,
        filter: GenreFilter,
        limit: usize,
    ) -> Vec<String> {
        suggest::suggest(self.corpus.filtered(filter), prefix, limit)
    }

    /// Distinct indexed words of a scope, sorted.
    pub fn all_words(&self, filter: GenreFilter) -> &[String] {
        self.stats.index(filter).words()
    }

    pub fn word_frequency(
        &self,
        filter: GenreFilter,
    ) -> &HashMap<String, usize> {
        self.stats.index(filter).frequencies()
    }

    pub fn genre_stats(&self) -> GenreStats {
        GenreStats {
            genres: Genre::ALL
                .into_iter()
                .map(|g| (g, self.corpus.count_in(g)))
                .collect(),
            total: self.corpus.len(),
        }
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        VocabularyStats {
            all: self.stats.all().into(),
            genres: Genre::ALL
                .into_iter()
                .map(|g| (g, self.stats.genre(g).into()))
                .collect(),
        }
    }
}

/// Owner of the corpus state for one data directory.
pub struct CorpusStore {
    data_dir: DataDir,
    settings: Settings,
    matcher: GlobMatcher,
    genre_dirs: Vec<PathBuf>,
    current: RwLock<Arc<Snapshot>>,
    /// Serializes reloads.
    reload_lock: Mutex<()>,
    last_check: Mutex<Option<Instant>>,
    /// Set when a scan found changes the current snapshot has not seen.
    stale_pending: AtomicBool,
}

impl CorpusStore {
    /// Create a store with an empty snapshot. Nothing is read until the
    /// first [`load`](Self::load) or [`snapshot`](Self::snapshot).
    pub fn open(data_dir: DataDir, settings: Settings) -> Result<Self> {
        let matcher = walker::text_file_matcher(false)?;
        let genre_dirs =
            Genre::ALL.into_iter().map(|g| data_dir.genre_dir(g)).collect();
        Ok(Self {
            data_dir,
            settings,
            matcher,
            genre_dirs,
            current: RwLock::new(Arc::new(Snapshot::default())),
            reload_lock: Mutex::new(()),
            last_check: Mutex::new(None),
            stale_pending: AtomicBool::new(false),
        })
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read the corpus from disk and install it as the current snapshot.
    pub fn load(&self) -> Arc<Snapshot> {
        let _guard = self.reload_lock.lock();
        self.rebuild()
    }

    /// Force a full reload regardless of staleness.
    pub fn reload(&self) -> Arc<Snapshot> {
        self.load()
    }

    /// The installed snapshot, without checking the filesystem.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// The current snapshot, reloading first if the corpus is empty or any
    /// text file changed since it was loaded.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let seen = self.current();
        if !self.is_stale(&seen, true) {
            return seen;
        }

        let _guard = self.reload_lock.lock();
        let installed = self.current();
        if !Arc::ptr_eq(&seen, &installed) {
            // Another reader reloaded while we waited.
            return installed;
        }
        self.rebuild()
    }

    /// Whether the next [`snapshot`](Self::snapshot) call would reload.
    ///
    /// Does not start a new check interval, and a positive answer is
    /// remembered until the next reload.
    pub fn needs_reload(&self) -> bool {
        self.is_stale(&self.current(), false)
    }

    fn is_stale(&self, snapshot: &Snapshot, record_check: bool) -> bool {
        let Some(loaded_at) = snapshot.loaded_at else {
            return true;
        };
        if snapshot.corpus.is_empty()
            || self.stale_pending.load(Ordering::Acquire)
        {
            return true;
        }

        {
            let mut last_check = self.last_check.lock();
            let interval = self.settings.staleness_check_interval();
            if let Some(checked) = *last_check
                && checked.elapsed() < interval
            {
                return false;
            }
            if record_check {
                *last_check = Some(Instant::now());
            }
        }

        let latest = walker::latest_mtime(
            self.genre_dirs.iter().map(PathBuf::as_path),
            &self.matcher,
        );
        let stale = latest.is_some_and(|mtime| mtime > loaded_at);
        if stale {
            tracing::debug!("corpus files changed since last load");
            self.stale_pending.store(true, Ordering::Release);
        }
        stale
    }

    fn rebuild(&self) -> Arc<Snapshot> {
        self.stale_pending.store(false, Ordering::Release);
        let started = SystemTime::now();
        let corpus = corpus::load_corpus(&self.data_dir, &self.matcher);
        let snapshot = Arc::new(Snapshot::build(corpus, started));

        *self.current.write() = Arc::clone(&snapshot);
        *self.last_check.lock() = Some(Instant::now());
        snapshot
    }

    pub fn files_by_genre(&self, filter: GenreFilter) -> Vec<Document> {
        self.snapshot()
            .files_by_genre(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn kwic_search(
        &self,
        term: &str,
        window: usize,
        filter: GenreFilter,
    ) -> KwicResult {
        self.snapshot().kwic_search(term, window, filter)
    }

    /// Autocomplete with the configured suggestion limit.
    pub fn suggest(&self, prefix: &str, filter: GenreFilter) -> Vec<String> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }
        self.snapshot()
            .suggest(prefix, filter, self.settings.suggestion_limit)
    }

    pub fn all_words(&self, filter: GenreFilter) -> Vec<String> {
        self.snapshot().all_words(filter).to_vec()
    }

    pub fn word_frequency(
        &self,
        filter: GenreFilter,
    ) -> HashMap<String, usize> {
        self.snapshot().word_frequency(filter).clone()
    }

    pub fn genre_stats(&self) -> GenreStats {
        self.snapshot().genre_stats()
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        self.snapshot().vocabulary_stats()
    }

    /// Corpus words absent from the dictionary folder's vocabulary.
    pub fn neologisms(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let reference =
            neologism::reference_vocabulary(&self.data_dir.dictionary_dir());
        neologism::neologisms(snapshot.corpus.documents(), &reference)
    }
}
