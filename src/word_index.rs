//! Per-scope vocabulary and frequency tables.
//!
//! A [`WordIndex`] covers one scope: the whole corpus or a single genre.
//! Only tokens with at least [`MIN_INDEXED_CHARS`] characters are counted.
//! Indexes are derived data; they are rebuilt from scratch on every corpus
//! load and never patched.
//!
//! [`MIN_INDEXED_CHARS`]: crate::tokenizer::MIN_INDEXED_CHARS

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use crate::{
    corpus::Corpus,
    genre::{Genre, GenreFilter},
    tokenizer::{is_indexable, tokenize},
};

/// Distinct words of a scope and how often each occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    words: Vec<String>,
    frequencies: HashMap<String, usize>,
}

impl WordIndex {
    /// Build an index from a token stream, skipping short tokens.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = HashMap::new();
        for token in tokens {
            add(&mut counts, token);
        }
        Self::from_counts(counts)
    }

    fn from_counts(frequencies: HashMap<String, usize>) -> Self {
        let mut words: Vec<String> = frequencies.keys().cloned().collect();
        words.sort();
        Self { words, frequencies }
    }

    /// Distinct words in lexical order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn frequencies(&self) -> &HashMap<String, usize> {
        &self.frequencies
    }

    pub fn frequency(&self, word: &str) -> usize {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    pub fn unique_words(&self) -> usize {
        self.words.len()
    }

    /// Sum of all occurrence counts.
    pub fn total_words(&self) -> usize {
        self.frequencies.values().sum()
    }

    /// `(word, count)` pairs, most frequent first, ties in lexical order.
    pub fn by_frequency(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .frequencies
            .iter()
            .map(|(w, c)| (w.as_str(), *c))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

fn add(counts: &mut HashMap<String, usize>, token: &str) {
    if !is_indexable(token) {
        return;
    }
    match counts.get_mut(token) {
        Some(count) => *count += 1,
        None => {
            counts.insert(token.to_string(), 1);
        }
    }
}

/// Word indexes for the whole corpus and for every genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    all: WordIndex,
    genres: BTreeMap<Genre, WordIndex>,
}

impl Default for CorpusStats {
    fn default() -> Self {
        Self {
            all: WordIndex::default(),
            genres: Genre::ALL
                .into_iter()
                .map(|g| (g, WordIndex::default()))
                .collect(),
        }
    }
}

impl CorpusStats {
    /// Tokenize every document once and count it into both the corpus-wide
    /// index and its genre's index.
    pub fn build(corpus: &Corpus) -> Self {
        let tokenized: Vec<(Genre, Vec<String>)> = corpus
            .documents()
            .par_iter()
            .map(|doc| (doc.genre, tokenize(&doc.text)))
            .collect();

        let mut all = HashMap::new();
        let mut per_genre: BTreeMap<Genre, HashMap<String, usize>> =
            Genre::ALL.into_iter().map(|g| (g, HashMap::new())).collect();

        for (genre, tokens) in &tokenized {
            let genre_counts = per_genre.entry(*genre).or_default();
            for token in tokens {
                add(&mut all, token);
                add(genre_counts, token);
            }
        }

        let stats = Self {
            all: WordIndex::from_counts(all),
            genres: per_genre
                .into_iter()
                .map(|(g, counts)| (g, WordIndex::from_counts(counts)))
                .collect(),
        };
        tracing::info!(
            unique_words = stats.all.unique_words(),
            total_words = stats.all.total_words(),
            "word statistics rebuilt"
        );
        stats
    }

    pub fn all(&self) -> &WordIndex {
        &self.all
    }

    pub fn genre(&self, genre: Genre) -> &WordIndex {
        // Every genre gets an entry in `build` and `default`.
        &self.genres[&genre]
    }

    /// The index matching a genre filter.
    pub fn index(&self, filter: GenreFilter) -> &WordIndex {
        match filter {
            GenreFilter::All => &self.all,
            GenreFilter::Only(genre) => self.genre(genre),
        }
    }
}
