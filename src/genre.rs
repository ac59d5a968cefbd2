//! The fixed set of corpus genres and their on-disk folder names.

use serde::Serialize;

/// A corpus genre. Every genre maps to exactly one folder under the data
/// directory; the mapping is static.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Helbest,
    Roman,
    Sano,
    Rojname,
    Malper,
    CorpusSpecifique,
    Dengbej,
    Ferheng,
}

impl Genre {
    /// All genres, in load order.
    pub const ALL: [Genre; 8] = [
        Genre::Helbest,
        Genre::Roman,
        Genre::Sano,
        Genre::Rojname,
        Genre::Malper,
        Genre::CorpusSpecifique,
        Genre::Dengbej,
        Genre::Ferheng,
    ];

    /// The genre whose folder doubles as the reference dictionary.
    pub const DICTIONARY: Genre = Genre::Ferheng;

    /// The external key for this genre (as accepted by [`Genre::from_key`]).
    pub fn key(self) -> &'static str {
        match self {
            Genre::Helbest => "helbest",
            Genre::Roman => "roman",
            Genre::Sano => "sano",
            Genre::Rojname => "rojname",
            Genre::Malper => "malper",
            Genre::CorpusSpecifique => "corpus_specifique",
            Genre::Dengbej => "dengbej",
            Genre::Ferheng => "ferheng",
        }
    }

    /// Folder name under the data directory.
    pub fn folder(self) -> &'static str {
        match self {
            Genre::Helbest => "poetry",
            Genre::Roman => "novels",
            Genre::Sano => "theatre",
            Genre::Rojname => "newspaper",
            Genre::Malper => "site-web",
            Genre::CorpusSpecifique => "specifique-corpus",
            Genre::Dengbej => "traditional-songs",
            Genre::Ferheng => "dictionary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }

    pub fn from_folder(folder: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.folder() == folder)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Restricts a query to one genre, or to the whole corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    /// Parse an external genre key.
    ///
    /// `"all"`, an empty string, and any key that is not a known genre all
    /// mean the whole corpus. Keys are matched exactly, so `"helbest "`
    /// is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use kwicdex::genre::{Genre, GenreFilter};
    ///
    /// assert_eq!(GenreFilter::parse("roman"), GenreFilter::Only(Genre::Roman));
    /// assert_eq!(GenreFilter::parse("all"), GenreFilter::All);
    /// assert_eq!(GenreFilter::parse("opera"), GenreFilter::All);
    /// ```
    pub fn parse(key: &str) -> Self {
        match Genre::from_key(key) {
            Some(genre) => GenreFilter::Only(genre),
            None => GenreFilter::All,
        }
    }

    pub fn from_option(key: Option<&str>) -> Self {
        key.map(Self::parse).unwrap_or_default()
    }

    pub fn matches(self, genre: Genre) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(g) => g == genre,
        }
    }

    pub fn genre(self) -> Option<Genre> {
        match self {
            GenreFilter::All => None,
            GenreFilter::Only(g) => Some(g),
        }
    }
}

impl From<Genre> for GenreFilter {
    fn from(genre: Genre) -> Self {
        GenreFilter::Only(genre)
    }
}
