//! kwicdex - keyword-in-context concordances over a genre-organized corpus.
//!
//! kwicdex reads plain-text documents from one folder per genre, keeps
//! per-genre vocabulary and frequency tables, and answers concordance
//! (KWIC), autocomplete, and neologism queries. The corpus reloads itself
//! whenever a text file in a genre folder changes.
//!
//! # Quick start
//!
//! ```no_run
//! use kwicdex::{CorpusStore, DataDir, GenreFilter, Settings};
//!
//! let data_dir = DataDir::resolve(None).unwrap();
//! let settings = Settings::load(&data_dir.settings_file()).unwrap();
//! let store = CorpusStore::open(data_dir, settings).unwrap();
//!
//! let result = store.kwic_search("kurd", 5, GenreFilter::parse("helbest"));
//! for m in &result.matches {
//!     println!("{}:{}  {} [{}] {}", m.source, m.line_num, m.left, m.word, m.right);
//! }
//! println!("{} occurrence(s)", result.frequency);
//! ```

pub mod corpus;
pub mod data_dir;
pub mod error;
pub mod export;
pub mod genre;
pub mod kwic;
pub mod neologism;
pub mod settings;
pub mod store;
pub mod suggest;
pub mod tokenizer;
pub mod walker;
pub mod word_index;

pub use corpus::{Corpus, Document};
pub use data_dir::DataDir;
pub use error::{Error, Result};
pub use genre::{Genre, GenreFilter};
pub use settings::Settings;
pub use store::{CorpusStore, Snapshot};
pub use word_index::{CorpusStats, WordIndex};
