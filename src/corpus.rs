//! Loading the document corpus from genre folders.

use std::path::PathBuf;

use globset::GlobMatcher;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    data_dir::DataDir,
    genre::{Genre, GenreFilter},
    walker::{self, DiscoveredFile},
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A text document read from a genre folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub filename: String,
    /// Raw decoded text.
    pub text: String,
    pub genre: Genre,
    pub folder: String,
    /// Where the document was read from; unique within a corpus.
    pub source_path: PathBuf,
}

/// An ordered, immutable collection of documents.
///
/// Documents appear genre by genre (in [`Genre::ALL`] order) and by file
/// name within a genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents accepted by `filter`, in corpus order.
    pub fn filtered(
        &self,
        filter: GenreFilter,
    ) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter().filter(move |d| filter.matches(d.genre))
    }

    pub fn count_in(&self, genre: Genre) -> usize {
        self.filtered(GenreFilter::Only(genre)).count()
    }
}

/// Decode file contents without ever failing.
///
/// A leading byte-order mark is dropped, then the bytes are decoded as
/// UTF-8. Invalid sequences are replaced with U+FFFD.
pub fn decode_text(bytes: Vec<u8>) -> String {
    let bytes = if bytes.starts_with(UTF8_BOM) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("decoded text with invalid UTF-8 sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn read_document(genre: Genre, file: &DiscoveredFile) -> Option<Document> {
    match std::fs::read(&file.path) {
        Ok(bytes) => Some(Document {
            filename: file.file_name.clone(),
            text: decode_text(bytes),
            genre,
            folder: genre.folder().to_string(),
            source_path: file.path.clone(),
        }),
        Err(e) => {
            tracing::warn!(
                path = %file.path.display(),
                error = %e,
                "error reading document, skipping"
            );
            None
        }
    }
}

/// Read every genre folder into a fresh corpus.
///
/// Missing genre folders are created. Unreadable files and folders are
/// logged and skipped; loading never fails.
pub fn load_corpus(data_dir: &DataDir, matcher: &GlobMatcher) -> Corpus {
    data_dir.ensure_genre_dirs();

    let mut documents = Vec::new();
    for genre in Genre::ALL {
        let dir = data_dir.genre_dir(genre);
        let files = match walker::discover_files(&dir, matcher) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(
                    path = %dir.display(),
                    error = %e,
                    "cannot list genre folder"
                );
                continue;
            }
        };
        tracing::debug!(
            folder = genre.folder(),
            files = files.len(),
            "scanned genre folder"
        );

        // Read in parallel; collect keeps file-name order.
        let loaded: Vec<Document> = files
            .par_iter()
            .filter_map(|file| read_document(genre, file))
            .collect();
        documents.extend(loaded);
    }

    tracing::info!(documents = documents.len(), "corpus loaded");
    Corpus::new(documents)
}
