//! Corpus words missing from the reference dictionary.

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use crate::{
    corpus::{Document, decode_text},
    genre::Genre,
    tokenizer::{normalize_token, split_words, tokenize},
    walker,
};

/// Read the reference vocabulary from every `.txt` file (any extension
/// casing) directly inside `dir`.
///
/// Each whitespace-separated word is normalized like a token, without a
/// length filter. A missing folder gives an empty vocabulary; unreadable
/// files are logged and skipped.
pub fn reference_vocabulary(dir: &Path) -> HashSet<String> {
    let mut vocabulary = HashSet::new();
    if !dir.is_dir() {
        tracing::debug!(path = %dir.display(), "no dictionary folder");
        return vocabulary;
    }

    let files = match walker::text_file_matcher(true)
        .and_then(|matcher| walker::discover_files(dir, &matcher))
    {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(
                path = %dir.display(),
                error = %e,
                "cannot list dictionary folder"
            );
            return vocabulary;
        }
    };

    for file in &files {
        match std::fs::read(&file.path) {
            Ok(bytes) => {
                let text = decode_text(bytes);
                vocabulary
                    .extend(split_words(&text).filter_map(normalize_token));
            }
            Err(e) => {
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "error reading dictionary file, skipping"
                );
            }
        }
    }

    tracing::debug!(
        files = files.len(),
        words = vocabulary.len(),
        "dictionary vocabulary read"
    );
    vocabulary
}

/// Whether a document belongs to the dictionary itself.
fn is_dictionary(doc: &Document) -> bool {
    doc.genre == Genre::DICTIONARY || doc.folder == Genre::DICTIONARY.folder()
}

/// Tokens of the non-dictionary documents that are absent from
/// `reference`, sorted lexically.
pub fn neologisms<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    reference: &HashSet<String>,
) -> Vec<String> {
    let mut vocabulary = BTreeSet::new();
    for doc in documents.into_iter().filter(|d| !is_dictionary(d)) {
        vocabulary.extend(tokenize(&doc.text));
    }
    vocabulary
        .into_iter()
        .filter(|word| !reference.contains(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn doc(genre: Genre, text: &str) -> Document {
        Document {
            filename: "t.txt".to_string(),
            text: text.to_string(),
            genre,
            folder: genre.folder().to_string(),
            source_path: PathBuf::from(genre.folder()).join("t.txt"),
        }
    }

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn set_difference() {
        let d = doc(Genre::Roman, "c a b");
        assert_eq!(neologisms([&d], &set(&["a", "b"])), vec!["c"]);
    }

    #[test]
    fn empty_reference_returns_sorted_vocabulary() {
        let d = doc(Genre::Roman, "zer av Av ba");
        assert_eq!(neologisms([&d], &HashSet::new()), vec!["av", "ba", "zer"]);
    }

    #[test]
    fn dictionary_genre_never_contributes() {
        let novel = doc(Genre::Roman, "nû");
        let dictionary = doc(Genre::Ferheng, "peyvên ferhengê");
        assert_eq!(
            neologisms([&novel, &dictionary], &HashSet::new()),
            vec!["nû"]
        );
    }

    #[test]
    fn reads_dictionary_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "Av, «Bav»\nDAR — ").unwrap();
        std::fs::write(tmp.path().join("B.TXT"), "dil").unwrap();
        std::fs::write(tmp.path().join("notes.md"), "ignored").unwrap();

        let vocabulary = reference_vocabulary(tmp.path());
        assert_eq!(vocabulary, set(&["av", "bav", "dar", "dil"]));
    }

    #[test]
    fn missing_dictionary_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(reference_vocabulary(&tmp.path().join("dictionary")).is_empty());
    }

    #[test]
    fn reference_has_no_length_filter() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "û").unwrap();
        let reference = reference_vocabulary(tmp.path());

        let d = doc(Genre::Helbest, "û ez");
        assert_eq!(neologisms([&d], &reference), vec!["ez"]);
    }
}
