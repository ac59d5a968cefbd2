//! Autocomplete suggestions.
//!
//! Despite being driven by a "prefix", candidates are tokens that contain
//! the query anywhere, not only at the start. Candidates are ranked by how
//! often they occur in the selected documents.

use std::collections::HashMap;

use crate::{
    corpus::Document,
    tokenizer::{char_len, normalize, tokenize},
};

/// Suggest up to `limit` tokens containing `prefix`.
///
/// Only tokens strictly longer than the normalized prefix qualify. Results
/// are ordered by descending occurrence count, then lexically. An empty
/// prefix returns nothing without scanning.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use kwicdex::{corpus::Document, genre::Genre, suggest::suggest};
///
/// let doc = Document {
///     filename: "a.txt".into(),
///     text: "kurd kurdistan bikurdî kurd".into(),
///     genre: Genre::Roman,
///     folder: "novels".into(),
///     source_path: PathBuf::from("novels/a.txt"),
/// };
/// assert_eq!(
///     suggest([&doc], "kur", 10),
///     vec!["kurd", "bikurdî", "kurdistan"]
/// );
/// ```
pub fn suggest<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    prefix: &str,
    limit: usize,
) -> Vec<String> {
    let query = normalize(prefix);
    if query.is_empty() {
        return Vec::new();
    }
    let query_len = char_len(&query);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for doc in documents {
        for token in tokenize(&doc.text) {
            if char_len(&token) > query_len && token.contains(query.as_str()) {
                *counts.entry(token).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}
