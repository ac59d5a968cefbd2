//! Keyword-in-context concordance search.
//!
//! Every line of every selected document is tokenized and scanned for
//! tokens equal to the normalized search term. Context windows are counted
//! in tokens and never cross a line break.

use serde::Serialize;

use crate::{
    corpus::Document,
    genre::Genre,
    tokenizer::{normalize, split_lines, tokenize},
};

/// One occurrence of the search term with its surrounding tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KwicMatch {
    /// Up to `window` tokens before the match, space separated.
    pub left: String,
    pub word: String,
    /// Up to `window` tokens after the match, space separated.
    pub right: String,
    /// File name of the document.
    pub source: String,
    /// 1-based line number within the document.
    pub line_num: usize,
    pub genre: Genre,
    pub folder: String,
}

/// All matches of a concordance query, in document, line, then position
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KwicResult {
    pub term: String,
    pub matches: Vec<KwicMatch>,
    pub frequency: usize,
}

/// Scan `documents` for exact occurrences of `term`.
///
/// The term is normalized (NFC, trimmed, lowercased) but keeps boundary
/// punctuation, so `"kurd,"` never matches anything. A term that is empty
/// after normalization yields no matches.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use kwicdex::{corpus::Document, genre::Genre, kwic::kwic_search};
///
/// let doc = Document {
///     filename: "a.txt".into(),
///     text: "ez kurd im u kurd bimirim".into(),
///     genre: Genre::Helbest,
///     folder: "poetry".into(),
///     source_path: PathBuf::from("poetry/a.txt"),
/// };
/// let result = kwic_search([&doc], "Kurd", 2);
/// assert_eq!(result.frequency, 2);
/// assert_eq!(result.matches[1].left, "im u");
/// ```
pub fn kwic_search<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    term: &str,
    window: usize,
) -> KwicResult {
    let term = normalize(term);
    let mut result = KwicResult {
        term: term.clone(),
        ..Default::default()
    };
    if term.is_empty() {
        return result;
    }

    for doc in documents {
        for (idx, line) in split_lines(&doc.text).into_iter().enumerate() {
            scan_line(doc, idx + 1, line, &term, window, &mut result.matches);
        }
    }

    result.frequency = result.matches.len();
    tracing::debug!(term = %term, matches = result.frequency, "kwic search");
    result
}

fn scan_line(
    doc: &Document,
    line_num: usize,
    line: &str,
    term: &str,
    window: usize,
    matches: &mut Vec<KwicMatch>,
) {
    let tokens = tokenize(line);
    for (i, token) in tokens.iter().enumerate() {
        if token != term {
            continue;
        }
        let left_start = i.saturating_sub(window);
        let right_end =
            i.saturating_add(window).saturating_add(1).min(tokens.len());
        matches.push(KwicMatch {
            left: tokens[left_start..i].join(" "),
            word: term.to_string(),
            right: tokens[i + 1..right_end].join(" "),
            source: doc.filename.clone(),
            line_num,
            genre: doc.genre,
            folder: doc.folder.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn doc(genre: Genre, name: &str, text: &str) -> Document {
        Document {
            filename: name.to_string(),
            text: text.to_string(),
            genre,
            folder: genre.folder().to_string(),
            source_path: PathBuf::from(genre.folder()).join(name),
        }
    }

    fn contexts(result: &KwicResult) -> Vec<(&str, &str)> {
        result
            .matches
            .iter()
            .map(|m| (m.left.as_str(), m.right.as_str()))
            .collect()
    }

    #[test]
    fn window_of_two_tokens() {
        let d = doc(Genre::Helbest, "a.txt", "ez kurd im u kurd bimirim");
        let result = kwic_search([&d], "kurd", 2);

        assert_eq!(result.frequency, 2);
        assert_eq!(
            contexts(&result),
            vec![("ez", "im u"), ("im u", "bimirim")]
        );
    }

    #[test]
    fn match_metadata() {
        let d = doc(Genre::Sano, "play.txt", "first line\n\nDil, dil!");
        let result = kwic_search([&d], "dil", 25);

        assert_eq!(result.frequency, 2);
        let m = &result.matches[0];
        assert_eq!(m.word, "dil");
        assert_eq!(m.source, "play.txt");
        assert_eq!(m.line_num, 3);
        assert_eq!(m.genre, Genre::Sano);
        assert_eq!(m.folder, "theatre");
        assert_eq!(contexts(&result), vec![("", "dil"), ("dil", "")]);
    }

    #[test]
    fn context_stops_at_line_breaks() {
        let d = doc(Genre::Roman, "r.txt", "before words\nkurd\nafter words");
        let result = kwic_search([&d], "kurd", 5);

        assert_eq!(contexts(&result), vec![("", "")]);
        assert_eq!(result.matches[0].line_num, 2);
    }

    #[test]
    fn term_is_normalized_but_keeps_punctuation() {
        let d = doc(Genre::Roman, "r.txt", "Kurd, kurd. KURD");
        assert_eq!(kwic_search([&d], "  KURD ", 1).frequency, 3);
        // Boundary punctuation in the term is not stripped, so it can
        // never equal a token.
        assert_eq!(kwic_search([&d], "kurd,", 1).frequency, 0);
    }

    #[test]
    fn empty_term_matches_nothing() {
        let d = doc(Genre::Roman, "r.txt", "a b c");
        let result = kwic_search([&d], "   ", 3);
        assert!(result.matches.is_empty());
        assert_eq!(result.frequency, 0);
    }

    #[test]
    fn short_tokens_are_searchable() {
        let d = doc(Genre::Roman, "r.txt", "ez û tu");
        let result = kwic_search([&d], "û", 1);
        assert_eq!(contexts(&result), vec![("ez", "tu")]);
    }

    #[test]
    fn order_is_document_line_position() {
        let a = doc(Genre::Helbest, "a.txt", "x y\ny x x");
        let b = doc(Genre::Roman, "b.txt", "x");
        let result = kwic_search([&a, &b], "x", 0);

        let order: Vec<_> = result
            .matches
            .iter()
            .map(|m| (m.source.as_str(), m.line_num))
            .collect();
        assert_eq!(
            order,
            vec![("a.txt", 1), ("a.txt", 2), ("a.txt", 2), ("b.txt", 1)]
        );
        assert_eq!(contexts(&result), vec![("", ""); 4]);
    }

    #[test]
    fn huge_window_does_not_overflow() {
        let d = doc(Genre::Roman, "r.txt", "a kurd b");
        let result = kwic_search([&d], "kurd", usize::MAX);
        assert_eq!(contexts(&result), vec![("a", "b")]);
    }
}
