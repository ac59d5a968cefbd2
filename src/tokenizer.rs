//! Text normalization and tokenization.
//!
//! A token is a whitespace-delimited chunk that has been NFC-normalized,
//! lowercased, and stripped of [`PUNCTUATION`] at both ends. Inner
//! punctuation (an apostrophe mid-word, a hyphenated compound) is kept.

use unicode_normalization::UnicodeNormalization;

/// Characters removed from the edges of every token.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '\'', '"',
    '\u{201d}', '\u{201c}', '\u{2019}', '\u{ab}', '\u{bb}', '\u{2014}',
    '\u{2013}', '-', '\u{2026}', '/', '\\', '|', '*', '#', '@', '+', '=', '~',
    '`', '^', '$', '%', '&', '_',
];

/// Tokens shorter than this (in characters) are left out of word indexes.
pub const MIN_INDEXED_CHARS: usize = 2;

/// Canonicalize a query string: NFC, surrounding whitespace trimmed,
/// lowercased.
///
/// Punctuation is *not* stripped here, so a search term such as `"kurd,"`
/// can never equal a token.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed.trim().to_lowercase()
}

/// Normalize a single whitespace-free chunk into a token.
///
/// Returns `None` when nothing is left after stripping punctuation.
pub fn normalize_token(chunk: &str) -> Option<String> {
    let normalized = normalize(chunk);
    let stripped = normalized.trim_matches(PUNCTUATION);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Split text on whitespace and normalize every chunk into a token.
///
/// Order and duplicates are preserved; chunks made only of punctuation
/// disappear.
///
/// # Examples
///
/// ```
/// use kwicdex::tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("«Ez» kurd im... l'avenir -- !"),
///     vec!["ez", "kurd", "im", "l'avenir"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(text).filter_map(normalize_token).collect()
}

/// Whitespace for word splitting: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split on runs of [`is_word_separator`], dropping empty pieces.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|chunk| !chunk.is_empty())
}

/// Whether a token is long enough to be counted in a word index.
pub fn is_indexable(token: &str) -> bool {
    char_len(token) >= MIN_INDEXED_CHARS
}

/// Length in Unicode scalar values.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on every Unicode line boundary.
///
/// `\r\n` counts as a single break and a trailing break does not produce
/// an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r'
            && let Some(&(_, '\n')) = chars.peek()
        {
            chars.next();
            end += 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_edges() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_eq!(tokenize("'l'eau' bi-zimanî"), vec!["l'eau", "bi-zimanî"]);
    }

    #[test]
    fn drops_punctuation_only_chunks() {
        assert_eq!(tokenize("— ... «» a"), vec!["a"]);
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn typographic_quotes_are_stripped() {
        assert_eq!(tokenize("“gotin” ’dil’"), vec!["gotin", "dil"]);
    }

    #[test]
    fn chars_outside_the_set_are_kept() {
        // '<' and '‘' are not in the punctuation set.
        assert_eq!(tokenize("<tag> ‘quote"), vec!["<tag>", "‘quote"]);
    }

    #[test]
    fn nfc_composes_combining_marks() {
        // "e" + COMBINING CIRCUMFLEX composes to "ê".
        let decomposed = "Kurde\u{0302}";
        assert_eq!(tokenize(decomposed), vec!["kurdê"]);
        assert_eq!(normalize(decomposed), "kurdê");
    }

    #[test]
    fn duplicates_are_retained() {
        assert_eq!(tokenize("a a A"), vec!["a", "a", "a"]);
    }

    #[test]
    fn every_token_is_a_stripped_chunk() {
        let text = "Ez, kurd im! (û) -- \"dil\" bi-dil… #tag";
        let chunks: Vec<String> = split_words(text)
            .map(|c| c.to_lowercase().trim_matches(PUNCTUATION).to_string())
            .collect();
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(chunks.contains(&token), "{token} not a chunk");
        }
    }

    #[test]
    fn information_separators_split_words() {
        assert_eq!(tokenize("a\u{1f}b\u{1c}c"), vec!["a", "b", "c"]);
        let words: Vec<_> = split_words("\u{1d}dil\u{1e} ").collect();
        assert_eq!(words, vec!["dil"]);
    }

    #[test]
    fn normalize_keeps_boundary_punctuation() {
        assert_eq!(normalize("  Kurd, "), "kurd,");
        assert_eq!(normalize_token("Kurd,").as_deref(), Some("kurd"));
    }

    #[test]
    fn indexable_counts_characters() {
        assert!(!is_indexable("û"));
        assert!(is_indexable("ûn"));
        assert_eq!(char_len("şêr"), 3);
    }

    #[test]
    fn split_lines_handles_all_breaks() {
        let text = "a\r\nb\rc\u{2028}d\u{85}e\n\nf\n";
        assert_eq!(split_lines(text), vec!["a", "b", "c", "d", "e", "", "f"]);
    }

    #[test]
    fn split_lines_empty_and_unterminated() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("one"), vec!["one"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }
}
