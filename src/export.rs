//! Plain-text and JSON renderings of corpus data for external tools.

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    corpus::Corpus,
    error::Result,
    genre::Genre,
    tokenizer::tokenize,
    word_index::WordIndex,
};

/// Distinct words, one per line, in lexical order.
pub fn word_list(index: &WordIndex) -> String {
    index.words().join("\n")
}

/// Tab-separated `Word\tFrequency` table, most frequent first.
pub fn frequency_table(index: &WordIndex) -> String {
    let mut out = String::from("Word\tFrequency");
    for (word, count) in index.by_frequency() {
        out.push('\n');
        out.push_str(word);
        out.push('\t');
        out.push_str(&count.to_string());
    }
    out
}

/// Neologisms, one per line.
pub fn neologism_list(words: &[String]) -> String {
    words.join("\n")
}

/// A flattened document with its token stream.
#[derive(Debug, Serialize)]
pub struct ProcessedRecord<'a> {
    pub filename: &'a str,
    pub folder: &'a str,
    pub tokens: Vec<String>,
    pub text: &'a str,
    pub genre: Genre,
}

pub fn processed_records(corpus: &Corpus) -> Vec<ProcessedRecord<'_>> {
    corpus
        .documents()
        .iter()
        .map(|doc| ProcessedRecord {
            filename: &doc.filename,
            folder: &doc.folder,
            tokens: tokenize(&doc.text),
            text: &doc.text,
            genre: doc.genre,
        })
        .collect()
}

/// Write the corpus as a pretty-printed JSON array to `path`.
///
/// Returns the number of records written.
pub fn write_processed_json(corpus: &Corpus, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let records = processed_records(corpus);
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "wrote processed corpus"
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::corpus::Document;

    fn corpus() -> Corpus {
        Corpus::new(vec![Document {
            filename: "a.txt".to_string(),
            text: "Ez kurd im, kurd!".to_string(),
            genre: Genre::Helbest,
            folder: "poetry".to_string(),
            source_path: PathBuf::from("poetry/a.txt"),
        }])
    }

    #[test]
    fn word_list_is_sorted_lines() {
        let index = WordIndex::from_tokens(["zer", "av", "zer"]);
        assert_eq!(word_list(&index), "av\nzer");
    }

    #[test]
    fn frequency_table_has_header_and_order() {
        let index = WordIndex::from_tokens(["zer", "av", "zer", "ba"]);
        assert_eq!(
            frequency_table(&index),
            "Word\tFrequency\nzer\t2\nav\t1\nba\t1"
        );
    }

    #[test]
    fn empty_frequency_table_is_header_only() {
        assert_eq!(frequency_table(&WordIndex::default()), "Word\tFrequency");
    }

    #[test]
    fn neologism_list_is_one_per_line() {
        let words = vec!["bimirim".to_string(), "kurd".to_string()];
        assert_eq!(neologism_list(&words), "bimirim\nkurd");
        assert_eq!(neologism_list(&[]), "");
    }

    #[test]
    fn processed_json_records() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out").join("processed.json");

        let written = write_processed_json(&corpus(), &path).unwrap();
        assert_eq!(written, 1);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap())
                .unwrap();
        let record = &value[0];
        assert_eq!(record["filename"], "a.txt");
        assert_eq!(record["folder"], "poetry");
        assert_eq!(record["genre"], "helbest");
        assert_eq!(record["text"], "Ez kurd im, kurd!");
        assert_eq!(
            record["tokens"],
            serde_json::json!(["ez", "kurd", "im", "kurd"])
        );
    }
}
