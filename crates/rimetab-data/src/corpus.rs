//! Parser for the semicolon-delimited word/count corpus.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use rimetab_types::WordEntry;

/// Full-width delimiter between corpus segments.
pub const SEGMENT_DELIMITER: char = '；';
/// Full-width parenthesis opening the count fields.
pub const COUNT_OPEN: char = '（';
/// Full-width parenthesis closing the count fields.
pub const COUNT_CLOSE: char = '）';
/// Full-width comma between the two count fields.
pub const COUNT_SEPARATOR: char = '，';

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus segment {index} ({text:?}): {kind}")]
    Segment {
        index: usize,
        text: String,
        kind: SegmentError,
    },
}

/// Ways a single `WORD（N1，N2）` segment can be malformed.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SegmentError {
    #[error("missing '（' before the count fields")]
    MissingOpen,
    #[error("missing '）' after the count fields")]
    MissingClose,
    #[error("missing '，' between the count fields")]
    MissingSeparator,
    #[error("count field {0:?} is not an integer")]
    BadCount(String),
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<WordEntry>, CorpusError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let entries = parse_corpus(&raw)?;
    info!("parsed {} corpus entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Split a corpus blob into word entries, preserving input order.
///
/// Whitespace and line breaks anywhere in the source are insignificant and
/// are removed before segmenting; delimiters at either end are stripped, so
/// a trailing `；` is optional. An input with no segments yields no entries.
pub fn parse_corpus(raw: &str) -> Result<Vec<WordEntry>, CorpusError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let body = compact.trim_matches(SEGMENT_DELIMITER);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(SEGMENT_DELIMITER)
        .enumerate()
        .map(|(index, segment)| {
            parse_segment(segment).map_err(|kind| CorpusError::Segment {
                index,
                text: segment.to_string(),
                kind,
            })
        })
        .collect()
}

/// One segment has the shape `WORD（N1，N2）`; the weight is N1 + N2.
/// Anything after the closing parenthesis is ignored.
fn parse_segment(segment: &str) -> Result<WordEntry, SegmentError> {
    let (word, rest) = segment
        .split_once(COUNT_OPEN)
        .ok_or(SegmentError::MissingOpen)?;
    let (counts, _) = rest
        .split_once(COUNT_CLOSE)
        .ok_or(SegmentError::MissingClose)?;
    let (first, second) = counts
        .split_once(COUNT_SEPARATOR)
        .ok_or(SegmentError::MissingSeparator)?;

    Ok(WordEntry {
        word: word.to_string(),
        weight: parse_count(first)? + parse_count(second)?,
    })
}

fn parse_count(field: &str) -> Result<i64, SegmentError> {
    field
        .parse()
        .map_err(|_| SegmentError::BadCount(field.to_string()))
}
