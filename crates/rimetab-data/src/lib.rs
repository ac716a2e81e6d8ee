//! Load the two inputs of the classification pipeline.
//!
//! The corpus is a UTF-8 blob of `WORD（N1，N2）` segments separated by
//! full-width semicolons, with insignificant whitespace and line breaks;
//! [`corpus`] turns it into ordered [`WordEntry`](rimetab_types::WordEntry)
//! records. The rule grid is a comma-separated table whose first line is a
//! header; [`table`] scans it into a
//! [`RuleTable`](rimetab_types::RuleTable) mapping each tone-bearing
//! character to its grid position and keeping each row's column-0 spelling
//! fragment.
//!
//! Both loaders are strict: malformed input is a typed error, never a
//! silently dropped record. Files are read whole and closed before the
//! loader returns.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = rimetab_data::load_corpus("corpus.txt")?;
//! let rules = rimetab_data::load_rule_table("table.csv")?;
//! println!("{} entries, {} mapped characters", entries.len(), rules.char_count());
//! # Ok(()) }
//! ```

pub mod corpus;
pub mod table;

pub use corpus::{CorpusError, SegmentError, load_corpus, parse_corpus};
pub use table::{TableError, load_rule_table, parse_rule_table};
