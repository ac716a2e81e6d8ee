use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use rimetab_types::{RuleTable, ToneClass, TonePattern, WordEntry};

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no rule table entry for '{ch}' in word {word:?}")]
    UnknownChar { word: String, ch: char },
    #[error("'{ch}' in word {word:?} sits in grid column {col}, past the last tone slot")]
    ColumnOutOfRange { word: String, ch: char, col: usize },
}

/// Derive the canonical spelling and tone pattern of one word.
///
/// Each character contributes its row's spelling fragment and sets the tone
/// bit of its grid column; several characters landing on the same slot
/// simply leave the bit set. A character without a rule entry, or one whose
/// column lies past the last tone slot, aborts classification.
pub fn classify(word: &str, table: &RuleTable) -> Result<(String, TonePattern), ClassifyError> {
    let mut spelling = String::new();
    let mut pattern = TonePattern::default();

    for ch in word.chars() {
        let pos = table.position(ch).ok_or_else(|| ClassifyError::UnknownChar {
            word: word.to_string(),
            ch,
        })?;
        let slot = pos.slot().ok_or_else(|| ClassifyError::ColumnOutOfRange {
            word: word.to_string(),
            ch,
            col: pos.col,
        })?;
        spelling.push_str(table.fragment(pos.row).unwrap_or_default());
        if let Some(class) = ToneClass::from_slot(slot) {
            pattern.set(class);
        }
    }

    Ok((spelling, pattern))
}

/// Accumulated weights keyed by (canonical spelling, tone label).
///
/// Spellings are remembered in first-seen order; the report reproduces that
/// order rather than sorting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    order: Vec<String>,
    cells: HashMap<(String, String), i64>,
}

impl Tally {
    /// Add a weight into a cell, creating it if absent.
    pub fn record(&mut self, spelling: &str, label: &str, weight: i64) {
        if !self.order.iter().any(|seen| seen == spelling) {
            self.order.push(spelling.to_string());
        }
        match self.cells.entry((spelling.to_string(), label.to_string())) {
            Entry::Occupied(mut cell) => *cell.get_mut() += weight,
            Entry::Vacant(cell) => {
                cell.insert(weight);
            }
        }
    }

    /// Spellings in first-seen order.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Accumulated weight for a cell, if any weight was ever recorded there.
    pub fn weight(&self, spelling: &str, label: &str) -> Option<i64> {
        self.cells
            .get(&(spelling.to_string(), label.to_string()))
            .copied()
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Fold every entry into a fresh tally. The first classification failure
/// aborts the whole batch; a partial tally is never returned.
pub fn aggregate(entries: &[WordEntry], table: &RuleTable) -> Result<Tally, ClassifyError> {
    let mut tally = Tally::default();
    for entry in entries {
        let (spelling, pattern) = classify(&entry.word, table)?;
        tally.record(&spelling, &pattern.label(), entry.weight);
    }
    Ok(tally)
}
