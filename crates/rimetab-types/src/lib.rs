//! Core types for rime-table tone classification.
//!
//! A word is classified along two axes: a *canonical spelling* (the
//! concatenation of per-character row fragments from a rule table) and a
//! *tone pattern* (which of the four classical tone categories appear among
//! its characters). This crate holds the tone alphabet, the pattern bitmask
//! and its display encoding, and the plain data structures shared by the
//! loader and classifier crates. It has no dependencies and does no I/O.
//!
//! ```rust
//! use rimetab_types::{CellPos, RuleTable, ToneClass, TonePattern};
//!
//! let mut table = RuleTable::default();
//! let row = table.push_row("甲".to_string());
//! table.map_char('甲', CellPos { row, col: 0 });
//!
//! let mut pattern = TonePattern::default();
//! pattern.set(ToneClass::Level);
//! pattern.set(ToneClass::Entering);
//! assert_eq!(pattern.label(), "平入");
//! ```

use std::collections::HashMap;
use std::fmt;

/// Number of tone slots; also the last valid grid column for tone lookups.
pub const TONE_SLOTS: usize = 4;

/// The four classical tone categories, in fixed slot order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ToneClass {
    Level,
    Rising,
    Departing,
    Entering,
}

impl ToneClass {
    /// All tone classes in slot order 0..3.
    pub const ALL: [ToneClass; TONE_SLOTS] = [
        ToneClass::Level,
        ToneClass::Rising,
        ToneClass::Departing,
        ToneClass::Entering,
    ];

    /// Tone class for a slot index, if in range.
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    /// Bit index of this class within a [`TonePattern`].
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Display symbol used in tone labels.
    pub fn symbol(self) -> char {
        match self {
            ToneClass::Level => '平',
            ToneClass::Rising => '上',
            ToneClass::Departing => '去',
            ToneClass::Entering => '入',
        }
    }
}

impl fmt::Display for ToneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Presence set over the four tone slots, one bit per slot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TonePattern(u8);

impl TonePattern {
    /// Build a pattern from the low four bits of `bits` (bit *n* ↔ slot *n*).
    pub fn from_bits(bits: u8) -> Self {
        TonePattern(bits & 0x0f)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mark a tone class as present. Setting an already-set slot is a no-op.
    pub fn set(&mut self, class: ToneClass) {
        self.0 |= 1 << class.slot();
    }

    pub fn contains(self, class: ToneClass) -> bool {
        self.0 & (1 << class.slot()) != 0
    }

    /// Concatenation of the symbols of set slots, in slot order.
    ///
    /// The empty pattern encodes to the empty string.
    pub fn label(self) -> String {
        ToneClass::ALL
            .iter()
            .filter(|class| self.contains(**class))
            .map(|class| class.symbol())
            .collect()
    }
}

/// The 15 non-empty tone labels in report column order.
///
/// Patterns are enumerated by counting 1..=15 with slot *n* taken from bit
/// *n*, i.e. low-slot-first (equivalent to writing each count as a 4-digit
/// binary string and reversing it before encoding). Report headers depend
/// on this exact order; do not re-enumerate high-bit-first.
pub fn tone_label_columns() -> Vec<String> {
    (1u8..=15).map(|bits| TonePattern::from_bits(bits).label()).collect()
}

/// One corpus segment: a word and its aggregated integer weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordEntry {
    pub word: String,
    pub weight: i64,
}

/// Position of a character in the rule grid.
///
/// The column doubles as the tone-slot index; columns past the last slot
/// hold no encodable tone and fail classification when consulted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// The tone slot this cell encodes, if the column is in range.
    pub fn slot(self) -> Option<usize> {
        (self.col < TONE_SLOTS).then_some(self.col)
    }
}

/// Character classification rules: per-row spelling fragments plus a map
/// from each tone-bearing character to its grid position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    fragments: Vec<String>,
    chars: HashMap<char, CellPos>,
}

impl RuleTable {
    /// Append a row and return its index. The fragment is the row's
    /// column-0 value, substituted for every character mapped to the row.
    pub fn push_row(&mut self, fragment: String) -> usize {
        self.fragments.push(fragment);
        self.fragments.len() - 1
    }

    /// Map a character to a grid position. A character mapped twice keeps
    /// the later position; this mirrors the row-major scan of the source
    /// grid, where the last occurrence wins.
    pub fn map_char(&mut self, ch: char, pos: CellPos) {
        self.chars.insert(ch, pos);
    }

    pub fn position(&self, ch: char) -> Option<CellPos> {
        self.chars.get(&ch).copied()
    }

    pub fn fragment(&self, row: usize) -> Option<&str> {
        self.fragments.get(row).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.chars.is_empty()
    }

    /// Iterate over all mapped characters and their positions.
    pub fn mapped_chars(&self) -> impl Iterator<Item = (char, CellPos)> + '_ {
        self.chars.iter().map(|(ch, pos)| (*ch, *pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_length_matches_popcount() {
        for bits in 0u8..16 {
            let pattern = TonePattern::from_bits(bits);
            assert_eq!(pattern.label().chars().count(), bits.count_ones() as usize);
            // Deterministic: same bits, same label.
            assert_eq!(pattern.label(), TonePattern::from_bits(bits).label());
        }
    }

    #[test]
    fn empty_pattern_encodes_to_empty_string() {
        assert_eq!(TonePattern::default().label(), "");
        assert!(TonePattern::default().is_empty());
    }

    #[test]
    fn full_pattern_encodes_all_symbols_in_slot_order() {
        assert_eq!(TonePattern::from_bits(0b1111).label(), "平上去入");
    }

    #[test]
    fn column_enumeration_matches_fixed_sequence() {
        let expected = [
            "平", "上", "平上", "去", "平去", "上去", "平上去", "入", "平入", "上入",
            "平上入", "去入", "平去入", "上去入", "平上去入",
        ];
        assert_eq!(tone_label_columns(), expected);
        // Stable across calls.
        assert_eq!(tone_label_columns(), tone_label_columns());
    }

    #[test]
    fn set_is_idempotent() {
        let mut pattern = TonePattern::default();
        pattern.set(ToneClass::Rising);
        pattern.set(ToneClass::Rising);
        assert_eq!(pattern.label(), "上");
    }

    #[test]
    fn slot_round_trips_through_tone_class() {
        for (slot, class) in ToneClass::ALL.iter().enumerate() {
            assert_eq!(class.slot(), slot);
            assert_eq!(ToneClass::from_slot(slot), Some(*class));
        }
        assert_eq!(ToneClass::from_slot(TONE_SLOTS), None);
    }

    #[test]
    fn later_mapping_wins() {
        let mut table = RuleTable::default();
        for fragment in ["a", "b", "c", "d", "e", "f"] {
            table.push_row(fragment.to_string());
        }
        table.map_char('x', CellPos { row: 2, col: 1 });
        table.map_char('x', CellPos { row: 5, col: 1 });
        assert_eq!(table.position('x'), Some(CellPos { row: 5, col: 1 }));
        assert_eq!(table.char_count(), 1);
    }

    #[test]
    fn cell_slot_rejects_out_of_range_columns() {
        assert_eq!(CellPos { row: 0, col: 3 }.slot(), Some(3));
        assert_eq!(CellPos { row: 0, col: 4 }.slot(), None);
    }
}
