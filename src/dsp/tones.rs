//! DTMF tone table and keypad symbol mapping.
//!
//! A keypad symbol is signalled by one frequency from the low group and
//! one from the high group sounding simultaneously. The table also
//! carries a guard frequency that never participates in any symbol; it
//! only serves as a high-energy bin that breaks pair lookup when
//! non-keypad energy is present.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A decoded keypad symbol.
///
/// Code 0 means "no symbol"; 1..=12 cover the 12-key pad with the
/// bottom row coded as 10 (`*`), 11 (`0`), 12 (`#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u8);

impl Symbol {
    pub const NONE: Symbol = Symbol(0);
    pub const STAR: Symbol = Symbol(10);
    pub const ZERO: Symbol = Symbol(11);
    pub const POUND: Symbol = Symbol(12);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The keypad character for this symbol, if it names one.
    pub fn as_char(&self) -> Option<char> {
        match self.0 {
            1..=9 => Some((b'0' + self.0) as char),
            10 => Some('*'),
            11 => Some('0'),
            12 => Some('#'),
            _ => None,
        }
    }

    /// Parse a keypad character back into a symbol.
    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            '1'..='9' => Some(Symbol(ch as u8 - b'0')),
            '*' => Some(Symbol::STAR),
            '0' => Some(Symbol::ZERO),
            '#' => Some(Symbol::POUND),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "-"),
        }
    }
}

/// Number of candidate frequencies in a tone table.
pub const NUM_FREQS: usize = 9;

/// Index of the first high-group frequency.
pub const HIGH_GROUP_START: usize = 4;

/// Index of the guard frequency.
pub const GUARD_INDEX: usize = 8;

/// The ordered candidate frequencies: four low-group rows, four
/// high-group columns, then the guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneTable {
    freqs: [u32; NUM_FREQS],
}

impl ToneTable {
    /// The standard keypad table with a 900 Hz guard.
    pub fn standard() -> Self {
        ToneTable {
            freqs: [697, 770, 852, 941, 1209, 1336, 1477, 1633, 900],
        }
    }

    pub fn new(freqs: [u32; NUM_FREQS]) -> Self {
        ToneTable { freqs }
    }

    /// All candidate frequencies in table order.
    pub fn freqs(&self) -> &[u32; NUM_FREQS] {
        &self.freqs
    }

    /// The low-group (row) frequencies.
    pub fn low_group(&self) -> &[u32] {
        &self.freqs[..HIGH_GROUP_START]
    }

    /// The high-group (column) frequencies.
    pub fn high_group(&self) -> &[u32] {
        &self.freqs[HIGH_GROUP_START..GUARD_INDEX]
    }

    /// The guard frequency.
    pub fn guard(&self) -> u32 {
        self.freqs[GUARD_INDEX]
    }
}

impl Default for ToneTable {
    fn default() -> Self {
        ToneTable::standard()
    }
}

/// Mapping from a (low, high) frequency pair to a keypad symbol.
#[derive(Debug, Clone)]
pub struct SymbolMap {
    pairs: HashMap<(u32, u32), Symbol>,
}

impl SymbolMap {
    /// The standard 12-entry keypad map.
    ///
    /// Only the first three high-group columns are mapped; 1633 Hz
    /// (the A-D extension column) sits in the table but decodes to
    /// nothing, as does the guard.
    pub fn standard() -> Self {
        let table = ToneTable::standard();
        let rows = table.low_group();
        let cols = &table.high_group()[..3];

        let mut pairs = HashMap::new();
        for (r, &low) in rows.iter().enumerate() {
            for (c, &high) in cols.iter().enumerate() {
                pairs.insert((low, high), Symbol((r * 3 + c + 1) as u8));
            }
        }
        SymbolMap { pairs }
    }

    pub fn new(entries: impl IntoIterator<Item = ((u32, u32), Symbol)>) -> Self {
        SymbolMap {
            pairs: entries.into_iter().collect(),
        }
    }

    /// Look up the symbol for a (low, high) pair. Unmapped pairs are
    /// Symbol::NONE, never an error.
    pub fn lookup(&self, low: u32, high: u32) -> Symbol {
        self.pairs.get(&(low, high)).copied().unwrap_or(Symbol::NONE)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check the map invariant: no two distinct pairs share a symbol,
    /// and no entry maps to Symbol::NONE.
    pub fn is_unambiguous(&self) -> bool {
        let mut seen = HashMap::new();
        for (&pair, &sym) in &self.pairs {
            if sym.is_none() {
                return false;
            }
            if let Some(&other) = seen.get(&sym) {
                if other != pair {
                    return false;
                }
            }
            seen.insert(sym, pair);
        }
        true
    }
}

impl Default for SymbolMap {
    fn default() -> Self {
        SymbolMap::standard()
    }
}
