//! Clue metadata. Display-only: navigation never reads it.

use crate::CellPos;
use rustc_hash::FxHashMap;

/// One clue: number, prompt text, answer, and start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: u32,
    pub text: String,
    pub answer: String,
    pub start: CellPos,
}

impl Clue {
    /// Clue line as shown in the clue list
    pub fn display(&self) -> String {
        format!("{}. {}", self.number, self.text)
    }
}

/// The puzzle's clues, split by direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueSet {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl ClueSet {
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Clue number shown in each start cell. Across clues are placed
    /// first; a down clue only numbers a cell no across clue starts in.
    pub fn start_numbers(&self) -> FxHashMap<CellPos, u32> {
        let mut numbers = FxHashMap::default();
        for clue in &self.across {
            numbers.insert(clue.start, clue.number);
        }
        for clue in &self.down {
            numbers.entry(clue.start).or_insert(clue.number);
        }
        numbers
    }
}
