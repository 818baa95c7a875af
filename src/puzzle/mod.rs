//! Puzzle model: grid mask, entered letters, and clue metadata

mod clue;
mod grid;

pub use clue::{Clue, ClueSet};
pub use grid::{Cell, GridMask, BLOCKED_SENTINEL};

use crate::nav::Direction;
use crate::CellPos;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Puzzle loading is the crate's only fallible operation; navigation
/// itself never errors.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("grid has {found} rows, expected {expected}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{direction} clue {number} starts out of bounds at ({row}, {col})")]
    ClueOutOfBounds {
        direction: Direction,
        number: u32,
        row: usize,
        col: usize,
    },
    #[error("{direction} clue {number} starts on a blocked cell at ({row}, {col})")]
    ClueOnBlockedCell {
        direction: Direction,
        number: u32,
        row: usize,
        col: usize,
    },
    #[error("invalid puzzle JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Puzzle input payload, matching the frontend's JSON shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSpec {
    pub grid_size: usize,
    pub clues: ClueSpecSet,
    /// Solved grid; the blocked sentinel marks black squares
    pub grid_solution: Vec<Vec<char>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueSpecSet {
    pub across: Vec<ClueSpec>,
    pub down: Vec<ClueSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueSpec {
    pub number: u32,
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

impl ClueSpec {
    fn into_clue(self) -> Clue {
        Clue {
            number: self.number,
            text: self.clue,
            answer: self.answer,
            start: CellPos::new(self.row, self.col),
        }
    }
}

/// A loaded puzzle: immutable mask and clues, mutable entered letters
#[derive(Debug, Clone)]
pub struct Puzzle {
    mask: GridMask,
    /// Entered letters, row-major; blocked cells stay `None`
    entries: Vec<Option<char>>,
    clues: ClueSet,
    /// Clue number shown in each start cell
    numbers: FxHashMap<CellPos, u32>,
}

impl Puzzle {
    /// Assemble a puzzle, validating that every clue starts on a
    /// playable cell of the grid
    pub fn new(mask: GridMask, clues: ClueSet) -> Result<Self, PuzzleError> {
        for (direction, list) in [
            (Direction::Across, &clues.across),
            (Direction::Down, &clues.down),
        ] {
            for clue in list {
                let (row, col) = (clue.start.row, clue.start.col);
                if !mask.in_bounds(row as i32, col as i32) {
                    return Err(PuzzleError::ClueOutOfBounds {
                        direction,
                        number: clue.number,
                        row,
                        col,
                    });
                }
                if !mask.is_playable(row as i32, col as i32) {
                    return Err(PuzzleError::ClueOnBlockedCell {
                        direction,
                        number: clue.number,
                        row,
                        col,
                    });
                }
            }
        }

        let entries = vec![None; mask.size() * mask.size()];
        let numbers = clues.start_numbers();
        Ok(Self {
            mask,
            entries,
            clues,
            numbers,
        })
    }

    /// Build a puzzle from a deserialized input payload
    pub fn from_spec(spec: PuzzleSpec) -> Result<Self, PuzzleError> {
        let mask = GridMask::from_solution(spec.grid_size, &spec.grid_solution)?;
        let clues = ClueSet {
            across: spec.clues.across.into_iter().map(ClueSpec::into_clue).collect(),
            down: spec.clues.down.into_iter().map(ClueSpec::into_clue).collect(),
        };
        Self::new(mask, clues)
    }

    pub fn mask(&self) -> &GridMask {
        &self.mask
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.mask.size()
    }

    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    /// Clue number displayed in a cell, if any clue starts there
    pub fn clue_number_at(&self, pos: CellPos) -> Option<u32> {
        self.numbers.get(&pos).copied()
    }

    /// Letter entered at a cell; `None` for empty, blocked, or
    /// out-of-bounds cells
    pub fn entry(&self, pos: CellPos) -> Option<char> {
        if !self.mask.is_playable(pos.row as i32, pos.col as i32) {
            return None;
        }
        self.entries[pos.row * self.size() + pos.col]
    }

    /// Set or clear the letter at a playable cell. Writes to blocked or
    /// out-of-bounds cells are ignored.
    pub fn set_entry(&mut self, pos: CellPos, letter: Option<char>) -> bool {
        if !self.mask.is_playable(pos.row as i32, pos.col as i32) {
            return false;
        }
        let idx = pos.row * self.size() + pos.col;
        self.entries[idx] = letter;
        true
    }
}
