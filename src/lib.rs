//! Mini-Cross: an interactive crossword grid core
//!
//! This crate provides the engine behind a browser crossword widget:
//! - Pure word-boundary and cursor-movement queries over a static grid mask
//! - A single controller owning cursor state and entered letters
//! - Diff-based highlighting (only changed cells are emitted)
//! - WASM bindings; the DOM side only paints what the engine computes

pub mod nav;
pub mod puzzle;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmCrossword;

// Re-export primary types
pub use nav::{next_arrow_cell, next_typing_cell, word_cells, ArrowKey, Cursor, Direction};
pub use puzzle::{Cell, Clue, ClueSet, GridMask, Puzzle, PuzzleError, PuzzleSpec};
pub use render::{
    CellClass, CluesRenderData, GridRenderData, HighlightDiff, HighlightPatch, HighlightState,
};

use smallvec::SmallVec;

/// Grid coordinates as (row, column), zero-based from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The widget controller combining puzzle state, cursor, and highlights
pub struct Crossword {
    pub puzzle: Puzzle,
    pub cursor: Cursor,
    highlights: HighlightState,
    highlight_dirty: bool,
}

impl Crossword {
    /// Create a controller over a loaded puzzle
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            cursor: Cursor::default(),
            highlights: HighlightState::default(),
            highlight_dirty: false,
        }
    }

    /// Create a controller from a puzzle JSON payload
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let spec: PuzzleSpec = serde_json::from_str(json)?;
        Ok(Self::new(Puzzle::from_spec(spec)?))
    }

    /// Handle a click on a grid cell.
    ///
    /// Clicking the active cell toggles the direction in place. Clicking
    /// any other playable cell selects it, defaulting to across unless the
    /// across word through it is degenerate (length <= 1), then down.
    /// Clicks on blocked or out-of-bounds cells are ignored; the frontend
    /// never attaches handlers there, so this is defensive.
    pub fn click(&mut self, row: usize, col: usize) -> bool {
        if !self.puzzle.mask().is_playable(row as i32, col as i32) {
            return false;
        }

        let pos = CellPos::new(row, col);
        if self.cursor.position == Some(pos) {
            self.cursor.toggle_direction();
        } else {
            let across = word_cells(self.puzzle.mask(), row, col, Direction::Across);
            self.cursor.position = Some(pos);
            self.cursor.direction = if across.len() <= 1 {
                Direction::Down
            } else {
                Direction::Across
            };
        }

        self.highlight_dirty = true;
        true
    }

    /// Type a letter into the active cell and auto-advance.
    ///
    /// The cursor moves one step along the current direction unless the
    /// next cell is blocked or past the grid edge (end of word: stay put,
    /// no wrap to the next word). Ignored when nothing is selected.
    pub fn type_char(&mut self, letter: char) -> bool {
        let Some(pos) = self.cursor.position else {
            return false;
        };

        self.puzzle
            .set_entry(pos, Some(letter.to_ascii_uppercase()));

        if let Some(next) =
            next_typing_cell(self.puzzle.mask(), pos.row, pos.col, self.cursor.direction)
        {
            self.cursor.position = Some(next);
        }

        self.highlight_dirty = true;
        true
    }

    /// Clear the letter at the active cell. The cursor does not move.
    pub fn backspace(&mut self) -> bool {
        let Some(pos) = self.cursor.position else {
            return false;
        };
        self.puzzle.set_entry(pos, None)
    }

    /// Move the cursor with an arrow key, skipping over blocked runs.
    ///
    /// If the landing cell's word in the current direction is degenerate,
    /// the direction flips. Ignored when nothing is selected or when the
    /// traversal leaves the grid without finding a playable cell.
    pub fn arrow(&mut self, key: ArrowKey) -> bool {
        let Some(pos) = self.cursor.position else {
            return false;
        };
        let Some(next) = next_arrow_cell(self.puzzle.mask(), pos.row, pos.col, key) else {
            return false;
        };

        self.cursor.position = Some(next);
        let word = word_cells(self.puzzle.mask(), next.row, next.col, self.cursor.direction);
        if word.len() <= 1 {
            self.cursor.toggle_direction();
        }

        self.highlight_dirty = true;
        true
    }

    /// The word through the active cell in the current direction
    pub fn active_word(&self) -> SmallVec<[CellPos; 8]> {
        match self.cursor.position {
            Some(pos) => word_cells(self.puzzle.mask(), pos.row, pos.col, self.cursor.direction),
            None => SmallVec::new(),
        }
    }

    /// Recompute highlights if needed and return the diff
    pub fn update_highlights(&mut self) -> Option<HighlightDiff> {
        if !self.highlight_dirty {
            return None;
        }

        let next = HighlightState::compute(self.puzzle.mask(), &self.cursor);
        let diff = self.highlights.diff(&next);
        self.highlights = next;
        self.highlight_dirty = false;

        Some(diff)
    }

    /// Current highlight state (as of the last `update_highlights`)
    pub fn highlights(&self) -> &HighlightState {
        &self.highlights
    }
}
