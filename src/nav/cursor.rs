//! Cursor state: selected cell plus active direction

use crate::CellPos;
use std::fmt;

/// Reading direction of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Step delta as (row, col)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrow keys as the DOM reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map a DOM `KeyboardEvent.key` name; `None` for non-arrow keys
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// Step delta as (row, col)
    pub fn delta(self) -> (i32, i32) {
        match self {
            ArrowKey::Up => (-1, 0),
            ArrowKey::Down => (1, 0),
            ArrowKey::Left => (0, -1),
            ArrowKey::Right => (0, 1),
        }
    }
}

/// The crossword cursor: an optional active cell and a direction
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    /// Currently selected cell, if any
    pub position: Option<CellPos>,
    /// Active reading direction
    pub direction: Direction,
}

impl Cursor {
    /// Create a cursor selecting the given cell
    pub fn at(position: CellPos, direction: Direction) -> Self {
        Self {
            position: Some(position),
            direction,
        }
    }

    /// Whether any cell is selected
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Drop the selection, keeping the direction
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Flip between across and down
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }
}
