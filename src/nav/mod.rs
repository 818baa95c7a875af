//! Navigation model: cursor state and word-boundary queries

mod cursor;
mod navigator;

pub use cursor::{ArrowKey, Cursor, Direction};
pub use navigator::{next_arrow_cell, next_typing_cell, word_cells};
