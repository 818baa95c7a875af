//! Serializable render data for the frontend
//!
//! Built once after puzzle load (and after letter edits for the grid
//! data); the frontend creates DOM cells and clue lists from these and
//! applies highlight patches separately.

use crate::puzzle::{Cell, ClueSet, Puzzle};
use crate::CellPos;
use serde::{Deserialize, Serialize};

/// One grid cell as the frontend renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRenderData {
    pub row: usize,
    pub col: usize,
    pub blocked: bool,
    /// Entered letter, if any
    pub letter: Option<char>,
    /// Clue number shown in the cell's corner, if a clue starts here
    pub clue_number: Option<u32>,
}

/// The full grid, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRenderData {
    pub grid_size: usize,
    pub cells: Vec<CellRenderData>,
}

impl GridRenderData {
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let size = puzzle.size();
        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let pos = CellPos::new(row, col);
                let blocked = puzzle.mask().cell(row as i32, col as i32) == Cell::Blocked;
                cells.push(CellRenderData {
                    row,
                    col,
                    blocked,
                    letter: puzzle.entry(pos),
                    clue_number: puzzle.clue_number_at(pos),
                });
            }
        }

        Self {
            grid_size: size,
            cells,
        }
    }
}

/// One clue line for the clue list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueRenderData {
    pub number: u32,
    pub text: String,
}

/// Both clue lists, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CluesRenderData {
    pub across: Vec<ClueRenderData>,
    pub down: Vec<ClueRenderData>,
}

impl CluesRenderData {
    pub fn from_clues(clues: &ClueSet) -> Self {
        let convert = |list: &[crate::puzzle::Clue]| {
            list.iter()
                .map(|clue| ClueRenderData {
                    number: clue.number,
                    text: clue.text.clone(),
                })
                .collect()
        };

        Self {
            across: convert(&clues.across),
            down: convert(&clues.down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Clue, GridMask};

    fn sample_puzzle() -> Puzzle {
        let mask = GridMask::from_rows(&["CAT", "A.A", "RCT"]).unwrap();
        let clues = ClueSet {
            across: vec![Clue {
                number: 1,
                text: "A domesticated feline".to_string(),
                answer: "CAT".to_string(),
                start: CellPos::new(0, 0),
            }],
            down: vec![Clue {
                number: 1,
                text: "A vehicle".to_string(),
                answer: "CAR".to_string(),
                start: CellPos::new(0, 0),
            }],
        };
        Puzzle::new(mask, clues).unwrap()
    }

    #[test]
    fn test_grid_render_data_covers_every_cell() {
        let data = GridRenderData::from_puzzle(&sample_puzzle());
        assert_eq!(data.grid_size, 3);
        assert_eq!(data.cells.len(), 9);

        let blocked: Vec<bool> = data.cells.iter().map(|cell| cell.blocked).collect();
        assert_eq!(
            blocked,
            vec![false, false, false, false, true, false, false, false, false]
        );
    }

    #[test]
    fn test_grid_render_data_carries_numbers_and_letters() {
        let mut puzzle = sample_puzzle();
        puzzle.set_entry(CellPos::new(0, 0), Some('C'));

        let data = GridRenderData::from_puzzle(&puzzle);
        assert_eq!(data.cells[0].clue_number, Some(1));
        assert_eq!(data.cells[0].letter, Some('C'));
        assert_eq!(data.cells[1].clue_number, None);
        assert_eq!(data.cells[1].letter, None);
    }

    #[test]
    fn test_grid_render_data_serializes_camel_case() {
        let data = GridRenderData::from_puzzle(&sample_puzzle());
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"gridSize\":3"));
        assert!(json.contains("\"clueNumber\":1"));
    }

    #[test]
    fn test_clues_render_data_keeps_input_order() {
        let data = CluesRenderData::from_clues(sample_puzzle().clues());
        assert_eq!(data.across.len(), 1);
        assert_eq!(data.down.len(), 1);
        assert_eq!(data.across[0].number, 1);
        assert_eq!(data.across[0].text, "A domesticated feline");
    }
}
