//! Highlight state and diff protocol for incremental updates
//!
//! The frontend keeps one CSS class per cell. After each interaction the
//! engine recomputes the highlight state and emits patches for only the
//! cells whose class changed, instead of clearing and re-adding every
//! class on every keystroke.

use crate::nav::{word_cells, Cursor};
use crate::puzzle::GridMask;
use crate::CellPos;
use rustc_hash::FxHashMap;

/// Highlight class of a cell. `Active` wins over `Word` on the cell
/// under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Part of the active word
    Word,
    /// The cell under the cursor
    Active,
}

impl CellClass {
    pub fn as_str(self) -> &'static str {
        match self {
            CellClass::Word => "highlight-word",
            CellClass::Active => "highlight-active",
        }
    }
}

/// Highlight classes for every highlighted cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightState {
    classes: FxHashMap<CellPos, CellClass>,
}

impl HighlightState {
    /// Compute the state for a cursor: the word through the active cell
    /// in the current direction, with the active cell marked on top.
    /// No selection yields the empty state.
    pub fn compute(mask: &GridMask, cursor: &Cursor) -> Self {
        let mut classes = FxHashMap::default();
        if let Some(pos) = cursor.position {
            for cell in word_cells(mask, pos.row, pos.col, cursor.direction) {
                classes.insert(cell, CellClass::Word);
            }
            classes.insert(pos, CellClass::Active);
        }
        Self { classes }
    }

    /// Class of a cell, if highlighted
    pub fn class(&self, pos: CellPos) -> Option<CellClass> {
        self.classes.get(&pos).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Highlighted cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, CellClass)> {
        let mut cells: Vec<(CellPos, CellClass)> =
            self.classes.iter().map(|(&pos, &class)| (pos, class)).collect();
        cells.sort_by_key(|(pos, _)| (pos.row, pos.col));
        cells.into_iter()
    }

    /// Patches turning this state into `next`, in row-major order
    pub fn diff(&self, next: &HighlightState) -> HighlightDiff {
        let mut patches = Vec::new();

        for (&pos, &class) in &next.classes {
            if self.classes.get(&pos) != Some(&class) {
                patches.push(HighlightPatch::Set { pos, class });
            }
        }
        for &pos in self.classes.keys() {
            if !next.classes.contains_key(&pos) {
                patches.push(HighlightPatch::Clear { pos });
            }
        }

        patches.sort_by_key(|patch| {
            let pos = patch.pos();
            (pos.row, pos.col)
        });
        HighlightDiff { patches }
    }
}

/// A single class change for the frontend to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightPatch {
    /// Set the cell's highlight class
    Set { pos: CellPos, class: CellClass },
    /// Remove any highlight class from the cell
    Clear { pos: CellPos },
}

impl HighlightPatch {
    pub fn pos(&self) -> CellPos {
        match self {
            HighlightPatch::Set { pos, .. } | HighlightPatch::Clear { pos } => *pos,
        }
    }
}

/// Complete highlight diff for one interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightDiff {
    pub patches: Vec<HighlightPatch>,
}

impl HighlightDiff {
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Direction;

    fn sample_mask() -> GridMask {
        GridMask::from_rows(&[
            "CAT.NEW...",
            "A.A.E.A...",
            "RCT.WGO...",
            "......I...",
            "APE...L...",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ])
        .unwrap()
    }

    #[test]
    fn test_compute_without_selection_is_empty() {
        let state = HighlightState::compute(&sample_mask(), &Cursor::default());
        assert!(state.is_empty());
    }

    #[test]
    fn test_compute_marks_word_and_active() {
        let mask = sample_mask();
        let cursor = Cursor::at(CellPos::new(0, 0), Direction::Across);
        let state = HighlightState::compute(&mask, &cursor);

        assert_eq!(state.len(), 3);
        assert_eq!(state.class(CellPos::new(0, 0)), Some(CellClass::Active));
        assert_eq!(state.class(CellPos::new(0, 1)), Some(CellClass::Word));
        assert_eq!(state.class(CellPos::new(0, 2)), Some(CellClass::Word));
    }

    #[test]
    fn test_active_class_wins_on_cursor_cell() {
        let mask = sample_mask();
        let cursor = Cursor::at(CellPos::new(0, 1), Direction::Across);
        let state = HighlightState::compute(&mask, &cursor);

        assert_eq!(state.class(CellPos::new(0, 1)), Some(CellClass::Active));
        assert_eq!(state.class(CellPos::new(0, 0)), Some(CellClass::Word));
    }

    #[test]
    fn test_diff_touches_only_changed_cells() {
        let mask = sample_mask();
        let before = HighlightState::compute(&mask, &Cursor::at(CellPos::new(0, 0), Direction::Across));
        let after = HighlightState::compute(&mask, &Cursor::at(CellPos::new(0, 1), Direction::Across));

        // Same word, cursor moved one cell: two class swaps, nothing else
        let diff = before.diff(&after);
        assert_eq!(
            diff.patches,
            vec![
                HighlightPatch::Set {
                    pos: CellPos::new(0, 0),
                    class: CellClass::Word
                },
                HighlightPatch::Set {
                    pos: CellPos::new(0, 1),
                    class: CellClass::Active
                },
            ]
        );
    }

    #[test]
    fn test_diff_clears_on_word_change() {
        let mask = sample_mask();
        let before = HighlightState::compute(&mask, &Cursor::at(CellPos::new(0, 0), Direction::Across));
        let after = HighlightState::compute(&mask, &Cursor::at(CellPos::new(4, 0), Direction::Across));

        let diff = before.diff(&after);
        // Three cleared (CAT), three set (APE)
        assert_eq!(diff.len(), 6);
        assert!(diff.patches.contains(&HighlightPatch::Clear {
            pos: CellPos::new(0, 0)
        }));
        assert!(diff.patches.contains(&HighlightPatch::Set {
            pos: CellPos::new(4, 0),
            class: CellClass::Active
        }));
    }

    #[test]
    fn test_diff_to_empty_state_clears_everything() {
        let mask = sample_mask();
        let before = HighlightState::compute(&mask, &Cursor::at(CellPos::new(0, 0), Direction::Down));
        let diff = before.diff(&HighlightState::default());

        assert_eq!(diff.len(), 3);
        assert!(diff
            .patches
            .iter()
            .all(|patch| matches!(patch, HighlightPatch::Clear { .. })));
    }

    #[test]
    fn test_diff_identical_states_is_empty() {
        let mask = sample_mask();
        let cursor = Cursor::at(CellPos::new(2, 1), Direction::Across);
        let a = HighlightState::compute(&mask, &cursor);
        let b = HighlightState::compute(&mask, &cursor);
        assert!(a.diff(&b).is_empty());
    }

    #[test]
    fn test_iter_row_major_order() {
        let mask = sample_mask();
        let state = HighlightState::compute(&mask, &Cursor::at(CellPos::new(1, 0), Direction::Down));

        let cells: Vec<CellPos> = state.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            cells,
            vec![CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(2, 0)]
        );
    }
}
