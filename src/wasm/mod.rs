//! WASM bindings for the crossword widget

use crate::render::{CluesRenderData, GridRenderData};
use crate::{ArrowKey, Crossword, HighlightPatch};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed widget wrapper
#[wasm_bindgen]
pub struct WasmCrossword {
    widget: Crossword,
}

#[wasm_bindgen]
impl WasmCrossword {
    /// Create a widget from the puzzle JSON payload
    #[wasm_bindgen(constructor)]
    pub fn new(puzzle_json: &str) -> Result<WasmCrossword, JsValue> {
        let widget =
            Crossword::from_json(puzzle_json).map_err(|err| JsValue::from_str(&err.to_string()))?;

        web_sys::console::info_1(
            &format!("mini-cross: loaded {0}x{0} puzzle", widget.puzzle.size()).into(),
        );
        Ok(Self { widget })
    }

    /// Handle a click on a cell; returns false for ignored clicks
    #[wasm_bindgen(js_name = handleClick)]
    pub fn handle_click(&mut self, row: usize, col: usize) -> bool {
        self.widget.click(row, col)
    }

    /// Handle a typed character (first char of the input value)
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&mut self, letter: &str) -> bool {
        match letter.chars().next() {
            Some(ch) => self.widget.type_char(ch),
            None => false,
        }
    }

    /// Clear the letter at the active cell
    #[wasm_bindgen(js_name = handleBackspace)]
    pub fn handle_backspace(&mut self) -> bool {
        self.widget.backspace()
    }

    /// Handle an arrow key by its DOM name ("ArrowUp", ...); returns
    /// false for non-arrow keys or ignored presses
    #[wasm_bindgen(js_name = handleArrow)]
    pub fn handle_arrow(&mut self, key: &str) -> bool {
        match ArrowKey::from_dom_key(key) {
            Some(arrow) => self.widget.arrow(arrow),
            None => false,
        }
    }

    /// Grid side length
    #[wasm_bindgen(js_name = gridSize)]
    pub fn grid_size(&self) -> usize {
        self.widget.puzzle.size()
    }

    /// Highlight patches since the last call (returns JSON array)
    #[wasm_bindgen(js_name = getHighlightDiff)]
    pub fn get_highlight_diff(&mut self) -> JsValue {
        let patches: Vec<HighlightPatchData> = match self.widget.update_highlights() {
            Some(diff) => diff.patches.iter().map(HighlightPatchData::from).collect(),
            None => Vec::new(),
        };

        serde_wasm_bindgen::to_value(&patches).unwrap_or(JsValue::NULL)
    }

    /// Full current highlight state (returns JSON array)
    #[wasm_bindgen(js_name = getHighlights)]
    pub fn get_highlights(&mut self) -> JsValue {
        self.widget.update_highlights();

        let cells: Vec<HighlightCellData> = self
            .widget
            .highlights()
            .iter()
            .map(|(pos, class)| HighlightCellData {
                row: pos.row,
                col: pos.col,
                class: class.as_str().to_string(),
            })
            .collect();

        serde_wasm_bindgen::to_value(&cells).unwrap_or(JsValue::NULL)
    }

    /// Cursor position info (returns JSON)
    #[wasm_bindgen(js_name = getCursorInfo)]
    pub fn get_cursor_info(&self) -> JsValue {
        let cursor = &self.widget.cursor;
        let info = CursorInfo {
            row: cursor.position.map(|pos| pos.row),
            col: cursor.position.map(|pos| pos.col),
            direction: cursor.direction.as_str().to_string(),
        };

        serde_wasm_bindgen::to_value(&info).unwrap_or(JsValue::NULL)
    }

    /// Full grid render data (returns JSON)
    #[wasm_bindgen(js_name = getGridRenderData)]
    pub fn get_grid_render_data(&self) -> JsValue {
        let data = GridRenderData::from_puzzle(&self.widget.puzzle);
        serde_wasm_bindgen::to_value(&data).unwrap_or(JsValue::NULL)
    }

    /// Clue lists for display (returns JSON)
    #[wasm_bindgen(js_name = getClues)]
    pub fn get_clues(&self) -> JsValue {
        let data = CluesRenderData::from_clues(self.widget.puzzle.clues());
        serde_wasm_bindgen::to_value(&data).unwrap_or(JsValue::NULL)
    }

    /// Cells of the active word as a flat [row, col, ...] typed array,
    /// for frontends that walk the word without parsing JSON
    #[wasm_bindgen(js_name = getActiveWord)]
    pub fn get_active_word(&self) -> js_sys::Uint32Array {
        let flat: Vec<u32> = self
            .widget
            .active_word()
            .iter()
            .flat_map(|pos| [pos.row as u32, pos.col as u32])
            .collect();
        js_sys::Uint32Array::from(flat.as_slice())
    }
}

/// Serializable highlight cell for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightCellData {
    pub row: usize,
    pub col: usize,
    /// CSS class name ("highlight-word" or "highlight-active")
    pub class: String,
}

/// Serializable highlight patch for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightPatchData {
    pub row: usize,
    pub col: usize,
    /// CSS class to set, or null to clear the cell's highlight
    pub class: Option<String>,
}

impl From<&HighlightPatch> for HighlightPatchData {
    fn from(patch: &HighlightPatch) -> Self {
        match *patch {
            HighlightPatch::Set { pos, class } => Self {
                row: pos.row,
                col: pos.col,
                class: Some(class.as_str().to_string()),
            },
            HighlightPatch::Clear { pos } => Self {
                row: pos.row,
                col: pos.col,
                class: None,
            },
        }
    }
}

/// Serializable cursor info for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorInfo {
    pub row: Option<usize>,
    pub col: Option<usize>,
    pub direction: String,
}
