//! Render output: highlight classes, diff patches, and grid render data

mod display;
mod highlight;

pub use display::{CellRenderData, ClueRenderData, CluesRenderData, GridRenderData};
pub use highlight::{CellClass, HighlightDiff, HighlightPatch, HighlightState};
