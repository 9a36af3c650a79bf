//! JavaScript bindings.

use std::fmt::Display;
use std::num::NonZero;

use wasm_bindgen::prelude::*;

use crate::builder::{Builder, PuzzleBuilder};
use crate::location::Location;
use crate::point::{EndpointDot, TrailPoint};
use crate::puzzle::Puzzle;

fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Click-handler facade for the browser editor. Every method runs synchronously to completion.
#[wasm_bindgen]
pub struct PathEditor {
    puzzle: Puzzle,
}

#[wasm_bindgen]
impl PathEditor {
    /// `endpoints` is a JSON array of `{row, col, color}` dots, two per color.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, endpoints: &str) -> Result<PathEditor, JsValue> {
        let (Some(rows), Some(cols)) = (NonZero::new(rows), NonZero::new(cols)) else {
            return Err(js_error("grid must have at least one row and one column"));
        };
        let dots = EndpointDot::list_from_json(endpoints).map_err(js_error)?;

        let puzzle = PuzzleBuilder::with_dims((rows, cols))
            .add_dots(&dots)
            .build()
            .map_err(|reasons| js_error(format!("{:?}", reasons)))?;

        Ok(Self { puzzle })
    }

    /// Returns the index of the front that took the cell, or `-1` if it was rejected.
    pub fn add(&mut self, color: &str, row: usize, col: usize) -> Result<i32, JsValue> {
        let outcome = self.puzzle.add(color, Location(row, col)).map_err(js_error)?;
        Ok(outcome.front().map_or(-1, |front| front.index() as i32))
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, color: &str, row: usize, col: usize) -> Result<bool, JsValue> {
        let outcome = self.puzzle.remove(color, Location(row, col)).map_err(js_error)?;
        Ok(outcome.has_update())
    }

    /// Whether the fronts of `color` have met.
    #[wasm_bindgen(js_name = isCompleted)]
    pub fn is_completed(&self, color: &str) -> bool {
        self.puzzle.is_completed(color)
    }

    /// Every drawable color, in registration order.
    pub fn colors(&self) -> Vec<String> {
        self.puzzle.colors().map(str::to_owned).collect()
    }

    /// The trails as a JSON point list.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.puzzle.to_json().map_err(js_error)
    }

    /// Load a point list. With `validate`, the points are replayed through the placement rules.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, json: &str, validate: bool) -> Result<(), JsValue> {
        let points = TrailPoint::list_from_json(json).map_err(js_error)?;
        if validate {
            self.puzzle.replay_point_list(&points).map_err(js_error)
        } else {
            self.puzzle.restore_point_list(&points).map_err(js_error)
        }
    }

    /// The board as text, one line per row.
    pub fn render(&self) -> String {
        self.puzzle.to_string()
    }
}
