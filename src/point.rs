use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use unordered_pair::UnorderedPair;

use crate::error::{EngineError, Result};
use crate::grid::GridSpec;
use crate::location::{Coord, Location};
use crate::puzzle::{AddOutcome, Puzzle};
use crate::trail::{ColorTrails, Front};

/// One trail cell, flattened for transport.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Row of the cell.
    pub row: Coord,
    /// Column of the cell.
    pub col: Coord,
    /// Color whose trail holds the cell.
    pub color: String,
    /// Front holding the cell, `0` or `1` on the wire.
    #[serde(rename = "frontIndex")]
    pub front_index: Front,
}

impl TrailPoint {
    /// The cell this point refers to.
    pub fn location(&self) -> Location {
        Location(self.row, self.col)
    }

    /// Parse a JSON array of points.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}

/// An endpoint as the board editor hands it over: one record per dot, two dots per color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointDot {
    /// Row of the dot.
    pub row: Coord,
    /// Column of the dot.
    pub col: Coord,
    /// Color the dot belongs to.
    pub color: String,
}

impl EndpointDot {
    /// The cell holding the dot.
    pub fn location(&self) -> Location {
        Location(self.row, self.col)
    }

    /// Parse a JSON array of dots.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}

/// The trails of a puzzle together with exactly which colors are completed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    /// As produced by [`Puzzle::to_point_list`].
    pub points: Vec<TrailPoint>,
    /// Completed colors, in registration order.
    pub completed: Vec<String>,
}

/// Whether the two fronts of a color are in contact anywhere.
///
/// Accepted additions only ever bring the fronts into contact by meeting, so for restored trails this stands in for the completed flag.
fn fronts_touch(grid: &GridSpec, endpoints: (Location, Location), trails: &ColorTrails) -> bool {
    let first = trails.front(Front::First);
    let second = trails.front(Front::Second);
    let adjacent = |a: Location, b: Location| grid.adjacent(UnorderedPair(a, b));

    first.iter().any(|a| adjacent(*a, endpoints.1) || second.iter().any(|b| adjacent(*a, *b)))
        || second.iter().any(|b| adjacent(*b, endpoints.0))
}

impl Puzzle {
    /// Every trail cell of every color, in the order the cells were added.
    ///
    /// Colors come in registration order. Within a color both fronts are interleaved as they grew,
    /// so [`replay_point_list`](Self::replay_point_list) rebuilds any state reached by additions alone.
    pub fn to_point_list(&self) -> Vec<TrailPoint> {
        let mut points = Vec::new();

        for color in self.registry.colors() {
            let Some(trails) = self.trails.get(color) else {
                continue;
            };
            points.extend(trails.in_growth_order().map(|(front, location)| TrailPoint {
                row: location.0,
                col: location.1,
                color: color.to_owned(),
                front_index: front,
            }));
        }

        points
    }

    /// [`to_point_list`](Self::to_point_list) as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_point_list())
    }

    fn restored_trails(&self, points: &[TrailPoint]) -> Result<HashMap<String, ColorTrails>> {
        let mut trails: HashMap<String, ColorTrails> = self.registry.colors()
            .map(|color| (color.to_owned(), ColorTrails::default()))
            .collect();

        for point in points {
            let Some(color_trails) = trails.get_mut(&point.color) else {
                warn!("restoring points of unknown color {:?}", point.color);
                return Err(EngineError::NoSuchColor(point.color.clone()));
            };
            if !self.grid.in_bounds(point.location()) {
                return Err(EngineError::OutOfBounds { row: point.row, col: point.col });
            }
            color_trails.push(point.front_index, point.location());
        }

        Ok(trails)
    }

    /// Replace all trails with `points`, trusting them as previously produced by [`to_point_list`](Self::to_point_list).
    ///
    /// The placement rules are not checked, only that each color is known and each cell on the grid.
    /// A color is marked completed when its two fronts touch.
    /// On error the puzzle is left as it was.
    pub fn restore_point_list(&mut self, points: &[TrailPoint]) -> Result<()> {
        let mut trails = self.restored_trails(points)?;

        for (color, color_trails) in trails.iter_mut() {
            if let Some(endpoints) = self.registry.endpoints_of(color) {
                color_trails.completed = fronts_touch(&self.grid, endpoints, color_trails);
            }
        }

        self.trails = trails;
        Ok(())
    }

    /// Rebuild all trails from `points` by adding them one at a time, as if drawn by hand in list order.
    ///
    /// Fails on the first point the rules reject, or which the rules give to the other front than the one it names.
    /// On error the puzzle is left as it was.
    pub fn replay_point_list(&mut self, points: &[TrailPoint]) -> Result<()> {
        let mut scratch = Self::new(self.grid.clone(), self.registry.clone());

        for (index, point) in points.iter().enumerate() {
            match scratch.add(&point.color, point.location())? {
                AddOutcome::Rejected(reason) => {
                    warn!("point #{index} at {} rejected on replay: {reason}", point.location());
                    return Err(EngineError::RejectedPoint { index, reason });
                }
                outcome => {
                    if outcome.front() != Some(point.front_index) {
                        warn!("point #{index} at {} grows from the other front on replay", point.location());
                        return Err(EngineError::FrontMismatch { index, claimed: point.front_index });
                    }
                }
            }
        }

        self.trails = scratch.trails;
        Ok(())
    }

    /// Capture the trails along with the exact set of completed colors.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            points: self.to_point_list(),
            completed: self.registry.colors()
                .filter(|color| self.is_completed(color))
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Restore trails and completion exactly as captured by [`snapshot`](Self::snapshot).
    pub fn restore_snapshot(&mut self, snapshot: &PuzzleSnapshot) -> Result<()> {
        let mut trails = self.restored_trails(&snapshot.points)?;

        for color in &snapshot.completed {
            if !trails.contains_key(color) {
                return Err(EngineError::NoSuchColor(color.clone()));
            }
        }
        for (color, color_trails) in trails.iter_mut() {
            color_trails.completed = snapshot.completed.contains(color);
        }

        self.trails = trails;
        Ok(())
    }
}
