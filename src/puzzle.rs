use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::{debug, info};
use ndarray::{Array2, AssignElem};

use crate::error::{EngineError, Result};
use crate::grid::GridSpec;
use crate::location::Location;
use crate::registry::EndpointRegistry;
use crate::resolver::{RejectReason, Resolution, RouteResolver};
use crate::trail::{ColorTrails, Front};

/// What became of a call to [`Puzzle::add`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The cell was not added; nothing changed.
    Rejected(RejectReason),
    /// The cell was appended to the given front.
    Extended(Front),
    /// The cell was appended to the given front and joined the two fronts, completing the color.
    Completed(Front),
}

impl AddOutcome {
    /// Whether the cell was added.
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// The front that took the cell, if any.
    pub const fn front(self) -> Option<Front> {
        match self {
            Self::Rejected(_) => None,
            Self::Extended(front) | Self::Completed(front) => Some(front),
        }
    }

    /// Whether the addition completed the color.
    pub const fn completed(self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// What became of a call to [`Puzzle::remove`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The cell was not in the color's trail.
    NoChange,
    /// The cell was taken out of its front.
    Removed,
}

impl RemoveOutcome {
    /// Whether anything changed.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// The live state of a puzzle being drawn: grid, endpoints, and both fronts of every color.
///
/// [`Puzzle`]s should be built using a [`Builder`](crate::builder::Builder) such as [`PuzzleBuilder`](crate::builder::PuzzleBuilder).
/// All mutation goes through [`add`](Self::add) and [`remove`](Self::remove), each of which runs to completion before returning.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) grid: GridSpec,
    pub(crate) registry: EndpointRegistry,
    // one entry per fully paired color
    pub(crate) trails: HashMap<String, ColorTrails>,
}

impl Puzzle {
    pub(crate) fn new(grid: GridSpec, registry: EndpointRegistry) -> Self {
        let trails = registry.colors()
            .map(|color| (color.to_owned(), ColorTrails::default()))
            .collect();

        Self { grid, registry, trails }
    }

    /// The grid this puzzle is drawn on.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// The endpoints of every color.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// All colors with a registered pair of endpoints, in registration order.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.registry.colors()
    }

    /// Both endpoints of `color`, or [`None`] if it is not fully paired.
    pub fn endpoints_of(&self, color: &str) -> Option<(Location, Location)> {
        self.registry.endpoints_of(color)
    }

    /// Try to add `location` to the trail of `color`.
    ///
    /// A cell the rules do not allow is reported as [`AddOutcome::Rejected`] and leaves the puzzle untouched;
    /// see [`RouteResolver`] for the rules.
    /// Errors only if `color` has no endpoint pair or `location` is off the grid.
    pub fn add(&mut self, color: &str, location: Location) -> Result<AddOutcome> {
        let Some(trails) = self.trails.get_mut(color) else {
            return Err(EngineError::NoSuchColor(color.to_owned()));
        };
        if !self.grid.in_bounds(location) {
            return Err(EngineError::OutOfBounds { row: location.0, col: location.1 });
        }

        match RouteResolver::new(&self.grid, &self.registry).resolve(color, trails, location) {
            Resolution::Reject(reason) => {
                debug!("rejected {location} for {color:?}: {reason}");
                Ok(AddOutcome::Rejected(reason))
            }
            Resolution::Assign { front, completes } => {
                trails.push(front, location);
                if completes {
                    trails.completed = true;
                    info!("{color:?} completed at {location}");
                    Ok(AddOutcome::Completed(front))
                } else {
                    debug!("{color:?} extended front {} to {location}", front.index());
                    Ok(AddOutcome::Extended(front))
                }
            }
        }
    }

    /// Remove `location` from the trail of `color`, whichever front holds it.
    ///
    /// Cells after it stay where they are, so an interior removal leaves a gap in the front.
    /// The completed flag is never cleared, even when the removal breaks the joined path.
    pub fn remove(&mut self, color: &str, location: Location) -> Result<RemoveOutcome> {
        let Some(trails) = self.trails.get_mut(color) else {
            return Err(EngineError::NoSuchColor(color.to_owned()));
        };
        if !self.grid.in_bounds(location) {
            return Err(EngineError::OutOfBounds { row: location.0, col: location.1 });
        }

        Ok(if trails.remove(location) {
            debug!("removed {location} from {color:?}");
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NoChange
        })
    }

    /// Empty both fronts of `color`. Like [`remove`](Self::remove), this does not clear completion.
    pub fn clear(&mut self, color: &str) -> Result<()> {
        let Some(trails) = self.trails.get_mut(color) else {
            return Err(EngineError::NoSuchColor(color.to_owned()));
        };
        trails.clear();
        Ok(())
    }

    /// Both fronts of `color`, in growth order.
    pub fn cells_of(&self, color: &str) -> Option<(&[Location], &[Location])> {
        self.trails.get(color).map(|trails| (trails.front(Front::First), trails.front(Front::Second)))
    }

    /// Both fronts of `color` along with its growth order and completion.
    pub fn trails_of(&self, color: &str) -> Option<&ColorTrails> {
        self.trails.get(color)
    }

    /// Whether the fronts of `color` have met. Unknown colors are never completed.
    pub fn is_completed(&self, color: &str) -> bool {
        self.trails.get(color).is_some_and(ColorTrails::is_completed)
    }

    /// Whether every color has been completed.
    pub fn is_solved(&self) -> bool {
        !self.trails.is_empty() && self.trails.values().all(ColorTrails::is_completed)
    }

    fn to_array(&self) -> Array2<char> {
        let mut cells = Array2::from_elem((self.grid.rows(), self.grid.cols()), '.');

        // trails first; on shared cells, the first registered color wins
        for aff in self.registry.paired() {
            let Some(trails) = self.trails.get(aff.color()) else {
                continue;
            };
            for location in trails.front(Front::First).iter().chain(trails.front(Front::Second)) {
                if let Some(cell) = cells.get_mut(location.as_index()) {
                    if *cell == '.' {
                        cell.assign_elem(aff.display().to_ascii_lowercase());
                    }
                }
            }
        }

        for aff in self.registry.iter() {
            for location in aff.termini() {
                if let Some(cell) = cells.get_mut(location.as_index()) {
                    cell.assign_elem(aff.display().to_ascii_uppercase());
                }
            }
        }

        cells
    }
}

impl Display for Puzzle {
    /// One line per row: endpoints in upper case, trail cells in lower case, empty cells as `.`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let board = self.to_array();
        let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

        for row in board.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
