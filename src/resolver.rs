//! The rules deciding where a clicked cell goes.

use strum::Display;
use unordered_pair::UnorderedPair;

use crate::grid::GridSpec;
use crate::location::Location;
use crate::registry::EndpointRegistry;
use crate::trail::{ColorTrails, Front};

/// Why a candidate cell may not join a color's trail.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum RejectReason {
    /// The color has no full pair of endpoints, so there is nothing to grow from.
    #[strum(to_string = "color has no endpoint pair")]
    Unpaired,
    /// The two fronts already met; the color takes no more cells.
    #[strum(to_string = "color is already completed")]
    ColorCompleted,
    /// Endpoints of any color are never walked over.
    #[strum(to_string = "cell holds an endpoint")]
    OnEndpoint,
    /// The color already holds the cell on one of its fronts.
    #[strum(to_string = "cell is already part of this color's trail")]
    AlreadyInTrail,
    /// Neither front could step onto the cell.
    #[strum(to_string = "cell is not next to either front")]
    NotAdjacent,
    /// Only one front could take the cell, but it would brush against the other front without meeting it.
    #[strum(to_string = "cell touches the other front")]
    TouchesOtherFront,
}

/// Where a candidate cell goes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Append the cell to `front`.
    Assign {
        /// The front taking the cell.
        front: Front,
        /// The two fronts meet at this cell.
        completes: bool,
    },
    /// Leave the trails alone.
    Reject(RejectReason),
}

/// Decides which front of a color, if any, may take a candidate cell.
///
/// # Rules
/// Applied in order, the first that applies wins:
/// 1. A completed color takes nothing.
/// 2. Endpoint cells, of any color, are never walkable.
/// 3. A color never revisits a cell, on either front.
/// 4. A front is eligible if the candidate is next to its last cell, or, while the front is empty, next to the endpoint it grows from.
/// 5. With no eligible front, the cell is rejected.
/// 6. With both fronts eligible, the fronts meet. The cell goes to [`Front::First`] and the color completes.
/// 7. With exactly one eligible front, the cell is rejected if it touches any cell of the other front or the other front's endpoint.
///    Contact between the fronts must happen through rule 6.
/// 8. Otherwise the cell extends the eligible front.
///
/// Cells held by other colors play no part; two colors may claim the same cell.
pub struct RouteResolver<'a> {
    grid: &'a GridSpec,
    registry: &'a EndpointRegistry,
}

impl<'a> RouteResolver<'a> {
    /// A resolver over `grid` and the endpoints in `registry`.
    pub fn new(grid: &'a GridSpec, registry: &'a EndpointRegistry) -> Self {
        Self { grid, registry }
    }

    /// Resolve `candidate` against `trails`, the current trails of `color`.
    pub fn resolve(&self, color: &str, trails: &ColorTrails, candidate: Location) -> Resolution {
        use Resolution::*;

        let Some(endpoints) = self.registry.endpoints_of(color) else {
            return Reject(RejectReason::Unpaired);
        };

        if trails.is_completed() {
            return Reject(RejectReason::ColorCompleted);
        }
        if self.registry.is_endpoint(candidate) {
            return Reject(RejectReason::OnEndpoint);
        }
        if trails.contains(candidate) {
            return Reject(RejectReason::AlreadyInTrail);
        }

        let eligible = [Front::First, Front::Second].map(|front| self.is_eligible(endpoints, trails, front, candidate));

        match eligible {
            [false, false] => Reject(RejectReason::NotAdjacent),
            [true, true] => Assign { front: Front::First, completes: true },
            [first, _] => {
                let front = if first { Front::First } else { Front::Second };
                if self.touches(endpoints, trails, front.other(), candidate) {
                    Reject(RejectReason::TouchesOtherFront)
                } else {
                    Assign { front, completes: false }
                }
            }
        }
    }

    fn bound_endpoint(endpoints: (Location, Location), front: Front) -> Location {
        match front {
            Front::First => endpoints.0,
            Front::Second => endpoints.1,
        }
    }

    fn is_eligible(&self, endpoints: (Location, Location), trails: &ColorTrails, front: Front, candidate: Location) -> bool {
        let frontier = trails.last(front).unwrap_or(Self::bound_endpoint(endpoints, front));
        self.grid.adjacent(UnorderedPair(frontier, candidate))
    }

    /// Whether `candidate` is next to any cell of `front` or to the endpoint `front` grows from.
    fn touches(&self, endpoints: (Location, Location), trails: &ColorTrails, front: Front, candidate: Location) -> bool {
        let endpoint = Self::bound_endpoint(endpoints, front);
        self.grid.neighbors_of(candidate)
            .any(|neighbor| neighbor == endpoint || trails.front(front).contains(&neighbor))
    }
}
