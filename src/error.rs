use thiserror::Error;

use crate::location::Coord;
use crate::resolver::RejectReason;
use crate::trail::Front;

/// Caller-visible failures of the engine.
///
/// A rejected move is not an error; see [`AddOutcome`](crate::AddOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The color has no fully registered pair of endpoints.
    #[error("no such color: {0:?}")]
    NoSuchColor(String),
    /// A cell outside the grid.
    #[error("({row}, {col}) is outside the grid")]
    OutOfBounds {
        /// Row of the offending cell.
        row: Coord,
        /// Column of the offending cell.
        col: Coord,
    },
    /// A point replayed from an external list would not have been accepted.
    #[error("point #{index} was rejected: {reason}")]
    RejectedPoint {
        /// Position of the point in the list.
        index: usize,
        /// Why the rules refused it.
        reason: RejectReason,
    },
    /// A replayed point was accepted, but by the other front than the one it names.
    #[error("point #{index} claims front {} but grows from the other one", .claimed.index())]
    FrontMismatch {
        /// Position of the point in the list.
        index: usize,
        /// The front the point names.
        claimed: Front,
    },
    /// A transported front index other than `0` or `1`.
    #[error("front index must be 0 or 1, got {0}")]
    InvalidFrontIndex(u8),
}

/// Result of engine operations.
pub type Result<T> = core::result::Result<T, EngineError>;
