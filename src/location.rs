//! Cell coordinates.

use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A row or column index.
pub type Coord = usize;
/// A grid dimension; grids have at least one row and one column.
pub type Dimension = NonZero<Coord>;

/// A cell on the grid, addressed as `(row, col)` from the top-left corner.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The row of this location.
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this location.
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Move by `(d_row, d_col)`.
    /// Stepping off the top or left edge wraps around to a huge coordinate, which every bounds check rejects.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Manhattan distance between two locations.
    pub fn manhattan(&self, other: &Location) -> Coord {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
