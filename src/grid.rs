//! Grid bounds and orthogonal adjacency.

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::location::{Coord, Dimension, Location};

/// Immutable bounds of the puzzle grid together with its orthogonal adjacency.
///
/// Adjacency is held as an undirected graph with one node per cell and one edge per pair of orthogonal neighbors,
/// so "may a trail step from `a` to `b`" is a single edge lookup.
#[derive(Clone, Debug)]
pub struct GridSpec {
    // rows, cols
    dims: (Dimension, Dimension),
    graph: UnGraphMap<Location, ()>,
}

impl GridSpec {
    /// Construct the grid for `dims`, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        let (rows, cols) = (dims.0.get(), dims.1.get());
        let mut graph = UnGraphMap::with_capacity(
            rows * cols,
            // "horizontal" edges
            rows * (cols - 1)
                // "vertical" edges
                + (rows - 1) * cols,
        );

        for row in 0..rows {
            for col in 0..cols {
                let location = Location(row, col);
                graph.add_node(location);

                // add edges to the right and down, if possible
                for step in [(0, 1), (1, 0)] {
                    let other = location.offset_by(step);
                    if other.0 < rows && other.1 < cols {
                        graph.add_edge(location, other, ());
                    }
                }
            }
        }

        Self { dims, graph }
    }

    /// Number of rows.
    pub fn rows(&self) -> Coord {
        self.dims.0.get()
    }

    /// Number of columns.
    pub fn cols(&self) -> Coord {
        self.dims.1.get()
    }

    /// Both dimensions, in `(rows, cols)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `location` lies on the grid. Never fails; out of range input is simply `false`.
    pub fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.rows() && location.1 < self.cols()
    }

    /// Whether the two cells are orthogonal neighbors on this grid.
    ///
    /// Cells off the grid are never adjacent to anything, and no cell is adjacent to itself.
    pub fn adjacent(&self, cells: UnorderedPair<Location>) -> bool {
        self.graph.contains_edge(cells.0, cells.1)
    }

    /// All on-grid orthogonal neighbors of `location`.
    pub fn neighbors_of(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        self.graph.neighbors(location)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use rstest::rstest;
    use unordered_pair::UnorderedPair;

    use super::GridSpec;
    use crate::location::Location;

    fn grid(rows: usize, cols: usize) -> GridSpec {
        GridSpec::with_dims((NonZero::new(rows).unwrap(), NonZero::new(cols).unwrap()))
    }

    #[rstest]
    #[case(Location(0, 0), true)]
    #[case(Location(2, 3), true)]
    #[case(Location(3, 0), false)]
    #[case(Location(0, 4), false)]
    #[case(Location(0, 0).offset_by((-1, 0)), false)]
    fn bounds(#[case] location: Location, #[case] expected: bool) {
        assert_eq!(grid(3, 4).in_bounds(location), expected);
    }

    #[rstest]
    #[case(Location(1, 1), Location(0, 1), true)]
    #[case(Location(1, 1), Location(1, 2), true)]
    #[case(Location(1, 1), Location(2, 2), false)]
    #[case(Location(1, 1), Location(1, 1), false)]
    #[case(Location(0, 0), Location(0, 2), false)]
    // the neighbor would be off the grid
    #[case(Location(2, 2), Location(2, 3), false)]
    fn adjacency(#[case] a: Location, #[case] b: Location, #[case] expected: bool) {
        let grid = grid(3, 3);
        assert_eq!(grid.adjacent(UnorderedPair(a, b)), expected);
        assert_eq!(grid.adjacent(UnorderedPair(b, a)), expected);
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = grid(3, 3);
        assert_eq!(grid.neighbors_of(Location(0, 0)).sorted().collect_vec(), vec![Location(0, 1), Location(1, 0)]);
        assert_eq!(grid.neighbors_of(Location(1, 1)).count(), 4);
        assert_eq!(grid.neighbors_of(Location(5, 5)).count(), 0);
    }

    #[test]
    fn edges_cover_every_neighbor_pair() {
        let grid = grid(2, 3);
        // 2 * (3 - 1) horizontal + (2 - 1) * 3 vertical
        assert_eq!(grid.graph.edge_count(), 7);
        assert!(grid.adjacent(UnorderedPair(Location(0, 2), Location(1, 2))));
        assert!(!grid.adjacent(UnorderedPair(Location(0, 2), Location(1, 0))));
    }

    #[test]
    fn single_cell_grid() {
        let grid = grid(1, 1);
        assert!(grid.in_bounds(Location(0, 0)));
        assert_eq!(grid.neighbors_of(Location(0, 0)).count(), 0);
    }
}
