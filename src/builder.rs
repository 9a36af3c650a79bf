//! Placing endpoints and building puzzles.

use std::num::NonZero;

use crate::grid::GridSpec;
use crate::location::{Dimension, Location};
use crate::point::EndpointDot;
use crate::puzzle::Puzzle;
use crate::registry::EndpointRegistry;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// An endpoint was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// An endpoint was placed on a cell which already holds one, of any color.
    LocationOccupied,
    /// A color was given a third endpoint.
    ColorAlreadyPaired,
}

/// Functionality all builders must implement.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Place a single endpoint of `color`.
    /// A color with only one endpoint is registered but not paired, and the engine will not draw it.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds or occupied, or if `color` already has two endpoints.
    /// If the builder is already in an invalid state, this function does nothing.
    fn add_terminus(&mut self, color: &str, location: Location) -> &mut Self;
    /// Add both termini or "flow endpoints" of `color`.
    ///
    /// The first location is where [`Front::First`](crate::Front::First) grows from, the second is where [`Front::Second`](crate::Front::Second) grows from.
    /// Invalidates the builder under the same conditions as [`Self::add_terminus`].
    fn add_termini(&mut self, color: &str, locations: (Location, Location)) -> &mut Self;
    /// Remove the most recently added color, along with its endpoints.
    ///
    /// If the builder is in an invalid state or no termini are present, this function does nothing.
    fn pop_termini(&mut self) -> &mut Self;
    /// Remove the endpoints of `color`.
    ///
    /// If the builder is in an invalid state or `color` is unknown, this function does nothing.
    fn remove_termini(&mut self, color: &str) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Puzzle`] with empty trails.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular puzzles of square cells.
#[derive(Clone, Debug)]
pub struct PuzzleBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    registry: EndpointRegistry,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

const DEFAULT_DIM: Dimension = match NonZero::new(5) {
    Some(dim) => dim,
    None => unreachable!(),
};

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::with_dims((DEFAULT_DIM, DEFAULT_DIM))
    }
}

impl PuzzleBuilder {
    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    fn check_placement(&self, color: &str, locations: &[Location]) -> Option<BuilderInvalidReason> {
        if locations.iter().any(|location| !self.in_bounds(*location)) {
            return Some(BuilderInvalidReason::FeatureOutOfBounds);
        }

        let duplicated = locations.iter().enumerate()
            .any(|(index, location)| locations[..index].contains(location));
        if duplicated || locations.iter().any(|location| self.registry.is_endpoint(*location)) {
            return Some(BuilderInvalidReason::LocationOccupied);
        }

        let existing = self.registry.find(color).map_or(0, |aff| aff.termini().len());
        if existing + locations.len() > 2 {
            return Some(BuilderInvalidReason::ColorAlreadyPaired);
        }

        None
    }

    fn place_all(&mut self, color: &str, locations: &[Location]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some(reason) = self.check_placement(color, locations) {
            self.invalid_reasons.push(reason);
            return self;
        }

        for location in locations {
            self.registry.place(color, *location);
        }

        self
    }

    /// Place every dot in `dots`, in order, as by [`Builder::add_terminus`].
    pub fn add_dots(&mut self, dots: &[EndpointDot]) -> &mut Self {
        for dot in dots {
            self.add_terminus(&dot.color, dot.location());
        }

        self
    }
}

impl Builder for PuzzleBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            registry: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    fn add_terminus(&mut self, color: &str, location: Location) -> &mut Self {
        self.place_all(color, &[location])
    }

    fn add_termini(&mut self, color: &str, locations: (Location, Location)) -> &mut Self {
        self.place_all(color, &[locations.0, locations.1])
    }

    fn pop_termini(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.registry.pop();
        self
    }

    fn remove_termini(&mut self, color: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.registry.remove(color);
        self
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Puzzle::new(GridSpec::with_dims(self.dims), self.registry.clone()))
    }
}
