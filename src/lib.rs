#![warn(missing_docs)]

//! # `dotlink`
//!
//! The drawing engine of an editor for [Numberlink](https://en.wikipedia.org/wiki/Numberlink) style puzzles as found in the mobile game Flow Free.
//! Begin by placing endpoints with a builder such as [`PuzzleBuilder`](builder::PuzzleBuilder), build it into a [`Puzzle`],
//! then feed it cell clicks through [`Puzzle::add`] and [`Puzzle::remove`].
//!
//! # Two fronts
//! Every color has two endpoints and may be drawn from either end, or both.
//! Each endpoint grows its own front, an ordered trail of cells walking away from it.
//! A clicked cell joins whichever front it continues; when it continues both at once, the fronts meet and the color is complete.
//! A front may never brush past the other front without meeting it, so a completed color is always one connected walk.
//! The exact rules are listed on [`RouteResolver`](resolver::RouteResolver).
//!
//! Rejected cells are not errors. [`Puzzle::add`] reports them as [`AddOutcome::Rejected`] so that a UI can simply ignore the click.
//!
//! # Transport
//! Trails flatten to a list of [`TrailPoint`]s, one per cell, which serialise to JSON as `{"row", "col", "color", "frontIndex"}`.
//! A list can be restored as trusted state or replayed through the rules; see [`Puzzle::restore_point_list`] and [`Puzzle::replay_point_list`].
//!
//! With the default `wasm` feature, [`PathEditor`](wasm::PathEditor) exposes the engine to JavaScript.

pub use builder::Builder;
pub use error::{EngineError, Result};
pub use location::Location;
pub use point::{EndpointDot, PuzzleSnapshot, TrailPoint};
pub use puzzle::{AddOutcome, Puzzle, RemoveOutcome};
pub use trail::Front;

pub mod builder;
pub(crate) mod error;
pub mod grid;
pub mod location;
pub(crate) mod point;
pub(crate) mod puzzle;
pub mod registry;
pub mod resolver;
pub mod trail;
#[cfg(feature = "wasm")]
pub mod wasm;
