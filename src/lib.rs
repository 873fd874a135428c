#![warn(missing_docs)]

//! # `fillomino`
//!
//! A solver for [Fillomino](https://en.wikipedia.org/wiki/Fillomino)-style
//! number-placement puzzles: every cell of a rectangular grid holds a
//! positive integer, each maximal connected group of equal-valued cells (a
//! *region*) must contain exactly as many cells as its value, and two
//! distinct regions of the same size may never touch orthogonally.
//!
//! Begin by building a board with a [`SquareBoardBuilder`](builder::SquareBoardBuilder),
//! placing the puzzle clues. Call [`solve()`](Board::solve) to fill the rest
//! of the grid in place, or fill it by hand with
//! [`set_value()`](Board::set_value) and ask
//! [`check_solution()`](Board::check_solution) whether the result is
//! correct.
//!
//! # Internals
//! The engine is a depth-first backtracking search. Each clue seeds a region
//! sized to its value, grown one orthogonal neighbor at a time under a
//! strict reserve-then-validate-or-undo discipline; once every clue region
//! is placed, the remaining cells are grouped into regions by flood-fill
//! connectivity alone and valued by component size. Regions live in a
//! stable, id-indexed registry on the board, so backtracking is a matter of
//! popping the most recent claim (or the most recent region) and trying the
//! next branch. A failed or aborted solve therefore always restores the
//! board to its pre-call state.

pub use board::Board;
pub use location::Location;
pub use region::RegionId;
pub use solver::{SolveFailure, SolveOptions};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod region;
pub(crate) mod solver;
pub(crate) mod step;
pub(crate) mod verify;
pub mod builder;
