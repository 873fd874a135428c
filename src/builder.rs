//! Clue entry and board construction.

use crate::board::Board;
use crate::cell::Cell;
use crate::location::Location;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The board was given a zero width or height.
    ZeroDimension,
    /// A clue was placed outside the bounds specified by `dims` on the builder.
    ClueOutOfBounds,
    /// A clue was given the empty value `0`.
    ClueValueZero,
}

/// A builder for rectangular Fillomino boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point. Once any mutator has put the builder into an
/// invalid state, later mutators do nothing and [`build`](Self::build)
/// reports every accumulated [`BuilderInvalidReason`].
#[derive(Clone)]
pub struct SquareBoardBuilder {
    // width, height
    dims: (usize, usize),
    clues: Vec<(Location, usize)>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for SquareBoardBuilder {
    fn default() -> Self {
        Self::with_dims((5, 5))
    }
}

impl SquareBoardBuilder {
    /// Construct a new builder with the specified dimensions, in `(width,
    /// height)` order. A zero dimension invalidates the builder.
    pub fn with_dims(dims: (usize, usize)) -> Self {
        let mut invalid_reasons = Vec::new();
        if dims.0 == 0 || dims.1 == 0 {
            invalid_reasons.push(BuilderInvalidReason::ZeroDimension);
        }

        Self {
            dims,
            clues: Vec::new(),
            invalid_reasons,
        }
    }

    /// Add a clue: a fixed cell whose region must end up with exactly
    /// `value` members. A later clue at the same location replaces an
    /// earlier one.
    ///
    /// May invalidate the builder with [`ClueOutOfBounds`](BuilderInvalidReason::ClueOutOfBounds)
    /// or [`ClueValueZero`](BuilderInvalidReason::ClueValueZero).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_clue(&mut self, location: Location, value: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0 || location.1 >= self.dims.1 {
            self.invalid_reasons.push(BuilderInvalidReason::ClueOutOfBounds);
            return self;
        }

        if value == 0 {
            self.invalid_reasons.push(BuilderInvalidReason::ClueValueZero);
            return self;
        }

        self.clues.push((location, value));
        self
    }

    /// Remove the most recently added clue.
    ///
    /// If the builder is in an invalid state or no clues are present, this
    /// function does nothing.
    pub fn pop_clue(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.clues.pop();
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`], placing the clues
    /// and finalizing the fixed-cell index (which also resolves value-1
    /// clues into singleton regions).
    ///
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut board = Board::with_dims(self.dims);
        for (location, value) in self.clues.iter().copied() {
            *board.cell_mut(location) = Cell::clue(value);
        }

        board.finalize_clues();
        Ok(board)
    }
}
