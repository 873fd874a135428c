use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::Cell;
use crate::location::Location;
use crate::region::{Region, RegionId};
use crate::solver::{Search, SolveFailure, SolveOptions};
use crate::step::Step;
use crate::verify;

/// A rectangular Fillomino board: a dense grid of cells plus a registry of
/// the regions claiming them.
///
/// [`Board`]s are built with a [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder),
/// which places the puzzle clues and finalizes the clue index. Solving
/// mutates the board in place; a failed [`solve`](Board::solve) restores it
/// to its pre-call state.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) regions: Vec<Region>,
    pub(crate) fixed_coords: Vec<Location>,
    pub(crate) filled: usize,
    // width, height
    pub(crate) dims: (usize, usize),
}

impl Board {
    pub(crate) fn with_dims(dims: (usize, usize)) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((dims.1, dims.0), Cell::default),
            regions: Vec::new(),
            fixed_coords: Vec::new(),
            filled: 0,
            dims,
        }
    }

    /// This board's dimensions, in `(width, height)` order.
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.dims.0 * self.dims.1
    }

    pub(crate) fn is_filled(&self) -> bool {
        self.filled == self.cell_count()
    }

    // raw accessors; an out-of-range location is a caller bug and panics
    pub(crate) fn cell(&self, location: Location) -> &Cell {
        &self.cells[location.as_index()]
    }

    pub(crate) fn cell_mut(&mut self, location: Location) -> &mut Cell {
        &mut self.cells[location.as_index()]
    }

    pub(crate) fn get(&self, location: Location) -> Option<&Cell> {
        self.cells.get(location.as_index())
    }

    /// The value at `location`; `0` means empty.
    ///
    /// # Panics
    /// Panics if `location` is out of bounds.
    pub fn value_at(&self, location: Location) -> usize {
        self.cell(location).value()
    }

    /// Whether the cell at `location` is a puzzle clue.
    ///
    /// # Panics
    /// Panics if `location` is out of bounds.
    pub fn is_fixed_at(&self, location: Location) -> bool {
        self.cell(location).is_fixed()
    }

    /// The region currently claiming `location`, if any.
    ///
    /// # Panics
    /// Panics if `location` is out of bounds.
    pub fn region_id_at(&self, location: Location) -> Option<RegionId> {
        self.cell(location).region()
    }

    /// Write a value into a non-clue cell, for manual play before
    /// [`check_solution`](Board::check_solution). Writing to a clue is a
    /// no-op.
    ///
    /// # Panics
    /// Panics if `location` is out of bounds.
    pub fn set_value(&mut self, location: Location, value: usize) {
        self.cell_mut(location).set_value(value);
    }

    /// The distinct nonzero values present on the board, in first-appearance
    /// order. Presentation layers use this to assign display colors.
    pub fn values_present(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|cell| cell.value())
            .filter(|value| *value != 0)
            .unique()
            .collect_vec()
    }

    /// The order in which cells were claimed by a successful solve: region
    /// creation order, each region in insertion order.
    pub fn fill_order(&self) -> Vec<Location> {
        self.regions
            .iter()
            .flat_map(|region| region.members().iter().copied())
            .collect_vec()
    }

    pub(crate) fn create_region(&mut self, target: Option<usize>) -> RegionId {
        let id = self.regions.len();
        self.regions.push(Region::new(id, target));
        id
    }

    // only ever removes the most recently created region
    pub(crate) fn pop_region(&mut self) {
        let popped = self.regions.pop();
        debug_assert!(popped.map_or(true, |region| region.id == self.regions.len()));
    }

    pub(crate) fn region(&self, id: RegionId) -> &Region {
        &self.regions[id]
    }

    pub(crate) fn region_mut(&mut self, id: RegionId) -> &mut Region {
        &mut self.regions[id]
    }

    pub(crate) fn clear_regions(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.region = None;
        }
        self.regions.clear();
        self.filled = 0;
    }

    /// Scan the grid once and index the clue coordinates in row-major order.
    ///
    /// Value-1 clues need no search: each is resolved to its own singleton
    /// region immediately instead of being indexed.
    pub(crate) fn finalize_clues(&mut self) {
        self.fixed_coords.clear();

        for y in 0..self.dims.1 {
            for x in 0..self.dims.0 {
                let location = Location(x, y);
                let cell = self.cell(location);
                if !cell.is_fixed() {
                    continue;
                }

                if cell.value() == 1 {
                    let region = self.create_region(Some(1));
                    self.cell_mut(location).region = Some(region);
                    self.region_mut(region).push(location);
                    self.filled += 1;
                } else {
                    self.fixed_coords.push(location);
                }
            }
        }
    }

    pub(crate) fn next_unclaimed_clue(&self) -> Option<Location> {
        self.fixed_coords
            .iter()
            .copied()
            .find(|coord| self.cell(*coord).region().is_none())
    }

    pub(crate) fn first_unclaimed(&self) -> Option<Location> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.region().is_none())
            .map(|(index, _)| Location::from(index))
    }

    /// The neighbor of `from` one `step` away, if a region of value `value`
    /// may claim it: in bounds, unclaimed, and either unfixed or a clue of
    /// the same value.
    pub(crate) fn free_neighbor(&self, from: Location, value: usize, step: Step) -> Option<Location> {
        let location = step.attempt_from(from);
        let adj = self.get(location)?;

        if adj.region().is_some() {
            return None;
        }

        if adj.is_fixed() && adj.value() != value {
            return None;
        }

        Some(location)
    }

    pub(crate) fn has_free_neighbor(&self, from: Location, value: usize) -> bool {
        Step::VARIANTS
            .iter()
            .any(|step| self.free_neighbor(from, value, *step).is_some())
    }

    /// The regional-adjacency law: no orthogonal neighbor of `location` may
    /// belong to a different region while carrying the same value.
    pub(crate) fn is_valid_adjacency(&self, location: Location) -> bool {
        let cell = self.cell(location);

        Step::VARIANTS
            .iter()
            .all(|step| match self.get(step.attempt_from(location)) {
                None => true,
                Some(adj) => {
                    adj.region().is_none()
                        || adj.region() == cell.region()
                        || adj.value() != cell.value()
                }
            })
    }

    /// Region-completion check: the region holds exactly its target size (if
    /// sized) and every member satisfies the adjacency law.
    pub(crate) fn is_region_valid(&self, id: RegionId) -> bool {
        let region = self.region(id);
        if region.target.is_some_and(|target| target != region.len()) {
            return false;
        }

        region
            .members()
            .iter()
            .all(|member| self.is_valid_adjacency(*member))
    }

    /// Solves this board in place with default [`SolveOptions`].
    ///
    /// On success every cell carries a value and belongs to a region; the
    /// claim order is available via [`fill_order`](Board::fill_order). On
    /// failure the board is restored to its pre-call state.
    pub fn solve(&mut self) -> Result<(), SolveFailure> {
        self.solve_with(SolveOptions::default())
    }

    /// Solves this board in place, honoring the node budget and observer
    /// hook in `options`.
    pub fn solve_with(&mut self, options: SolveOptions) -> Result<(), SolveFailure> {
        Search::new(self, options).run()
    }

    /// Checks a fully human-filled board: every maximal connected same-value
    /// component must have its value as its size, and no two value-1 cells
    /// may be orthogonally adjacent.
    ///
    /// Returns the region-discovery order (for animated rendering) if the
    /// solution is correct, [`None`] otherwise. The board itself is never
    /// mutated; validation runs on a disposable copy.
    pub fn check_solution(&self) -> Option<Vec<Location>> {
        verify::check(self)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(
                f,
                "{}",
                row.iter()
                    .map(|cell| match cell.value() {
                        0 => ".".to_string(),
                        value => value.to_string(),
                    })
                    .join(" ")
            )?;
        }

        Ok(())
    }
}
