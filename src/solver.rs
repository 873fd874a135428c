//! The backtracking search that fills a board from its clues.
//!
//! Search state is the board itself, mutated under a strict reserve/undo
//! discipline: every claim of a cell has exactly one matching release on
//! every failure path, so an exhausted or aborted search always leaves the
//! board exactly as it found it.

use std::collections::VecDeque;

use strum::VariantArray;

use crate::board::Board;
use crate::location::Location;
use crate::region::RegionId;
use crate::step::Step;

/// Reasons [`Board::solve`](crate::Board::solve) may fail. The board is
/// restored to its pre-call state in either case.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SolveFailure {
    /// The search space was exhausted without finding a valid filling.
    Unsolvable,
    /// The node budget ran out before the search concluded.
    BudgetExhausted,
}

/// Knobs for [`Board::solve_with`](crate::Board::solve_with).
pub struct SolveOptions<'o> {
    /// Abort after visiting this many search nodes. `None` searches
    /// unbounded.
    pub node_budget: Option<u64>,
    /// How many nodes pass between observer invocations.
    pub observe_every: u64,
    /// A diagnostic hook called with the in-progress board every
    /// [`observe_every`](Self::observe_every) visited nodes.
    pub observer: Option<&'o mut dyn FnMut(&Board)>,
}

impl Default for SolveOptions<'_> {
    fn default() -> Self {
        Self {
            node_budget: None,
            observe_every: 1024,
            observer: None,
        }
    }
}

enum Verdict {
    Solved,
    // this branch is exhausted; the caller undoes its reservation and moves on
    Stuck,
    // abort the whole search, undoing on the way out
    OutOfBudget,
}

pub(crate) struct Search<'b, 'o> {
    board: &'b mut Board,
    nodes: u64,
    budget: Option<u64>,
    observe_every: u64,
    observer: Option<&'o mut dyn FnMut(&Board)>,
}

impl<'b, 'o> Search<'b, 'o> {
    pub(crate) fn new(board: &'b mut Board, options: SolveOptions<'o>) -> Self {
        Self {
            board,
            nodes: 0,
            budget: options.node_budget,
            observe_every: options.observe_every.max(1),
            observer: options.observer,
        }
    }

    pub(crate) fn run(&mut self) -> Result<(), SolveFailure> {
        // singleton clues were resolved without a search step, so their
        // isolation is the one rule nothing downstream would re-check
        if !self.singleton_clues_isolated() {
            return Err(SolveFailure::Unsolvable);
        }

        match self.next_clue() {
            Verdict::Solved => Ok(()),
            Verdict::Stuck => Err(SolveFailure::Unsolvable),
            Verdict::OutOfBudget => Err(SolveFailure::BudgetExhausted),
        }
    }

    /// Two value-1 cells may not be orthogonally adjacent.
    fn singleton_clues_isolated(&self) -> bool {
        self.board.cells.indexed_iter().all(|(index, cell)| {
            if !cell.is_fixed() || cell.value() != 1 {
                return true;
            }

            let location = Location::from(index);
            Step::VARIANTS.iter().all(|step| {
                self.board
                    .get(step.attempt_from(location))
                    .map_or(true, |adj| adj.value() != 1)
            })
        })
    }

    // one search node; false means the budget is spent
    fn visit(&mut self) -> bool {
        self.nodes += 1;
        if self.nodes % self.observe_every == 0 {
            if let Some(observer) = self.observer.as_mut() {
                observer(&*self.board);
            }
        }

        self.budget.map_or(true, |budget| self.nodes <= budget)
    }

    /// Claim `location` for a sized region: count it filled, set its region
    /// id, append it to the region, and copy the region's value into it (a
    /// no-op on the clue itself).
    fn claim(&mut self, location: Location, region: RegionId) {
        let value = self.board.region(region).target.unwrap();
        self.board.filled += 1;

        let cell = self.board.cell_mut(location);
        cell.region = Some(region);
        cell.set_value(value);

        self.board.region_mut(region).push(location);
    }

    /// Exact inverse of [`claim`](Self::claim). `location` must be the most
    /// recent claim of its region.
    fn release(&mut self, location: Location) {
        let region = self.board.cell(location).region().unwrap();
        let popped = self.board.region_mut(region).pop();
        debug_assert_eq!(popped, Some(location));

        let cell = self.board.cell_mut(location);
        cell.region = None;
        cell.set_value(0);

        self.board.filled -= 1;
    }

    /// Open a region for the next unclaimed clue and grow it; once no clues
    /// remain, hand over to the free-fill phase.
    fn next_clue(&mut self) -> Verdict {
        if self.board.is_filled() {
            return Verdict::Solved;
        }

        let Some(coord) = self.board.next_unclaimed_clue() else {
            return self.fill_remaining();
        };

        let value = self.board.cell(coord).value();
        let region = self.board.create_region(Some(value));
        self.claim(coord, region);

        let verdict = self.grow(region, coord);
        if !matches!(verdict, Verdict::Solved) {
            self.release(coord);
            self.board.pop_region();
        }

        verdict
    }

    /// Grow `region` by one cell out of `at`, trying each direction in turn.
    ///
    /// A completed region is validated and the search advances to the next
    /// clue; an incomplete one recurses on the newly claimed cell, falling
    /// back to growth from the region's other members for concave shapes a
    /// single forward cursor cannot reach.
    fn grow(&mut self, region: RegionId, at: Location) -> Verdict {
        if !self.visit() {
            return Verdict::OutOfBudget;
        }

        let value = self.board.cell(at).value();
        for step in Step::VARIANTS {
            let Some(adj) = self.board.free_neighbor(at, value, *step) else {
                continue;
            };

            self.claim(adj, region);

            let verdict = if self.board.region(region).is_complete() {
                if self.board.is_region_valid(region) {
                    self.next_clue()
                } else {
                    Verdict::Stuck
                }
            } else {
                match self.grow(region, adj) {
                    Verdict::Stuck => self.grow_from_members(region, adj),
                    verdict => verdict,
                }
            };

            match verdict {
                Verdict::Solved => return Verdict::Solved,
                Verdict::OutOfBudget => {
                    self.release(adj);
                    return Verdict::OutOfBudget;
                }
                Verdict::Stuck => self.release(adj),
            }
        }

        Verdict::Stuck
    }

    // resume growth from every other member that still has a free neighbor
    fn grow_from_members(&mut self, region: RegionId, last: Location) -> Verdict {
        let members = self.board.region(region).members().to_vec();

        for member in members {
            if member == last {
                continue;
            }

            let value = self.board.cell(member).value();
            if !self.board.has_free_neighbor(member, value) {
                continue;
            }

            match self.grow(region, member) {
                Verdict::Stuck => {}
                verdict => return verdict,
            }
        }

        Verdict::Stuck
    }

    /// The free-fill phase: flood-fill one connected component of unclaimed
    /// cells, value every member with the component's size, validate, and
    /// recurse for the next component.
    ///
    /// Failure here unwinds into the clue-growth search, which will reshape
    /// the clue regions and leave a different remainder.
    fn fill_remaining(&mut self) -> Verdict {
        if !self.visit() {
            return Verdict::OutOfBudget;
        }

        if self.board.is_filled() {
            return Verdict::Solved;
        }

        let start = self.board.first_unclaimed().unwrap();
        let region = self.board.create_region(None);

        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(coord) = queue.pop_front() {
            // a cell may be enqueued twice before its first pop
            if self.board.cell(coord).region().is_some() {
                continue;
            }

            self.board.filled += 1;
            self.board.cell_mut(coord).region = Some(region);
            self.board.region_mut(region).push(coord);

            for step in Step::VARIANTS {
                if let Some(adj) = self.board.free_neighbor(coord, 0, *step) {
                    queue.push_back(adj);
                }
            }
        }

        // the component's size becomes every member's value
        let members = self.board.region(region).members().to_vec();
        let size = members.len();
        for coord in &members {
            self.board.cell_mut(*coord).set_value(size);
        }

        let verdict = if self.board.is_region_valid(region) {
            self.fill_remaining()
        } else {
            Verdict::Stuck
        };

        if !matches!(verdict, Verdict::Solved) {
            self.reset_region(region);
        }

        verdict
    }

    // undo an entire free-fill region at once
    fn reset_region(&mut self, region: RegionId) {
        let members = self.board.region(region).members().to_vec();
        for coord in members {
            let cell = self.board.cell_mut(coord);
            cell.set_value(0);
            cell.region = None;
            self.board.filled -= 1;
        }

        self.board.pop_region();
    }
}
