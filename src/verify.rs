//! Independent validation of human-filled boards.
//!
//! Structurally the same region discovery the solver's free-fill phase uses,
//! but run over a fully valued board: every maximal connected same-value
//! component must have its value as its size. Works on a disposable copy so
//! the caller's board is never mutated.

use std::collections::VecDeque;

use strum::VariantArray;

use crate::board::Board;
use crate::location::Location;
use crate::region::RegionId;
use crate::step::Step;

pub(crate) fn check(board: &Board) -> Option<Vec<Location>> {
    // the board must be completely filled in
    if board.cells.iter().any(|cell| cell.value() == 0) {
        return None;
    }

    // two 1s may not touch orthogonally
    for (index, cell) in board.cells.indexed_iter() {
        if cell.value() != 1 {
            continue;
        }

        let location = Location::from(index);
        for step in Step::VARIANTS {
            if board
                .get(step.attempt_from(location))
                .is_some_and(|adj| adj.value() == 1)
            {
                return None;
            }
        }
    }

    let mut scratch = board.clone();
    scratch.clear_regions();

    let mut order = Vec::with_capacity(scratch.cell_count());

    // discover components seeded by the clues first, in clue order, then any
    // component containing no clue (such as the solver's free-fill regions)
    while let Some(start) = scratch
        .next_unclaimed_clue()
        .or_else(|| scratch.first_unclaimed())
    {
        let target = scratch.cell(start).value();
        let region = scratch.create_region(None);
        discover(&mut scratch, region, start, &mut order);

        // overflow or underflow
        if scratch.region(region).len() != target {
            return None;
        }
    }

    Some(order)
}

/// Flood-fill the maximal same-value component containing `start` into
/// `region`, recording the claim order.
fn discover(board: &mut Board, region: RegionId, start: Location, order: &mut Vec<Location>) {
    let value = board.cell(start).value();

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        // added a second time from other cells
        if board.cell(coord).region().is_some() {
            continue;
        }

        board.filled += 1;
        board.cell_mut(coord).region = Some(region);
        board.region_mut(region).push(coord);
        order.push(coord);

        for step in Step::VARIANTS {
            let adj_location = step.attempt_from(coord);
            let Some(adj) = board.get(adj_location) else {
                continue;
            };
            if adj.value() != value {
                continue;
            }

            match adj.region() {
                // components are claimed whole, so an equal-valued neighbor
                // can only belong to the region being discovered
                Some(id) => debug_assert_eq!(id, region),
                None => queue.push_back(adj_location),
            }
        }
    }
}
