use crate::region::RegionId;

/// A single grid slot: a value, a clue flag, and the region currently
/// claiming the cell.
///
/// `value == 0` means the cell is empty. A fixed cell is a puzzle clue; its
/// value survives solving unchanged.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) value: usize,
    pub(crate) fixed: bool,
    pub(crate) region: Option<RegionId>,
}

impl Cell {
    pub(crate) fn clue(value: usize) -> Self {
        Self {
            value,
            fixed: true,
            region: None,
        }
    }

    pub(crate) fn value(&self) -> usize {
        self.value
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub(crate) fn region(&self) -> Option<RegionId> {
        self.region
    }

    // writing to a clue is a no-op, never an error
    pub(crate) fn set_value(&mut self, value: usize) {
        if self.fixed {
            return;
        }

        self.value = value;
    }
}
