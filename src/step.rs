use strum::VariantArray;

use crate::location::Location;

/// One orthogonal step between square cells.
///
/// `Up` decrements `y` and `Down` increments it, matching the row-major
/// ordering of the cell array. The enumeration order of `VARIANTS` decides
/// which solution the search finds first when several exist; it carries no
/// puzzle semantics.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `location` and return the resultant [`Location`],
    /// without bounds checking.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}
