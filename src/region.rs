use crate::location::Location;

/// The index of a region in its board's registry.
///
/// Unlike a reference into the registry, an id stays valid across region
/// creation, so it is the only handle passed between search steps.
pub type RegionId = usize;

/// A connected group of same-valued cells, in progress or complete.
#[derive(Clone, Debug)]
pub(crate) struct Region {
    pub(crate) id: RegionId,
    // None for free-fill regions, which grow until their component is exhausted
    pub(crate) target: Option<usize>,
    // insertion-ordered; undo pops from the back
    pub(crate) members: Vec<Location>,
}

impl Region {
    pub(crate) fn new(id: RegionId, target: Option<usize>) -> Self {
        Self {
            id,
            target,
            members: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.target.is_some_and(|target| target == self.members.len())
    }

    pub(crate) fn push(&mut self, coord: Location) {
        debug_assert!(self.target.map_or(true, |target| self.members.len() < target));
        self.members.push(coord);
    }

    pub(crate) fn pop(&mut self) -> Option<Location> {
        self.members.pop()
    }

    pub(crate) fn members(&self) -> &[Location] {
        &self.members
    }
}
