use std::fmt;

use serde::{Deserialize, Serialize};

/// Row-major index of one cell inside a fixed grid.
///
/// `CellId` is only meaningful together with the [`GridSize`] that produced
/// it; ids from differently sized grids must not be mixed.
///
/// [`GridSize`]: crate::grid::GridSize
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CellId(pub u32);

impl CellId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(idx: usize) -> Self {
        Self(idx as u32)
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId")?;
        f.debug_tuple("").field(&self.0).finish()
    }
}
