//! 以 CellId 索引的稠密栅格存储.
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::grid::ids::CellId;

/// A dense per-cell store for a grid of known extent.
///
/// One slot per cell in row-major order; indexing is by [`CellId`] only, so
/// occupancy maps cannot be confused with plain positional vectors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CellMap<T> {
    data: Vec<T>,
}

impl<T> CellMap<T>
where
    T: Clone,
{
    /// A map with `cells` slots, every slot set to `fill`.
    pub fn filled(cells: usize, fill: T) -> Self {
        Self {
            data: vec![fill; cells],
        }
    }
}

impl<T> CellMap<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, cell: CellId) -> Option<&T> {
        self.data.get(cell.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_enumerated(&self) -> impl Iterator<Item = (CellId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, value)| (CellId::from_usize(idx), value))
    }
}

impl<T> fmt::Debug for CellMap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Index<CellId> for CellMap<T> {
    type Output = T;

    fn index(&self, cell: CellId) -> &Self::Output {
        &self.data[cell.index()]
    }
}

impl<T> IndexMut<CellId> for CellMap<T> {
    fn index_mut(&mut self, cell: CellId) -> &mut Self::Output {
        &mut self.data[cell.index()]
    }
}

impl<T> Serialize for CellMap<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CellMap<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            data: Vec::<T>::deserialize(deserializer)?,
        })
    }
}
