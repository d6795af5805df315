//! Sparse hash grid for proximity queries on the ground plane.
//!
//! Structures never move, so the grid is built once per city and queried
//! every propagation pass. Cell size should be comparable to the spread
//! range so a query touches a small, fixed block of cells.

use ahash::AHashMap;

use pyre_core::types::{ground_distance_sq, Position};

pub struct SpatialIndex<K> {
    cell_size: f64,
    cells: AHashMap<(i32, i32), Vec<(K, Position)>>,
    len: usize,
}

impl<K: Copy> SpatialIndex<K> {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: AHashMap::new(),
            len: 0,
        }
    }

    /// Bucket every entry by `floor(x / cell_size), floor(z / cell_size)`.
    pub fn build(entries: impl IntoIterator<Item = (K, Position)>, cell_size: f64) -> Self {
        let mut index = Self::new(cell_size);
        for (key, pos) in entries {
            index.insert(key, pos);
        }
        index
    }

    #[inline]
    fn cell_coord(&self, x: f64, z: f64) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (z / self.cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, key: K, pos: Position) {
        let coord = self.cell_coord(pos.x, pos.z);
        self.cells.entry(coord).or_default().push((key, pos));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Every entry in the block of cells covering `range` around `center`.
    /// Candidates only; callers filter by exact distance.
    pub fn query_near(
        &self,
        center: Position,
        range: f64,
    ) -> impl Iterator<Item = (K, Position)> + '_ {
        let (min_x, min_z) = self.cell_coord(center.x - range, center.z - range);
        let (max_x, max_z) = self.cell_coord(center.x + range, center.z + range);

        (min_x..=max_x).flat_map(move |cx| {
            (min_z..=max_z).flat_map(move |cz| {
                self.cells
                    .get(&(cx, cz))
                    .into_iter()
                    .flatten()
                    .copied()
            })
        })
    }

    /// Entries strictly closer than `range` to `center` on the ground plane.
    pub fn within(&self, center: Position, range: f64) -> impl Iterator<Item = K> + '_ {
        let range_sq = range * range;
        self.query_near(center, range)
            .filter(move |&(_, pos)| ground_distance_sq(center, pos) < range_sq)
            .map(|(key, _)| key)
    }
}
