//! Spatial indexing for radius queries over atom positions.
//!
//! A uniform grid keyed by integer cell coordinates. With the cell size set to
//! the largest query radius, every hit of a query lies in the 27 cells around
//! the query point.

use std::collections::HashMap;

/// Grid-based spatial index for 3D point queries.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Inverse cell size for fast coordinate-to-cell conversion.
    inv_cell_size: f64,
    cells: HashMap<(i32, i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Creates an empty grid with the given cell size.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not a positive finite number.
    pub fn new(cell_size: f64) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "Cell size must be positive"
        );
        Self {
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    /// Creates a grid populated with `positions`, indexed by slice position.
    pub fn from_positions(positions: &[[f64; 3]], cell_size: f64) -> Self {
        let mut grid = Self::new(cell_size);
        for (idx, pos) in positions.iter().enumerate() {
            grid.insert(idx, *pos);
        }
        grid
    }

    fn cell_coords(&self, pos: [f64; 3]) -> (i32, i32, i32) {
        (
            (pos[0] * self.inv_cell_size).floor() as i32,
            (pos[1] * self.inv_cell_size).floor() as i32,
            (pos[2] * self.inv_cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, idx: usize, pos: [f64; 3]) {
        let cell = self.cell_coords(pos);
        self.cells.entry(cell).or_default().push(idx);
    }

    /// Finds all indices within `cutoff` of `query`, sorted ascending.
    ///
    /// Cutoffs larger than the cell size widen the cell neighbourhood that is
    /// scanned, so results stay exact for any radius.
    ///
    /// # Arguments
    ///
    /// * `query` — Query position [x, y, z]
    /// * `positions` — Full position array the grid was built from
    /// * `cutoff` — Maximum distance to include (inclusive)
    pub fn query_radius(&self, query: [f64; 3], positions: &[[f64; 3]], cutoff: f64) -> Vec<usize> {
        let cutoff_sq = cutoff * cutoff;
        let reach = (cutoff * self.inv_cell_size).ceil().max(1.0) as i32;
        let (cx, cy, cz) = self.cell_coords(query);

        let mut results = Vec::new();

        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    let Some(indices) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &idx in indices {
                        let pos = positions[idx];
                        let dist_sq = (pos[0] - query[0]).powi(2)
                            + (pos[1] - query[1]).powi(2)
                            + (pos[2] - query[2]).powi(2);
                        if dist_sq <= cutoff_sq {
                            results.push(idx);
                        }
                    }
                }
            }
        }

        results.sort_unstable();
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid() {
        let grid = SpatialGrid::new(2.0);
        let positions: Vec<[f64; 3]> = vec![];
        assert!(grid.query_radius([0.0, 0.0, 0.0], &positions, 2.0).is_empty());
    }

    #[test]
    fn single_atom_in_and_out_of_range() {
        let positions = vec![[1.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_positions(&positions, 2.0);

        assert_eq!(grid.query_radius([0.0, 0.0, 0.0], &positions, 2.0), vec![0]);
        assert!(grid.query_radius([3.5, 0.0, 0.0], &positions, 2.0).is_empty());
    }

    #[test]
    fn results_are_sorted() {
        let positions = vec![
            [1.0, 0.0, 0.0],
            [0.0, 1.5, 0.0],
            [5.0, 0.0, 0.0],
            [0.0, 0.0, -1.9],
            [0.0, 0.0, 2.1],
        ];
        let grid = SpatialGrid::from_positions(&positions, 2.0);

        assert_eq!(
            grid.query_radius([0.0, 0.0, 0.0], &positions, 2.0),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn cutoff_is_inclusive() {
        let positions = vec![[4.2, 0.0, 0.0]];
        let grid = SpatialGrid::from_positions(&positions, 4.2);
        assert_eq!(grid.query_radius([0.0, 0.0, 0.0], &positions, 4.2), vec![0]);
    }

    #[test]
    fn radius_larger_than_cell_size() {
        let positions = vec![[5.0, 0.0, 0.0], [0.0, -5.5, 0.0], [9.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_positions(&positions, 1.0);
        assert_eq!(grid.query_radius([0.0, 0.0, 0.0], &positions, 6.0), vec![0, 1]);
    }

    #[test]
    fn cell_boundary_handling() {
        let positions = vec![[1.99, 0.0, 0.0], [2.01, 0.0, 0.0]];
        let grid = SpatialGrid::from_positions(&positions, 2.0);

        assert_eq!(grid.query_radius([0.0, 0.0, 0.0], &positions, 2.0), vec![0]);
        assert_eq!(grid.query_radius([4.0, 0.0, 0.0], &positions, 2.0), vec![1]);
    }

    #[test]
    #[should_panic(expected = "Cell size must be positive")]
    fn rejects_non_positive_cell_size() {
        let _ = SpatialGrid::new(0.0);
    }
}
