use super::node_life::random_grid;
use super::Life;
use crate::quadtree::next_alive;
use crate::MIN_LEVEL;
use anyhow::{ensure, Result};

/// Flat-array Life on a torus.
///
/// Applies Conway's rule cell by cell with modular neighbor indexing; the
/// reference oracle the quadtree engines are validated against.
pub struct GridLife {
    side: usize,
    cells: Vec<bool>,
}

impl GridLife {
    /// Builds a field from a square grid, padded with dead cells up to a
    /// power-of-two side of at least `2^MIN_LEVEL` (the same padding rule
    /// the quadtree engines use, so signatures stay comparable).
    pub fn from_grid(grid: &[Vec<bool>]) -> Result<Self> {
        let side = grid.len();
        for row in grid {
            ensure!(row.len() == side, "input grid must be square");
        }
        let n = side.next_power_of_two().max(1 << MIN_LEVEL);
        let mut cells = vec![false; n * n];
        for (y, row) in grid.iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                cells[x + y * n] = alive;
            }
        }
        Ok(Self { side: n, cells })
    }

    /// Creates a field of side `2^side_log2` with random cells.
    pub fn random(side_log2: u32, seed: Option<u64>, fill_rate: f64) -> Self {
        let grid = random_grid(side_log2, seed, fill_rate);
        Self::from_grid(&grid).expect("generated grid is square")
    }
}

impl Life for GridLife {
    fn name(&self) -> &'static str {
        "naive-torus"
    }

    fn side(&self) -> u64 {
        self.side as u64
    }

    fn generation_step(&self) -> u64 {
        1
    }

    fn step(&mut self) {
        let n = self.side;
        let mut next = vec![false; n * n];
        for y in 0..n {
            for x in 0..n {
                let mut sum = 0;
                for dy in [n - 1, 0, 1] {
                    for dx in [n - 1, 0, 1] {
                        if dy == 0 && dx == 0 {
                            continue;
                        }
                        sum += self.cells[(x + dx) % n + (y + dy) % n * n] as u32;
                    }
                }
                next[x + y * n] = next_alive(self.cells[x + y * n], sum);
            }
        }
        self.cells = next;
    }

    fn get_cells(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.side)
            .map(|row| row.to_vec())
            .collect()
    }

    fn alive_coords(&self) -> Vec<(u64, u64)> {
        let mut coords = vec![];
        for y in 0..self.side {
            for x in 0..self.side {
                if self.cells[x + y * self.side] {
                    coords.push((y as u64, x as u64));
                }
            }
        }
        coords
    }

    fn alive_count(&mut self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }
}
