use super::{BoundaryMode, Life};
use crate::quadtree::{NodeArena, NodeIdx, PopulationManager};
use crate::{MAX_LEVEL, MIN_LEVEL};
use ahash::AHashMap as HashMap;
use anyhow::{ensure, Result};
use num_bigint::BigInt;

/// Quadtree-backed Life bound to a boundary mode.
///
/// Owns its node arena; dropping the instance reclaims every node it
/// interned. Stepping replaces the root with the interned successor, so
/// repeating a step sequence against the same arena reuses all memoized
/// work.
pub struct NodeLife {
    arena: NodeArena,
    root: NodeIdx,
    mode: BoundaryMode,
    population: PopulationManager,
    generations: BigInt,
}

impl NodeLife {
    /// Builds a field from a square grid, padded with dead cells up to a
    /// power-of-two side of at least `2^MIN_LEVEL`.
    pub fn from_grid(grid: &[Vec<bool>], mode: BoundaryMode) -> Result<Self> {
        Self::with_min_level(grid, mode, MIN_LEVEL)
    }

    /// Like [`NodeLife::from_grid`], but additionally pads the tree with
    /// dead frames until its level reaches `min_level`. Warp mode uses
    /// this to reserve headroom: one step advances `2^(level-1)`
    /// generations, and everything escaping the box is lost.
    pub fn with_min_level(
        grid: &[Vec<bool>],
        mode: BoundaryMode,
        min_level: u32,
    ) -> Result<Self> {
        let side = grid.len();
        for row in grid {
            ensure!(row.len() == side, "input grid must be square");
        }
        ensure!(min_level <= MAX_LEVEL, "min_level exceeds MAX_LEVEL");
        ensure!(side <= 1 << MAX_LEVEL, "input grid exceeds MAX_LEVEL");
        let level = side.next_power_of_two().trailing_zeros().max(MIN_LEVEL);

        let warp = mode == BoundaryMode::Warp;
        let mut arena = NodeArena::new();
        let n = 1usize << level;
        let (mut nodes_curr, mut nodes_next) = (vec![], vec![]);
        for y in 0..n {
            for x in 0..n {
                let alive = y < side && x < side && grid[y][x];
                nodes_curr.push(arena.find_cell(alive));
            }
        }
        let mut t = n;
        while t != 1 {
            for y in (0..t).step_by(2) {
                for x in (0..t).step_by(2) {
                    let nw = nodes_curr[x + y * t];
                    let ne = nodes_curr[(x + 1) + y * t];
                    let sw = nodes_curr[x + (y + 1) * t];
                    let se = nodes_curr[(x + 1) + (y + 1) * t];
                    nodes_next.push(arena.find_quad(nw, ne, sw, se, warp));
                }
            }
            std::mem::swap(&mut nodes_curr, &mut nodes_next);
            nodes_next.clear();
            t >>= 1;
        }
        assert_eq!(nodes_curr.len(), 1);
        let mut root = nodes_curr.pop().unwrap();
        while arena.get(root).level < min_level {
            root = arena.pad_blank(root);
        }

        Ok(Self {
            arena,
            root,
            mode,
            population: PopulationManager::new(),
            generations: BigInt::from(0u32),
        })
    }

    /// Creates a field of side `2^side_log2` with random cells.
    ///
    /// `seed` - random seed (if `None`, then a random seed is generated)
    pub fn random(
        side_log2: u32,
        mode: BoundaryMode,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Self {
        let grid = random_grid(side_log2, seed, fill_rate);
        Self::from_grid(&grid, mode).expect("generated grid is square")
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Total generations advanced since construction.
    pub fn generations(&self) -> &BigInt {
        &self.generations
    }

    pub fn get_cell(&self, row: u64, col: u64) -> bool {
        let mut node = self.root;
        let mut level = self.arena.get(node).level;
        let (mut y, mut x) = (row, col);
        while level > 0 {
            let n = self.arena.get(node);
            level -= 1;
            let half = 1u64 << level;
            let idx = (x >= half) as usize + 2 * (y >= half) as usize;
            x -= ((x >= half) as u64) << level;
            y -= ((y >= half) as u64) << level;
            node = n.children()[idx];
        }
        self.arena.get(node).alive
    }

    /// Rebuilds the root path so that the cell at `(row, col)` has the
    /// given state.
    pub fn set_cell(&mut self, row: u64, col: u64, state: bool) {
        fn inner(
            arena: &mut NodeArena,
            node: NodeIdx,
            mut y: u64,
            mut x: u64,
            state: bool,
            warp: bool,
        ) -> NodeIdx {
            let n = arena.get(node).clone();
            if n.level == 0 {
                return arena.find_cell(state);
            }
            let mut children = n.children();
            let level = n.level - 1;
            let half = 1u64 << level;
            let idx = (x >= half) as usize + 2 * (y >= half) as usize;
            x -= ((x >= half) as u64) << level;
            y -= ((y >= half) as u64) << level;
            children[idx] = inner(arena, children[idx], y, x, state, warp);
            arena.find_quad(children[0], children[1], children[2], children[3], warp)
        }

        // rebuilt quads take the mode's flag, not each node's own: writing
        // into a shared blank subtree of a warp tree must produce warp nodes
        let warp = self.mode == BoundaryMode::Warp;
        self.root = inner(&mut self.arena, self.root, row, col, state, warp);
    }

    /// Frees accumulated memoization by reinterning the live tree into a
    /// fresh arena. Every node unreachable from the root is dropped.
    pub fn run_gc(&mut self) {
        fn copy(
            src: &NodeArena,
            dst: &mut NodeArena,
            idx: NodeIdx,
            map: &mut HashMap<NodeIdx, NodeIdx>,
        ) -> NodeIdx {
            if let Some(&new) = map.get(&idx) {
                return new;
            }
            let n = src.get(idx).clone();
            let new = if n.level == 0 {
                dst.find_cell(n.alive)
            } else {
                let nw = copy(src, dst, n.nw, map);
                let ne = copy(src, dst, n.ne, map);
                let sw = copy(src, dst, n.sw, map);
                let se = copy(src, dst, n.se, map);
                dst.find_quad(nw, ne, sw, se, n.warp)
            };
            map.insert(idx, new);
            new
        }

        let mut fresh = NodeArena::new();
        let mut map = HashMap::new();
        self.root = copy(&self.arena, &mut fresh, self.root, &mut map);
        self.arena = fresh;
        self.population.clear_cache();
    }
}

impl Life for NodeLife {
    fn name(&self) -> &'static str {
        match self.mode {
            BoundaryMode::Torus => "hashlife-torus",
            BoundaryMode::Cropped => "hashlife-cropped",
            BoundaryMode::Open => "hashlife-open",
            BoundaryMode::Warp => "hashlife-warp",
        }
    }

    fn side(&self) -> u64 {
        1 << self.arena.get(self.root).level
    }

    fn generation_step(&self) -> u64 {
        match self.mode {
            BoundaryMode::Warp => self.side() / 2,
            _ => 1,
        }
    }

    fn step(&mut self) {
        let advanced = self.generation_step();
        self.root = match self.mode {
            BoundaryMode::Torus => {
                let top = self.arena.pad_torus(self.root);
                self.arena.step(top)
            }
            BoundaryMode::Cropped => {
                let top = self.arena.pad_blank(self.root);
                self.arena.step(top)
            }
            BoundaryMode::Open => {
                let top = self.arena.pad_blank(self.root);
                let top = self.arena.pad_blank(top);
                let next = self.arena.step(top);
                self.arena.prune(next)
            }
            BoundaryMode::Warp => {
                let top = self.arena.pad_blank(self.root);
                self.arena.warp_step(top)
            }
        };
        self.generations += advanced;
    }

    fn get_cells(&self) -> Vec<Vec<bool>> {
        fn inner(
            arena: &NodeArena,
            node: NodeIdx,
            y: u64,
            x: u64,
            grid: &mut [Vec<bool>],
        ) {
            let n = arena.get(node);
            if n.is_empty {
                return;
            }
            if n.level == 0 {
                grid[y as usize][x as usize] = true;
                return;
            }
            let level = n.level - 1;
            for (i, &child) in n.children().iter().enumerate() {
                let x = x + (((i & 1 != 0) as u64) << level);
                let y = y + (((i & 2 != 0) as u64) << level);
                inner(arena, child, y, x, grid);
            }
        }

        let side = self.side() as usize;
        let mut grid = vec![vec![false; side]; side];
        inner(&self.arena, self.root, 0, 0, &mut grid);
        grid
    }

    fn alive_coords(&self) -> Vec<(u64, u64)> {
        fn inner(
            arena: &NodeArena,
            node: NodeIdx,
            y: u64,
            x: u64,
            out: &mut Vec<(u64, u64)>,
        ) {
            let n = arena.get(node);
            if n.is_empty {
                return;
            }
            if n.level == 0 {
                out.push((y, x));
                return;
            }
            let level = n.level - 1;
            for (i, &child) in n.children().iter().enumerate() {
                let x = x + (((i & 1 != 0) as u64) << level);
                let y = y + (((i & 2 != 0) as u64) << level);
                inner(arena, child, y, x, out);
            }
        }

        let mut coords = vec![];
        inner(&self.arena, self.root, 0, 0, &mut coords);
        coords.sort_unstable();
        coords
    }

    fn alive_count(&mut self) -> u64 {
        self.population.get(self.root, &self.arena)
    }

    fn extra_info(&mut self) -> String {
        let mut s = format!("Engine: {}\n", self.name());
        s += &format!("Side length: 2^{}\n", self.arena.get(self.root).level);
        s += &format!(
            "Population: {}\n",
            crate::NiceInt::from(self.population.get(self.root, &self.arena))
        );
        s += &format!("Generations: {}\n", self.generations);
        s += &self.arena.stats();
        s
    }
}

pub(super) fn random_grid(
    side_log2: u32,
    seed: Option<u64>,
    fill_rate: f64,
) -> Vec<Vec<bool>> {
    use rand::{Rng, SeedableRng};
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    let n = 1usize << side_log2;
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(fill_rate)).collect())
        .collect()
}
