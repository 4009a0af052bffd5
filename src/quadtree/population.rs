use super::memory::NodeArena;
use super::node::NodeIdx;
use ahash::AHashMap as HashMap;

/// Calculates the population of a node and caches the result.
#[derive(Default)]
pub struct PopulationManager {
    cache: HashMap<NodeIdx, u64>,
}

impl PopulationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, idx: NodeIdx, arena: &NodeArena) -> u64 {
        let n = arena.get(idx);
        if n.is_empty {
            return 0;
        }
        if n.level == 0 {
            return n.alive as u64;
        }
        if let Some(&val) = self.cache.get(&idx) {
            return val;
        }
        let [nw, ne, sw, se] = n.children();
        let population = self.get(nw, arena)
            + self.get(ne, arena)
            + self.get(sw, arena)
            + self.get(se, arena);
        self.cache.insert(idx, population);
        population
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
