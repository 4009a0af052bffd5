use super::node::{NodeIdx, NodeKey, QuadTreeNode};
use crate::NiceInt;
use ahash::AHashMap as HashMap;

/// Arena that stores the nodes of the quadtree and interns them.
///
/// Structurally equal nodes are represented by a single `NodeIdx`, so
/// identity comparison of indices is equivalent to structural equality.
/// All-dead ("blank") nodes are additionally tracked per level.
pub struct NodeArena {
    nodes: Vec<QuadTreeNode>,
    table: HashMap<NodeKey, NodeIdx>,
    blanks: Vec<NodeIdx>,
    // how many times nodes were found in the table
    hits: u64,
    // how many times nodes were not found and therefore interned
    misses: u64,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            table: HashMap::new(),
            blanks: vec![],
            hits: 0,
            misses: 0,
        }
    }

    /// Get a const reference to the node with the given index.
    #[inline]
    pub fn get(&self, idx: NodeIdx) -> &QuadTreeNode {
        &self.nodes[idx.0 as usize]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: NodeIdx) -> &mut QuadTreeNode {
        &mut self.nodes[idx.0 as usize]
    }

    /// Find the canonical base cell with the given state.
    /// If the node is not found, it is created.
    pub fn find_cell(&mut self, alive: bool) -> NodeIdx {
        let key = NodeKey::Cell { alive };
        if let Some(&idx) = self.table.get(&key) {
            self.hits += 1;
            return idx;
        }
        self.misses += 1;
        self.push(
            key,
            QuadTreeNode {
                nw: NodeIdx::default(),
                ne: NodeIdx::default(),
                sw: NodeIdx::default(),
                se: NodeIdx::default(),
                level: 0,
                warp: false,
                alive,
                is_empty: !alive,
                result: NodeIdx::default(),
                has_result: false,
            },
        )
    }

    /// Find the canonical interior node with the given children.
    /// If the node is not found, it is created.
    ///
    /// All four children must be at the same level.
    pub fn find_quad(
        &mut self,
        nw: NodeIdx,
        ne: NodeIdx,
        sw: NodeIdx,
        se: NodeIdx,
        warp: bool,
    ) -> NodeIdx {
        let key = NodeKey::Quad { warp, nw, ne, sw, se };
        if let Some(&idx) = self.table.get(&key) {
            self.hits += 1;
            return idx;
        }
        self.misses += 1;
        let level = self.get(nw).level + 1;
        debug_assert!(
            [ne, sw, se].iter().all(|&c| self.get(c).level + 1 == level),
            "children must share one level"
        );
        let is_empty = [nw, ne, sw, se].iter().all(|&c| self.get(c).is_empty);
        self.push(
            key,
            QuadTreeNode {
                nw,
                ne,
                sw,
                se,
                level,
                warp,
                alive: false,
                is_empty,
                result: NodeIdx::default(),
                has_result: false,
            },
        )
    }

    /// The canonical all-dead node at the given level, built recursively
    /// from the dead cell upward.
    pub fn blank(&mut self, level: u32) -> NodeIdx {
        while self.blanks.len() <= level as usize {
            let idx = if let Some(&b) = self.blanks.last() {
                self.find_quad(b, b, b, b, false)
            } else {
                self.find_cell(false)
            };
            self.blanks.push(idx);
        }
        self.blanks[level as usize]
    }

    fn push(&mut self, key: NodeKey, node: QuadTreeNode) -> NodeIdx {
        assert!(
            u32::try_from(self.nodes.len()).is_ok(),
            "node arena exceeds u32 indices"
        );
        let idx = NodeIdx(self.nodes.len() as u32);
        self.nodes.push(node);
        self.table.insert(key, idx);
        idx
    }

    /// Empties the arena. Every outstanding `NodeIdx` is invalidated and
    /// must be discarded by the caller.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.table.clear();
        self.blanks.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of interned nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Multiline string reporting arena stats.
    pub fn stats(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "nodes interned: {}\n",
            NiceInt::from_usize(self.node_count())
        ));
        s.push_str(&format!(
            "table misses / hits: {} / {}\n",
            NiceInt::from(self.misses),
            NiceInt::from(self.hits),
        ));
        s
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
