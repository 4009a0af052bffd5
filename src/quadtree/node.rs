#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct NodeIdx(pub u32);

/// Structural key of a node in the interning table.
///
/// Interior nodes compare by child identity, not by recursive structure:
/// children are already canonical, so one table lookup is O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NodeKey {
    Cell {
        alive: bool,
    },
    Quad {
        warp: bool,
        nw: NodeIdx,
        ne: NodeIdx,
        sw: NodeIdx,
        se: NodeIdx,
    },
}

/// Interned quadtree value representing a `2^level x 2^level` region.
///
/// A level-0 node is a single cell; a node of level L > 0 has four children
/// of level L-1 laid out as nw | ne over sw | se. Nodes are immutable once
/// interned, except for the write-once `result` slot.
#[derive(Clone, Debug)]
pub struct QuadTreeNode {
    pub nw: NodeIdx,
    pub ne: NodeIdx,
    pub sw: NodeIdx,
    pub se: NodeIdx,
    pub level: u32,
    /// Hyper-step semantics flag; part of the interning key for level >= 1.
    pub warp: bool,
    /// Cell state; meaningful at level 0 only.
    pub alive: bool,
    /// True iff every base descendant is dead.
    pub is_empty: bool,
    /// Memoized next-generation centered subnode, one level down.
    pub result: NodeIdx,
    pub has_result: bool,
}

impl QuadTreeNode {
    #[inline]
    pub fn children(&self) -> [NodeIdx; 4] {
        [self.nw, self.ne, self.sw, self.se]
    }
}

/// Conway's rule: alive next generation iff the neighbor sum is 3,
/// or the cell is alive and the sum is 2.
#[inline]
pub fn next_alive(alive: bool, neighbors: u32) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}
