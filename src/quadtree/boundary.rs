use super::memory::NodeArena;
use super::node::NodeIdx;

impl NodeArena {
    /// Doubles the side of `node`, centering it inside a frame of dead
    /// cells. Preserves the hyper-step flag.
    pub fn pad_blank(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        assert!(n.level >= 1, "pad_blank requires an interior node");
        let b = self.blank(n.level - 1);
        let nw = self.find_quad(b, b, b, n.nw, n.warp);
        let ne = self.find_quad(b, b, n.ne, b, n.warp);
        let sw = self.find_quad(b, n.sw, b, b, n.warp);
        let se = self.find_quad(n.se, b, b, b, n.warp);
        self.find_quad(nw, ne, sw, se, n.warp)
    }

    /// Doubles the side of `node` by tiling it as a torus: each quadrant of
    /// the result is the diagonal tiling of the input, so the center of the
    /// result is the input surrounded by its own wrapped copies. Stepping
    /// the result once yields one generation on the wrapped topology.
    pub fn pad_torus(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        assert!(n.level >= 1, "pad_torus requires an interior node");
        let q = self.find_quad(n.se, n.sw, n.ne, n.nw, n.warp);
        self.find_quad(q, q, q, q, n.warp)
    }

    /// Shrinks `node` to the smallest square of level >= 2 that still
    /// contains every live cell. Idempotent by node identity.
    pub fn prune(&mut self, mut node: NodeIdx) -> NodeIdx {
        loop {
            let n = self.get(node).clone();
            if n.level <= 2 {
                return node;
            }
            let children = n.children();
            let occupied: Vec<NodeIdx> = children
                .iter()
                .copied()
                .filter(|&c| !self.get(c).is_empty)
                .collect();
            if occupied.len() <= 1 {
                // at most one quadrant holds cells; descend into it
                node = occupied.first().copied().unwrap_or(n.nw);
                continue;
            }
            if self.rim_is_empty(&children) {
                node = self.centered(node);
                continue;
            }
            return node;
        }
    }

    // The 12 outer grandchildren, excluding the four inner-facing ones.
    fn rim_is_empty(&self, children: &[NodeIdx; 4]) -> bool {
        let [nw, ne, sw, se] = children.map(|c| self.get(c).clone());
        [
            nw.nw, nw.ne, nw.sw, ne.nw, ne.ne, ne.se, sw.nw, sw.sw, sw.se,
            se.ne, se.se, se.sw,
        ]
        .iter()
        .all(|&g| self.get(g).is_empty)
    }

    /// The centered subnode of `node`, one level down.
    pub fn centered(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        debug_assert!(n.level >= 2);
        let nw = self.get(n.nw).se;
        let ne = self.get(n.ne).sw;
        let sw = self.get(n.sw).ne;
        let se = self.get(n.se).nw;
        self.find_quad(nw, ne, sw, se, n.warp)
    }
}
