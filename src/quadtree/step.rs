use super::memory::NodeArena;
use super::node::{next_alive, NodeIdx};

impl NodeArena {
    /// Applies Conway's rule to the 2x2 center of a level-2 node.
    ///
    /// Recursion terminator shared by [`NodeArena::step`] and
    /// [`NodeArena::warp_step`].
    fn level2_center(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        debug_assert!(n.level == 2);

        let mut cells = [[false; 4]; 4];
        for (qi, &q) in n.children().iter().enumerate() {
            let (qy, qx) = (qi / 2 * 2, qi % 2 * 2);
            let quadrant = self.get(q).clone();
            for (ci, &c) in quadrant.children().iter().enumerate() {
                cells[qy + ci / 2][qx + ci % 2] = self.get(c).alive;
            }
        }

        let mut center = [NodeIdx::default(); 4];
        for (i, slot) in center.iter_mut().enumerate() {
            let (y, x) = (i / 2 + 1, i % 2 + 1);
            let mut sum = 0;
            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    sum += ((ny, nx) != (y, x) && cells[ny][nx]) as u32;
                }
            }
            *slot = self.find_cell(next_alive(cells[y][x], sum));
        }
        self.find_quad(center[0], center[1], center[2], center[3], n.warp)
    }

    /// Advances the centered `2^(level-1)` square of `node` by exactly one
    /// generation and returns it as a node one level down.
    ///
    /// For level >= 3 the center is tiled with nine overlapping subnodes at
    /// half-quadrant stride; four overlapping recombinations of those are
    /// stepped recursively and reassembled. The result is memoized in the
    /// node, whose identity carries `warp = false`, so simple and hyper
    /// results never share a cache slot.
    pub fn step(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        assert!(n.level >= 2, "step requires level >= 2");
        if n.is_empty {
            return self.blank(n.level - 1);
        }
        debug_assert!(!n.warp, "step invoked on a hyper-step node");
        if n.has_result {
            return n.result;
        }

        let result = if n.level == 2 {
            self.level2_center(node)
        } else {
            let [nw, ne, sw, se] = n.children();
            let n00 = self.centered(nw);
            let n01 = self.centered_horizontal(nw, ne);
            let n02 = self.centered(ne);
            let n10 = self.centered_vertical(nw, sw);
            let n11 = self.centered_core(nw, ne, sw, se);
            let n12 = self.centered_vertical(ne, se);
            let n20 = self.centered(sw);
            let n21 = self.centered_horizontal(sw, se);
            let n22 = self.centered(se);

            let q00 = self.find_quad(n00, n01, n10, n11, false);
            let q01 = self.find_quad(n01, n02, n11, n12, false);
            let q10 = self.find_quad(n10, n11, n20, n21, false);
            let q11 = self.find_quad(n11, n12, n21, n22, false);

            let s00 = self.step(q00);
            let s01 = self.step(q01);
            let s10 = self.step(q10);
            let s11 = self.step(q11);
            self.find_quad(s00, s01, s10, s11, false)
        };

        let n = self.get_mut(node);
        n.result = result;
        n.has_result = true;
        result
    }

    /// Advances the centered `2^(level-1)` square of `node` by
    /// `2^(level-2)` generations and returns it as a node one level down.
    ///
    /// Nine first-stage subnodes are each hyper-stepped, then the four
    /// recombinations are hyper-stepped again; each stage contributes
    /// `2^(level-3)` generations. Only nodes interned with `warp = true`
    /// may be hyper-stepped; all-dead nodes are exempt because their next
    /// generation coincides under both step semantics.
    pub fn warp_step(&mut self, node: NodeIdx) -> NodeIdx {
        let n = self.get(node).clone();
        assert!(n.level >= 2, "warp_step requires level >= 2");
        if n.is_empty {
            return self.blank(n.level - 1);
        }
        debug_assert!(n.warp, "warp_step invoked on a simple-step node");
        if n.has_result {
            return n.result;
        }

        let result = if n.level == 2 {
            self.level2_center(node)
        } else {
            let nw = self.get(n.nw).clone();
            let ne = self.get(n.ne).clone();
            let sw = self.get(n.sw).clone();
            let se = self.get(n.se).clone();

            // First stage
            let a01 = self.find_quad(nw.ne, ne.nw, nw.se, ne.sw, true);
            let a10 = self.find_quad(nw.sw, nw.se, sw.nw, sw.ne, true);
            let a11 = self.find_quad(nw.se, ne.sw, sw.ne, se.nw, true);
            let a12 = self.find_quad(ne.sw, ne.se, se.nw, se.ne, true);
            let a21 = self.find_quad(sw.ne, se.nw, sw.se, se.sw, true);

            let t00 = self.warp_step(n.nw);
            let t01 = self.warp_step(a01);
            let t02 = self.warp_step(n.ne);
            let t10 = self.warp_step(a10);
            let t11 = self.warp_step(a11);
            let t12 = self.warp_step(a12);
            let t20 = self.warp_step(n.sw);
            let t21 = self.warp_step(a21);
            let t22 = self.warp_step(n.se);

            // Second stage
            let q00 = self.find_quad(t00, t01, t10, t11, true);
            let q01 = self.find_quad(t01, t02, t11, t12, true);
            let q10 = self.find_quad(t10, t11, t20, t21, true);
            let q11 = self.find_quad(t11, t12, t21, t22, true);

            let s00 = self.warp_step(q00);
            let s01 = self.warp_step(q01);
            let s10 = self.warp_step(q10);
            let s11 = self.warp_step(q11);
            self.find_quad(s00, s01, s10, s11, true)
        };

        let n = self.get_mut(node);
        n.result = result;
        n.has_result = true;
        result
    }

    /// Centered subnode straddling the vertical seam between a west and an
    /// east sibling.
    fn centered_horizontal(&mut self, w: NodeIdx, e: NodeIdx) -> NodeIdx {
        let (w, e) = (self.get(w).clone(), self.get(e).clone());
        let nw = self.get(w.ne).se;
        let ne = self.get(e.nw).sw;
        let sw = self.get(w.se).ne;
        let se = self.get(e.sw).nw;
        self.find_quad(nw, ne, sw, se, w.warp)
    }

    /// Centered subnode straddling the horizontal seam between a north and
    /// a south sibling.
    fn centered_vertical(&mut self, n: NodeIdx, s: NodeIdx) -> NodeIdx {
        let (n, s) = (self.get(n).clone(), self.get(s).clone());
        let nw = self.get(n.sw).se;
        let ne = self.get(n.se).sw;
        let sw = self.get(s.nw).ne;
        let se = self.get(s.ne).nw;
        self.find_quad(nw, ne, sw, se, n.warp)
    }

    /// Centered subnode at the meeting point of all four quadrants.
    fn centered_core(
        &mut self,
        nw: NodeIdx,
        ne: NodeIdx,
        sw: NodeIdx,
        se: NodeIdx,
    ) -> NodeIdx {
        let warp = self.get(nw).warp;
        let nw = self.get(self.get(nw).se).se;
        let ne = self.get(self.get(ne).sw).sw;
        let sw = self.get(self.get(sw).ne).ne;
        let se = self.get(self.get(se).nw).nw;
        self.find_quad(nw, ne, sw, se, warp)
    }
}
