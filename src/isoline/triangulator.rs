//! Dual triangulation of an adaptive quadtree.
//!
//! Every pair of leaves sharing an edge is covered by a fan of four triangles
//! around a point on that edge (the edge dual), with the two leaves' centres
//! and the edge endpoints as the outer vertices. Triangles are linked
//! `prev -> next` along the direction of the isoline wherever one of their
//! edges separates a positive vertex from a non-positive one.

use crate::float_types::{Real, coordinate_bits};
use crate::point::{ValuedPoint, binary_search_zero, same_sign};
use crate::tree::{CellId, CellTree, CornerMask, Corners, Side};
use hashbrown::HashMap;
use nalgebra::{Point2, Vector2};

/// Fraction of an edge to step inward when probing for an interior sign change.
const EDGE_PROBE_INSET: Real = 0.01;

/// One triangle of the dual mesh, linked to its neighbours along the isoline.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Two outer vertices followed by the fan centre
    pub vertices: [ValuedPoint<2>; 3],
    pub next: Option<usize>,
    pub prev: Option<usize>,
    /// Zero crossing on the edge leading to `next`
    pub next_bisect_point: Option<ValuedPoint<2>>,
    pub visited: bool,
}

impl Triangle {
    pub const fn new(vertices: [ValuedPoint<2>; 3]) -> Self {
        Triangle {
            vertices,
            next: None,
            prev: None,
            next_bisect_point: None,
            visited: false,
        }
    }
}

/// Order-independent key of an edge between two positions.
type EdgeKey = [[u64; 2]; 2];

fn edge_key(a: &Point2<Real>, b: &Point2<Real>) -> EdgeKey {
    let ka = [coordinate_bits(a.x), coordinate_bits(a.y)];
    let kb = [coordinate_bits(b.x), coordinate_bits(b.y)];
    if ka <= kb { [ka, kb] } else { [kb, ka] }
}

/// Builds the linked triangle pool for one quadtree.
pub struct Triangulator<'a, F> {
    tree: &'a CellTree<2>,
    f: &'a F,
    tol: Vector2<Real>,
    triangles: Vec<Triangle>,
    /// Outer fan edges waiting for the fan on their other side
    hanging_next: HashMap<EdgeKey, usize>,
}

impl<'a, F> Triangulator<'a, F>
where
    F: Fn(&Point2<Real>) -> Real,
{
    pub fn new(tree: &'a CellTree<2>, f: &'a F, tol: Vector2<Real>) -> Self {
        Triangulator {
            tree,
            f,
            tol,
            triangles: Vec::new(),
            hanging_next: HashMap::new(),
        }
    }

    /// Triangulate the whole tree and return the linked triangle pool.
    pub fn triangulate(mut self) -> Vec<Triangle> {
        self.triangulate_inside(self.tree.root());

        let linked = self.triangles.iter().filter(|t| t.next.is_some()).count();
        log::debug!(
            "triangulated quadtree into {} triangles, {} linked, {} hanging edges unmatched",
            self.triangles.len(),
            linked,
            self.hanging_next.len()
        );
        self.triangles
    }

    fn triangulate_inside(&mut self, id: CellId) {
        let tree = self.tree;
        let cell = tree.cell(id);
        if cell.is_leaf() {
            return;
        }

        let children: Vec<CellId> = cell.children().collect();
        for &child in &children {
            self.triangulate_inside(child);
        }
        // rows (0,1) and (2,3) share a vertical edge, columns (0,2) and (1,3) a horizontal one
        self.triangulate_crossing(children[0], children[1], 0);
        self.triangulate_crossing(children[2], children[3], 0);
        self.triangulate_crossing(children[0], children[2], 1);
        self.triangulate_crossing(children[1], children[3], 1);
    }

    /// Stitch `low` and `high`, adjacent along `axis` with `low` below, down
    /// to pairs of leaves.
    fn triangulate_crossing(&mut self, low: CellId, high: CellId, axis: usize) {
        let tree = self.tree;
        let a = tree.cell(low);
        let b = tree.cell(high);

        match (a.is_leaf(), b.is_leaf()) {
            (false, false) => {
                for mask in CornerMask::<2>::on_side(axis, Side::High) {
                    let (Some(ac), Some(bc)) = (a.child(mask), b.child(mask.toggled(axis))) else {
                        continue;
                    };
                    self.triangulate_crossing(ac, bc, axis);
                }
            }
            (false, true) => {
                for mask in CornerMask::<2>::on_side(axis, Side::High) {
                    if let Some(ac) = a.child(mask) {
                        self.triangulate_crossing(ac, high, axis);
                    }
                }
            }
            (true, false) => {
                for mask in CornerMask::<2>::on_side(axis, Side::Low) {
                    if let Some(bc) = b.child(mask) {
                        self.triangulate_crossing(low, bc, axis);
                    }
                }
            }
            (true, true) => self.stitch_leaves(low, high, axis),
        }
    }

    /// Emit the fan of four triangles around the edge shared by two leaves.
    fn stitch_leaves(&mut self, low: CellId, high: CellId, axis: usize) {
        let tree = self.tree;
        let a = tree.cell(low);
        let b = tree.cell(high);
        let face_dual_a = a.dual(self.f);
        let face_dual_b = b.dual(self.f);

        // the finer cell's edge, so the fan matches its neighbours on that side
        let edge = if a.depth() < b.depth() {
            b.subcell(axis, Side::Low)
        } else {
            a.subcell(axis, Side::High)
        };
        let [start, end] = [edge.vertices()[0], edge.vertices()[1]];
        // walk the fan clockwise for either orientation of the shared edge
        let (e0, e1) = if axis == 0 { (end, start) } else { (start, end) };

        let edge_dual = self.edge_dual(&e0, &e1);
        self.add_four_triangles(e0, face_dual_b, e1, face_dual_a, edge_dual);
    }

    fn add_four_triangles(
        &mut self,
        a: ValuedPoint<2>,
        b: ValuedPoint<2>,
        c: ValuedPoint<2>,
        d: ValuedPoint<2>,
        center: ValuedPoint<2>,
    ) {
        let base = self.triangles.len();
        self.triangles.extend([
            Triangle::new([a, b, center]),
            Triangle::new([b, c, center]),
            Triangle::new([c, d, center]),
            Triangle::new([d, a, center]),
        ]);

        for i in 0..4 {
            self.next_sandwich_triangles(base + i, base + (i + 1) % 4, base + (i + 2) % 4);
        }
    }

    /// Link the middle triangle `b` of three consecutive fan triangles.
    ///
    /// The edges `b` shares with `a` and `c` run through the fan centre and
    /// link immediately. The outer edge is matched against the fan on its far
    /// side through `hanging_next`.
    fn next_sandwich_triangles(&mut self, a: usize, b: usize, c: usize) {
        let [x, y, center] = self.triangles[b].vertices;

        if center.val > 0.0 && y.val <= 0.0 {
            self.set_next(b, c, &center, &y);
        }
        if x.val > 0.0 && center.val <= 0.0 {
            self.set_next(b, a, &x, &center);
        }

        let key = edge_key(&x.pos, &y.pos);
        if y.val > 0.0 && x.val <= 0.0 {
            match self.hanging_next.remove(&key) {
                Some(partner) => self.set_next(b, partner, &y, &x),
                None => {
                    self.hanging_next.insert(key, b);
                }
            }
        } else if y.val <= 0.0 && x.val > 0.0 {
            match self.hanging_next.remove(&key) {
                Some(partner) => self.set_next(partner, b, &x, &y),
                None => {
                    self.hanging_next.insert(key, b);
                }
            }
        }
    }

    /// Link `from -> to` through the zero between `vpos` and `vneg`, if the
    /// root-finder confirms one.
    fn set_next(&mut self, from: usize, to: usize, vpos: &ValuedPoint<2>, vneg: &ValuedPoint<2>) {
        if !(vpos.val > 0.0 && vneg.val <= 0.0) {
            return;
        }
        let (intersection, is_zero) = binary_search_zero(vpos, vneg, self.f, &self.tol);
        if !is_zero {
            return;
        }

        self.triangles[from].next_bisect_point = Some(intersection);
        self.triangles[from].next = Some(to);
        self.triangles[to].prev = Some(from);
    }

    /// A representative point on the edge `p1`–`p2`.
    ///
    /// Edges whose endpoints differ in sign use the midpoint. Otherwise the
    /// function is probed just inside both ends; if the probes disagree in
    /// sign the edge holds a hidden crossing and the secant through the probed
    /// values places the dual near it.
    fn edge_dual(&self, p1: &ValuedPoint<2>, p2: &ValuedPoint<2>) -> ValuedPoint<2> {
        if !same_sign(p1.val, p2.val) {
            return ValuedPoint::midpoint(p1, p2, self.f);
        }

        let dt = EDGE_PROBE_INSET;
        let df1 = (self.f)(&Point2::from(p1.pos.coords * (1.0 - dt) + p2.pos.coords * dt));
        let df2 = (self.f)(&Point2::from(p1.pos.coords * dt + p2.pos.coords * (1.0 - dt)));

        if same_sign(df1, df2) {
            ValuedPoint::midpoint(p1, p2, self.f)
        } else {
            let v1 = ValuedPoint::new(p1.pos, df1);
            let v2 = ValuedPoint::new(p2.pos, df2);
            ValuedPoint::intersect_zero(&v1, &v2, self.f)
        }
    }
}
